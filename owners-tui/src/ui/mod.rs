//! Top-level UI layout: header row, component panel, status bar.

pub mod components_panel;
pub mod overlays;
pub mod status_bar;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;

use owners_core::OwnerNavigator;

use crate::app::{AppState, Overlay};
use crate::owners_stack::OwnerStack;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &mut AppState) {
    // Split: 1-line header + body + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    let header_area = chunks[0];
    let body_area = chunks[1];
    let status_area = chunks[2];

    components_panel::render(f, body_area, app);
    status_bar::render(f, status_area, app);

    // The bar goes last so its dropdown paints over the panel.
    if app.tree.is_owners_mode() {
        let bounds = Rect::new(
            header_area.x,
            header_area.y,
            header_area.width,
            header_area.height + body_area.height,
        );
        let bar = OwnerStack::new(app.tree.store(), &app.tree, &app.config, &app.theme)
            .overlay_bounds(bounds);
        f.render_stateful_widget(bar, header_area, &mut app.owners);
    } else {
        let title = Paragraph::new(Span::styled(" Components", app.theme.accent_bold()));
        f.render_widget(title, header_area);
    }

    if app.overlay == Overlay::Help {
        overlays::render_help(f, body_area, &app.theme);
    }
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BarConfig;
    use crate::owners_stack::OwnerStackAction;
    use crate::test_helpers::{buffer_row, scenario_store};
    use owners_core::ElementId;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn draws_tree_mode_title() {
        let mut app = AppState::new(scenario_store(), BarConfig::default());
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();

        let buf = terminal.backend().buffer();
        assert!(buffer_row(buf, 0).contains("Components"));
        assert!(app.owners.regions().is_empty());
    }

    #[test]
    fn draws_owner_bar_in_owners_mode() {
        let mut app = AppState::new(scenario_store(), BarConfig::default());
        app.apply(OwnerStackAction::SelectOwner(ElementId(30)));
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();

        let buf = terminal.backend().buffer();
        assert!(buffer_row(buf, 0).contains("App"));
        assert_eq!(app.owners.inline_items().len(), 3);
    }

    #[test]
    fn centered_rect_is_inside() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = centered_rect(60, 40, area);
        assert_eq!(popup.width, 60);
        assert_eq!(popup.height, 20);
        assert_eq!(popup.intersection(area), popup);
    }
}
