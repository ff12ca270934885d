//! Component list: every element by ownership, or the selected owner's subtree.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use owners_core::{ElementStore, OwnerNavigator};

use crate::app::AppState;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let title = match app.tree.selected_owner() {
        Some(owner) => format!(" Owned by {} ", app.display_name(owner)),
        None => " Components ".to_string(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.muted())
        .title(title)
        .title_style(app.theme.accent_bold());

    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = app.rows();
    if rows.is_empty() {
        let text = Paragraph::new(Span::styled("No components.", app.theme.muted()));
        f.render_widget(text, inner);
        return;
    }

    // Keep the cursor in view.
    let visible_height = inner.height as usize;
    let scroll = if visible_height == 0 {
        0
    } else {
        app.cursor.saturating_sub(visible_height - 1)
    };

    let selected = app.tree.selected_element_id();
    let mut lines: Vec<Line> = Vec::new();
    for (i, row) in rows.iter().enumerate().skip(scroll).take(visible_height) {
        let label = app
            .store()
            .element_by_id(row.id)
            .map(|el| el.label())
            .unwrap_or_else(|| format!("#{}", row.id));

        let mut style = if Some(row.id) == selected {
            app.theme.accent_bold()
        } else {
            app.theme.component()
        };
        if i == app.cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }

        lines.push(Line::from(vec![
            Span::raw("  ".repeat(row.depth)),
            Span::styled(label, style),
        ]));
    }

    f.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BarConfig;
    use crate::test_helpers::{buffer_row, scenario_store};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn renders_indented_rows() {
        let app = AppState::new(scenario_store(), BarConfig::default());
        let mut terminal = Terminal::new(TestBackend::new(30, 6)).unwrap();
        terminal
            .draw(|f| render(f, f.area(), &app))
            .unwrap();

        let buf = terminal.backend().buffer();
        assert!(buffer_row(buf, 0).contains("Components"));
        assert!(buffer_row(buf, 1).contains("│App"));
        assert!(buffer_row(buf, 2).contains("│  Form"));
        assert!(buffer_row(buf, 3).contains("│    Input"));
    }

    #[test]
    fn scrolls_to_cursor() {
        let mut app = AppState::new(scenario_store(), BarConfig::default());
        app.cursor = 2;
        // One visible row.
        let mut terminal = Terminal::new(TestBackend::new(30, 3)).unwrap();
        terminal
            .draw(|f| render(f, f.area(), &app))
            .unwrap();
        assert!(buffer_row(terminal.backend().buffer(), 1).contains("Input"));
    }
}
