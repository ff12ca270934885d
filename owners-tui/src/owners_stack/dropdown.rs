//! Collapsed-bar dropdown: a toggle button and a floating list of every owner.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Widget},
};
use tracing::debug;

use owners_core::ElementId;

use super::element_view::ElementView;
use super::{Hit, OwnerStackAction};
use crate::config::BarConfig;
use crate::theme::Theme;

pub const TOGGLE_LABEL: &str = " ⋯ ";
pub const TOGGLE_WIDTH: u16 = 3;

/// Visibility of the dropdown list plus the keyboard cursor inside it.
///
/// `CLOSED --toggle--> OPEN --toggle | choose | dismiss--> CLOSED`
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DropdownState {
    visible: bool,
    cursor: usize,
}

impl DropdownState {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Flip visibility. Opening puts the cursor on the selected owner.
    pub fn toggle(&mut self, owner_stack_index: Option<usize>) {
        if self.visible {
            self.dismiss();
        } else {
            self.visible = true;
            self.cursor = owner_stack_index.unwrap_or(0);
            debug!("owners dropdown opened");
        }
    }

    /// Close without selecting anything.
    pub fn dismiss(&mut self) {
        if self.visible {
            debug!("owners dropdown closed");
        }
        self.visible = false;
        self.cursor = 0;
    }

    /// Close and select `id`.
    pub fn choose(&mut self, id: ElementId) -> OwnerStackAction {
        self.dismiss();
        OwnerStackAction::SelectOwner(id)
    }

    /// Move the cursor by `delta`, clamped to `len` rows.
    pub fn move_cursor(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let max = len - 1;
        self.cursor = self.cursor.saturating_add_signed(delta).min(max);
    }
}

/// The toggle and, while open, the modal listing every owner.
pub struct ElementsDropdown<'v, 'a> {
    views: &'v [ElementView<'a>],
    config: &'v BarConfig,
    theme: &'v Theme,
}

impl<'v, 'a> ElementsDropdown<'v, 'a> {
    pub fn new(views: &'v [ElementView<'a>], config: &'v BarConfig, theme: &'v Theme) -> Self {
        Self {
            views,
            config,
            theme,
        }
    }

    pub fn render_toggle(&self, area: Rect, buf: &mut Buffer, state: &DropdownState) {
        buf.set_stringn(
            area.x,
            area.y,
            TOGGLE_LABEL,
            usize::from(area.width),
            self.theme.toggle(state.is_visible()),
        );
    }

    /// Where the modal goes: directly below `anchor`, clipped to `bounds`.
    pub fn modal_area(&self, anchor: Rect, bounds: Rect) -> Rect {
        let label_width = self
            .views
            .iter()
            .map(|v| v.label().width())
            .max()
            .unwrap_or(0);
        // Cursor marker + label + trailing pad, inside a border.
        let width = label_width.saturating_add(2).saturating_add(2);
        let rows = u16::try_from(self.views.len())
            .unwrap_or(u16::MAX)
            .min(self.config.dropdown_max_rows);
        let height = rows.saturating_add(2);

        let wanted = Rect::new(anchor.x, anchor.y.saturating_add(1), width, height);
        wanted.intersection(bounds)
    }

    /// Draw the modal into `area` and return the hit region of each visible row.
    pub fn render_modal(&self, area: Rect, buf: &mut Buffer, state: &DropdownState) -> Vec<(Rect, Hit)> {
        Clear.render(area, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.modal_border());
        let inner = block.inner(area);
        block.render(area, buf);

        let visible = usize::from(inner.height);
        if visible == 0 {
            return Vec::new();
        }
        let offset = state.cursor().saturating_sub(visible - 1);

        let mut rows = Vec::with_capacity(visible);
        for (row, view) in self.views.iter().skip(offset).take(visible).enumerate() {
            let rect = Rect::new(inner.x, inner.y + row as u16, inner.width, 1);
            let style = if view.is_selected() {
                self.theme.selected_component()
            } else if view.label().is_stale() {
                self.theme.stale()
            } else {
                self.theme.component()
            };
            let marker = if view.index() == state.cursor() { "›" } else { " " };
            let line = Line::from(vec![
                Span::styled(marker, self.theme.accent_bold()),
                Span::styled(view.label().text(), style),
                Span::styled(" ", style),
            ]);
            buf.set_line(rect.x, rect.y, &line, rect.width);
            rows.push((
                rect,
                Hit::DropdownItem {
                    index: view.index(),
                    id: view.id(),
                },
            ));
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_closed() {
        let state = DropdownState::default();
        assert!(!state.is_visible());
    }

    #[test]
    fn test_toggle_open_close_restores_state() {
        let mut state = DropdownState::default();
        let before = state.clone();
        state.toggle(Some(2));
        assert!(state.is_visible());
        assert_eq!(state.cursor(), 2);
        state.toggle(Some(2));
        assert_eq!(state, before);
    }

    #[test]
    fn test_choose_closes_and_selects() {
        let mut state = DropdownState::default();
        state.toggle(None);
        let action = state.choose(ElementId(30));
        assert_eq!(action, OwnerStackAction::SelectOwner(ElementId(30)));
        assert!(!state.is_visible());
    }

    #[test]
    fn test_dismiss_closes() {
        let mut state = DropdownState::default();
        state.toggle(Some(0));
        state.dismiss();
        assert!(!state.is_visible());
    }

    #[test]
    fn test_cursor_clamped() {
        let mut state = DropdownState::default();
        state.toggle(Some(1));
        state.move_cursor(5, 3);
        assert_eq!(state.cursor(), 2);
        state.move_cursor(-10, 3);
        assert_eq!(state.cursor(), 0);
        state.move_cursor(1, 0);
        assert_eq!(state.cursor(), 0);
    }
}
