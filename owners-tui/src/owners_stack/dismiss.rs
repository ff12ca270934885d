//! Modal dismiss detection.

use crossterm::event::{Event, KeyCode, KeyEventKind, MouseEventKind};
use ratatui::layout::{Position, Rect};

/// True when `event` should close a modal drawn at `modal`.
///
/// Escape, terminal focus loss, and any mouse press outside both the modal
/// and `exempt` (the control that opened it) count as dismissal.
pub fn dismiss_signal(event: &Event, modal: Rect, exempt: Rect) -> bool {
    match event {
        Event::Key(key) => key.kind == KeyEventKind::Press && key.code == KeyCode::Esc,
        Event::FocusLost => true,
        Event::Mouse(mouse) => {
            if !matches!(mouse.kind, MouseEventKind::Down(_)) {
                return false;
            }
            let pos = Position::new(mouse.column, mouse.row);
            !modal.contains(pos) && !exempt.contains(pos)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers, MouseButton, MouseEvent};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    const MODAL: Rect = Rect { x: 5, y: 1, width: 10, height: 4 };
    const TOGGLE: Rect = Rect { x: 5, y: 0, width: 3, height: 1 };

    #[test]
    fn escape_dismisses() {
        let event = Event::Key(KeyEvent::from(KeyCode::Esc));
        assert!(dismiss_signal(&event, MODAL, TOGGLE));

        let event = Event::Key(KeyEvent::from(KeyCode::Char('j')));
        assert!(!dismiss_signal(&event, MODAL, TOGGLE));
    }

    #[test]
    fn focus_lost_dismisses() {
        assert!(dismiss_signal(&Event::FocusLost, MODAL, TOGGLE));
        assert!(!dismiss_signal(&Event::FocusGained, MODAL, TOGGLE));
    }

    #[test]
    fn click_outside_dismisses() {
        let down = MouseEventKind::Down(MouseButton::Left);
        assert!(dismiss_signal(&mouse(down, 30, 2), MODAL, TOGGLE));
        assert!(!dismiss_signal(&mouse(down, 6, 2), MODAL, TOGGLE));
        assert!(!dismiss_signal(&mouse(down, 6, 0), MODAL, TOGGLE));
    }

    #[test]
    fn mouse_move_is_not_a_signal() {
        assert!(!dismiss_signal(&mouse(MouseEventKind::Moved, 30, 2), MODAL, TOGGLE));
        let up = MouseEventKind::Up(MouseButton::Left);
        assert!(!dismiss_signal(&mouse(up, 30, 2), MODAL, TOGGLE));
    }
}
