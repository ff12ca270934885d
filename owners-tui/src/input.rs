//! Input dispatch: overlays, then quit keys, then the owners-stack bar, then global and body keys.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};

use owners_core::OwnerNavigator;

use crate::app::{AppState, Overlay};
use crate::owners_stack::EventOutcome;

/// Handle one terminal event.
pub fn handle_event(app: &mut AppState, event: &Event) {
    // Only handle key press events (Windows sends both Press and Release).
    if let Event::Key(key) = event {
        if key.kind != KeyEventKind::Press {
            return;
        }
    }

    // 1. Overlays consume input first; a key or a click closes them.
    if app.overlay == Overlay::Help {
        if matches!(
            event,
            Event::Key(_)
                | Event::Mouse(MouseEvent {
                    kind: MouseEventKind::Down(_),
                    ..
                })
        ) {
            app.overlay = Overlay::None;
        }
        return;
    }

    // 2. Quit keys, even with the dropdown open.
    if let Event::Key(key) = event {
        if is_quit(key) {
            app.running = false;
            return;
        }
    }

    // 3. The bar, while in owners mode.
    if app.tree.is_owners_mode() {
        match app.owners.handle_event(event, &app.tree) {
            EventOutcome::Action(action) => {
                app.apply(action);
                return;
            }
            EventOutcome::Consumed => return,
            EventOutcome::Ignored => {}
        }
    }

    if let Event::Key(key) = event {
        handle_key(app, *key);
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('?') => app.overlay = Overlay::Help,

        KeyCode::Char('j') | KeyCode::Down => app.move_cursor(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_cursor(-1),
        KeyCode::Enter => app.drill_into_cursor(),

        KeyCode::Char('h') | KeyCode::Left if app.tree.is_owners_mode() => {
            app.select_previous_owner();
        }
        KeyCode::Char('l') | KeyCode::Right if app.tree.is_owners_mode() => {
            app.select_next_owner();
        }
        KeyCode::Char('o') if app.tree.is_owners_mode() => {
            app.set_warning("All owners fit; nothing to expand");
        }
        _ => {}
    }
}

/// Key bindings help text
pub fn key_bindings_help() -> Vec<(&'static str, &'static str)> {
    vec![
        ("q / Ctrl+C", "Quit"),
        ("↑/k, ↓/j", "Move cursor"),
        ("Enter", "Inspect owners of element"),
        ("←/h, →/l", "Previous / next owner"),
        ("o / Space", "Open owners dropdown (collapsed bar)"),
        ("x / Esc / Backspace", "Back to tree view"),
        ("Mouse", "Click owners, dropdown, ✕"),
        ("?", "Toggle this help"),
    ]
}
