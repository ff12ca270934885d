//! Bottom status bar: mode hints and the last status message.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use owners_core::OwnerNavigator;

use crate::app::AppState;
use crate::owners_stack::RESET_TITLE;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = Vec::new();

    let hints = if app.owners.is_dropdown_open() {
        " j/k:Move Enter:Select Esc:Close".to_string()
    } else if app.tree.is_owners_mode() {
        format!(" h/l:Owner Enter:Inspect x:{RESET_TITLE} ?:Help")
    } else {
        " j/k:Move Enter:Inspect owners ?:Help q:Quit".to_string()
    };
    spans.push(Span::styled(hints, app.theme.muted()));

    if let Some((msg, level)) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg.as_str(), app.theme.status(*level)));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
