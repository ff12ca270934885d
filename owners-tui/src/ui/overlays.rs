//! Help overlay.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::input::key_bindings_help;
use crate::theme::Theme;
use crate::ui::centered_rect;

pub fn render_help(f: &mut Frame, area: Rect, theme: &Theme) {
    let popup = centered_rect(70, 70, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.modal_border())
        .title(" Keys ")
        .title_style(theme.accent_bold());

    let bindings = key_bindings_help();
    let key_width = bindings.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);

    let mut lines: Vec<Line> = Vec::new();
    for (key, desc) in bindings {
        lines.push(Line::from(vec![
            Span::styled(format!("  {key:<key_width$}  "), theme.accent_bold()),
            Span::styled(desc, theme.component()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press any key to close",
        theme.muted(),
    )));

    f.render_widget(Paragraph::new(lines).block(block), popup);
}
