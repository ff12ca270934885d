//! Theme tokens for the owners-stack bar and inspector.
//!
//! # Color Palette
//! - **Accent**: Electric cyan (selected owner, focus)
//! - **Warning**: Neon orange (status warnings)
//! - **Negative**: Hot pink (errors, stale ids)
//! - **Neutral**: Cool purple (toggle button, modal border)
//! - **Muted**: Steel blue (rules, hints, unselected owners)

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub accent: Color,
    pub negative: Color,
    pub warning: Color,
    pub neutral: Color,
    pub muted: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::parrot_neon()
    }
}

impl Theme {
    pub fn parrot_neon() -> Self {
        Self {
            background: Color::Rgb(18, 18, 20),
            accent: Color::Rgb(0, 255, 255),
            negative: Color::Rgb(255, 20, 147),
            warning: Color::Rgb(255, 140, 0),
            neutral: Color::Rgb(147, 112, 219),
            muted: Color::Rgb(100, 149, 237),
            text_primary: Color::White,
            text_secondary: Color::Rgb(170, 170, 170),
        }
    }

    /// Owner button, unselected.
    pub fn component(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Owner button at the selection index.
    pub fn selected_component(&self) -> Style {
        Style::default()
            .fg(self.background)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Dropdown toggle; inverted while checked.
    pub fn toggle(&self, checked: bool) -> Style {
        if checked {
            Style::default().fg(self.background).bg(self.neutral)
        } else {
            Style::default().fg(self.neutral)
        }
    }

    pub fn icon_button(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn rule(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn modal_border(&self) -> Style {
        Style::default().fg(self.neutral)
    }

    /// Label of an id the store could not resolve.
    pub fn stale(&self) -> Style {
        Style::default().fg(self.negative).add_modifier(Modifier::ITALIC)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn accent_bold(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn status(&self, level: crate::app::StatusLevel) -> Style {
        use crate::app::StatusLevel;
        match level {
            StatusLevel::Info => Style::default().fg(self.accent),
            StatusLevel::Warning => Style::default().fg(self.warning),
            StatusLevel::Error => Style::default().fg(self.negative),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_creation() {
        let theme = Theme::default();
        assert_eq!(theme.background, Color::Rgb(18, 18, 20));
        assert_eq!(theme.accent, Color::Rgb(0, 255, 255));
    }

    #[test]
    fn test_selected_differs_from_component() {
        let theme = Theme::default();
        assert_ne!(theme.selected_component(), theme.component());
        assert_eq!(theme.selected_component().bg, Some(theme.accent));
    }

    #[test]
    fn test_toggle_checked() {
        let theme = Theme::default();
        assert_eq!(theme.toggle(true).bg, Some(theme.neutral));
        assert_eq!(theme.toggle(false).bg, None);
    }
}
