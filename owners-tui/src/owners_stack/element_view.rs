//! One owner in the bar: a clickable, optionally highlighted label.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use tracing::warn;

use owners_core::{ElementId, ElementStore};

use super::OwnerStackAction;
use crate::config::BarConfig;
use crate::theme::Theme;

/// Display name of an owner, or a `#id` placeholder when the store has no
/// record for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerLabel {
    text: String,
    stale: bool,
}

impl OwnerLabel {
    pub fn lookup(store: &dyn ElementStore, id: ElementId) -> Self {
        match store.element_by_id(id) {
            Some(element) => Self {
                text: element.display_name.clone(),
                stale: false,
            },
            None => {
                warn!(%id, "owner stack references an element missing from the store");
                Self {
                    text: format!("#{id}"),
                    stale: true,
                }
            }
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Width in terminal cells.
    pub fn width(&self) -> u16 {
        u16::try_from(Span::raw(self.text.as_str()).width()).unwrap_or(u16::MAX)
    }
}

/// Rendered width of a box plus its horizontal margins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxMetrics {
    pub width: u16,
    pub margin_left: u16,
    pub margin_right: u16,
}

impl BoxMetrics {
    pub fn outer(&self) -> u16 {
        self.width
            .saturating_add(self.margin_left)
            .saturating_add(self.margin_right)
    }
}

/// Click on an owner at `index`: selects it unless it is already selected.
pub fn click_action(
    id: ElementId,
    index: usize,
    owner_stack_index: Option<usize>,
) -> Option<OwnerStackAction> {
    if owner_stack_index == Some(index) {
        None
    } else {
        Some(OwnerStackAction::SelectOwner(id))
    }
}

#[derive(Debug, Clone)]
pub struct ElementView<'a> {
    id: ElementId,
    index: usize,
    label: OwnerLabel,
    is_selected: bool,
    padding: u16,
    theme: &'a Theme,
}

impl<'a> ElementView<'a> {
    pub fn new(
        store: &dyn ElementStore,
        id: ElementId,
        index: usize,
        owner_stack_index: Option<usize>,
        theme: &'a Theme,
    ) -> Self {
        Self {
            id,
            index,
            label: OwnerLabel::lookup(store, id),
            is_selected: owner_stack_index == Some(index),
            padding: BarConfig::default().item_padding,
            theme,
        }
    }

    pub fn padding(mut self, padding: u16) -> Self {
        self.padding = padding;
        self
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn label(&self) -> &OwnerLabel {
        &self.label
    }

    pub fn is_selected(&self) -> bool {
        self.is_selected
    }

    pub fn metrics(&self, config: &BarConfig) -> BoxMetrics {
        BoxMetrics {
            width: self.label.width().saturating_add(self.padding.saturating_mul(2)),
            margin_left: 0,
            margin_right: config.item_margin,
        }
    }
}

impl Widget for &ElementView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = if self.is_selected {
            self.theme.selected_component()
        } else if self.label.is_stale() {
            self.theme.stale()
        } else {
            self.theme.component()
        };
        let pad = " ".repeat(usize::from(self.padding));
        let line = Line::from(vec![
            Span::styled(pad.clone(), style),
            Span::styled(self.label.text(), style),
            Span::styled(pad, style),
        ]);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
