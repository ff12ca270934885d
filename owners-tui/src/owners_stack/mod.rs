//! Owners-stack breadcrumb bar.
//!
//! Renders the chain of owners of the inspected element on a single row:
//!
//! ```text
//!  ✕ │ App  Layout  Form  Input       (fits)
//!  ✕ │ ⋯  Form                        (collapsed)
//! ```
//!
//! The bar reads the stack from an `OwnerNavigator` and labels from an
//! `ElementStore`; it never mutates either. Input handlers return an
//! `OwnerStackAction` for the caller to apply.

mod dismiss;
mod dropdown;
mod element_view;
mod overflow;

pub use dismiss::dismiss_signal;
pub use dropdown::{DropdownState, ElementsDropdown, TOGGLE_LABEL, TOGGLE_WIDTH};
pub use element_view::{click_action, BoxMetrics, ElementView, OwnerLabel};
pub use overflow::{is_overflowing, OverflowTracker, StackKey};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    widgets::{StatefulWidget, Widget},
};

use owners_core::{ElementId, ElementStore, OwnerNavigator};

use crate::config::BarConfig;
use crate::theme::Theme;

pub const RESET_LABEL: &str = " ✕ ";
pub const RESET_TITLE: &str = "Back to tree view";
const RESET_WIDTH: u16 = 3;
const RULE: &str = "│";
/// Reset button, rule and the gap after it.
const HEADER_WIDTH: u16 = RESET_WIDTH + 2;

/// What the caller should do to the navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerStackAction {
    SelectOwner(ElementId),
    ResetOwnerStack,
}

/// Result of routing one terminal event through the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// Not for the bar; the caller may handle it.
    Ignored,
    /// Handled locally (dropdown toggled, no-op click).
    Consumed,
    Action(OwnerStackAction),
}

/// A clickable region recorded during the last render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Reset,
    Item { index: usize, id: ElementId },
    Toggle,
    DropdownItem { index: usize, id: ElementId },
    /// Modal background outside any row.
    Modal,
}

/// State the bar keeps between frames.
#[derive(Debug, Default)]
pub struct OwnerStackState {
    overflow: OverflowTracker,
    dropdown: DropdownState,
    regions: Vec<(Rect, Hit)>,
    toggle_area: Option<Rect>,
    modal_area: Option<Rect>,
}

impl OwnerStackState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_overflowing(&self) -> bool {
        self.overflow.is_overflowing()
    }

    pub fn overflow(&self) -> &OverflowTracker {
        &self.overflow
    }

    pub fn dropdown(&self) -> &DropdownState {
        &self.dropdown
    }

    pub fn is_dropdown_open(&self) -> bool {
        self.dropdown.is_visible()
    }

    /// Regions of the last frame, in paint order.
    pub fn regions(&self) -> &[(Rect, Hit)] {
        &self.regions
    }

    /// Inline owner buttons of the last frame as `(index, id)`.
    pub fn inline_items(&self) -> Vec<(usize, ElementId)> {
        self.regions
            .iter()
            .filter_map(|(_, hit)| match hit {
                Hit::Item { index, id } => Some((*index, *id)),
                _ => None,
            })
            .collect()
    }

    /// Topmost region under a cell.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Hit> {
        let pos = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(rect, _)| rect.contains(pos))
            .map(|(_, hit)| *hit)
    }

    /// Route a terminal event. Dismissal is checked first; a dismissing click
    /// still reaches whatever bar control it landed on.
    pub fn handle_event(&mut self, event: &Event, tree: &dyn OwnerNavigator) -> EventOutcome {
        if self.dropdown.is_visible() {
            let modal = self.modal_area.unwrap_or_default();
            let toggle = self.toggle_area.unwrap_or_default();
            if dismiss_signal(event, modal, toggle) {
                self.dropdown.dismiss();
                if !matches!(event, Event::Mouse(_)) {
                    return EventOutcome::Consumed;
                }
            }
        }

        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(*key, tree),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                self.handle_click(mouse.column, mouse.row, tree)
            }
            _ => EventOutcome::Ignored,
        }
    }

    pub fn handle_click(&mut self, column: u16, row: u16, tree: &dyn OwnerNavigator) -> EventOutcome {
        match self.hit_test(column, row) {
            Some(Hit::Reset) => {
                self.dropdown.dismiss();
                EventOutcome::Action(OwnerStackAction::ResetOwnerStack)
            }
            Some(Hit::Item { index, id }) => {
                match click_action(id, index, tree.owner_stack_index()) {
                    Some(action) => EventOutcome::Action(action),
                    None => EventOutcome::Consumed,
                }
            }
            Some(Hit::Toggle) => {
                self.dropdown.toggle(tree.owner_stack_index());
                EventOutcome::Consumed
            }
            Some(Hit::DropdownItem { id, .. }) => {
                EventOutcome::Action(self.dropdown.choose(id))
            }
            Some(Hit::Modal) => EventOutcome::Consumed,
            None => EventOutcome::Ignored,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, tree: &dyn OwnerNavigator) -> EventOutcome {
        if self.dropdown.is_visible() {
            let len = tree.owner_stack().len();
            match key.code {
                KeyCode::Char('j') | KeyCode::Down => self.dropdown.move_cursor(1, len),
                KeyCode::Char('k') | KeyCode::Up => self.dropdown.move_cursor(-1, len),
                KeyCode::Enter => {
                    return match tree.owner_stack().get(self.dropdown.cursor()) {
                        Some(&id) => EventOutcome::Action(self.dropdown.choose(id)),
                        None => {
                            self.dropdown.dismiss();
                            EventOutcome::Consumed
                        }
                    };
                }
                KeyCode::Char('o') | KeyCode::Char(' ') => self.dropdown.dismiss(),
                _ => {}
            }
            // The open modal swallows every key.
            return EventOutcome::Consumed;
        }

        match key.code {
            KeyCode::Char('o') | KeyCode::Char(' ') if self.is_overflowing() => {
                self.dropdown.toggle(tree.owner_stack_index());
                EventOutcome::Consumed
            }
            KeyCode::Char('x') | KeyCode::Backspace | KeyCode::Esc if tree.is_owners_mode() => {
                EventOutcome::Action(OwnerStackAction::ResetOwnerStack)
            }
            _ => EventOutcome::Ignored,
        }
    }
}

/// The bar widget. `area` is the row to draw in; the dropdown modal may
/// extend below it, within `overlay_bounds` (the whole buffer by default).
pub struct OwnerStack<'a> {
    store: &'a dyn ElementStore,
    tree: &'a dyn OwnerNavigator,
    config: &'a BarConfig,
    theme: &'a Theme,
    overlay_bounds: Option<Rect>,
}

impl<'a> OwnerStack<'a> {
    pub fn new(
        store: &'a dyn ElementStore,
        tree: &'a dyn OwnerNavigator,
        config: &'a BarConfig,
        theme: &'a Theme,
    ) -> Self {
        Self {
            store,
            tree,
            config,
            theme,
            overlay_bounds: None,
        }
    }

    pub fn overlay_bounds(mut self, bounds: Rect) -> Self {
        self.overlay_bounds = Some(bounds);
        self
    }

    fn render_header(&self, row: Rect, buf: &mut Buffer, state: &mut OwnerStackState) -> Rect {
        let reset = Rect::new(row.x, row.y, RESET_WIDTH.min(row.width), 1);
        buf.set_stringn(
            reset.x,
            reset.y,
            RESET_LABEL,
            usize::from(reset.width),
            self.theme.icon_button(),
        );
        state.regions.push((reset, Hit::Reset));

        if row.width > RESET_WIDTH {
            buf.set_string(reset.right(), row.y, RULE, self.theme.rule());
        }

        let bar_x = row.x.saturating_add(HEADER_WIDTH).min(row.right());
        Rect::new(bar_x, row.y, row.right() - bar_x, 1)
    }
}

impl StatefulWidget for OwnerStack<'_> {
    type State = OwnerStackState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut OwnerStackState) {
        state.regions.clear();
        state.toggle_area = None;
        state.modal_area = None;
        if area.is_empty() {
            return;
        }

        let row = Rect { height: 1, ..area };
        let bar = self.render_header(row, buf, state);

        let stack = self.tree.owner_stack();
        let selected = self.tree.owner_stack_index();
        let views: Vec<ElementView> = stack
            .iter()
            .enumerate()
            .map(|(index, &id)| {
                ElementView::new(self.store, id, index, selected, self.theme)
                    .padding(self.config.item_padding)
            })
            .collect();

        let overflowing = state.overflow.update(StackKey::of(self.tree), bar.width, || {
            views
                .iter()
                .map(|v| v.metrics(self.config).outer())
                .fold(0u16, u16::saturating_add)
        });

        if !overflowing {
            state.dropdown.dismiss();
            let mut x = bar.x;
            for view in &views {
                let m = view.metrics(self.config);
                x = x.saturating_add(m.margin_left);
                let width = m.width.min(bar.right().saturating_sub(x));
                if width == 0 {
                    break;
                }
                let rect = Rect::new(x, bar.y, width, 1);
                view.render(rect, buf);
                state.regions.push((
                    rect,
                    Hit::Item {
                        index: view.index(),
                        id: view.id(),
                    },
                ));
                x = x.saturating_add(m.width).saturating_add(m.margin_right);
            }
            return;
        }

        let dropdown = ElementsDropdown::new(&views, self.config, self.theme);
        let toggle = Rect::new(bar.x, bar.y, TOGGLE_WIDTH.min(bar.width), 1);
        dropdown.render_toggle(toggle, buf, &state.dropdown);
        state.regions.push((toggle, Hit::Toggle));
        state.toggle_area = Some(toggle);

        if let Some(view) = selected.and_then(|i| views.get(i)) {
            let m = view.metrics(self.config);
            let x = toggle
                .right()
                .saturating_add(self.config.item_margin)
                .saturating_add(m.margin_left);
            let width = m.width.min(bar.right().saturating_sub(x));
            if width > 0 {
                let rect = Rect::new(x, bar.y, width, 1);
                view.render(rect, buf);
                state.regions.push((
                    rect,
                    Hit::Item {
                        index: view.index(),
                        id: view.id(),
                    },
                ));
            }
        }

        if state.dropdown.is_visible() {
            let bounds = self.overlay_bounds.unwrap_or(buf.area).intersection(buf.area);
            let modal = dropdown.modal_area(toggle, bounds);
            if !modal.is_empty() {
                let rows = dropdown.render_modal(modal, buf, &state.dropdown);
                state.regions.push((modal, Hit::Modal));
                state.regions.extend(rows);
                state.modal_area = Some(modal);
            }
        }
    }
}
