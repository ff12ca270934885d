//! Application state: single-owner, main-thread only.
//!
//! The navigator (`TreeContext`) is the only place the owner stack changes;
//! the bar and the key handlers produce `OwnerStackAction`s that `apply`
//! feeds into it.

use std::rc::Rc;

use tracing::warn;

use owners_core::{ElementId, ElementStore, OwnerNavigator, Store, TreeContext};

use crate::config::BarConfig;
use crate::owners_stack::{OwnerStackAction, OwnerStackState};
use crate::theme::Theme;

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
}

/// A body row: element and its indentation depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row {
    pub id: ElementId,
    pub depth: usize,
}

/// Top-level application state.
pub struct AppState {
    pub tree: TreeContext<Store>,
    pub owners: OwnerStackState,
    pub config: BarConfig,
    pub theme: Theme,

    pub cursor: usize,
    pub overlay: Overlay,
    pub running: bool,
    pub status_message: Option<(String, StatusLevel)>,
}

impl AppState {
    pub fn new(store: Store, config: BarConfig) -> Self {
        Self {
            tree: TreeContext::new(Rc::new(store)),
            owners: OwnerStackState::new(),
            config,
            theme: Theme::default(),
            cursor: 0,
            overlay: Overlay::None,
            running: true,
            status_message: None,
        }
    }

    pub fn store(&self) -> &Store {
        self.tree.store()
    }

    /// Rows of the body panel for the current mode.
    ///
    /// Tree mode lists every element by ownership; owners mode lists the
    /// selected owner and everything it owns.
    pub fn rows(&self) -> Vec<Row> {
        let store = self.store();
        let mut rows = Vec::new();
        match self.tree.selected_owner() {
            Some(owner) => push_subtree(store, owner, 0, &mut rows),
            None => {
                for root in store.roots() {
                    push_subtree(store, root, 0, &mut rows);
                }
            }
        }
        rows
    }

    pub fn cursor_id(&self) -> Option<ElementId> {
        self.rows().get(self.cursor).map(|r| r.id)
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.rows().len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = self.cursor.saturating_add_signed(delta).min(len - 1);
        if !self.tree.is_owners_mode() {
            let id = self.cursor_id();
            self.tree.select_element(id);
        }
    }

    /// Enter (or move within) the owners stack of the element under the cursor.
    pub fn drill_into_cursor(&mut self) {
        if let Some(id) = self.cursor_id() {
            self.apply(OwnerStackAction::SelectOwner(id));
        }
    }

    pub fn select_previous_owner(&mut self) {
        match self.tree.select_previous_owner() {
            Ok(true) => self.cursor = 0,
            Ok(false) => {}
            Err(e) => self.set_error(e.to_string()),
        }
    }

    pub fn select_next_owner(&mut self) {
        match self.tree.select_next_owner() {
            Ok(true) => self.cursor = 0,
            Ok(false) => {}
            Err(e) => self.set_error(e.to_string()),
        }
    }

    pub fn apply(&mut self, action: OwnerStackAction) {
        match action {
            OwnerStackAction::SelectOwner(id) => match self.tree.select_owner(id) {
                Ok(()) => {
                    self.cursor = 0;
                    let name = self.display_name(id);
                    self.set_status(format!("Owners of {name}"));
                }
                Err(e) => {
                    warn!(error = %e, "select owner failed");
                    self.set_error(e.to_string());
                }
            },
            OwnerStackAction::ResetOwnerStack => {
                self.tree.reset_owner_stack();
                let selected = self.tree.selected_element_id();
                self.cursor = self
                    .rows()
                    .iter()
                    .position(|r| Some(r.id) == selected)
                    .unwrap_or(0);
                self.status_message = None;
            }
        }
    }

    pub fn display_name(&self, id: ElementId) -> String {
        self.store()
            .element_by_id(id)
            .map(|el| el.display_name.clone())
            .unwrap_or_else(|| format!("#{id}"))
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Error));
    }
}

fn push_subtree(store: &Store, id: ElementId, depth: usize, rows: &mut Vec<Row>) {
    // Cyclic fixtures would recurse forever; no chain is deeper than the store.
    if depth > store.len() {
        return;
    }
    rows.push(Row { id, depth });
    for child in store.owned_by(id) {
        push_subtree(store, child, depth + 1, rows);
    }
}
