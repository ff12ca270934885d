//! Owner-stack navigation state.
//!
//! `TreeContext` is the single writer of the owner stack. The stack lists the
//! owners of the drilled-into element, root owner first, and carries a
//! selection index into that list. Every replacement of the stack bumps
//! `stack_generation`, which views use as the stack's identity.

use std::rc::Rc;

use tracing::{debug, info};

use crate::element::ElementId;
use crate::error::OwnersError;
use crate::store::{ElementStore, Store};

/// Owner-stack state as consumed by the owners-stack bar.
pub trait OwnerNavigator {
    fn owner_stack(&self) -> &[ElementId];

    /// Index into `owner_stack` of the selected owner.
    fn owner_stack_index(&self) -> Option<usize>;

    /// Changes whenever the stack is replaced rather than re-indexed.
    fn stack_generation(&self) -> u64;

    fn select_owner(&mut self, id: ElementId) -> Result<(), OwnersError>;

    fn reset_owner_stack(&mut self);

    fn is_owners_mode(&self) -> bool {
        !self.owner_stack().is_empty()
    }

    /// Id of the selected owner, if the index points into the stack.
    fn selected_owner(&self) -> Option<ElementId> {
        self.owner_stack_index()
            .and_then(|i| self.owner_stack().get(i).copied())
    }
}

/// Tree navigation state backed by an element store.
#[derive(Debug)]
pub struct TreeContext<S = Store> {
    store: Rc<S>,
    owner_stack: Vec<ElementId>,
    owner_stack_index: Option<usize>,
    selected_element_id: Option<ElementId>,
    generation: u64,
}

impl<S: ElementStore> TreeContext<S> {
    pub fn new(store: Rc<S>) -> Self {
        Self {
            store,
            owner_stack: Vec::new(),
            owner_stack_index: None,
            selected_element_id: None,
            generation: 0,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn selected_element_id(&self) -> Option<ElementId> {
        self.selected_element_id
    }

    /// Select a tree element outside owners mode.
    pub fn select_element(&mut self, id: Option<ElementId>) {
        self.selected_element_id = id;
    }

    /// Move the selection one owner towards the root. Returns false at the root.
    pub fn select_previous_owner(&mut self) -> Result<bool, OwnersError> {
        match self.owner_stack_index {
            Some(i) if i > 0 => {
                let id = self.owner_stack[i - 1];
                self.select_owner(id)?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Move the selection one owner away from the root. Returns false at the end.
    pub fn select_next_owner(&mut self) -> Result<bool, OwnersError> {
        match self.owner_stack_index {
            Some(i) if i + 1 < self.owner_stack.len() => {
                let id = self.owner_stack[i + 1];
                self.select_owner(id)?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

impl<S: ElementStore> OwnerNavigator for TreeContext<S> {
    fn owner_stack(&self) -> &[ElementId] {
        &self.owner_stack
    }

    fn owner_stack_index(&self) -> Option<usize> {
        self.owner_stack_index
    }

    fn stack_generation(&self) -> u64 {
        self.generation
    }

    /// Select `id` within the current stack, or drill into it.
    ///
    /// An id already on the stack only moves the index (first occurrence).
    /// Any other id replaces the stack with its owner chain and selects the
    /// last entry. On error the state is left untouched.
    fn select_owner(&mut self, id: ElementId) -> Result<(), OwnersError> {
        if let Some(index) = self.owner_stack.iter().position(|&o| o == id) {
            debug!(%id, index, "select owner in stack");
            self.owner_stack_index = Some(index);
            self.selected_element_id = Some(id);
            return Ok(());
        }

        let chain = self.store.owner_chain(id)?;
        info!(%id, depth = chain.len(), "enter owners stack");
        self.owner_stack_index = Some(chain.len() - 1);
        self.owner_stack = chain;
        self.selected_element_id = Some(id);
        self.generation += 1;
        Ok(())
    }

    fn reset_owner_stack(&mut self) {
        if self.owner_stack.is_empty() {
            return;
        }
        info!(len = self.owner_stack.len(), "reset owners stack");
        self.owner_stack.clear();
        self.owner_stack_index = None;
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;

    fn context() -> TreeContext {
        let store = Store::from_elements([
            Element::new(10, "App"),
            Element::new(20, "Form").owned_by(10),
            Element::new(30, "Input").owned_by(20),
            Element::new(40, "Label").owned_by(20),
        ])
        .unwrap();
        TreeContext::new(Rc::new(store))
    }

    #[test]
    fn test_initial_state() {
        let ctx = context();
        assert!(ctx.owner_stack().is_empty());
        assert_eq!(ctx.owner_stack_index(), None);
        assert!(!ctx.is_owners_mode());
        assert_eq!(ctx.selected_owner(), None);
    }

    #[test]
    fn test_drill_in_builds_chain() {
        let mut ctx = context();
        ctx.select_owner(ElementId(30)).unwrap();
        assert_eq!(ctx.owner_stack(), &[ElementId(10), ElementId(20), ElementId(30)]);
        assert_eq!(ctx.owner_stack_index(), Some(2));
        assert_eq!(ctx.selected_owner(), Some(ElementId(30)));
        assert_eq!(ctx.selected_element_id(), Some(ElementId(30)));
        assert_eq!(ctx.stack_generation(), 1);
    }

    #[test]
    fn test_select_within_stack_keeps_generation() {
        let mut ctx = context();
        ctx.select_owner(ElementId(30)).unwrap();
        ctx.select_owner(ElementId(10)).unwrap();
        assert_eq!(ctx.owner_stack_index(), Some(0));
        assert_eq!(ctx.owner_stack().len(), 3);
        assert_eq!(ctx.stack_generation(), 1);
    }

    #[test]
    fn test_select_outside_stack_replaces_it() {
        let mut ctx = context();
        ctx.select_owner(ElementId(30)).unwrap();
        ctx.select_owner(ElementId(40)).unwrap();
        assert_eq!(ctx.owner_stack(), &[ElementId(10), ElementId(20), ElementId(40)]);
        assert_eq!(ctx.owner_stack_index(), Some(2));
        assert_eq!(ctx.stack_generation(), 2);
    }

    #[test]
    fn test_unknown_owner_leaves_state() {
        let mut ctx = context();
        ctx.select_owner(ElementId(20)).unwrap();
        let err = ctx.select_owner(ElementId(99)).unwrap_err();
        assert!(matches!(err, OwnersError::UnknownElement(ElementId(99))));
        assert_eq!(ctx.owner_stack(), &[ElementId(10), ElementId(20)]);
        assert_eq!(ctx.owner_stack_index(), Some(1));
        assert_eq!(ctx.stack_generation(), 1);
    }

    #[test]
    fn test_reset() {
        let mut ctx = context();
        ctx.select_owner(ElementId(30)).unwrap();
        ctx.reset_owner_stack();
        assert!(ctx.owner_stack().is_empty());
        assert_eq!(ctx.owner_stack_index(), None);
        assert_eq!(ctx.stack_generation(), 2);
        // Selection in the tree survives leaving owners mode.
        assert_eq!(ctx.selected_element_id(), Some(ElementId(30)));

        // Resetting an empty stack is a no-op.
        ctx.reset_owner_stack();
        assert_eq!(ctx.stack_generation(), 2);
    }

    #[test]
    fn test_previous_next_owner() {
        let mut ctx = context();
        ctx.select_owner(ElementId(30)).unwrap();
        assert!(!ctx.select_next_owner().unwrap());
        assert!(ctx.select_previous_owner().unwrap());
        assert_eq!(ctx.owner_stack_index(), Some(1));
        assert!(ctx.select_previous_owner().unwrap());
        assert!(!ctx.select_previous_owner().unwrap());
        assert_eq!(ctx.selected_owner(), Some(ElementId(10)));
        assert!(ctx.select_next_owner().unwrap());
        assert_eq!(ctx.selected_owner(), Some(ElementId(20)));
        assert_eq!(ctx.stack_generation(), 1);
    }

    /// Store that only answers lookups; the chain comes from the trait.
    struct Lookup(Vec<Element>);

    impl ElementStore for Lookup {
        fn element_by_id(&self, id: ElementId) -> Option<&Element> {
            self.0.iter().find(|el| el.id == id)
        }
    }

    #[test]
    fn test_lookup_only_store_drills_in() {
        let store = Lookup(vec![
            Element::new(1, "App"),
            Element::new(2, "Form").owned_by(1),
            Element::new(3, "Loop").owned_by(4),
            Element::new(4, "Back").owned_by(3),
        ]);
        let mut ctx = TreeContext::new(Rc::new(store));
        ctx.select_owner(ElementId(2)).unwrap();
        assert_eq!(ctx.owner_stack(), &[ElementId(1), ElementId(2)]);

        assert!(matches!(
            ctx.select_owner(ElementId(3)),
            Err(OwnersError::OwnerCycle(_))
        ));
        assert_eq!(ctx.owner_stack(), &[ElementId(1), ElementId(2)]);
    }
}
