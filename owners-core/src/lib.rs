//! Owners Core: element store and owner-stack navigation.
//!
//! This crate holds the state the owners-stack bar renders from:
//! - Element records keyed by `ElementId`, each pointing at its owner
//! - `ElementStore` lookup trait and the in-memory `Store`
//! - `OwnerNavigator` trait and `TreeContext`, which owns the current owner
//!   stack, its selection index and the stack generation

pub mod element;
pub mod error;
pub mod store;
pub mod tree;

pub use element::{Element, ElementId};
pub use error::OwnersError;
pub use store::{ElementStore, Store, StoreFixture};
pub use tree::{OwnerNavigator, TreeContext};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: the navigator and store traits stay object safe.
    ///
    /// The widgets take `&dyn ElementStore` and `&dyn OwnerNavigator`; adding a
    /// generic method to either trait breaks this immediately.
    #[test]
    fn collaborator_traits_are_object_safe() {
        fn _store(_: &dyn ElementStore) {}
        fn _navigator(_: &dyn OwnerNavigator) {}
    }

    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<Element>();
        require_sync::<Element>();
        require_send::<ElementId>();
        require_sync::<ElementId>();
        require_send::<Store>();
        require_sync::<Store>();
        require_send::<OwnersError>();
        require_sync::<OwnersError>();
    }
}
