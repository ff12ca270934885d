//! Built-in component tree used when no fixture is given.
//!
//! The names are long on purpose: the deepest chains (ten owners) do not fit
//! an 80-column bar, so the collapsed mode shows up without resizing.

use owners_core::{Element, OwnersError, Store};

pub fn sample_store() -> Result<Store, OwnersError> {
    Store::from_elements([
        Element::new(1, "App"),
        Element::new(2, "ThemeProvider").owned_by(1),
        Element::new(3, "Router").owned_by(2),
        Element::new(4, "DashboardLayout").owned_by(3),
        Element::new(5, "Sidebar").owned_by(4),
        Element::new(6, "NavigationMenu").owned_by(5),
        Element::new(7, "NavigationItem").owned_by(6).with_key("home"),
        Element::new(8, "NavigationItem").owned_by(6).with_key("settings"),
        Element::new(9, "MainContent").owned_by(4),
        Element::new(10, "TodoListContainer").owned_by(9),
        Element::new(11, "TodoList").owned_by(10),
        Element::new(12, "TodoItem").owned_by(11).with_key("1"),
        Element::new(13, "Checkbox").owned_by(12),
        Element::new(14, "EditableLabel").owned_by(12),
        Element::new(15, "Tooltip").owned_by(14),
        Element::new(16, "TodoItem").owned_by(11).with_key("2"),
        Element::new(17, "Checkbox").owned_by(16),
        Element::new(18, "EditableLabel").owned_by(16),
        Element::new(19, "Footer").owned_by(4),
        Element::new(20, "StatusIndicator").owned_by(19),
    ])
}
