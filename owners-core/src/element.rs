use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric identifier of an element in the inspected tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub u32);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ElementId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// A component record as the inspector sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    pub display_name: String,
    /// The component that rendered this element, if any.
    #[serde(default)]
    pub owner_id: Option<ElementId>,
    #[serde(default)]
    pub key: Option<String>,
}

impl Element {
    pub fn new(id: impl Into<ElementId>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            owner_id: None,
            key: None,
        }
    }

    pub fn owned_by(mut self, owner: impl Into<ElementId>) -> Self {
        self.owner_id = Some(owner.into());
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Display name with the React-style key suffix, e.g. `Item key="a"`.
    pub fn label(&self) -> String {
        match &self.key {
            Some(key) => format!("{} key=\"{}\"", self.display_name, key),
            None => self.display_name.clone(),
        }
    }
}
