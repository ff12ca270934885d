//! Element store: resolves element ids to records.
//!
//! The owners-stack widgets only need `ElementStore::element_by_id`; the
//! in-memory `Store` adds the ownership queries the navigator and the
//! application shell use (owner chains, owned children, roots).

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::element::{Element, ElementId};
use crate::error::OwnersError;

/// Read-only element lookup.
pub trait ElementStore {
    fn element_by_id(&self, id: ElementId) -> Option<&Element>;

    /// Owner chain of `id`, root owner first and `id` last.
    fn owner_chain(&self, id: ElementId) -> Result<Vec<ElementId>, OwnersError> {
        let mut chain = Vec::new();
        let mut seen = HashSet::new();
        let mut current = Some(id);

        while let Some(cur) = current {
            if !seen.insert(cur) {
                return Err(OwnersError::OwnerCycle(cur));
            }
            let element = self
                .element_by_id(cur)
                .ok_or(OwnersError::UnknownElement(cur))?;
            chain.push(cur);
            current = element.owner_id;
        }

        chain.reverse();
        Ok(chain)
    }
}

/// On-disk fixture layout: `{ "elements": [ ... ] }`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StoreFixture {
    pub elements: Vec<Element>,
}

/// In-memory store ordered by id.
#[derive(Debug, Default, Clone)]
pub struct Store {
    elements: BTreeMap<ElementId, Element>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, element: Element) -> Result<(), OwnersError> {
        if self.elements.contains_key(&element.id) {
            return Err(OwnersError::DuplicateElement(element.id));
        }
        self.elements.insert(element.id, element);
        Ok(())
    }

    pub fn from_elements(elements: impl IntoIterator<Item = Element>) -> Result<Self, OwnersError> {
        let mut store = Self::new();
        for element in elements {
            store.insert(element)?;
        }
        Ok(store)
    }

    pub fn from_json_str(json: &str) -> Result<Self, OwnersError> {
        let fixture: StoreFixture = serde_json::from_str(json)?;
        Self::from_elements(fixture.elements)
    }

    pub fn load(path: &Path) -> Result<Self, OwnersError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.values()
    }

    /// Elements without an owner, in id order.
    pub fn roots(&self) -> Vec<ElementId> {
        self.elements
            .values()
            .filter(|el| el.owner_id.is_none())
            .map(|el| el.id)
            .collect()
    }

    /// Elements whose owner is `owner`, in id order.
    pub fn owned_by(&self, owner: ElementId) -> Vec<ElementId> {
        self.elements
            .values()
            .filter(|el| el.owner_id == Some(owner))
            .map(|el| el.id)
            .collect()
    }

    /// Every dangling owner reference and ownership cycle in the store.
    pub fn validate(&self) -> Vec<OwnersError> {
        let mut problems = Vec::new();
        for element in self.elements.values() {
            if let Some(owner) = element.owner_id {
                if !self.elements.contains_key(&owner) {
                    problems.push(OwnersError::UnknownElement(owner));
                    continue;
                }
            }
            if let Err(OwnersError::OwnerCycle(at)) = self.owner_chain(element.id) {
                // Report each cycle once, from its smallest member.
                if at == element.id && self.cycle_min(at) == at {
                    problems.push(OwnersError::OwnerCycle(at));
                }
            }
        }
        problems
    }

    /// Smallest id on the ownership cycle through `start`.
    fn cycle_min(&self, start: ElementId) -> ElementId {
        let mut min = start;
        let mut current = self.element_by_id(start).and_then(|el| el.owner_id);
        while let Some(cur) = current {
            if cur == start {
                break;
            }
            min = min.min(cur);
            current = self.element_by_id(cur).and_then(|el| el.owner_id);
        }
        min
    }
}

impl ElementStore for Store {
    fn element_by_id(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }
}
