//! Test helpers: a fixed navigator and a small store for the bar scenarios.

use ratatui::buffer::Buffer;

use owners_core::{Element, ElementId, OwnerNavigator, OwnersError, Store};

/// `10 App -> 20 Form -> 30 Input`
pub fn scenario_store() -> Store {
    Store::from_elements([
        Element::new(10, "App"),
        Element::new(20, "Form").owned_by(10),
        Element::new(30, "Input").owned_by(20),
    ])
    .unwrap()
}

/// Navigator whose stack never changes identity; selection moves freely.
pub struct FixedNavigator {
    pub stack: Vec<ElementId>,
    pub index: Option<usize>,
    pub generation: u64,
}

impl FixedNavigator {
    pub fn new(ids: &[u32], index: Option<usize>) -> Self {
        Self {
            stack: ids.iter().copied().map(ElementId).collect(),
            index,
            generation: 1,
        }
    }
}

impl OwnerNavigator for FixedNavigator {
    fn owner_stack(&self) -> &[ElementId] {
        &self.stack
    }

    fn owner_stack_index(&self) -> Option<usize> {
        self.index
    }

    fn stack_generation(&self) -> u64 {
        self.generation
    }

    fn select_owner(&mut self, id: ElementId) -> Result<(), OwnersError> {
        let index = self
            .stack
            .iter()
            .position(|&o| o == id)
            .ok_or(OwnersError::UnknownElement(id))?;
        self.index = Some(index);
        Ok(())
    }

    fn reset_owner_stack(&mut self) {
        self.stack.clear();
        self.index = None;
        self.generation += 1;
    }
}

/// One buffer row as a string.
pub fn buffer_row(buf: &Buffer, y: u16) -> String {
    let area = buf.area;
    (area.x..area.right())
        .map(|x| buf.cell((x, y)).map(|c| c.symbol()).unwrap_or(""))
        .collect()
}
