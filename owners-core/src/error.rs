use thiserror::Error;

use crate::element::ElementId;

/// Errors from store and navigator operations.
#[derive(Debug, Error)]
pub enum OwnersError {
    #[error("element {0} not found")]
    UnknownElement(ElementId),

    #[error("element {0} is already in the store")]
    DuplicateElement(ElementId),

    #[error("ownership cycle through element {0}")]
    OwnerCycle(ElementId),

    #[error("invalid fixture: {0}")]
    Fixture(#[from] serde_json::Error),

    #[error("failed to read fixture: {0}")]
    Io(#[from] std::io::Error),
}
