//! Element handle

use serde::{Deserialize, Serialize};

/// Opaque handle to an element of the host document.
///
/// Handles stay valid after the element is detached; every operation on a
/// detached handle is a no-op on the document side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(pub usize);

impl ElementId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}
