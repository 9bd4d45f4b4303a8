use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The authenticated identity making a request.
///
/// Produced by the API layer from a verified bearer token before any
/// service call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Principal {
    pub id: Uuid,
}

impl Principal {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

impl From<Uuid> for Principal {
    fn from(id: Uuid) -> Self {
        Self::new(id)
    }
}
