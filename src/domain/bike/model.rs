//! Bike domain entity
//!
//! The catalog itself (stations, availability listings, fleet management) is
//! an external collaborator; the engine only needs enough of a bike record to
//! check existence and label slots.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bike {
    pub id: Uuid,
    /// Stable human-facing tag painted on the frame, e.g. "B-017"
    pub label: String,
    pub display_name: Option<String>,
}

impl Bike {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.into(),
            display_name: None,
        }
    }
}
