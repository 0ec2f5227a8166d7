use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single user-recorded contraction.
///
/// Immutable once created; the id is generated at creation and never reused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractionEvent {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
}

impl ContractionEvent {
    pub fn at(timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp,
        }
    }
}
