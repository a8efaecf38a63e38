//! Lookup tables - positions, preferred feet and offer statuses

use crate::value_objects::{OfferStatusKind, Snowflake};

/// Playing position (Goalkeeper, Striker, ...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerPosition {
    pub id: Snowflake,
    pub position_name: String,
}

/// Preferred foot (Left, Right, Both)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerFoot {
    pub id: Snowflake,
    pub name: String,
}

/// Row of the read-only `offer_statuses` table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferStatus {
    pub id: Snowflake,
    pub status_name: String,
}

impl OfferStatus {
    pub fn kind(&self) -> Option<OfferStatusKind> {
        OfferStatusKind::from_id(self.id)
    }
}

impl From<OfferStatusKind> for OfferStatus {
    fn from(kind: OfferStatusKind) -> Self {
        Self {
            id: kind.id(),
            status_name: kind.as_str().to_string(),
        }
    }
}
