//! Offer status values

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Snowflake;

/// Lifecycle state of an offer
///
/// Rows of the `offer_statuses` table are seeded with these ids and never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OfferStatusKind {
    Offered = 1,
    Accepted = 2,
    Rejected = 3,
}

impl OfferStatusKind {
    pub const ALL: [OfferStatusKind; 3] = [Self::Offered, Self::Accepted, Self::Rejected];

    /// Id of the seeded `offer_statuses` row
    #[inline]
    pub fn id(self) -> Snowflake {
        Snowflake::new(self as i64)
    }

    pub fn from_id(id: Snowflake) -> Option<Self> {
        match id.into_inner() {
            1 => Some(Self::Offered),
            2 => Some(Self::Accepted),
            3 => Some(Self::Rejected),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Offered => "Offered",
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
        }
    }

    /// Only pending offers can be answered
    #[inline]
    pub fn is_pending(self) -> bool {
        self == Self::Offered
    }
}

impl fmt::Display for OfferStatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_match_seed() {
        assert_eq!(OfferStatusKind::Offered.id(), Snowflake::new(1));
        assert_eq!(OfferStatusKind::Accepted.id(), Snowflake::new(2));
        assert_eq!(OfferStatusKind::Rejected.id(), Snowflake::new(3));
    }

    #[test]
    fn test_from_id() {
        for kind in OfferStatusKind::ALL {
            assert_eq!(OfferStatusKind::from_id(kind.id()), Some(kind));
        }
        assert_eq!(OfferStatusKind::from_id(Snowflake::new(4)), None);
    }

    #[test]
    fn test_only_offered_is_pending() {
        assert!(OfferStatusKind::Offered.is_pending());
        assert!(!OfferStatusKind::Accepted.is_pending());
        assert!(!OfferStatusKind::Rejected.is_pending());
    }
}
