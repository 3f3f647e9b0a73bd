//! Contract models for the tiers module
//!
//! These models are transport-agnostic and used for inter-module communication.
//! NO serde derives - these are pure domain models.

use chrono::{DateTime, Utc};

/// A persisted tier record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tier {
    /// System-assigned identifier
    pub id: i32,
    /// External cart reference
    pub cart: Option<String>,
    /// Tier number, unique across all tiers
    pub number: Option<i32>,
    /// Display label
    pub name: Option<String>,
    /// Free-form notes
    pub notes: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Field set accepted when creating a tier
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTier {
    pub cart: Option<String>,
    pub number: Option<i32>,
    pub name: Option<String>,
    pub notes: Option<String>,
}

/// Field set accepted when updating a tier.
///
/// `None` leaves the stored value as it is, `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TierPatch {
    pub cart: Option<Option<String>>,
    pub number: Option<Option<i32>>,
    pub name: Option<Option<String>>,
    pub notes: Option<Option<String>>,
}

impl TierPatch {
    /// Apply the patch onto `tier`, returning whether any field changed.
    pub fn apply_to(&self, tier: &mut Tier) -> bool {
        let mut changed = false;
        changed |= assign(&mut tier.cart, &self.cart);
        changed |= assign(&mut tier.number, &self.number);
        changed |= assign(&mut tier.name, &self.name);
        changed |= assign(&mut tier.notes, &self.notes);
        changed
    }
}

fn assign<T: Clone + PartialEq>(slot: &mut Option<T>, value: &Option<Option<T>>) -> bool {
    match value {
        Some(v) if *slot != *v => {
            *slot = v.clone();
            true
        }
        _ => false,
    }
}
