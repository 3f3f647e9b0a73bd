//! Mapper implementations for converting between DTOs and contract models

use super::dto::*;
use crate::contract;

impl From<contract::Tier> for TierDto {
    fn from(tier: contract::Tier) -> Self {
        Self {
            id: tier.id,
            cart: tier.cart,
            number: tier.number,
            name: tier.name,
            notes: tier.notes,
            created_at: tier.created_at,
            updated_at: tier.updated_at,
        }
    }
}

impl From<&contract::Tier> for TierParams {
    fn from(tier: &contract::Tier) -> Self {
        Self {
            cart: tier.cart.clone(),
            number: tier.number,
            name: tier.name.clone(),
            notes: tier.notes.clone(),
        }
    }
}

impl From<TierParams> for contract::NewTier {
    fn from(params: TierParams) -> Self {
        Self {
            cart: params.cart,
            number: params.number,
            name: params.name,
            notes: params.notes,
        }
    }
}

impl From<TierChanges> for contract::TierPatch {
    fn from(changes: TierChanges) -> Self {
        Self {
            cart: changes.cart,
            number: changes.number,
            name: changes.name,
            notes: changes.notes,
        }
    }
}
