//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use super::entity;
use crate::contract::{NewTier, Tier};
use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};

impl From<entity::Model> for Tier {
    fn from(entity: entity::Model) -> Self {
        Self {
            id: entity.id,
            cart: entity.cart,
            number: entity.number,
            name: entity.name,
            notes: entity.notes,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Active model for inserting `new`; the id is left to the database
pub fn insert_model(new: &NewTier, now: DateTime<Utc>) -> entity::ActiveModel {
    entity::ActiveModel {
        id: NotSet,
        cart: Set(new.cart.clone()),
        number: Set(new.number),
        name: Set(new.name.clone()),
        notes: Set(new.notes.clone()),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

impl From<&Tier> for entity::ActiveModel {
    fn from(tier: &Tier) -> Self {
        Self {
            id: Unchanged(tier.id),
            cart: Set(tier.cart.clone()),
            number: Set(tier.number),
            name: Set(tier.name.clone()),
            notes: Set(tier.notes.clone()),
            created_at: Unchanged(tier.created_at),
            updated_at: Set(tier.updated_at),
        }
    }
}
