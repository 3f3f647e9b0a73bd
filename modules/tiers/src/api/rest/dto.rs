//! REST DTOs with serde derives for HTTP API

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Tier response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TierDto {
    /// Tier identifier
    #[schema(example = 1)]
    pub id: i32,

    /// External cart reference
    #[schema(example = "CART-0042")]
    pub cart: Option<String>,

    /// Tier number, unique across all tiers
    #[schema(example = 3)]
    pub number: Option<i32>,

    /// Display label
    #[schema(example = "Top shelf")]
    pub name: Option<String>,

    /// Free-form notes
    pub notes: Option<String>,

    /// Creation timestamp
    pub created_at: chrono::DateTime<chrono::Utc>,

    /// Last update timestamp
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Permitted tier fields. Anything else in the payload is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TierParams {
    pub cart: Option<String>,
    pub number: Option<i32>,
    pub name: Option<String>,
    pub notes: Option<String>,
}

/// Create request body, `{"tier": {...}}`
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct TierRequest {
    pub tier: TierParams,
}

/// Fields of an update. A missing key keeps the stored value, an explicit
/// `null` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct TierChanges {
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub cart: Option<Option<String>>,

    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<i32>)]
    pub number: Option<Option<i32>>,

    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Option<String>>,

    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub notes: Option<Option<String>>,
}

/// Update request body, `{"tier": {...}}`
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateTierRequest {
    pub tier: TierChanges,
}

/// Only called for keys present in the payload, so `null` becomes `Some(None)`
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Input form for a tier, rendered by new/edit and re-rendered when a
/// create or update is rejected
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TierForm {
    /// Current field values
    pub tier: TierParams,

    /// Messages explaining why the last submission was rejected
    pub errors: Vec<String>,

    /// Where the form submits to
    #[schema(example = "/tiers")]
    pub action: String,

    /// HTTP method the form submits with
    #[schema(example = "post")]
    pub method: String,
}

impl TierForm {
    /// Empty form for a new tier
    pub fn for_new() -> Self {
        Self {
            tier: TierParams::default(),
            errors: Vec::new(),
            action: super::routes::TIERS_PATH.to_string(),
            method: "post".to_string(),
        }
    }

    /// Form for editing the tier with `id`
    pub fn for_edit(id: i32, tier: TierParams) -> Self {
        Self {
            tier,
            errors: Vec::new(),
            action: super::routes::tier_path(id),
            method: "patch".to_string(),
        }
    }

    pub fn with_tier(mut self, tier: TierParams) -> Self {
        self.tier = tier;
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.errors.push(error.into());
        self
    }
}

/// List of tiers
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TiersListResponse {
    /// List of tiers
    pub items: Vec<TierDto>,

    /// Total count
    pub total: usize,
}
