//! Configuration for the tiers module

use serde::{Deserialize, Serialize};

/// Tiers module configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Look up `number` before insert/update so duplicates are reported
    /// without relying on the constraint violation. The unique index
    /// still decides when two writers race.
    #[serde(default)]
    pub check_number_before_write: bool,
}
