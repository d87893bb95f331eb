//! Response DTOs returned to clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored monster, as returned after creation or lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonsterResponse {
    /// Identity assigned by storage
    pub id: Uuid,
    /// Timestamp assigned by storage
    pub created_at: DateTime<Utc>,
    pub name: String,
    pub hp: String,
    pub armor: String,
    pub damage: String,
    pub damage_tags: Vec<String>,
    pub tags: Vec<String>,
    pub special_qualities: Vec<String>,
    pub instinct: String,
    pub description: String,
    pub moves: Vec<String>,
    pub creation_rules: String,
}

/// A ruleset available for monster creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RulesetSummary {
    pub id: String,
    pub name: String,
}
