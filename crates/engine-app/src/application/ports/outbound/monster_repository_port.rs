//! Monster persistence port.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use monstercodex_domain::{Monster, MonsterId};

/// What storage reports back after persisting a monster.
///
/// Identity and timestamps belong to the storage layer; build sessions never
/// see them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonsterRecord {
    pub id: MonsterId,
    pub created_at: DateTime<Utc>,
}

/// Outbound port for monster persistence and indexing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MonsterRepositoryPort: Send + Sync {
    /// Persist a finished monster and make it searchable.
    async fn save(&self, monster: &Monster) -> Result<MonsterRecord>;
}
