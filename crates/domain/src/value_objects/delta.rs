//! Monster deltas
//!
//! A delta is the packaged effect of choosing one questionnaire option: stat
//! bonuses, tags to append, and dice adjustments. Deltas are constructed as
//! plain struct literals at catalog-definition time and are never mutated
//! afterwards; build sessions read them, they never write back.

use serde::{Deserialize, Serialize};

use super::DieSize;

/// An additive change to a monster under construction.
///
/// Numeric fields add onto the session's accumulators, list fields append in
/// declaration order, and `damage_die` overwrites the session's die size.
/// The session applies the fields of one delta in a fixed order: die size,
/// hp, damage bonus, tags, damage tags, armor, piercing, best, worst, die
/// size increases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonsterDelta {
    /// Die size to switch the damage roll to, if any
    pub damage_die: Option<DieSize>,
    pub hp_bonus: i32,
    pub damage_bonus: i32,
    pub armor_bonus: i32,
    pub piercing_bonus: i32,
    /// Monster tags to append (e.g. "Horde", "Magical")
    pub tags: Vec<String>,
    /// Damage tags to append (e.g. "Close", "Ignores Armor")
    pub damage_tags: Vec<String>,
    /// Roll an extra damage die and keep the best
    pub best_damage: bool,
    /// Roll an extra damage die and keep the worst
    pub worst_damage: bool,
    /// How many times to step the damage die up the ladder
    pub die_size_increases: u32,
}

impl MonsterDelta {
    /// A delta that only appends one monster tag.
    pub fn tag(tag: impl Into<String>) -> Self {
        Self {
            tags: vec![tag.into()],
            ..Self::default()
        }
    }

    /// True when applying this delta would leave a session untouched.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
