//! Damage dice value objects
//!
//! A monster's damage is a single die expression like "d8+2" or, with an
//! advantage/disadvantage modifier, "b[2d8+2]" (roll two, keep best) and
//! "w[2d10]" (roll two, keep worst).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DefinitionError;

/// The die sizes monsters use, smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DieSize {
    D4,
    D6,
    D8,
    D10,
    D12,
}

impl DieSize {
    /// Number of faces on this die.
    pub fn sides(self) -> u8 {
        match self {
            DieSize::D4 => 4,
            DieSize::D6 => 6,
            DieSize::D8 => 8,
            DieSize::D10 => 10,
            DieSize::D12 => 12,
        }
    }

    /// The next size up the ladder. Saturates at d12.
    pub fn stepped_up(self) -> Self {
        match self {
            DieSize::D4 => DieSize::D6,
            DieSize::D6 => DieSize::D8,
            DieSize::D8 => DieSize::D10,
            DieSize::D10 => DieSize::D12,
            DieSize::D12 => DieSize::D12,
        }
    }

    /// The next size down the ladder. Saturates at d4.
    pub fn stepped_down(self) -> Self {
        match self {
            DieSize::D4 => DieSize::D4,
            DieSize::D6 => DieSize::D4,
            DieSize::D8 => DieSize::D6,
            DieSize::D10 => DieSize::D8,
            DieSize::D12 => DieSize::D10,
        }
    }
}

impl TryFrom<u8> for DieSize {
    type Error = DefinitionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            4 => Ok(DieSize::D4),
            6 => Ok(DieSize::D6),
            8 => Ok(DieSize::D8),
            10 => Ok(DieSize::D10),
            12 => Ok(DieSize::D12),
            other => Err(DefinitionError::InvalidDieSize(other)),
        }
    }
}

impl fmt::Display for DieSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

/// Accumulator for one damage roll specification.
///
/// Owned exclusively by a single build session and mutated by the deltas
/// applied to it. Starts at one d6 with no bonus; a delta that carries a die
/// size overwrites the size, so the last-applied die size wins.
///
/// The best and worst flags can both end up set when unrelated answers
/// request them; `render` gives best precedence in that case. Requesting
/// either flag bumps the dice count from 1 to 2 exactly once, no matter how
/// many flag requests follow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageDice {
    die_size: DieSize,
    dice_count: u8,
    best: bool,
    worst: bool,
    bonus: i32,
}

impl Default for DamageDice {
    fn default() -> Self {
        Self::new()
    }
}

impl DamageDice {
    pub fn new() -> Self {
        Self {
            die_size: DieSize::D6,
            dice_count: 1,
            best: false,
            worst: false,
            bonus: 0,
        }
    }

    pub fn die_size(&self) -> DieSize {
        self.die_size
    }

    pub fn dice_count(&self) -> u8 {
        self.dice_count
    }

    pub fn bonus(&self) -> i32 {
        self.bonus
    }

    /// Overwrite the die size.
    pub fn set_die_size(&mut self, size: DieSize) {
        self.die_size = size;
    }

    /// Step the die one size up. No-op at d12.
    pub fn increase_die_size(&mut self) {
        self.die_size = self.die_size.stepped_up();
    }

    /// Step the die one size down. No-op at d4.
    pub fn decrease_die_size(&mut self) {
        self.die_size = self.die_size.stepped_down();
    }

    /// Add a flat bonus. May be negative; never clamped.
    pub fn add_bonus(&mut self, value: i32) {
        self.bonus += value;
    }

    /// Roll an extra die and keep the best result.
    pub fn set_best(&mut self) {
        self.bump_dice_count_once();
        self.best = true;
    }

    /// Roll an extra die and keep the worst result.
    pub fn set_worst(&mut self) {
        self.bump_dice_count_once();
        self.worst = true;
    }

    // The extra die is shared between both flags: the count goes 1 -> 2 on
    // the first flag request and stays there.
    fn bump_dice_count_once(&mut self) {
        if !self.best && !self.worst {
            self.dice_count += 1;
        }
    }

    /// Lowest possible result of this expression.
    pub fn min_roll(&self) -> i32 {
        // Exactly one die is kept, flags or not
        1 + self.bonus
    }

    /// Highest possible result of this expression.
    pub fn max_roll(&self) -> i32 {
        i32::from(self.die_size.sides()) + self.bonus
    }

    /// Canonical string form: `d8`, `d4-3`, `b[2d8+3]`, `w[2d10]`.
    pub fn render(&self) -> String {
        let mut result = String::new();

        if self.best {
            result.push_str("b[");
            result.push_str(&self.dice_count.to_string());
        } else if self.worst {
            result.push_str("w[");
            result.push_str(&self.dice_count.to_string());
        }

        result.push_str(&self.die_size.to_string());

        if self.bonus > 0 {
            result.push('+');
            result.push_str(&self.bonus.to_string());
        } else if self.bonus < 0 {
            result.push_str(&self.bonus.to_string());
        }

        if self.best || self.worst {
            result.push(']');
        }

        result
    }
}

impl fmt::Display for DamageDice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn die_size_from_valid_values() {
        assert_eq!(DieSize::try_from(4), Ok(DieSize::D4));
        assert_eq!(DieSize::try_from(8), Ok(DieSize::D8));
        assert_eq!(DieSize::try_from(12), Ok(DieSize::D12));
    }

    #[test]
    fn die_size_from_invalid_value() {
        assert_eq!(
            DieSize::try_from(7),
            Err(DefinitionError::InvalidDieSize(7))
        );
        assert_eq!(
            DieSize::try_from(20),
            Err(DefinitionError::InvalidDieSize(20))
        );
    }

    #[test]
    fn increase_saturates_at_d12() {
        let mut dice = DamageDice::new();
        dice.set_die_size(DieSize::D4);
        for _ in 0..10 {
            dice.increase_die_size();
        }
        assert_eq!(dice.die_size(), DieSize::D12);
    }

    #[test]
    fn decrease_saturates_at_d4() {
        let mut dice = DamageDice::new();
        dice.set_die_size(DieSize::D12);
        for _ in 0..10 {
            dice.decrease_die_size();
        }
        assert_eq!(dice.die_size(), DieSize::D4);
    }

    #[test]
    fn set_best_twice_keeps_two_dice() {
        let mut dice = DamageDice::new();
        dice.set_best();
        dice.set_best();
        assert_eq!(dice.dice_count(), 2);
    }

    #[test]
    fn best_then_worst_keeps_two_dice() {
        let mut dice = DamageDice::new();
        dice.set_best();
        dice.set_worst();
        assert_eq!(dice.dice_count(), 2);
    }

    #[test]
    fn renders_plain_die() {
        let mut dice = DamageDice::new();
        dice.set_die_size(DieSize::D6);
        assert_eq!(dice.render(), "d6");
    }

    #[test]
    fn renders_negative_bonus() {
        let mut dice = DamageDice::new();
        dice.set_die_size(DieSize::D4);
        dice.add_bonus(-3);
        assert_eq!(dice.render(), "d4-3");
    }

    #[test]
    fn renders_positive_bonus() {
        let mut dice = DamageDice::new();
        dice.set_die_size(DieSize::D10);
        dice.add_bonus(5);
        assert_eq!(dice.render(), "d10+5");
    }

    #[test]
    fn renders_best_with_bonus() {
        let mut dice = DamageDice::new();
        dice.set_die_size(DieSize::D8);
        dice.set_best();
        dice.add_bonus(3);
        assert_eq!(dice.render(), "b[2d8+3]");
    }

    #[test]
    fn renders_worst_without_bonus() {
        let mut dice = DamageDice::new();
        dice.set_die_size(DieSize::D10);
        dice.set_worst();
        assert_eq!(dice.render(), "w[2d10]");
    }

    #[test]
    fn best_wins_when_both_flags_set() {
        let mut dice = DamageDice::new();
        dice.set_die_size(DieSize::D8);
        dice.set_worst();
        dice.set_best();
        assert_eq!(dice.render(), "b[2d8]");
    }

    #[test]
    fn bonus_accumulates_and_may_go_negative() {
        let mut dice = DamageDice::new();
        dice.add_bonus(2);
        dice.add_bonus(-5);
        assert_eq!(dice.bonus(), -3);
    }

    #[test]
    fn roll_bounds_follow_die_and_bonus() {
        let mut dice = DamageDice::new();
        dice.set_die_size(DieSize::D8);
        dice.add_bonus(3);
        assert_eq!(dice.min_roll(), 4);
        assert_eq!(dice.max_roll(), 11);

        dice.set_best();
        // One die is kept, so the bounds do not change
        assert_eq!(dice.min_roll(), 4);
        assert_eq!(dice.max_roll(), 11);
    }

    #[test]
    fn display_matches_render() {
        let mut dice = DamageDice::new();
        dice.set_die_size(DieSize::D12);
        dice.add_bonus(1);
        assert_eq!(dice.to_string(), dice.render());
    }
}
