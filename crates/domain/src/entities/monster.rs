//! Monster entity - the finished output of a build session
//!
//! Stats are kept in their presentation form (hp and armor as strings, damage
//! as "<weapon> <dice>") because that is what view layers and the search
//! index consume. Identity, timestamps, and ownership are assigned by the
//! persistence collaborator, not here.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A completed monster stat block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Monster {
    pub name: String,
    pub hp: String,
    pub armor: String,
    /// Weapon label plus rendered dice expression, e.g. "claws b[2d8]"
    pub damage: String,
    pub damage_tags: Vec<String>,
    pub tags: Vec<String>,
    pub special_qualities: Vec<String>,
    pub instinct: String,
    pub description: String,
    pub moves: Vec<String>,
    /// Identifier of the ruleset the monster was built under
    pub creation_rules: String,
}

// The flat text form is what gets handed to the search indexer.
impl fmt::Display for Monster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {} {} {} {}",
            self.name,
            self.tags.join(" "),
            self.damage,
            self.hp,
            self.armor,
            self.damage_tags.join(" "),
            self.instinct,
            self.description,
            self.special_qualities.join(" "),
            self.moves.join(" ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Monster {
        Monster {
            name: "Cave Rat".to_string(),
            hp: "3".to_string(),
            armor: "0".to_string(),
            damage: "bite d6".to_string(),
            damage_tags: vec!["Close".to_string()],
            tags: vec!["Horde".to_string(), "Small".to_string()],
            special_qualities: vec!["Keen nose".to_string()],
            instinct: "To swarm".to_string(),
            description: "A rat the size of a dog.".to_string(),
            moves: vec!["Bite and scurry away".to_string()],
            creation_rules: "core".to_string(),
        }
    }

    #[test]
    fn search_text_contains_every_field() {
        let text = sample().to_string();
        assert!(text.contains("Cave Rat"));
        assert!(text.contains("Horde Small"));
        assert!(text.contains("bite d6"));
        assert!(text.contains("To swarm"));
        assert!(text.contains("Keen nose"));
        assert!(text.contains("Bite and scurry away"));
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(sample()).expect("serializes");
        assert_eq!(json["creationRules"], "core");
        assert_eq!(json["damageTags"][0], "Close");
        assert_eq!(json["specialQualities"][0], "Keen nose");
    }
}
