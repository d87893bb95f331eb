//! The core ruleset: monster construction per the published core rules.
//!
//! The whole flow is one statically built catalog. Answers about the
//! monster's fiction (how it hunts, how big it is, what it's known for)
//! translate into deltas on hit points, armor, tags, and the damage die;
//! several options unlock follow-up questions asking the author to write
//! the move or special quality that backs the choice up.

use crate::builder::DraftMonster;
use crate::error::DefinitionError;
use crate::questionnaire::{Catalog, ChoiceOption, Question};
use crate::rulesets::Ruleset;
use crate::value_objects::{DieSize, MonsterDelta};

/// Identifier stamped onto monsters built with these rules.
pub const CORE_RULESET_ID: &str = "core";

/// The built-in core rules.
pub struct CoreRuleset {
    catalog: Catalog,
}

impl CoreRuleset {
    pub fn new() -> Self {
        Self {
            catalog: build_catalog().expect("core ruleset definition is valid"),
        }
    }
}

impl Default for CoreRuleset {
    fn default() -> Self {
        Self::new()
    }
}

impl Ruleset for CoreRuleset {
    fn ruleset_id(&self) -> &str {
        CORE_RULESET_ID
    }

    fn display_name(&self) -> &str {
        "Core"
    }

    fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

// Text question handlers

fn set_name(draft: &mut DraftMonster, value: &str) {
    draft.name = value.to_string();
}

fn add_move(draft: &mut DraftMonster, value: &str) {
    draft.moves.push(value.to_string());
}

fn set_instinct(draft: &mut DraftMonster, value: &str) {
    draft.instinct = value.to_string();
}

fn set_weapon(draft: &mut DraftMonster, value: &str) {
    draft.weapon = value.to_string();
}

fn add_special_qualities(draft: &mut DraftMonster, value: &str) {
    for part in value.split(", ") {
        draft.special_qualities.push(part.to_string());
    }
}

fn set_description(draft: &mut DraftMonster, value: &str) {
    draft.description = value.to_string();
}

fn build_catalog() -> Result<Catalog, DefinitionError> {
    Catalog::new(
        CORE_RULESET_ID,
        "Core",
        vec![
            Question::short_text(0, "What is it called?", set_name),
            Question::short_text(1, "What is it known to do?", add_move),
            Question::short_text(
                2,
                "What does it want that causes problems for others?",
                set_instinct,
            ),
            Question::single_choice(3, "How does it usually hunt or fight?", organization_options()),
            Question::single_choice(4, "How big is it?", size_options()),
            Question::single_choice(5, "What is its most important defense?", defense_options()),
            Question::multiple_choice(6, "What is it known for?", reputation_options()),
            Question::short_text(7, "What is its most common form of attack?", set_weapon),
            Question::multiple_choice(
                8,
                "Which of these apply to its form of attack?",
                weapon_modifier_options(),
            ),
            Question::multiple_choice(9, "Which of these describe it?", general_options()),
            Question::long_text(11, "Describe the monster:", set_description),
        ],
    )
}

fn organization_options() -> Vec<ChoiceOption> {
    vec![
        ChoiceOption::new(
            "In large groups",
            MonsterDelta {
                damage_die: Some(DieSize::D6),
                hp_bonus: 3,
                tags: vec!["Horde".to_string()],
                ..MonsterDelta::default()
            },
        ),
        ChoiceOption::new(
            "In small groups",
            MonsterDelta {
                damage_die: Some(DieSize::D8),
                hp_bonus: 6,
                tags: vec!["Group".to_string()],
                ..MonsterDelta::default()
            },
        ),
        ChoiceOption::new(
            "All by its lonesome",
            MonsterDelta {
                damage_die: Some(DieSize::D10),
                hp_bonus: 12,
                tags: vec!["Solitary".to_string()],
                ..MonsterDelta::default()
            },
        ),
    ]
}

fn size_options() -> Vec<ChoiceOption> {
    vec![
        ChoiceOption::new(
            "Smaller than a house cat",
            MonsterDelta {
                damage_bonus: -2,
                tags: vec!["Tiny".to_string()],
                damage_tags: vec!["Hand".to_string()],
                ..MonsterDelta::default()
            },
        ),
        ChoiceOption::new(
            "Halfling-esque",
            MonsterDelta {
                tags: vec!["Small".to_string()],
                damage_tags: vec!["Close".to_string()],
                ..MonsterDelta::default()
            },
        ),
        ChoiceOption::new(
            "About human size",
            MonsterDelta {
                damage_tags: vec!["Close".to_string()],
                ..MonsterDelta::default()
            },
        ),
        ChoiceOption::new(
            "As big as a cart",
            MonsterDelta {
                hp_bonus: 4,
                tags: vec!["Large".to_string()],
                damage_tags: vec!["Close".to_string(), "Reach".to_string()],
                ..MonsterDelta::default()
            },
        ),
        ChoiceOption::new(
            "Much larger than a cart",
            MonsterDelta {
                hp_bonus: 8,
                damage_bonus: 3,
                tags: vec!["Huge".to_string()],
                damage_tags: vec!["Reach".to_string()],
                ..MonsterDelta::default()
            },
        ),
    ]
}

fn defense_options() -> Vec<ChoiceOption> {
    vec![
        ChoiceOption::new("Cloth or flesh", MonsterDelta::default()),
        ChoiceOption::new(
            "Leathers or thick hide",
            MonsterDelta {
                armor_bonus: 1,
                ..MonsterDelta::default()
            },
        ),
        ChoiceOption::new(
            "Mail or scales",
            MonsterDelta {
                armor_bonus: 2,
                ..MonsterDelta::default()
            },
        ),
        ChoiceOption::new(
            "Plate or bone",
            MonsterDelta {
                armor_bonus: 3,
                ..MonsterDelta::default()
            },
        ),
        ChoiceOption::new(
            "Permanent magical protection",
            MonsterDelta {
                armor_bonus: 4,
                tags: vec!["Magical".to_string()],
                ..MonsterDelta::default()
            },
        ),
    ]
}

fn reputation_options() -> Vec<ChoiceOption> {
    vec![
        ChoiceOption::new(
            "Unrelenting strength",
            MonsterDelta {
                damage_bonus: 2,
                damage_tags: vec!["Forceful".to_string()],
                ..MonsterDelta::default()
            },
        ),
        ChoiceOption::new(
            "Skill in offense",
            MonsterDelta {
                best_damage: true,
                ..MonsterDelta::default()
            },
        ),
        ChoiceOption::new(
            "Skill in defense",
            MonsterDelta {
                armor_bonus: 2,
                ..MonsterDelta::default()
            },
        ),
        ChoiceOption::new(
            "Deft Strikes",
            MonsterDelta {
                piercing_bonus: 1,
                ..MonsterDelta::default()
            },
        ),
        ChoiceOption::new(
            "Uncanny endurance",
            MonsterDelta {
                hp_bonus: 4,
                ..MonsterDelta::default()
            },
        ),
        ChoiceOption::new("Deceit and trickery", MonsterDelta::tag("Stealthy")).with_subquestion(
            Question::short_text(1, "Write a move about dirty tricks", add_move),
        ),
        ChoiceOption::new("A useful adaptation", MonsterDelta::default()).with_subquestion(
            Question::short_text(1, "List the adaptations", add_special_qualities),
        ),
        ChoiceOption::new(
            "Divine power",
            MonsterDelta {
                damage_bonus: 2,
                tags: vec!["Divine".to_string()],
                ..MonsterDelta::default()
            },
        ),
        ChoiceOption::new(
            "Divine health",
            MonsterDelta {
                hp_bonus: 2,
                tags: vec!["Divine".to_string()],
                ..MonsterDelta::default()
            },
        ),
        ChoiceOption::new("Spells and magic", MonsterDelta::tag("Magical")).with_subquestion(
            Question::short_text(1, "Write a move about its spells", add_move),
        ),
    ]
}

fn weapon_modifier_options() -> Vec<ChoiceOption> {
    vec![
        ChoiceOption::new(
            "Its armaments are vicious and obvious",
            MonsterDelta {
                damage_bonus: 2,
                ..MonsterDelta::default()
            },
        ),
        ChoiceOption::new(
            "It lets the monster keep others at bay",
            MonsterDelta {
                damage_tags: vec!["Reach".to_string()],
                ..MonsterDelta::default()
            },
        ),
        ChoiceOption::new(
            "Its armaments are small and weak",
            MonsterDelta {
                die_size_increases: 1,
                ..MonsterDelta::default()
            },
        ),
        ChoiceOption::new(
            "Its armaments can slice or pierce metal",
            MonsterDelta {
                piercing_bonus: 1,
                ..MonsterDelta::default()
            },
        ),
        ChoiceOption::new(
            "It can just tear metal apart",
            MonsterDelta {
                piercing_bonus: 2,
                ..MonsterDelta::default()
            },
        ),
        ChoiceOption::new(
            "Armor doesn't help with the damage it deals (due to magic, size, etc.)",
            MonsterDelta {
                damage_tags: vec!["Ignores Armor".to_string()],
                ..MonsterDelta::default()
            },
        ),
        ChoiceOption::new(
            "It can attack from a few paces",
            MonsterDelta {
                damage_tags: vec!["Near".to_string()],
                ..MonsterDelta::default()
            },
        ),
        ChoiceOption::new(
            "It can attack from anywhere it can see you",
            MonsterDelta {
                damage_tags: vec!["Far".to_string()],
                ..MonsterDelta::default()
            },
        ),
    ]
}

fn general_options() -> Vec<ChoiceOption> {
    vec![
        ChoiceOption::new(
            "It isn't dangerous because of the wounds it inflicts, but for other reasons",
            MonsterDelta::tag("Devious"),
        )
        .with_subquestion(Question::short_text(
            1,
            "Write a move about why it's dangerous",
            add_move,
        )),
        ChoiceOption::new(
            "It organizes into larger groups that it can call on for support",
            MonsterDelta::tag("Organized"),
        )
        .with_subquestion(Question::short_text(
            1,
            "Write a move about calling on others for help",
            add_move,
        )),
        ChoiceOption::new(
            "It's as smart as a human or thereabouts",
            MonsterDelta::tag("Intelligent"),
        ),
        ChoiceOption::new(
            "It actively defends itself with a shield or similar",
            MonsterDelta {
                armor_bonus: 1,
                tags: vec!["Cautious".to_string()],
                ..MonsterDelta::default()
            },
        ),
        ChoiceOption::new(
            "It collects trinkets that humans would consider valuable (gold, gems, secrets)",
            MonsterDelta::tag("Hoarder"),
        ),
        ChoiceOption::new("It's from beyond this world", MonsterDelta::tag("Planar"))
            .with_subquestion(Question::short_text(
                1,
                "Write a move about using its otherworldly knowledge and power",
                add_move,
            )),
        ChoiceOption::new(
            "It's kept alive by something beyond simple biology",
            MonsterDelta {
                hp_bonus: 4,
                ..MonsterDelta::default()
            },
        ),
        ChoiceOption::new("It was made by someone", MonsterDelta::tag("Construct"))
            .with_subquestion(Question::short_text(
                1,
                "Give it a special quality or two about its construction or purpose",
                add_special_qualities,
            )),
        ChoiceOption::new(
            "Its appearance is disturbing, terrible, or horrible",
            MonsterDelta::tag("Terrifying"),
        )
        .with_subquestion(Question::short_text(
            1,
            "Write a special quality about why it's so horrendous",
            add_special_qualities,
        )),
        ChoiceOption::new(
            "It doesn't have organs or discernible anatomy",
            MonsterDelta {
                hp_bonus: 3,
                armor_bonus: 1,
                tags: vec!["Amorphous".to_string()],
                ..MonsterDelta::default()
            },
        ),
        ChoiceOption::new(
            "It (or its species) is ancient, older than man, elves, and dwarves",
            MonsterDelta {
                die_size_increases: 1,
                ..MonsterDelta::default()
            },
        ),
        ChoiceOption::new(
            "It abhors violence",
            MonsterDelta {
                worst_damage: true,
                ..MonsterDelta::default()
            },
        ),
    ]
}
