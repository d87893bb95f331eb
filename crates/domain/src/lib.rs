//! MonsterCodex domain core.
//!
//! A monster is authored by answering an ordered questionnaire; every answer
//! contributes either a direct field write or a [`MonsterDelta`] to the stats
//! under construction. Catalogs are built once per ruleset and shared
//! read-only across build sessions; sessions are single-use accumulators
//! consumed by `build()`.

pub mod builder;
pub mod entities;
pub mod error;
pub mod ids;
pub mod questionnaire;
pub mod rulesets;
pub mod value_objects;

pub use builder::{build_monster, BuildSession, DraftMonster};
pub use entities::Monster;
pub use error::{AnswerError, DefinitionError};
pub use ids::MonsterId;
pub use questionnaire::{
    Answer, AnswerSheet, Catalog, ChoiceOption, Question, QuestionKind, Selection, TextApply,
};
pub use rulesets::{CoreRuleset, Ruleset, RulesetRegistry, CORE_RULESET_ID};
pub use value_objects::{DamageDice, DieSize, MonsterDelta};
