//! Monster creation request DTOs.
//!
//! Answers are keyed by question order. A multi-choice selection carries its
//! own nested answer list for the sub-questions that option gates.

use serde::{Deserialize, Serialize};

/// Request to create a monster from questionnaire answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMonsterRequest {
    /// Which ruleset's questionnaire the answers belong to
    pub ruleset_id: String,
    /// Answers to any subset of the questionnaire
    pub answers: Vec<AnswerEntry>,
}

/// The answer to one question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerEntry {
    /// Order key of the question being answered
    pub order: u32,
    pub value: AnswerValue,
}

/// The submitted value, shaped to the question's input kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum AnswerValue {
    /// For short_text / long_text inputs
    Text(String),
    /// For select_one inputs: the chosen option index
    Choice(usize),
    /// For select_many inputs: the chosen options by label
    Selections(Vec<SelectionEntry>),
}

/// One chosen option of a select_many answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionEntry {
    /// Label of the chosen option
    pub option: String,
    /// Answers to the sub-questions gated by this option
    #[serde(default)]
    pub answers: Vec<AnswerEntry>,
}
