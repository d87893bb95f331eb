//! Questionnaire schema DTOs for client-driven form rendering.
//!
//! The engine knows the rulesets; the client just renders what the schema
//! describes. Sub-questions stay nested under the option that gates them so
//! the client can show or hide them as selections change.

use serde::{Deserialize, Serialize};

/// Complete schema for rendering one ruleset's questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireSchema {
    /// Ruleset ID (e.g. "core")
    pub ruleset_id: String,
    /// Human-readable ruleset name
    pub ruleset_name: String,
    /// Ordered list of questions to display
    pub questions: Vec<QuestionSchema>,
}

/// One question of the questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSchema {
    /// Presentation and submission key
    pub order: u32,
    /// User-facing prompt
    pub prompt: String,
    /// What kind of form control to render
    pub input: InputKind,
    /// Options for choice inputs; empty for text inputs
    #[serde(default)]
    pub options: Vec<SelectOptionSchema>,
}

/// Form control kind for a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    /// Single-line text input
    ShortText,
    /// Multi-line text area
    LongText,
    /// Radio buttons
    SelectOne,
    /// Check boxes
    SelectMany,
}

/// One selectable option of a choice question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectOptionSchema {
    /// Display text; also the key used when submitting selections
    pub label: String,
    /// Questions that only apply while this option is selected
    #[serde(default)]
    pub subquestions: Vec<QuestionSchema>,
}
