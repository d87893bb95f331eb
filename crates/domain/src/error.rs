//! Unified error types for the domain layer
//!
//! Catalog definition problems and answer validation problems are kept as
//! separate enums: the former abort ruleset registration, the latter are
//! recoverable per-answer failures surfaced to the caller.

use thiserror::Error;

/// Error raised while constructing a question catalog.
///
/// A catalog is built once at ruleset-registration time; any of these means
/// the ruleset definition itself is malformed and registration must abort.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DefinitionError {
    /// Two sibling questions share the same order key
    #[error("Duplicate question order {order} under {scope}")]
    DuplicateOrder { scope: String, order: u32 },

    /// Two options of the same question share a label
    #[error("Duplicate option label '{label}' in question {order}")]
    DuplicateOptionLabel { order: u32, label: String },

    /// Not one of the valid die sizes (4, 6, 8, 10, 12)
    #[error("{0} is not a valid die size")]
    InvalidDieSize(u8),
}

/// Error raised while validating a submitted answer.
///
/// Scoped to the single answer: the session state is left untouched when an
/// answer is rejected, so earlier answers are never corrupted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnswerError {
    /// The answer value does not match the question's input shape
    #[error("Question {order} expects {expected}, got {actual}")]
    ShapeMismatch {
        order: u32,
        expected: &'static str,
        actual: &'static str,
    },

    /// A single-choice answer selected an option index that does not exist
    #[error("Option index {index} is out of range for question {order}")]
    ChoiceOutOfRange { order: u32, index: usize },

    /// A multi-choice answer referenced an option label that does not exist
    #[error("Unknown option '{label}' for question {order}")]
    UnknownOption { order: u32, label: String },
}
