//! Declarative questionnaire catalogs
//!
//! A ruleset declares its authoring flow as an explicit table of [`Question`]s
//! keyed by an `order` value. Choice questions carry [`ChoiceOption`]s, each
//! bundling the [`MonsterDelta`] applied when it is selected and any
//! sub-questions that only activate for that selection. Catalogs are
//! validated and sorted once at construction and shared read-only across
//! build sessions.

use std::collections::BTreeMap;

use crate::builder::DraftMonster;
use crate::error::DefinitionError;
use crate::value_objects::MonsterDelta;

/// Handler for a text question: writes the raw answer into the draft.
pub type TextApply = fn(&mut DraftMonster, &str);

/// The input shape of a question, with the data relevant to that shape.
#[derive(Debug, Clone)]
pub enum QuestionKind {
    /// Single-line text input
    ShortText(TextApply),
    /// Multi-line text input
    LongText(TextApply),
    /// Radio buttons: exactly one option may be chosen
    SingleChoice(Vec<ChoiceOption>),
    /// Check boxes: any subset of options may be chosen
    MultipleChoice(Vec<ChoiceOption>),
}

impl QuestionKind {
    /// Human-readable shape name, used in validation errors.
    pub fn shape_name(&self) -> &'static str {
        match self {
            QuestionKind::ShortText(_) => "short text",
            QuestionKind::LongText(_) => "long text",
            QuestionKind::SingleChoice(_) => "single choice",
            QuestionKind::MultipleChoice(_) => "multiple choice",
        }
    }

    /// The options of a choice question; empty for text questions.
    pub fn options(&self) -> &[ChoiceOption] {
        match self {
            QuestionKind::SingleChoice(options) | QuestionKind::MultipleChoice(options) => options,
            QuestionKind::ShortText(_) | QuestionKind::LongText(_) => &[],
        }
    }
}

/// One selectable choice within a single- or multi-choice question.
#[derive(Debug, Clone)]
pub struct ChoiceOption {
    /// Display text; also the answer key within the owning question
    pub label: String,
    /// Effect applied to the session when this option is chosen
    pub delta: MonsterDelta,
    /// Questions that only activate when this option is chosen.
    /// Their orders are scoped to this option, not to the catalog.
    pub subquestions: Vec<Question>,
}

impl ChoiceOption {
    pub fn new(label: impl Into<String>, delta: MonsterDelta) -> Self {
        Self {
            label: label.into(),
            delta,
            subquestions: Vec::new(),
        }
    }

    pub fn with_subquestion(mut self, question: Question) -> Self {
        self.subquestions.push(question);
        self
    }
}

/// One prompt in a catalog.
#[derive(Debug, Clone)]
pub struct Question {
    /// Presentation and application sequence key. Unique among siblings;
    /// sparse values are fine.
    pub order: u32,
    /// User-facing text
    pub prompt: String,
    pub kind: QuestionKind,
}

impl Question {
    pub fn short_text(order: u32, prompt: impl Into<String>, apply: TextApply) -> Self {
        Self {
            order,
            prompt: prompt.into(),
            kind: QuestionKind::ShortText(apply),
        }
    }

    pub fn long_text(order: u32, prompt: impl Into<String>, apply: TextApply) -> Self {
        Self {
            order,
            prompt: prompt.into(),
            kind: QuestionKind::LongText(apply),
        }
    }

    pub fn single_choice(order: u32, prompt: impl Into<String>, options: Vec<ChoiceOption>) -> Self {
        Self {
            order,
            prompt: prompt.into(),
            kind: QuestionKind::SingleChoice(options),
        }
    }

    pub fn multiple_choice(
        order: u32,
        prompt: impl Into<String>,
        options: Vec<ChoiceOption>,
    ) -> Self {
        Self {
            order,
            prompt: prompt.into(),
            kind: QuestionKind::MultipleChoice(options),
        }
    }
}

/// An immutable, ordered question catalog for one ruleset.
#[derive(Debug, Clone)]
pub struct Catalog {
    id: String,
    name: String,
    questions: Vec<Question>,
}

impl Catalog {
    /// Validate and sort a question table.
    ///
    /// Fails when sibling questions (top-level, or within one option) share
    /// an order, or when options of one question share a label. Catalogs
    /// that fail here must not be registered.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        mut questions: Vec<Question>,
    ) -> Result<Self, DefinitionError> {
        validate_siblings("top level", &mut questions)?;
        Ok(Self {
            id: id.into(),
            name: name.into(),
            questions,
        })
    }

    /// Ruleset identifier stamped onto built monsters.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name of the owning ruleset.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All top-level questions, ascending by order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Look up a top-level question by its order key.
    pub fn question(&self, order: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.order == order)
    }
}

// Sorts siblings ascending by order, then rejects duplicate orders and
// duplicate option labels, recursing into every option's sub-questions.
fn validate_siblings(scope: &str, questions: &mut [Question]) -> Result<(), DefinitionError> {
    questions.sort_by_key(|q| q.order);
    for pair in questions.windows(2) {
        if pair[0].order == pair[1].order {
            return Err(DefinitionError::DuplicateOrder {
                scope: scope.to_string(),
                order: pair[0].order,
            });
        }
    }

    for question in questions.iter_mut() {
        let order = question.order;
        let options = match &mut question.kind {
            QuestionKind::SingleChoice(options) | QuestionKind::MultipleChoice(options) => options,
            QuestionKind::ShortText(_) | QuestionKind::LongText(_) => continue,
        };
        for i in 0..options.len() {
            if options[..i].iter().any(|o| o.label == options[i].label) {
                return Err(DefinitionError::DuplicateOptionLabel {
                    order,
                    label: options[i].label.clone(),
                });
            }
        }
        for option in options.iter_mut() {
            let scope = format!("option '{}'", option.label);
            validate_siblings(&scope, &mut option.subquestions)?;
        }
    }
    Ok(())
}

/// A submitted answer value, shaped to match the question it answers.
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    /// For short and long text questions
    Text(String),
    /// For single-choice questions: the index of the chosen option
    Choice(usize),
    /// For multi-choice questions: the chosen options by label
    Selections(Vec<Selection>),
}

impl Answer {
    pub fn text(value: impl Into<String>) -> Self {
        Answer::Text(value.into())
    }

    /// Human-readable shape name, used in validation errors.
    pub fn shape_name(&self) -> &'static str {
        match self {
            Answer::Text(_) => "text",
            Answer::Choice(_) => "an option index",
            Answer::Selections(_) => "option selections",
        }
    }
}

/// One chosen option of a multi-choice question, with answers to any of its
/// sub-questions.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub label: String,
    pub answers: AnswerSheet,
}

impl Selection {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            answers: AnswerSheet::new(),
        }
    }

    pub fn with_answer(mut self, order: u32, answer: Answer) -> Self {
        self.answers.insert(order, answer);
        self
    }
}

/// Answers collected from a client, keyed by question order.
///
/// Entries whose order matches no catalog question are ignored by the scan;
/// the catalog decides what gets applied, never the sheet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnswerSheet {
    entries: BTreeMap<u32, Answer>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the answer for a question. Last write wins per order.
    pub fn insert(&mut self, order: u32, answer: Answer) {
        self.entries.insert(order, answer);
    }

    pub fn get(&self, order: u32) -> Option<&Answer> {
        self.entries.get(&order)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
