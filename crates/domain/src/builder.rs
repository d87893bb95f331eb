//! Monster build sessions
//!
//! A session is a single-use accumulator: answers are applied in catalog
//! order, each one either writing a field directly (text questions) or
//! applying the chosen options' deltas (choice questions), and `build`
//! consumes the session into a finished [`Monster`].
//!
//! Validation is strict: an answer is checked in full against its question
//! before anything is mutated, so a rejected answer leaves the session
//! exactly as it was.

use crate::entities::Monster;
use crate::error::AnswerError;
use crate::questionnaire::{Answer, AnswerSheet, Catalog, Question, QuestionKind};
use crate::value_objects::{DamageDice, MonsterDelta};

/// The monster-in-progress a session mutates.
///
/// Scalar fields are last-write-wins; list fields are append-only and keep
/// duplicates. Fields are public so ruleset modules can write their text
/// handlers against it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftMonster {
    pub name: String,
    pub instinct: String,
    pub description: String,
    /// Weapon label, e.g. "claws"
    pub weapon: String,
    pub hp: i32,
    pub armor: i32,
    pub piercing: i32,
    pub damage: DamageDice,
    pub tags: Vec<String>,
    pub damage_tags: Vec<String>,
    pub special_qualities: Vec<String>,
    pub moves: Vec<String>,
}

impl DraftMonster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one delta. Field order is fixed: die size, hp, damage bonus,
    /// tags, damage tags, armor, piercing, best, worst, die size increases.
    pub fn apply_delta(&mut self, delta: &MonsterDelta) {
        if let Some(size) = delta.damage_die {
            self.damage.set_die_size(size);
        }
        self.hp += delta.hp_bonus;
        self.damage.add_bonus(delta.damage_bonus);
        self.tags.extend(delta.tags.iter().cloned());
        self.damage_tags.extend(delta.damage_tags.iter().cloned());
        self.armor += delta.armor_bonus;
        self.piercing += delta.piercing_bonus;
        if delta.best_damage {
            self.damage.set_best();
        }
        if delta.worst_damage {
            self.damage.set_worst();
        }
        for _ in 0..delta.die_size_increases {
            self.damage.increase_die_size();
        }
    }
}

/// One monster construction pass.
///
/// Created fresh per build, never shared, and consumed by [`build`].
/// The catalog it answers against stays immutable and shared.
///
/// [`build`]: BuildSession::build
#[derive(Debug, Clone)]
pub struct BuildSession {
    rules_id: String,
    draft: DraftMonster,
}

impl BuildSession {
    /// Start an empty session for the given ruleset id.
    pub fn new(rules_id: impl Into<String>) -> Self {
        Self {
            rules_id: rules_id.into(),
            draft: DraftMonster::new(),
        }
    }

    /// The monster-in-progress, for inspection.
    pub fn draft(&self) -> &DraftMonster {
        &self.draft
    }

    /// Validate an answer against its question, then apply it.
    ///
    /// On error nothing is applied: not the answer's delta, not its
    /// sub-answers, and prior state is untouched.
    pub fn apply_answer(
        &mut self,
        question: &Question,
        answer: &Answer,
    ) -> Result<(), AnswerError> {
        validate_answer(question, answer)?;
        self.apply_validated(question, answer);
        Ok(())
    }

    // Precondition: `validate_answer` accepted this (question, answer) pair.
    fn apply_validated(&mut self, question: &Question, answer: &Answer) {
        match (&question.kind, answer) {
            (QuestionKind::ShortText(apply), Answer::Text(value))
            | (QuestionKind::LongText(apply), Answer::Text(value)) => {
                apply(&mut self.draft, value);
            }
            (QuestionKind::SingleChoice(options), Answer::Choice(index)) => {
                self.draft.apply_delta(&options[*index].delta);
            }
            (QuestionKind::MultipleChoice(options), Answer::Selections(selections)) => {
                // Declared option order, not selection order
                for option in options {
                    let Some(selection) = selections.iter().find(|s| s.label == option.label)
                    else {
                        continue;
                    };
                    self.draft.apply_delta(&option.delta);
                    for subquestion in &option.subquestions {
                        if let Some(sub_answer) = selection.answers.get(subquestion.order) {
                            self.apply_validated(subquestion, sub_answer);
                        }
                    }
                }
            }
            // Rejected by validate_answer
            _ => {}
        }
    }

    /// Terminal operation: compose the finished monster.
    ///
    /// Consuming `self` is what makes the session single-use.
    pub fn build(self) -> Monster {
        let draft = self.draft;
        let mut damage_tags = draft.damage_tags;
        if draft.piercing > 0 {
            damage_tags.push(format!("{} piercing", draft.piercing));
        }
        Monster {
            name: draft.name,
            hp: draft.hp.to_string(),
            armor: draft.armor.to_string(),
            damage: format!("{} {}", draft.weapon, draft.damage.render()),
            damage_tags,
            tags: draft.tags,
            special_qualities: draft.special_qualities,
            instinct: draft.instinct,
            description: draft.description,
            moves: draft.moves,
            creation_rules: self.rules_id,
        }
    }
}

/// Run a full construction pass: fresh session, one linear scan over the
/// catalog in ascending order applying every answered question, then build.
/// Unanswered questions are skipped; answers for unknown orders are ignored.
pub fn build_monster(catalog: &Catalog, answers: &AnswerSheet) -> Result<Monster, AnswerError> {
    let mut session = BuildSession::new(catalog.id());
    for question in catalog.questions() {
        if let Some(answer) = answers.get(question.order) {
            session.apply_answer(question, answer)?;
        }
    }
    Ok(session.build())
}

fn validate_answer(question: &Question, answer: &Answer) -> Result<(), AnswerError> {
    match (&question.kind, answer) {
        (QuestionKind::ShortText(_), Answer::Text(_))
        | (QuestionKind::LongText(_), Answer::Text(_)) => Ok(()),
        (QuestionKind::SingleChoice(options), Answer::Choice(index)) => {
            if *index >= options.len() {
                return Err(AnswerError::ChoiceOutOfRange {
                    order: question.order,
                    index: *index,
                });
            }
            Ok(())
        }
        (QuestionKind::MultipleChoice(options), Answer::Selections(selections)) => {
            for selection in selections {
                let option = options
                    .iter()
                    .find(|o| o.label == selection.label)
                    .ok_or_else(|| AnswerError::UnknownOption {
                        order: question.order,
                        label: selection.label.clone(),
                    })?;
                for subquestion in &option.subquestions {
                    if let Some(sub_answer) = selection.answers.get(subquestion.order) {
                        validate_answer(subquestion, sub_answer)?;
                    }
                }
            }
            Ok(())
        }
        (kind, answer) => Err(AnswerError::ShapeMismatch {
            order: question.order,
            expected: kind.shape_name(),
            actual: answer.shape_name(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questionnaire::{ChoiceOption, Selection};
    use crate::value_objects::DieSize;

    fn set_name(draft: &mut DraftMonster, value: &str) {
        draft.name = value.to_string();
    }

    fn add_move(draft: &mut DraftMonster, value: &str) {
        draft.moves.push(value.to_string());
    }

    fn pick_question() -> Question {
        Question::multiple_choice(
            6,
            "What is it known for?",
            vec![
                ChoiceOption::new(
                    "Strong",
                    MonsterDelta {
                        damage_bonus: 2,
                        ..MonsterDelta::default()
                    },
                ),
                ChoiceOption::new("Sneaky", MonsterDelta::tag("Stealthy")).with_subquestion(
                    Question::short_text(1, "Write a move about dirty tricks", add_move),
                ),
            ],
        )
    }

    #[test]
    fn text_answer_writes_the_draft() {
        let mut session = BuildSession::new("core");
        let question = Question::short_text(0, "What is it called?", set_name);
        session
            .apply_answer(&question, &Answer::text("Gnoll"))
            .expect("applies");
        assert_eq!(session.draft().name, "Gnoll");
    }

    #[test]
    fn deltas_accumulate_in_application_order() {
        let mut session = BuildSession::new("core");
        session.draft.apply_delta(&MonsterDelta {
            hp_bonus: 3,
            ..MonsterDelta::default()
        });
        session.draft.apply_delta(&MonsterDelta {
            hp_bonus: 6,
            ..MonsterDelta::default()
        });
        assert_eq!(session.draft().hp, 9);
    }

    #[test]
    fn later_die_size_overwrites_earlier() {
        let mut session = BuildSession::new("core");
        session.draft.apply_delta(&MonsterDelta {
            damage_die: Some(DieSize::D6),
            ..MonsterDelta::default()
        });
        session.draft.apply_delta(&MonsterDelta {
            damage_die: Some(DieSize::D10),
            ..MonsterDelta::default()
        });
        assert_eq!(session.draft().damage.die_size(), DieSize::D10);
    }

    #[test]
    fn applying_a_delta_never_mutates_the_delta() {
        let delta = MonsterDelta {
            hp_bonus: 4,
            tags: vec!["Divine".to_string()],
            ..MonsterDelta::default()
        };
        let snapshot = delta.clone();

        let mut first = BuildSession::new("core");
        let mut second = BuildSession::new("core");
        first.draft.apply_delta(&delta);
        first.draft.apply_delta(&delta);
        second.draft.apply_delta(&delta);

        assert_eq!(delta, snapshot);
        assert_eq!(first.draft().hp, 8);
        assert_eq!(second.draft().hp, 4);
        assert_eq!(second.draft().tags, vec!["Divine".to_string()]);
    }

    #[test]
    fn single_choice_out_of_range_is_rejected() {
        let question = Question::single_choice(
            3,
            "How does it fight?",
            vec![ChoiceOption::new("Alone", MonsterDelta::tag("Solitary"))],
        );
        let mut session = BuildSession::new("core");
        let result = session.apply_answer(&question, &Answer::Choice(1));
        assert_eq!(
            result,
            Err(AnswerError::ChoiceOutOfRange { order: 3, index: 1 })
        );
    }

    #[test]
    fn unknown_selection_label_is_rejected_without_side_effects() {
        let question = pick_question();
        let mut session = BuildSession::new("core");
        session.draft.hp = 5;

        let answer = Answer::Selections(vec![
            Selection::new("Strong"),
            Selection::new("Misspelled"),
        ]);
        let result = session.apply_answer(&question, &answer);

        assert_eq!(
            result,
            Err(AnswerError::UnknownOption {
                order: 6,
                label: "Misspelled".to_string(),
            })
        );
        // The valid "Strong" selection must not have half-applied
        assert_eq!(session.draft().damage.bonus(), 0);
        assert_eq!(session.draft().hp, 5);
    }

    #[test]
    fn shape_mismatch_is_rejected() {
        let question = Question::short_text(0, "What is it called?", set_name);
        let mut session = BuildSession::new("core");
        let result = session.apply_answer(&question, &Answer::Choice(0));
        assert_eq!(
            result,
            Err(AnswerError::ShapeMismatch {
                order: 0,
                expected: "short text",
                actual: "an option index",
            })
        );
    }

    #[test]
    fn selections_apply_in_declared_option_order() {
        let question = pick_question();
        let mut session = BuildSession::new("core");
        // Selection order reversed relative to declaration
        let answer = Answer::Selections(vec![Selection::new("Sneaky"), Selection::new("Strong")]);
        session.apply_answer(&question, &answer).expect("applies");
        // "Strong" (declared first) applied its damage bonus before
        // "Sneaky" appended its tag; both landed.
        assert_eq!(session.draft().damage.bonus(), 2);
        assert_eq!(session.draft().tags, vec!["Stealthy".to_string()]);
    }

    #[test]
    fn subquestion_of_selected_option_applies() {
        let question = pick_question();
        let mut session = BuildSession::new("core");
        let answer = Answer::Selections(vec![
            Selection::new("Sneaky").with_answer(1, Answer::text("Vanish into shadow"))
        ]);
        session.apply_answer(&question, &answer).expect("applies");
        assert_eq!(session.draft().moves, vec!["Vanish into shadow".to_string()]);
    }

    #[test]
    fn subquestion_of_unselected_option_is_ignored() {
        let question = pick_question();
        let mut session = BuildSession::new("core");
        // Answer for Sneaky's sub-question supplied under Strong: the gate
        // is the selected option, not the presence of a value.
        let answer = Answer::Selections(vec![
            Selection::new("Strong").with_answer(1, Answer::text("Vanish into shadow"))
        ]);
        session.apply_answer(&question, &answer).expect("applies");
        assert!(session.draft().moves.is_empty());
    }

    #[test]
    fn build_composes_the_finished_monster() {
        let mut session = BuildSession::new("core");
        session.draft.name = "Ogre".to_string();
        session.draft.weapon = "club".to_string();
        session.draft.hp = 10;
        session.draft.armor = 1;
        session.draft.piercing = 2;
        session.draft.damage.set_die_size(DieSize::D10);
        session.draft.damage_tags.push("Reach".to_string());

        let monster = session.build();
        assert_eq!(monster.hp, "10");
        assert_eq!(monster.armor, "1");
        assert_eq!(monster.damage, "club d10");
        assert_eq!(
            monster.damage_tags,
            vec!["Reach".to_string(), "2 piercing".to_string()]
        );
        assert_eq!(monster.creation_rules, "core");
    }

    #[test]
    fn zero_piercing_adds_no_damage_tag() {
        let session = BuildSession::new("core");
        let monster = session.build();
        assert!(monster.damage_tags.is_empty());
    }
}
