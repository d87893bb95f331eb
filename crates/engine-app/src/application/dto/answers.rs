//! Submitted answers: protocol DTOs -> domain answer sheets.

use monstercodex_domain::{Answer, AnswerSheet, Selection};
use monstercodex_protocol::{AnswerEntry, AnswerValue};

/// Convert submitted answer entries into a domain answer sheet.
///
/// Purely structural: shape and option validation happens in the build
/// session, which knows the catalog.
pub fn answer_sheet(entries: &[AnswerEntry]) -> AnswerSheet {
    let mut sheet = AnswerSheet::new();
    for entry in entries {
        sheet.insert(entry.order, answer(&entry.value));
    }
    sheet
}

fn answer(value: &AnswerValue) -> Answer {
    match value {
        AnswerValue::Text(text) => Answer::Text(text.clone()),
        AnswerValue::Choice(index) => Answer::Choice(*index),
        AnswerValue::Selections(selections) => Answer::Selections(
            selections
                .iter()
                .map(|selection| Selection {
                    label: selection.option.clone(),
                    answers: answer_sheet(&selection.answers),
                })
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use monstercodex_protocol::SelectionEntry;

    #[test]
    fn nested_selection_answers_become_nested_sheets() {
        let entries = vec![
            AnswerEntry {
                order: 0,
                value: AnswerValue::Text("Razor Boar".to_string()),
            },
            AnswerEntry {
                order: 6,
                value: AnswerValue::Selections(vec![SelectionEntry {
                    option: "Spells and magic".to_string(),
                    answers: vec![AnswerEntry {
                        order: 1,
                        value: AnswerValue::Text("Hurl green fire".to_string()),
                    }],
                }]),
            },
        ];

        let sheet = answer_sheet(&entries);
        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet.get(0), Some(&Answer::text("Razor Boar")));
        let Some(Answer::Selections(selections)) = sheet.get(6) else {
            panic!("expected selections");
        };
        assert_eq!(selections[0].label, "Spells and magic");
        assert_eq!(
            selections[0].answers.get(1),
            Some(&Answer::text("Hurl green fire"))
        );
    }
}
