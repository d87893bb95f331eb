//! Questionnaire catalogs: domain -> renderable schema DTOs.

use monstercodex_domain::{Catalog, ChoiceOption, Question, QuestionKind};
use monstercodex_protocol::{InputKind, QuestionSchema, QuestionnaireSchema, SelectOptionSchema};

/// Describe a catalog as a renderable questionnaire schema.
pub fn questionnaire_schema(catalog: &Catalog) -> QuestionnaireSchema {
    QuestionnaireSchema {
        ruleset_id: catalog.id().to_string(),
        ruleset_name: catalog.name().to_string(),
        questions: catalog.questions().iter().map(question_schema).collect(),
    }
}

fn question_schema(question: &Question) -> QuestionSchema {
    QuestionSchema {
        order: question.order,
        prompt: question.prompt.clone(),
        input: input_kind(&question.kind),
        options: question.kind.options().iter().map(option_schema).collect(),
    }
}

fn option_schema(option: &ChoiceOption) -> SelectOptionSchema {
    SelectOptionSchema {
        label: option.label.clone(),
        subquestions: option.subquestions.iter().map(question_schema).collect(),
    }
}

fn input_kind(kind: &QuestionKind) -> InputKind {
    match kind {
        QuestionKind::ShortText(_) => InputKind::ShortText,
        QuestionKind::LongText(_) => InputKind::LongText,
        QuestionKind::SingleChoice(_) => InputKind::SelectOne,
        QuestionKind::MultipleChoice(_) => InputKind::SelectMany,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use monstercodex_domain::{CoreRuleset, Ruleset};

    #[test]
    fn core_catalog_maps_to_schema() {
        let ruleset = CoreRuleset::new();
        let schema = questionnaire_schema(ruleset.catalog());

        assert_eq!(schema.ruleset_id, "core");
        assert_eq!(schema.ruleset_name, "Core");
        assert_eq!(schema.questions.len(), 11);

        let name = &schema.questions[0];
        assert_eq!(name.order, 0);
        assert_eq!(name.input, InputKind::ShortText);
        assert!(name.options.is_empty());

        let organization = &schema.questions[3];
        assert_eq!(organization.input, InputKind::SelectOne);
        assert_eq!(organization.options.len(), 3);
        assert_eq!(organization.options[0].label, "In large groups");
    }

    #[test]
    fn subquestions_stay_nested_under_their_option() {
        let ruleset = CoreRuleset::new();
        let schema = questionnaire_schema(ruleset.catalog());

        let reputation = schema
            .questions
            .iter()
            .find(|q| q.order == 6)
            .expect("reputation question");
        assert_eq!(reputation.input, InputKind::SelectMany);
        let trickery = reputation
            .options
            .iter()
            .find(|o| o.label == "Deceit and trickery")
            .expect("trickery option");
        assert_eq!(trickery.subquestions.len(), 1);
        assert_eq!(trickery.subquestions[0].order, 1);
        assert_eq!(trickery.subquestions[0].input, InputKind::ShortText);
        // Top level never absorbs gated questions
        assert!(schema.questions.iter().all(|q| q.order != 1 || q.prompt == "What is it known to do?"));
    }
}
