//! Monster Service - Application service for questionnaire-driven creation
//!
//! This service provides the use case implementations around the ruleset
//! registry: listing rulesets, describing their questionnaires for clients,
//! and turning submitted answers into a persisted monster.

use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

use monstercodex_domain::{build_monster, Ruleset, RulesetRegistry};
use monstercodex_protocol::{
    CreateMonsterRequest, MonsterResponse, QuestionnaireSchema, RulesetSummary,
};

use crate::application::dto;
use crate::application::ports::outbound::MonsterRepositoryPort;

/// Monster service trait defining the application use cases
#[async_trait]
pub trait MonsterService: Send + Sync {
    /// List the rulesets monsters can be created under.
    fn list_rulesets(&self) -> Vec<RulesetSummary>;

    /// Get the renderable questionnaire for a ruleset.
    fn questionnaire(&self, ruleset_id: &str) -> Result<QuestionnaireSchema>;

    /// Create and persist a monster from submitted answers.
    ///
    /// Invalid answers (bad option index, unknown option label, wrong value
    /// shape) are rejected as errors; nothing is persisted in that case.
    async fn create_monster(&self, request: CreateMonsterRequest) -> Result<MonsterResponse>;
}

/// Default implementation of MonsterService using port abstractions
pub struct MonsterServiceImpl {
    rulesets: Arc<RulesetRegistry>,
    monster_repository: Arc<dyn MonsterRepositoryPort>,
}

impl MonsterServiceImpl {
    /// Create a new MonsterServiceImpl over a ruleset registry and a
    /// persistence port.
    pub fn new(
        rulesets: Arc<RulesetRegistry>,
        monster_repository: Arc<dyn MonsterRepositoryPort>,
    ) -> Self {
        Self {
            rulesets,
            monster_repository,
        }
    }

    fn ruleset(&self, ruleset_id: &str) -> Result<Arc<dyn Ruleset>> {
        self.rulesets
            .get(ruleset_id)
            .ok_or_else(|| anyhow::anyhow!("Unknown ruleset: {}", ruleset_id))
    }
}

#[async_trait]
impl MonsterService for MonsterServiceImpl {
    fn list_rulesets(&self) -> Vec<RulesetSummary> {
        self.rulesets
            .list()
            .into_iter()
            .map(|(id, name)| RulesetSummary {
                id: id.to_string(),
                name: name.to_string(),
            })
            .collect()
    }

    #[instrument(skip(self))]
    fn questionnaire(&self, ruleset_id: &str) -> Result<QuestionnaireSchema> {
        let ruleset = self.ruleset(ruleset_id)?;
        Ok(dto::questionnaire_schema(ruleset.catalog()))
    }

    #[instrument(skip(self, request), fields(ruleset_id = %request.ruleset_id))]
    async fn create_monster(&self, request: CreateMonsterRequest) -> Result<MonsterResponse> {
        debug!(
            answers = request.answers.len(),
            "Creating monster from questionnaire answers"
        );

        let ruleset = self.ruleset(&request.ruleset_id)?;
        let answers = dto::answer_sheet(&request.answers);
        let monster = build_monster(ruleset.catalog(), &answers)
            .context("Rejected questionnaire answers")?;

        let record = self
            .monster_repository
            .save(&monster)
            .await
            .context("Failed to save monster")?;

        info!(monster_id = %record.id, name = %monster.name, "Monster created");
        Ok(dto::monster_response(&record, monster))
    }
}
