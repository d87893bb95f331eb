//! MonsterCodex Protocol - Shared types for client and engine communication
//!
//! This crate contains the wire-format DTOs exchanged with clients:
//! - Questionnaire schemas that drive form rendering
//! - Monster creation requests (submitted answers)
//! - Monster responses and ruleset listings
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, uuid, and chrono
//! 2. **No business logic** - Pure data types and serialization
//! 3. **No domain types** - Use raw `uuid::Uuid` in DTOs; conversions from
//!    the domain live in the application layer

pub mod requests;
pub mod responses;
pub mod schema;

pub use requests::{AnswerEntry, AnswerValue, CreateMonsterRequest, SelectionEntry};
pub use responses::{MonsterResponse, RulesetSummary};
pub use schema::{InputKind, QuestionSchema, QuestionnaireSchema, SelectOptionSchema};
