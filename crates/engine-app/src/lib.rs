//! MonsterCodex Engine App - Application services and use-cases
//!
//! Wires the domain's rulesets and build sessions to the outside world:
//! inbound requests arrive as protocol DTOs, persistence happens through the
//! outbound repository port, and responses go back out as DTOs.

pub mod application;

pub use application::ports::outbound::{MonsterRecord, MonsterRepositoryPort};
pub use application::services::{MonsterService, MonsterServiceImpl};
