//! Application services.

mod monster_service;

pub use monster_service::{MonsterService, MonsterServiceImpl};
