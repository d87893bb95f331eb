//! Monsters: domain entity + storage record -> response DTO.

use monstercodex_domain::Monster;
use monstercodex_protocol::MonsterResponse;

use crate::application::ports::outbound::MonsterRecord;

/// Assemble the client-facing view of a stored monster.
pub fn monster_response(record: &MonsterRecord, monster: Monster) -> MonsterResponse {
    MonsterResponse {
        id: record.id.to_uuid(),
        created_at: record.created_at,
        name: monster.name,
        hp: monster.hp,
        armor: monster.armor,
        damage: monster.damage,
        damage_tags: monster.damage_tags,
        tags: monster.tags,
        special_qualities: monster.special_qualities,
        instinct: monster.instinct,
        description: monster.description,
        moves: monster.moves,
        creation_rules: monster.creation_rules,
    }
}
