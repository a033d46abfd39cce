pub mod prelude;

pub mod album_entries;
pub mod players;
pub mod removable_skill_inventory;
pub mod removable_skills;
pub mod unit_deck_positions;
pub mod unit_decks;
pub mod unit_level_limit_patterns;
pub mod unit_level_up_patterns;
pub mod unit_rarities;
pub mod unit_removable_skills;
pub mod unit_skill_level_up_patterns;
pub mod unit_skills;
pub mod unit_supporters;
pub mod unit_templates;
pub mod units;
