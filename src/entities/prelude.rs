pub use super::album_entries::Entity as AlbumEntries;
pub use super::players::Entity as Players;
pub use super::removable_skill_inventory::Entity as RemovableSkillInventory;
pub use super::removable_skills::Entity as RemovableSkills;
pub use super::unit_deck_positions::Entity as UnitDeckPositions;
pub use super::unit_decks::Entity as UnitDecks;
pub use super::unit_level_limit_patterns::Entity as UnitLevelLimitPatterns;
pub use super::unit_level_up_patterns::Entity as UnitLevelUpPatterns;
pub use super::unit_rarities::Entity as UnitRarities;
pub use super::unit_removable_skills::Entity as UnitRemovableSkills;
pub use super::unit_skill_level_up_patterns::Entity as UnitSkillLevelUpPatterns;
pub use super::unit_skills::Entity as UnitSkills;
pub use super::unit_supporters::Entity as UnitSupporters;
pub use super::unit_templates::Entity as UnitTemplates;
pub use super::units::Entity as Units;
