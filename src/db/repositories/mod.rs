pub mod album;
pub mod deck;
pub mod player;
pub mod reference;
pub mod removable_skill;
pub mod unit;

pub use album::AlbumRepository;
pub use deck::DeckRepository;
pub use player::PlayerRepository;
pub use reference::ReferenceRepository;
pub use removable_skill::RemovableSkillRepository;
pub use unit::UnitRepository;
