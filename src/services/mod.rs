pub mod album_service;
pub mod album_service_impl;
pub mod deck_service;
pub mod deck_service_impl;
pub mod player_service;
pub mod player_service_impl;
pub mod removable_skill_service;
pub mod removable_skill_service_impl;
pub mod unit_service;
pub mod unit_service_impl;

pub use album_service::{AlbumError, AlbumService};
pub use album_service_impl::SeaOrmAlbumService;
pub use deck_service::{DeckError, DeckService};
pub use deck_service_impl::SeaOrmDeckService;
pub use player_service::{PlayerError, PlayerService};
pub use player_service_impl::SeaOrmPlayerService;
pub use removable_skill_service::{SkillError, SkillService};
pub use removable_skill_service_impl::SeaOrmSkillService;
pub use unit_service::{UnitError, UnitService};
pub use unit_service_impl::SeaOrmUnitService;
