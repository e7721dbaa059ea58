mod actor;
mod repository;
mod team;
mod user;

pub use actor::GhActor;
pub use repository::{GhRepository, GhRepositoryInfo};
pub use team::GhTeam;
pub use user::GhUser;
