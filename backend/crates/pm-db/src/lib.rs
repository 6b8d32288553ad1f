pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::database::{Database, MIGRATOR};
pub use error::{DbError, Result};
pub use repositories::okr_set_repository::OkrSetRepository;
pub use repositories::project_repository::ProjectRepository;
pub use repositories::user_repository::UserRepository;
