use pm_core::User;
use pm_db::{Database, UserRepository};

use sqlx::SqlitePool;

/// Creates an in-memory database with migrations run
pub async fn create_test_pool() -> SqlitePool {
    Database::in_memory()
        .await
        .expect("Failed to create test database")
        .pool()
        .clone()
}

/// Inserts a reference user
pub async fn create_test_user(pool: &SqlitePool, id: &str, name: &str) -> User {
    let user = User {
        id: id.to_string(),
        name: name.to_string(),
        avatar_url: None,
    };

    UserRepository::new(pool.clone())
        .upsert(&user)
        .await
        .expect("Failed to create test user");

    user
}
