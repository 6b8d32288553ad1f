use crate::Result as DbErrorResult;

use pm_core::User;

use sqlx::SqlitePool;

#[derive(sqlx::FromRow)]
struct UserRow {
    id: String,
    name: String,
    avatar_url: Option<String>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            avatar_url: row.avatar_url,
        }
    }
}

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, name, avatar_url
                FROM users
                ORDER BY name, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    pub async fn find_by_id(&self, id: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, name, avatar_url
                FROM users
                WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(User::from))
    }

    /// Insert or refresh a user record.
    pub async fn upsert(&self, user: &User) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO users (id, name, avatar_url)
                VALUES (?, ?, ?)
                ON CONFLICT(id) DO UPDATE SET
                    name = excluded.name,
                    avatar_url = excluded.avatar_url
            "#,
        )
        .bind(&user.id)
        .bind(&user.name)
        .bind(&user.avatar_url)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
