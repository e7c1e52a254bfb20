use crate::Result as DbErrorResult;

use cf_core::{NewUser, User};

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    name: String,
    username: String,
    email: String,
    hashed_password: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            username: row.username,
            email: row.email,
            hashed_password: row.hashed_password,
        }
    }
}

/// Stateless: every call takes an executor so signup can run inside a transaction.
pub struct UserRepository;

impl UserRepository {
    /// Insert a user. A taken username or email surfaces as `DbError::UniqueViolation`.
    pub async fn create<'e, E>(executor: E, user: &NewUser) -> DbErrorResult<User>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
              INSERT INTO users (name, username, email, hashed_password)
              VALUES (?, ?, ?, ?)
              "#,
        )
        .bind(&user.name)
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.hashed_password)
        .execute(executor)
        .await?;

        Ok(User {
            id: result.last_insert_rowid(),
            name: user.name.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            hashed_password: user.hashed_password.clone(),
        })
    }

    pub async fn find_by_username<'e, E>(executor: E, username: &str) -> DbErrorResult<Option<User>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
              SELECT id, name, username, email, hashed_password
              FROM users
              WHERE username = ?
              "#,
        )
        .bind(username)
        .fetch_optional(executor)
        .await?;

        Ok(row.map(User::from))
    }

    pub async fn find_by_email<'e, E>(executor: E, email: &str) -> DbErrorResult<Option<User>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
              SELECT id, name, username, email, hashed_password
              FROM users
              WHERE email = ?
              "#,
        )
        .bind(email)
        .fetch_optional(executor)
        .await?;

        Ok(row.map(User::from))
    }

    /// Both fields must belong to the same account
    pub async fn find_by_email_and_username<'e, E>(
        executor: E,
        email: &str,
        username: &str,
    ) -> DbErrorResult<Option<User>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
              SELECT id, name, username, email, hashed_password
              FROM users
              WHERE email = ? AND username = ?
              "#,
        )
        .bind(email)
        .bind(username)
        .fetch_optional(executor)
        .await?;

        Ok(row.map(User::from))
    }

    /// Replace the stored hash. Returns false when no row matched.
    pub async fn update_password<'e, E>(
        executor: E,
        user_id: i64,
        hashed_password: &str,
    ) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("UPDATE users SET hashed_password = ? WHERE id = ?")
            .bind(hashed_password)
            .bind(user_id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
