use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::user::models::Login;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_login(&self, login: &Login) -> Result<Option<User>, UserError> {
        let row = sqlx::query(
            r#"
            SELECT id, login, secret_hash
            FROM users
            WHERE login = $1
            "#,
        )
        .bind(login.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        match row {
            Some(r) => {
                let id: i64 = r
                    .try_get("id")
                    .map_err(|e| UserError::DatabaseError(e.to_string()))?;
                let login: String = r
                    .try_get("login")
                    .map_err(|e| UserError::DatabaseError(e.to_string()))?;
                let secret_hash: String = r
                    .try_get("secret_hash")
                    .map_err(|e| UserError::DatabaseError(e.to_string()))?;

                Ok(Some(User::new(UserId(id), Login::new(login)?, secret_hash)))
            }
            None => Ok(None),
        }
    }
}
