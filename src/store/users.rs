use sqlx::SqliteConnection;

use crate::error::{AppError, Result};
use crate::models::User;

/// Registered shoppers
pub struct UserStore<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> UserStore<'c> {
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self { conn }
    }

    /// Insert a user; the email must not be registered yet
    pub async fn create(
        &mut self,
        nombre: &str,
        email: &str,
        password_digest: &str,
    ) -> Result<User> {
        let id = sqlx::query("INSERT INTO usuarios (nombre, email, password) VALUES (?, ?, ?)")
            .bind(nombre)
            .bind(email)
            .bind(password_digest)
            .execute(&mut *self.conn)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(ref db_err) = e {
                    if db_err.is_unique_violation() {
                        return AppError::UserAlreadyExists;
                    }
                }
                AppError::Database(e)
            })?
            .last_insert_rowid();

        Ok(User {
            id,
            nombre: nombre.to_string(),
            email: email.to_string(),
            password: password_digest.to_string(),
        })
    }

    pub async fn find_by_email(&mut self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, nombre, email, password FROM usuarios WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&mut *self.conn)
        .await?;
        Ok(user)
    }
}
