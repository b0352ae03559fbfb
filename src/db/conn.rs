use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use sqlx::{pool::PoolConnection, Sqlite, SqliteConnection};
use std::ops::{Deref, DerefMut};

use crate::error::AppError;
use crate::AppState;

/// Connection checked out for the lifetime of one request
///
/// Acquired when the handler's arguments are extracted and returned to the
/// pool when the handler's future is dropped, whichever way it exits.
pub struct DbConn(pub PoolConnection<Sqlite>);

#[async_trait]
impl FromRequestParts<AppState> for DbConn {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let conn = state.db.acquire().await?;
        Ok(DbConn(conn))
    }
}

impl Deref for DbConn {
    type Target = SqliteConnection;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for DbConn {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
