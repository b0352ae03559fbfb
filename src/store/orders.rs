use chrono::Utc;
use sqlx::SqliteConnection;

use crate::db::tables;
use crate::error::Result;
use crate::models::{NewOrderLine, OrderLine};

/// Append-only order ledger
pub struct OrderStore<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> OrderStore<'c> {
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self { conn }
    }

    /// Create the ledger table if it does not exist yet
    pub async fn ensure_schema(&mut self) -> Result<()> {
        sqlx::query(tables::CREATE_ORDERS)
            .execute(&mut *self.conn)
            .await?;
        Ok(())
    }

    /// Insert one line, stamping it with the current UTC time
    pub async fn append_line(&mut self, line: &NewOrderLine) -> Result<i64> {
        let id = sqlx::query(
            r"
            INSERT INTO pedidos (user_email, producto_id, nombre, precio, cantidad, subtotal, fecha)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(&line.user_email)
        .bind(line.producto_id)
        .bind(&line.nombre)
        .bind(line.precio)
        .bind(line.cantidad)
        .bind(line.subtotal)
        .bind(Utc::now())
        .execute(&mut *self.conn)
        .await?
        .last_insert_rowid();

        Ok(id)
    }

    /// Lines recorded for one user, oldest first
    ///
    /// Before the first checkout the ledger does not exist and this is empty.
    pub async fn lines_for_user(&mut self, user_email: &str) -> Result<Vec<OrderLine>> {
        if !self.ledger_exists().await? {
            return Ok(Vec::new());
        }

        let lines = sqlx::query_as::<_, OrderLine>(
            r"
            SELECT id, user_email, producto_id, nombre, precio, cantidad, subtotal, fecha
            FROM pedidos
            WHERE user_email = ?
            ORDER BY id
            ",
        )
        .bind(user_email)
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(lines)
    }

    pub async fn ledger_exists(&mut self) -> Result<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?)",
        )
        .bind(tables::ORDERS)
        .fetch_one(&mut *self.conn)
        .await?;
        Ok(exists)
    }
}
