//! Cart confirmation.
//!
//! Anonymous callers are refused before anything touches storage. For a
//! logged-in caller every cart item becomes one ledger line, in payload order,
//! with the subtotal computed here from price and quantity.

use serde::Serialize;
use sqlx::{Connection, SqliteConnection};

use crate::error::{AppError, Result};
use crate::guard::is_authenticated;
use crate::models::{CartItem, Identity, NewOrderLine};
use crate::store::OrderStore;

/// Acknowledgment returned for a confirmed cart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Confirmation {
    /// Ledger ids of the recorded lines, in cart order
    pub line_ids: Vec<i64>,
    /// Sum of the line subtotals
    pub total: f64,
}

/// Record a purchase for `identity`
///
/// All lines are written in one transaction: either the whole cart lands in
/// the ledger or none of it does.
pub async fn confirm_purchase(
    conn: &mut SqliteConnection,
    identity: Option<&Identity>,
    cart: &[CartItem],
) -> Result<Confirmation> {
    let identity = match identity {
        Some(identity) if is_authenticated(Some(identity)) => identity,
        _ => return Err(AppError::AuthRequired),
    };

    if cart.is_empty() {
        return Err(AppError::EmptyCart);
    }

    let lines = cart
        .iter()
        .map(|item| item.to_line(&identity.email))
        .collect::<Result<Vec<NewOrderLine>>>()?;

    OrderStore::new(conn).ensure_schema().await?;

    let mut tx = conn.begin().await?;
    let mut line_ids = Vec::with_capacity(lines.len());
    {
        let mut orders = OrderStore::new(&mut *tx);
        for line in &lines {
            line_ids.push(orders.append_line(line).await?);
        }
    }
    tx.commit().await?;

    let total: f64 = lines.iter().map(|l| l.subtotal).sum();

    tracing::info!(
        "Order confirmed for {}: {} lines, total {:.2}",
        identity.email,
        line_ids.len(),
        total
    );

    Ok(Confirmation { line_ids, total })
}
