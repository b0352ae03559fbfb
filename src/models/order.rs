use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::AppError;

/// Cart entry as submitted by the browser
///
/// Every field is optional on the wire. Missing `price` or `quantity` count as
/// zero, but an explicit `null` for either is rejected. Any client-side
/// subtotal is ignored because it is not a field here.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CartItem {
    pub id: Option<i64>,
    pub name: Option<String>,
    #[serde(default, deserialize_with = "present_number")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "present_number")]
    pub quantity: Option<i64>,
}

/// Only runs when the key is present, so `null` here is an explicit null
fn present_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)?
        .map(Some)
        .ok_or_else(|| serde::de::Error::custom("expected a number, found null"))
}

impl CartItem {
    /// Build the ledger line for this item, computing the subtotal here
    pub fn to_line(&self, user_email: &str) -> Result<NewOrderLine, AppError> {
        let precio = self.price.unwrap_or(0.0);
        let cantidad = self.quantity.unwrap_or(0);

        if !precio.is_finite() || precio < 0.0 {
            return Err(AppError::Validation(format!(
                "Precio inválido para el producto {}",
                self.label()
            )));
        }
        if cantidad < 0 {
            return Err(AppError::Validation(format!(
                "Cantidad inválida para el producto {}",
                self.label()
            )));
        }

        Ok(NewOrderLine {
            user_email: user_email.to_string(),
            producto_id: self.id,
            nombre: self.name.clone(),
            precio,
            cantidad,
            subtotal: precio * cantidad as f64,
        })
    }

    fn label(&self) -> String {
        match (&self.name, self.id) {
            (Some(name), _) => name.clone(),
            (None, Some(id)) => id.to_string(),
            (None, None) => "sin nombre".to_string(),
        }
    }
}

/// Order line about to be appended to the ledger
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrderLine {
    pub user_email: String,
    pub producto_id: Option<i64>,
    pub nombre: Option<String>,
    pub precio: f64,
    pub cantidad: i64,
    pub subtotal: f64,
}

/// Persisted ledger line
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct OrderLine {
    pub id: i64,
    pub user_email: String,
    pub producto_id: Option<i64>,
    pub nombre: Option<String>,
    pub precio: f64,
    pub cantidad: i64,
    pub subtotal: f64,
    pub fecha: DateTime<Utc>,
}
