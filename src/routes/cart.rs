use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};

use crate::checkout::confirm_purchase;
use crate::db::DbConn;
use crate::error::{AppError, Result};
use crate::guard::{OptionalAuth, RequireAuth};
use crate::models::CartItem;
use crate::store::OrderStore;
use crate::views::render;

/// Checkout result body
#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CheckoutResponse {
    fn failure(status: StatusCode, error: impl Into<String>) -> Response {
        let body = CheckoutResponse {
            success: false,
            error: Some(error.into()),
        };
        (status, Json(body)).into_response()
    }
}

/// Cart page
///
/// GET /carrito
pub async fn cart_page(RequireAuth(identity): RequireAuth) -> Json<Value> {
    render("carrito.html", json!({ "usuario": identity }))
}

/// Order history for the logged-in user
///
/// GET /pedidos
pub async fn orders_page(
    RequireAuth(identity): RequireAuth,
    mut conn: DbConn,
) -> Result<Json<Value>> {
    let pedidos = OrderStore::new(&mut conn)
        .lines_for_user(&identity.email)
        .await?;

    Ok(render("pedidos.html", json!({ "pedidos": pedidos })))
}

/// Confirm the cart held by the browser
///
/// Every outcome is a `{success, error?}` JSON body; storage failures carry
/// their cause instead of a generic message.
///
/// POST /confirmar_compra
pub async fn confirm_purchase_handler(
    OptionalAuth(identity): OptionalAuth,
    conn: std::result::Result<DbConn, AppError>,
    payload: std::result::Result<Json<Vec<CartItem>>, JsonRejection>,
) -> Response {
    if identity.is_none() {
        return checkout_failure(AppError::AuthRequired);
    }

    let mut conn = match conn {
        Ok(conn) => conn,
        Err(e) => return checkout_failure(e),
    };

    let Json(cart) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::warn!("Malformed cart payload: {}", rejection.body_text());
            return CheckoutResponse::failure(rejection.status(), rejection.body_text());
        }
    };

    match confirm_purchase(&mut conn, identity.as_ref(), &cart).await {
        Ok(_) => Json(CheckoutResponse {
            success: true,
            error: None,
        })
        .into_response(),
        Err(e) => checkout_failure(e),
    }
}

fn checkout_failure(err: AppError) -> Response {
    let status = err.status();
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!("Checkout failed: {:?}", err);
    }
    CheckoutResponse::failure(status, err.to_string())
}
