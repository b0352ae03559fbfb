use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};
use serde_json::{json, Value};
use tower_sessions::Session;

use crate::constants::ERR_MISSING_FIELDS;
use crate::db::DbConn;
use crate::error::{AppError, Result};
use crate::guard::{is_admin, sign_in, sign_out};
use crate::models::{LoginForm, RegisterForm, User};
use crate::security::{digest_password, verify_password};
use crate::store::UserStore;
use crate::views::render;
use crate::AppState;

/// GET /auth/login
pub async fn login_page() -> Json<Value> {
    render("loginuser.html", json!({ "error": null }))
}

/// Log in with email and password
///
/// The admin lands on the product panel, everyone else on the storefront.
///
/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    mut conn: DbConn,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    let email = form.username.trim();

    let user = UserStore::new(&mut conn)
        .find_by_email(email)
        .await?
        .filter(|user| {
            verify_password(&form.password, &user.password, &state.config.password_pepper)
        })
        .ok_or_else(|| {
            tracing::info!("Failed login for {}", email);
            AppError::InvalidCredentials
        })?;

    let identity = user.identity();
    sign_in(&session, &identity).await?;

    let destination = if is_admin(Some(&identity), &state.config.admin_email) {
        "/admin/productos"
    } else {
        "/"
    };

    Ok(Redirect::to(destination).into_response())
}

/// GET /auth/register
pub async fn register_page() -> Json<Value> {
    render("register.html", json!({ "error": null }))
}

/// Create an account and log it in
///
/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    mut conn: DbConn,
    Form(form): Form<RegisterForm>,
) -> Result<Response> {
    let nombre = form.nombre.trim();
    let email = form.email.trim();

    if nombre.is_empty() || email.is_empty() || form.password.is_empty() {
        return Err(AppError::Validation(ERR_MISSING_FIELDS.to_string()));
    }
    if !User::validate_email(email) {
        return Err(AppError::Validation("Correo inválido".to_string()));
    }
    if form.password != form.confirm_password {
        return Err(AppError::PasswordMismatch);
    }

    let digest = digest_password(&form.password, &state.config.password_pepper);
    let user = UserStore::new(&mut conn)
        .create(nombre, email, &digest)
        .await?;

    tracing::info!("New user registered: {}", user.email);

    sign_in(&session, &user.identity()).await?;

    Ok(Redirect::to("/").into_response())
}

/// GET /auth/logout
pub async fn logout(session: Session) -> Result<Redirect> {
    sign_out(&session).await?;
    Ok(Redirect::to("/"))
}
