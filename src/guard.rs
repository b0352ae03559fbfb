//! Access guard: who may reach which route.
//!
//! Identity comes out of the session once, in an extractor, and is handed to
//! handlers as a plain argument. Admin routes sit behind [`require_admin`],
//! layered onto the admin router.

use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower_sessions::Session;

use crate::constants::SESSION_IDENTITY_KEY;
use crate::error::{AppError, Result};
use crate::models::Identity;
use crate::AppState;

/// True when an identity with a usable email is present
pub fn is_authenticated(identity: Option<&Identity>) -> bool {
    identity.is_some_and(|i| !i.email.trim().is_empty())
}

/// True only for the configured admin email
pub fn is_admin(identity: Option<&Identity>, admin_email: &str) -> bool {
    is_authenticated(identity) && identity.is_some_and(|i| i.email == admin_email)
}

/// Current identity, if any
pub struct OptionalAuth(pub Option<Identity>);

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuth
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let Some(session) = parts.extensions.get::<Session>() else {
            return Ok(Self(None));
        };

        let identity = match session.get::<Identity>(SESSION_IDENTITY_KEY).await {
            Ok(identity) => identity,
            Err(e) => {
                tracing::warn!("Unreadable session identity: {}", e);
                None
            }
        };

        Ok(Self(identity.filter(|i| is_authenticated(Some(i)))))
    }
}

/// Logged-in identity; anonymous page requests are redirected to the login form
pub struct RequireAuth(pub Identity);

#[async_trait]
impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let OptionalAuth(identity) = OptionalAuth::from_request_parts(parts, state)
            .await
            .unwrap_or(OptionalAuth(None));

        identity.map(Self).ok_or(AppError::AuthRequired)
    }
}

/// Middleware in front of every admin route
///
/// Anything but the admin identity gets a plain-text 403, logged in or not.
pub async fn require_admin(
    State(state): State<AppState>,
    OptionalAuth(identity): OptionalAuth,
    request: Request,
    next: Next,
) -> Response {
    if !is_admin(identity.as_ref(), &state.config.admin_email) {
        tracing::warn!(
            "Admin route {} refused for {}",
            request.uri().path(),
            identity.as_ref().map_or("anonymous", |i| i.email.as_str())
        );
        return AppError::Forbidden.into_response();
    }

    next.run(request).await
}

/// Store the identity in the session, rotating the session id
pub async fn sign_in(session: &Session, identity: &Identity) -> Result<()> {
    session.cycle_id().await?;
    session.insert(SESSION_IDENTITY_KEY, identity).await?;
    tracing::info!("User signed in: {}", identity.email);
    Ok(())
}

/// Drop everything the session holds
pub async fn sign_out(session: &Session) -> Result<()> {
    session.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(email: &str) -> Identity {
        Identity {
            nombre: "Test".to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn test_is_authenticated() {
        assert!(is_authenticated(Some(&identity("a@b.com"))));
        assert!(!is_authenticated(Some(&identity(""))));
        assert!(!is_authenticated(Some(&identity("   "))));
        assert!(!is_authenticated(None));
    }

    #[test]
    fn test_is_admin() {
        let admin = "admin@pixsoft.com";

        assert!(is_admin(Some(&identity(admin)), admin));
        assert!(!is_admin(Some(&identity("a@b.com")), admin));
        assert!(!is_admin(None, admin));
    }
}
