pub mod admin;
pub mod auth;
pub mod cart;
pub mod health;
pub mod public;

pub use cart::confirm_purchase_handler;
pub use health::health_check;

use axum::{
    http::{HeaderValue, Method},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tower_sessions::{cookie::time::Duration, Expiry, MemoryStore, SessionManagerLayer};

use crate::constants::SESSION_EXPIRY_SECS;
use crate::guard::require_admin;
use crate::AppState;

/// Build the full application router
pub fn app(state: AppState) -> Router {
    let sessions = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(state.config.is_production())
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::seconds(SESSION_EXPIRY_SECS)));

    let origins: Vec<HeaderValue> = state
        .config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid allowed origin: {}", origin);
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_credentials(true);

    let admin_routes = Router::new()
        .route("/productos", get(admin::list_products))
        .route(
            "/productos/add",
            get(admin::add_product_page).post(admin::add_product),
        )
        .route(
            "/productos/edit/:id",
            get(admin::edit_product_page).post(admin::edit_product),
        )
        .route("/productos/delete/:id", get(admin::delete_product))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    let auth_routes = Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/register", get(auth::register_page).post(auth::register))
        .route("/logout", get(auth::logout));

    Router::new()
        .route("/health", get(health_check))
        .route("/", get(public::index))
        .route("/categorias", get(public::categories))
        .route("/ayuda", get(public::help))
        .route("/arriendos", get(public::rentals))
        .route("/carrito", get(cart::cart_page))
        .route("/pedidos", get(cart::orders_page))
        .route("/confirmar_compra", post(confirm_purchase_handler))
        .nest("/auth", auth_routes)
        .nest("/admin", admin_routes)
        .layer(sessions)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
