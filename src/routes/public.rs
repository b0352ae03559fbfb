use axum::{extract::Query, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::db::DbConn;
use crate::error::Result;
use crate::search::{build_filter, echoed_term};
use crate::store::CatalogStore;
use crate::views::render;

/// `?q=` search parameter shared by listing pages
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// Storefront home: every product, or those matching `q`
///
/// GET /?q=<term>
pub async fn index(mut conn: DbConn, Query(params): Query<SearchParams>) -> Result<Json<Value>> {
    let filter = build_filter(params.q.as_deref());
    let productos = CatalogStore::new(&mut conn)
        .list_products(filter.as_ref())
        .await?;

    Ok(render(
        "index.html",
        json!({ "productos": productos, "q": echoed_term(filter.as_ref()) }),
    ))
}

/// Category browser
///
/// GET /categorias?q=<term>
pub async fn categories(
    mut conn: DbConn,
    Query(params): Query<SearchParams>,
) -> Result<Json<Value>> {
    let filter = build_filter(params.q.as_deref());
    let categorias = CatalogStore::new(&mut conn)
        .list_categories(filter.as_ref())
        .await?;

    Ok(render(
        "categorias.html",
        json!({ "categorias": categorias, "q": echoed_term(filter.as_ref()) }),
    ))
}

/// GET /ayuda
pub async fn help() -> Json<Value> {
    render("ayuda.html", json!({}))
}

/// GET /arriendos
pub async fn rentals() -> Json<Value> {
    render("arriendos.html", json!({}))
}
