//! Product CRUD for the admin panel.
//!
//! Every route here is mounted behind [`crate::guard::require_admin`].

use axum::{
    extract::{Path, Query},
    response::Redirect,
    Form, Json,
};
use serde_json::{json, Value};

use crate::db::DbConn;
use crate::error::Result;
use crate::models::{ProductForm, ProductInput};
use crate::routes::public::SearchParams;
use crate::search::{build_filter, echoed_term};
use crate::store::CatalogStore;
use crate::views::render;

const PANEL_PATH: &str = "/admin/productos";

/// GET /admin/productos?q=<term>
pub async fn list_products(
    mut conn: DbConn,
    Query(params): Query<SearchParams>,
) -> Result<Json<Value>> {
    let filter = build_filter(params.q.as_deref());
    let productos = CatalogStore::new(&mut conn)
        .list_products(filter.as_ref())
        .await?;

    Ok(render(
        "admin_productos.html",
        json!({ "productos": productos, "q": echoed_term(filter.as_ref()) }),
    ))
}

/// Data for the empty product form
///
/// GET /admin/productos/add
pub async fn add_product_page(mut conn: DbConn) -> Result<Json<Value>> {
    let categorias = CatalogStore::new(&mut conn).list_categories(None).await?;
    Ok(render("add_producto.html", json!({ "categorias": categorias })))
}

/// POST /admin/productos/add
pub async fn add_product(mut conn: DbConn, Form(form): Form<ProductForm>) -> Result<Redirect> {
    let input = ProductInput::parse(form)?;
    CatalogStore::new(&mut conn).create_product(&input).await?;
    Ok(Redirect::to(PANEL_PATH))
}

/// Data for the edit form of one product
///
/// GET /admin/productos/edit/:id
pub async fn edit_product_page(mut conn: DbConn, Path(id): Path<i64>) -> Result<Json<Value>> {
    let mut catalog = CatalogStore::new(&mut conn);
    let producto = catalog.get_product(id).await?;
    let categorias = catalog.list_categories(None).await?;

    Ok(render(
        "edit_producto.html",
        json!({ "producto": producto, "categorias": categorias }),
    ))
}

/// POST /admin/productos/edit/:id
pub async fn edit_product(
    mut conn: DbConn,
    Path(id): Path<i64>,
    Form(form): Form<ProductForm>,
) -> Result<Redirect> {
    let input = ProductInput::parse(form)?;
    CatalogStore::new(&mut conn).update_product(id, &input).await?;
    Ok(Redirect::to(PANEL_PATH))
}

/// GET /admin/productos/delete/:id
pub async fn delete_product(mut conn: DbConn, Path(id): Path<i64>) -> Result<Redirect> {
    CatalogStore::new(&mut conn).delete_product(id).await?;
    Ok(Redirect::to(PANEL_PATH))
}
