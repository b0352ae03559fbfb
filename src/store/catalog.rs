use sqlx::SqliteConnection;

use crate::constants::{ERR_PRODUCT_NOT_FOUND, ERR_UNKNOWN_CATEGORY};
use crate::error::{AppError, Result};
use crate::models::{Category, Product, ProductInput, ProductListing};
use crate::search::SearchFilter;

// Products always LEFT JOIN their category: a product whose category vanished
// is still listed, with a null `categoria_nombre`.
const LIST_PRODUCTS: &str = r"
    SELECT p.id, p.nombre, p.precio, p.img, p.categoria_id,
           c.nombre AS categoria_nombre
    FROM productos p
    LEFT JOIN categorias c ON p.categoria_id = c.id
    ORDER BY p.id DESC
";

const CATEGORIES_BY_NAME: &str = "SELECT id, nombre FROM categorias ORDER BY nombre";

const CATEGORIES_BY_ID: &str = "SELECT id, nombre FROM categorias ORDER BY id";

/// Product and category persistence over one connection
pub struct CatalogStore<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> CatalogStore<'c> {
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self { conn }
    }

    /// Products joined with their category name, newest first
    ///
    /// Names are matched in Rust rather than with `LIKE`, which only folds
    /// ASCII case in SQLite.
    pub async fn list_products(
        &mut self,
        filter: Option<&SearchFilter>,
    ) -> Result<Vec<ProductListing>> {
        let mut products = sqlx::query_as::<_, ProductListing>(LIST_PRODUCTS)
            .fetch_all(&mut *self.conn)
            .await?;

        if let Some(filter) = filter {
            products.retain(|p| {
                filter.matches_any([Some(p.nombre.as_str()), p.categoria_nombre.as_deref()])
            });
        }

        Ok(products)
    }

    /// Categories by name, or in insertion order when searching
    pub async fn list_categories(
        &mut self,
        filter: Option<&SearchFilter>,
    ) -> Result<Vec<Category>> {
        let Some(filter) = filter else {
            let categories = sqlx::query_as::<_, Category>(CATEGORIES_BY_NAME)
                .fetch_all(&mut *self.conn)
                .await?;
            return Ok(categories);
        };

        let mut categories = sqlx::query_as::<_, Category>(CATEGORIES_BY_ID)
            .fetch_all(&mut *self.conn)
            .await?;
        categories.retain(|c| filter.matches(&c.nombre));

        Ok(categories)
    }

    pub async fn get_product(&mut self, id: i64) -> Result<Product> {
        sqlx::query_as::<_, Product>(
            "SELECT id, nombre, precio, img, categoria_id FROM productos WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?
        .ok_or_else(|| AppError::NotFound(ERR_PRODUCT_NOT_FOUND.to_string()))
    }

    /// Insert a product and return its id
    pub async fn create_product(&mut self, input: &ProductInput) -> Result<i64> {
        self.require_category(input.categoria_id).await?;

        let id = sqlx::query(
            "INSERT INTO productos (nombre, precio, img, categoria_id) VALUES (?, ?, ?, ?)",
        )
        .bind(&input.nombre)
        .bind(input.precio)
        .bind(&input.img)
        .bind(input.categoria_id)
        .execute(&mut *self.conn)
        .await?
        .last_insert_rowid();

        tracing::info!("Product {} created: {}", id, input.nombre);

        Ok(id)
    }

    /// Overwrite a product's fields, keeping the stored image when none is given
    pub async fn update_product(&mut self, id: i64, input: &ProductInput) -> Result<()> {
        self.get_product(id).await?;
        self.require_category(input.categoria_id).await?;

        sqlx::query(
            r"
            UPDATE productos
            SET nombre = ?, precio = ?, img = COALESCE(?, img), categoria_id = ?
            WHERE id = ?
            ",
        )
        .bind(&input.nombre)
        .bind(input.precio)
        .bind(&input.img)
        .bind(input.categoria_id)
        .bind(id)
        .execute(&mut *self.conn)
        .await?;

        tracing::info!("Product {} updated", id);

        Ok(())
    }

    /// Delete a product; unknown ids are not an error
    pub async fn delete_product(&mut self, id: i64) -> Result<()> {
        let deleted = sqlx::query("DELETE FROM productos WHERE id = ?")
            .bind(id)
            .execute(&mut *self.conn)
            .await?
            .rows_affected();

        if deleted == 0 {
            tracing::debug!("Delete of missing product {} ignored", id);
        } else {
            tracing::info!("Product {} deleted", id);
        }

        Ok(())
    }

    /// Insert a category and return its id
    pub async fn create_category(&mut self, nombre: &str) -> Result<i64> {
        let nombre = Category::validate_name(nombre).ok_or_else(|| {
            AppError::Validation("El nombre de la categoría es obligatorio".to_string())
        })?;

        let result = sqlx::query("INSERT INTO categorias (nombre) VALUES (?)")
            .bind(nombre)
            .execute(&mut *self.conn)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(ref db_err) = e {
                    if db_err.is_unique_violation() {
                        return AppError::Validation(format!("La categoría {nombre} ya existe"));
                    }
                }
                AppError::Database(e)
            })?;

        Ok(result.last_insert_rowid())
    }

    async fn require_category(&mut self, categoria_id: i64) -> Result<()> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM categorias WHERE id = ?)")
                .bind(categoria_id)
                .fetch_one(&mut *self.conn)
                .await?;

        if !exists {
            tracing::warn!("Rejected product with unknown category {}", categoria_id);
            return Err(AppError::Validation(ERR_UNKNOWN_CATEGORY.to_string()));
        }

        Ok(())
    }
}
