use serde::{Deserialize, Serialize};

use crate::constants::ERR_MISSING_FIELDS;
use crate::error::AppError;

/// Product row as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub nombre: String,
    pub precio: f64,
    pub img: Option<String>,
    pub categoria_id: i64,
}

/// Product joined with its category name
///
/// `categoria_nombre` is `None` when the referenced category no longer exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ProductListing {
    pub id: i64,
    pub nombre: String,
    pub precio: f64,
    pub img: Option<String>,
    pub categoria_id: i64,
    pub categoria_nombre: Option<String>,
}

/// Raw admin form submission for creating or editing a product
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductForm {
    pub nombre: Option<String>,
    pub precio: Option<String>,
    /// Image filename or URL
    pub img: Option<String>,
    /// Category id as submitted by the select box
    pub categoria: Option<String>,
}

/// Validated product fields ready for the catalog store
#[derive(Debug, Clone, PartialEq)]
pub struct ProductInput {
    pub nombre: String,
    pub precio: f64,
    pub img: Option<String>,
    pub categoria_id: i64,
}

impl ProductInput {
    /// Validate a form submission field by field
    ///
    /// Category existence is checked later by the store, which owns that data.
    pub fn parse(form: ProductForm) -> Result<Self, AppError> {
        let nombre = non_blank(form.nombre);
        let precio = non_blank(form.precio);
        let categoria = non_blank(form.categoria);

        let (Some(nombre), Some(precio), Some(categoria)) = (nombre, precio, categoria) else {
            return Err(AppError::Validation(ERR_MISSING_FIELDS.to_string()));
        };

        Ok(ProductInput {
            nombre,
            precio: parse_price(&precio)?,
            img: non_blank(form.img),
            categoria_id: categoria
                .parse()
                .map_err(|_| AppError::Validation("Categoría inválida".to_string()))?,
        })
    }
}

/// Parse a price field, rejecting anything that is not a finite non-negative number
pub fn parse_price(raw: &str) -> Result<f64, AppError> {
    let price: f64 = raw
        .trim()
        .parse()
        .map_err(|_| AppError::Validation("El precio debe ser un número".to_string()))?;

    if !price.is_finite() {
        return Err(AppError::Validation(
            "El precio debe ser un número".to_string(),
        ));
    }
    if price < 0.0 {
        return Err(AppError::Validation(
            "El precio no puede ser negativo".to_string(),
        ));
    }

    Ok(price)
}

fn non_blank(field: Option<String>) -> Option<String> {
    field
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(nombre: &str, precio: &str, categoria: &str) -> ProductForm {
        ProductForm {
            nombre: Some(nombre.to_string()),
            precio: Some(precio.to_string()),
            img: None,
            categoria: Some(categoria.to_string()),
        }
    }

    #[test]
    fn test_parse_valid_form() {
        let input = ProductInput::parse(ProductForm {
            img: Some("mouse.png".to_string()),
            ..form(" Mouse ", "12.5", "3")
        })
        .unwrap();

        assert_eq!(input.nombre, "Mouse");
        assert_eq!(input.precio, 12.5);
        assert_eq!(input.img.as_deref(), Some("mouse.png"));
        assert_eq!(input.categoria_id, 3);
    }

    #[test]
    fn test_parse_missing_fields() {
        let err = ProductInput::parse(form("", "10", "1")).unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m == ERR_MISSING_FIELDS));

        let err = ProductInput::parse(ProductForm::default()).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_parse_price_rejects_garbage() {
        assert!(matches!(
            ProductInput::parse(form("Mouse", "diez", "1")),
            Err(AppError::Validation(ref m)) if m.contains("número")
        ));
        assert!(parse_price("NaN").is_err());
        assert!(parse_price("inf").is_err());
        assert!(parse_price("-1").is_err());
    }

    #[test]
    fn test_parse_price_accepts_zero() {
        assert_eq!(parse_price("0").unwrap(), 0.0);
        assert_eq!(parse_price(" 19.99 ").unwrap(), 19.99);
    }

    #[test]
    fn test_parse_rejects_non_numeric_category() {
        assert!(matches!(
            ProductInput::parse(form("Mouse", "5", "abc")),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_blank_image_is_none() {
        let input = ProductInput::parse(ProductForm {
            img: Some("   ".to_string()),
            ..form("Mouse", "5", "1")
        })
        .unwrap();
        assert!(input.img.is_none());
    }
}
