use serde::{Deserialize, Serialize};

/// Product category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    pub nombre: String,
}

impl Category {
    /// Normalize a category name, rejecting blank input
    pub fn validate_name(name: &str) -> Option<&str> {
        let trimmed = name.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}
