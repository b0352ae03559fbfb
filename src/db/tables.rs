//! Tables outside the migration set.
//!
//! `categorias`, `productos` and `usuarios` come from `migrations/`. The order
//! ledger is materialized on first checkout instead.

/// Order ledger table name
pub const ORDERS: &str = "pedidos";

/// DDL for the order ledger
pub const CREATE_ORDERS: &str = r#"
    CREATE TABLE IF NOT EXISTS pedidos (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_email TEXT NOT NULL,
        producto_id INTEGER,
        nombre TEXT,
        precio REAL NOT NULL,
        cantidad INTEGER NOT NULL,
        subtotal REAL NOT NULL,
        fecha TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
"#;
