/// Admin identity used when `ADMIN_EMAIL` is not configured
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@pixsoft.com";

/// Session key under which the logged-in [`Identity`](crate::models::Identity) lives
pub const SESSION_IDENTITY_KEY: &str = "identity";

/// Session inactivity expiry (7 days)
pub const SESSION_EXPIRY_SECS: i64 = 7 * 24 * 60 * 60;

/// Where unauthenticated page requests are sent
pub const LOGIN_PATH: &str = "/auth/login";

// =============================================================================
// Error Messages
// =============================================================================

/// Checkout rejection when nobody is logged in
pub const ERR_LOGIN_REQUIRED: &str = "Debes iniciar sesión";

/// Plain-text body for non-admin access to the admin panel
pub const ERR_FORBIDDEN: &str = "No tienes permisos";

/// Checkout rejection for an empty cart payload
pub const ERR_EMPTY_CART: &str = "El carrito está vacío";

/// Login failure
pub const ERR_INVALID_CREDENTIALS: &str = "Usuario o contraseña incorrectos";

/// Registration failure when both password fields differ
pub const ERR_PASSWORD_MISMATCH: &str = "Las contraseñas no coinciden";

/// Registration failure for an email already on file
pub const ERR_EMAIL_TAKEN: &str = "El correo ya está registrado";

/// Product form with a blank required field
pub const ERR_MISSING_FIELDS: &str = "Completa todos los campos";

/// Product form whose category id does not resolve
pub const ERR_UNKNOWN_CATEGORY: &str = "La categoría seleccionada no existe";

/// Product lookup miss
pub const ERR_PRODUCT_NOT_FOUND: &str = "Producto no encontrado";
