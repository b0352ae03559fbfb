use std::env;

use crate::constants::DEFAULT_ADMIN_EMAIL;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub database_url: String,
    pub database_max_connections: u32,
    pub allowed_origins: Vec<String>,
    pub environment: String,
    /// Email of the single identity allowed into the admin panel
    pub admin_email: String,
    /// Server-side secret mixed into every stored password digest
    pub password_pepper: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if it exists (development)
        dotenvy::dotenv().ok();

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse()
            .map_err(|_| "Invalid SERVER_PORT")?;

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://./data/tienda.db".to_string());

        let database_max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .map_err(|_| "Invalid DATABASE_MAX_CONNECTIONS")?;

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5000".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        let admin_email =
            env::var("ADMIN_EMAIL").unwrap_or_else(|_| DEFAULT_ADMIN_EMAIL.to_string());

        let password_pepper = env::var("PASSWORD_PEPPER")
            .map_err(|_| "PASSWORD_PEPPER must be set for password hashing")?;

        Ok(Config {
            server_host,
            server_port,
            database_url,
            database_max_connections,
            allowed_origins,
            environment,
            admin_email,
            password_pepper,
        })
    }

    /// Get server address as string
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Whether session cookies should carry the `Secure` flag
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
