use serde::{Deserialize, Serialize};

/// User row as stored; `password` holds the peppered digest
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub nombre: String,
    pub email: String,
    pub password: String,
}

impl User {
    /// Minimal email shape check: something on both sides of a single `@`
    pub fn validate_email(email: &str) -> bool {
        match email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && !domain.is_empty()
                    && !domain.contains('@')
                    && !email.chars().any(char::is_whitespace)
            }
            None => false,
        }
    }

    /// Session identity for this user
    pub fn identity(&self) -> Identity {
        Identity {
            nombre: self.nombre.clone(),
            email: self.email.clone(),
        }
    }
}

/// Authenticated identity stored in the session
///
/// Handlers receive it explicitly and pass it down to the use-cases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub nombre: String,
    pub email: String,
}

/// Login form (`username` carries the email)
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Registration form
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub nombre: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(User::validate_email("a@b.com"));
        assert!(User::validate_email("admin@pixsoft.com"));

        assert!(!User::validate_email(""));
        assert!(!User::validate_email("no-at-sign"));
        assert!(!User::validate_email("@b.com"));
        assert!(!User::validate_email("a@"));
        assert!(!User::validate_email("a@b@c"));
        assert!(!User::validate_email("a b@c.com"));
    }

    #[test]
    fn test_identity_from_user() {
        let user = User {
            id: 1,
            nombre: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            password: "digest".to_string(),
        };

        let identity = user.identity();
        assert_eq!(identity.nombre, "Ana");
        assert_eq!(identity.email, "ana@example.com");
    }
}
