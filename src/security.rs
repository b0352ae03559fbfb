use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

// =============================================================================
// Password Digests
// =============================================================================

/// Compute the stored form of a password
///
/// The digest is `HMAC-SHA256(key = pepper, data = password)` as lowercase hex.
/// The pepper lives in the environment, never in the database, so a leaked
/// `usuarios` table alone does not allow offline guessing.
pub fn digest_password(password: &str, pepper: &str) -> String {
    let mut mac = keyed_mac(pepper);
    mac.update(password.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Check a login attempt against a stored digest
///
/// Comparison is constant-time via `Mac::verify_slice`.
pub fn verify_password(password: &str, stored_digest: &str, pepper: &str) -> bool {
    let digest_bytes = match hex::decode(stored_digest) {
        Ok(bytes) => bytes,
        Err(_) => {
            tracing::warn!("Stored password digest is not valid hex");
            return false;
        }
    };

    let mut mac = keyed_mac(pepper);
    mac.update(password.as_bytes());
    mac.verify_slice(&digest_bytes).is_ok()
}

fn keyed_mac(pepper: &str) -> HmacSha256 {
    HmacSha256::new_from_slice(pepper.as_bytes()).expect("HMAC can take key of any size")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_format() {
        let digest = digest_password("hunter2", "pepper");

        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(digest, "hunter2");
    }

    #[test]
    fn test_digest_deterministic() {
        assert_eq!(
            digest_password("hunter2", "pepper"),
            digest_password("hunter2", "pepper")
        );
    }

    #[test]
    fn test_digest_depends_on_pepper() {
        assert_ne!(
            digest_password("hunter2", "pepper1"),
            digest_password("hunter2", "pepper2")
        );
    }

    #[test]
    fn test_verify_password() {
        let stored = digest_password("correct horse", "pepper");

        assert!(verify_password("correct horse", &stored, "pepper"));
        assert!(!verify_password("wrong horse", &stored, "pepper"));
        assert!(!verify_password("correct horse", &stored, "other-pepper"));
    }

    #[test]
    fn test_verify_rejects_malformed_digest() {
        assert!(!verify_password("anything", "not-hex!", "pepper"));
        assert!(!verify_password("anything", "", "pepper"));
    }
}
