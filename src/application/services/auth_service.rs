//! Authentication service for admin Basic credentials.

use crate::error::AppError;
use hmac::{Hmac, Mac};
use serde_json::json;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

const CREDENTIAL_MAC_KEY: &[u8] = b"tax-service admin credentials";

/// Service for authenticating admin requests.
///
/// A single username/password pair is configured at startup from
/// `ADMIN_USERNAME` and `ADMIN_PASSWORD`. Only an HMAC-SHA256 tag of the pair
/// is kept, and presented credentials are checked with a constant-time tag
/// comparison.
pub struct AuthService {
    expected_tag: Vec<u8>,
}

impl AuthService {
    /// Creates a new authentication service.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        let expected_tag = credential_mac(&username.into(), &password.into())
            .finalize()
            .into_bytes()
            .to_vec();

        Self { expected_tag }
    }

    /// Checks a username and optional password against the configured pair.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if either part does not match or the
    /// password is absent.
    pub fn authenticate(&self, username: &str, password: Option<&str>) -> Result<(), AppError> {
        let valid = password.is_some_and(|password| {
            credential_mac(username, password)
                .verify_slice(&self.expected_tag)
                .is_ok()
        });

        if !valid {
            tracing::warn!("Rejected admin credentials for user '{}'", username);
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Invalid admin credentials"}),
            ));
        }

        Ok(())
    }
}

/// MAC over length-prefixed username and password, so `("ab", "c")` and
/// `("a", "bc")` produce different tags.
fn credential_mac(username: &str, password: &str) -> HmacSha256 {
    let mut mac =
        HmacSha256::new_from_slice(CREDENTIAL_MAC_KEY).expect("HMAC accepts any key length");
    for part in [username, password] {
        mac.update(&(part.len() as u64).to_be_bytes());
        mac.update(part.as_bytes());
    }
    mac
}
