use base64::Engine as _;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

const SIGNATURE_LEN: usize = 32;

/// Helper to create an HMAC instance, resolving trait ambiguity.
fn new_hmac(key: &[u8]) -> Result<HmacSha256, AppError> {
    <HmacSha256 as Mac>::new_from_slice(key)
        .map_err(|e| AppError::Crypto(format!("HMAC init failed: {e}")))
}

/// Issues anti-CSRF state values and signs the copy kept in the browser cookie.
///
/// The raw state goes to LinkedIn in the `state` query parameter; the cookie
/// carries `base64url(hmac || state)` so a forged cookie is rejected before
/// the comparison with the returned parameter.
pub struct StateSigner {
    key: Vec<u8>,
}

impl StateSigner {
    pub fn new(secret: &str) -> Self {
        Self {
            key: secret.as_bytes().to_vec(),
        }
    }

    /// A fresh random state value.
    pub fn generate(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }

    /// Sign a state value for the cookie. Returns base64url(hmac || state).
    pub fn sign(&self, state: &str) -> Result<String, AppError> {
        let mut mac = new_hmac(&self.key)?;
        mac.update(state.as_bytes());
        let signature = mac.finalize().into_bytes();

        let mut combined = signature.to_vec();
        combined.extend_from_slice(state.as_bytes());

        Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(&combined))
    }

    /// Verify a signed cookie value and extract the state it carries.
    pub fn verify(&self, signed: &str) -> Result<String, AppError> {
        let combined = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .decode(signed)
            .map_err(|_| AppError::InvalidState)?;

        if combined.len() <= SIGNATURE_LEN {
            return Err(AppError::InvalidState);
        }

        let (signature, state_bytes) = combined.split_at(SIGNATURE_LEN);

        let mut mac = new_hmac(&self.key)?;
        mac.update(state_bytes);
        mac.verify_slice(signature)
            .map_err(|_| AppError::InvalidState)?;

        String::from_utf8(state_bytes.to_vec()).map_err(|_| AppError::InvalidState)
    }

    /// Check the `state` returned by LinkedIn against the signed cookie value.
    pub fn check(&self, returned: Option<&str>, cookie: Option<&str>) -> Result<(), AppError> {
        let (Some(returned), Some(cookie)) = (returned, cookie) else {
            return Err(AppError::InvalidState);
        };
        if returned.is_empty() {
            return Err(AppError::InvalidState);
        }

        let expected = self.verify(cookie)?;
        if expected != returned {
            return Err(AppError::InvalidState);
        }
        Ok(())
    }
}
