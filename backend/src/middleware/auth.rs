use actix_web::HttpRequest;
use sha2::{Digest, Sha256};

/// Check the shared app secret carried in the Authorization header.
pub fn authorize(req: &HttpRequest, app_secret: &str) -> Result<(), AuthMiddlewareError> {
    let auth_header = req
        .headers()
        .get("Authorization")
        .ok_or(AuthMiddlewareError::MissingSecret)?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| AuthMiddlewareError::InvalidSecret)?;

    let secret = auth_str
        .strip_prefix("Bearer ")
        .ok_or(AuthMiddlewareError::InvalidSecret)?;

    // Fixed-size digest comparison so the check does not vary with the
    // length of the presented secret.
    if fingerprint(secret) != fingerprint(app_secret) {
        return Err(AuthMiddlewareError::InvalidSecret);
    }

    Ok(())
}

fn fingerprint(secret: &str) -> [u8; 32] {
    Sha256::digest(secret.as_bytes()).into()
}

#[derive(Debug)]
pub enum AuthMiddlewareError {
    MissingSecret,
    InvalidSecret,
}

impl std::fmt::Display for AuthMiddlewareError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthMiddlewareError::MissingSecret => write!(f, "Missing app secret"),
            AuthMiddlewareError::InvalidSecret => write!(f, "Invalid app secret"),
        }
    }
}

impl std::error::Error for AuthMiddlewareError {}
