//! Cached-session helpers: JWT claims decoding and expiry checks.
//!
//! End-to-end suites authenticate once and park the resulting JWT in the
//! config store; before each run the token is checked here so a still-valid
//! session skips the login flow. Only the payload segment is decoded; no
//! signature verification happens (the token is our own, freshly issued by
//! the app under test).

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Payload claims of a session JWT.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Expiry as seconds since the Unix epoch.
    pub exp: i64,

    /// Identity the token was issued to.
    pub user_id: String,

    /// Roles granted to the session.
    #[serde(default)]
    pub roles: Vec<String>,
}

impl Claims {
    /// Expiry instant of the token.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or(DateTime::UNIX_EPOCH)
    }

    /// Whether the token has expired as of now.
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at()
    }
}

/// Decode the payload claims of a JWT without verifying its signature.
///
/// Fails with [`Error::InvalidToken`] when the token has no payload segment,
/// the segment is not base64url, or the payload is not the expected JSON.
pub fn decode_claims(token: &str) -> Result<Claims> {
    let payload = token
        .split('.')
        .nth(1)
        .ok_or_else(|| Error::InvalidToken("missing payload segment".to_string()))?;

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| Error::InvalidToken(format!("payload is not base64url: {e}")))?;

    serde_json::from_slice(&bytes)
        .map_err(|e| Error::InvalidToken(format!("payload is not valid claims JSON: {e}")))
}

/// Check whether a cached token still authenticates a session.
///
/// A missing, empty, or undecodable token counts as expired so the caller
/// falls back to a fresh login. Logs the decoded identity the way the auth
/// setup always has.
pub fn is_expired(token: Option<&str>) -> bool {
    let token = match token {
        Some(t) if !t.is_empty() => t,
        _ => return true,
    };

    let claims = match decode_claims(token) {
        Ok(claims) => claims,
        Err(e) => {
            warn!("cached token is unusable: {e}");
            return true;
        }
    };

    let expired = claims.is_expired();
    info!(
        "logging in as: {} with roles: {:?}",
        claims.user_id, claims.roles
    );
    info!("token is {}expired", if expired { "" } else { "not " });

    expired
}
