//! # Session State
//!
//! Client-side view of an authenticated session: the bearer token, the
//! optional refresh token, and the cached user profile. The access token is
//! a JWT issued by the user service; this module only *inspects* its expiry
//! claim. It never verifies the signature, because the client does not
//! hold the signing secret and the backend re-validates every call anyway.
//!
//! Session lifecycle:
//!
//! - **Unauthenticated**: no stored credentials
//! - **Authenticated**: stored token with an expiry still in the future
//! - **Expired**: stored token whose expiry claim is in the past (or whose
//!   claims cannot be decoded at all), externally indistinguishable from
//!   Unauthenticated once the guard has cleared the stale credentials

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{BookingError, BookingResult};
use crate::models::user::User;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user: User,
}

/// Claims carried in the access token payload. Only `exp` matters to the
/// client; the rest is kept for diagnostics.
#[derive(Debug, Clone, Deserialize)]
pub struct Claims {
    #[serde(default)]
    pub sub: Option<serde_json::Value>,
    #[serde(default)]
    pub role: Option<String>,
    pub exp: i64,
    #[serde(default)]
    pub iat: Option<i64>,
}

/// Decode the claims segment of a JWT without verifying the signature.
pub fn decode_claims(token: &str) -> BookingResult<Claims> {
    let payload = token
        .split('.')
        .nth(1)
        .ok_or_else(|| BookingError::Authentication("malformed access token".to_string()))?;

    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| BookingError::Authentication("undecodable token payload".to_string()))?;

    serde_json::from_slice(&bytes)
        .map_err(|_| BookingError::Authentication("unreadable token claims".to_string()))
}

impl Session {
    /// True when the token's expiry claim is in the past. A token whose
    /// claims cannot be decoded counts as expired.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match decode_claims(&self.access_token) {
            Ok(claims) => claims.exp < now.timestamp(),
            Err(_) => true,
        }
    }

    /// True when the token expires within `window` of `now`. Drives the
    /// proactive refresh call.
    pub fn expires_within(&self, now: DateTime<Utc>, window: Duration) -> bool {
        match decode_claims(&self.access_token) {
            Ok(claims) => claims.exp - now.timestamp() < window.num_seconds(),
            Err(_) => true,
        }
    }
}

#[derive(Debug, Clone)]
pub enum SessionState {
    Unauthenticated,
    Authenticated(Session),
    Expired,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }
}

/// Classify a (possibly absent) stored session at a given instant.
pub fn evaluate(session: Option<Session>, now: DateTime<Utc>) -> SessionState {
    match session {
        None => SessionState::Unauthenticated,
        Some(session) if session.is_expired(now) => SessionState::Expired,
        Some(session) => SessionState::Authenticated(session),
    }
}
