//! # Authentication Guard
//!
//! Gate in front of every protected flow. The guard owns nothing but a
//! handle to the session store; the expiry decision itself lives in
//! `barberbook_core::session` so it stays a pure function of the token and
//! the clock.
//!
//! State transitions, matching the session lifecycle:
//!
//! - a successful login (see `workflows::auth`) stores credentials:
//!   Unauthenticated → Authenticated
//! - any guard check that finds the expiry claim in the past clears the
//!   stored credentials on the spot: Authenticated → Expired, which is
//!   externally identical to being logged out
//! - `logout` clears credentials and lands on the public view

use std::sync::Arc;

use barberbook_client::UserApi;
use barberbook_core::errors::{BookingError, BookingResult};
use barberbook_core::models::user::{RefreshTokenRequest, User, UserRole};
use barberbook_core::session::{Session, SessionState, evaluate};
use barberbook_store::{
    SessionStore, clear_session, load_session, save_access_token, set_redirect, take_redirect,
};
use chrono::{DateTime, Duration, Utc};
use tracing::{info, warn};

/// Destinations the app can land on. The console maps these to screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Landing,
    Dashboard,
    OwnerDashboard,
}

pub struct AuthGuard {
    store: Arc<dyn SessionStore>,
}

impl AuthGuard {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Current session, if a valid one is stored. Finding an expired or
    /// unreadable token clears the stored credentials before returning;
    /// that transition *is* the logout.
    pub fn check_auth(&self, now: DateTime<Utc>) -> BookingResult<Option<Session>> {
        let stored = load_session(self.store.as_ref())?;
        match evaluate(stored, now) {
            SessionState::Authenticated(session) => Ok(Some(session)),
            SessionState::Expired => {
                info!("Stored token has expired, clearing credentials");
                clear_session(self.store.as_ref())?;
                Ok(None)
            }
            SessionState::Unauthenticated => Ok(None),
        }
    }

    /// Demand a session for a protected flow. On failure the intended
    /// destination is remembered so login can return the user there.
    pub fn require_auth(&self, destination: &str, now: DateTime<Utc>) -> BookingResult<Session> {
        match self.check_auth(now)? {
            Some(session) => Ok(session),
            None => {
                set_redirect(self.store.as_ref(), destination)?;
                Err(BookingError::Authentication(
                    "Please login to continue.".to_string(),
                ))
            }
        }
    }

    /// Clear credentials and land on the public view.
    pub fn logout(&self) -> BookingResult<Page> {
        clear_session(self.store.as_ref())?;
        info!("Logged out");
        Ok(Page::Landing)
    }

    /// Where a freshly logged-in user should land.
    pub fn landing_for(user: &User) -> Page {
        match user.role {
            UserRole::ShopOwner => Page::OwnerDashboard,
            UserRole::Customer | UserRole::Staff => Page::Dashboard,
        }
    }

    /// The destination stored by a failed `require_auth`, consumed on read.
    pub fn post_login_destination(&self) -> BookingResult<Option<String>> {
        take_redirect(self.store.as_ref())
    }

    /// Refresh the access token when it expires within five minutes.
    /// Returns whether a refresh happened. A failed refresh is reported but
    /// not fatal; the next guard check will catch the actual expiry.
    pub async fn refresh_if_needed<A: UserApi + Sync>(
        &self,
        api: &A,
        now: DateTime<Utc>,
    ) -> BookingResult<bool> {
        let Some(session) = self.check_auth(now)? else {
            return Ok(false);
        };
        if !session.expires_within(now, Duration::minutes(5)) {
            return Ok(false);
        }
        let Some(refresh_token) = session.refresh_token.clone() else {
            return Ok(false);
        };

        match api.refresh(RefreshTokenRequest { refresh_token }).await {
            Ok(response) => {
                save_access_token(self.store.as_ref(), &response.access_token)?;
                info!("Access token refreshed");
                Ok(true)
            }
            Err(err) => {
                warn!("Token refresh failed: {err}");
                Ok(false)
            }
        }
    }
}
