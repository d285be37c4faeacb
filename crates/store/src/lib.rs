//! # BarberBook Session Store
//!
//! Local key/value persistence for the client's session state: the access
//! token, the refresh token, and the serialized user profile, each under a
//! fixed key name. [`SessionStore`] is the string KV seam; [`FileSessionStore`]
//! backs it with a JSON file on disk, and [`mock::MemoryStore`] keeps
//! everything in memory for tests and ephemeral runs.
//!
//! The typed helpers ([`save_session`], [`load_session`], [`clear_session`])
//! are the only code that should touch the raw keys: a session is considered
//! present only when both the token and the user profile are stored.

pub mod file;
pub mod mock;

use barberbook_core::errors::BookingResult;
use barberbook_core::models::user::User;
use barberbook_core::session::Session;
use eyre::WrapErr;

pub use file::FileSessionStore;

/// Key holding the bearer access token.
pub const TOKEN_KEY: &str = "barberbook_token";
/// Key holding the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "barberbook_refresh_token";
/// Key holding the serialized user profile.
pub const USER_KEY: &str = "barberbook_user";
/// Key holding the page to return to after a forced login.
pub const REDIRECT_KEY: &str = "redirectAfterLogin";

/// String key/value store with the semantics of browser local storage.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> BookingResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> BookingResult<()>;
    fn remove(&self, key: &str) -> BookingResult<()>;
}

/// Persist a session under the fixed keys.
pub fn save_session(store: &dyn SessionStore, session: &Session) -> BookingResult<()> {
    store.set(TOKEN_KEY, &session.access_token)?;
    match &session.refresh_token {
        Some(refresh) => store.set(REFRESH_TOKEN_KEY, refresh)?,
        None => store.remove(REFRESH_TOKEN_KEY)?,
    }
    let user_json =
        serde_json::to_string(&session.user).wrap_err("failed to serialize user profile")?;
    store.set(USER_KEY, &user_json)?;
    Ok(())
}

/// Load the stored session, if both the token and the user profile are
/// present. A stored profile that no longer parses is treated as absent.
pub fn load_session(store: &dyn SessionStore) -> BookingResult<Option<Session>> {
    let Some(token) = store.get(TOKEN_KEY)? else {
        return Ok(None);
    };
    let Some(user_json) = store.get(USER_KEY)? else {
        return Ok(None);
    };

    let user: User = match serde_json::from_str(&user_json) {
        Ok(user) => user,
        Err(err) => {
            tracing::warn!("Stored user profile is unreadable, discarding session: {err}");
            clear_session(store)?;
            return Ok(None);
        }
    };

    Ok(Some(Session {
        access_token: token,
        refresh_token: store.get(REFRESH_TOKEN_KEY)?,
        user,
    }))
}

/// Replace just the stored user profile (after a profile update).
pub fn save_user(store: &dyn SessionStore, user: &User) -> BookingResult<()> {
    let user_json = serde_json::to_string(user).wrap_err("failed to serialize user profile")?;
    store.set(USER_KEY, &user_json)
}

/// Replace just the stored access token (after a refresh).
pub fn save_access_token(store: &dyn SessionStore, token: &str) -> BookingResult<()> {
    store.set(TOKEN_KEY, token)
}

/// Remove every credential key. Equivalent to logout.
pub fn clear_session(store: &dyn SessionStore) -> BookingResult<()> {
    store.remove(TOKEN_KEY)?;
    store.remove(REFRESH_TOKEN_KEY)?;
    store.remove(USER_KEY)?;
    Ok(())
}

/// Remember where to send the user after they log in.
pub fn set_redirect(store: &dyn SessionStore, destination: &str) -> BookingResult<()> {
    store.set(REDIRECT_KEY, destination)
}

/// Consume the stored post-login destination, if any.
pub fn take_redirect(store: &dyn SessionStore) -> BookingResult<Option<String>> {
    let destination = store.get(REDIRECT_KEY)?;
    if destination.is_some() {
        store.remove(REDIRECT_KEY)?;
    }
    Ok(destination)
}
