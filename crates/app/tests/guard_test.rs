use std::sync::Arc;

use barberbook_app::guard::{AuthGuard, Page};
use barberbook_client::mock::MockApi;
use barberbook_core::errors::BookingError;
use barberbook_core::models::user::{AuthResponse, User, UserRole};
use barberbook_core::session::Session;
use barberbook_store::mock::MemoryStore;
use barberbook_store::{SessionStore, TOKEN_KEY, save_session};
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;

fn forge_token(exp: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let payload =
        URL_SAFE_NO_PAD.encode(serde_json::json!({ "sub": "42", "exp": exp }).to_string());
    format!("{header}.{payload}.sig")
}

fn user(role: UserRole) -> User {
    serde_json::from_value(serde_json::json!({
        "id": 42,
        "email": "jane@example.com",
        "role": match role {
            UserRole::Customer => "CUSTOMER",
            UserRole::Staff => "STAFF",
            UserRole::ShopOwner => "SHOP_OWNER",
        },
        "firstName": "Jane",
        "lastName": "Doe"
    }))
    .unwrap()
}

fn store_with_session(exp: i64) -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::new());
    let session = Session {
        access_token: forge_token(exp),
        refresh_token: Some("refresh-token".to_string()),
        user: user(UserRole::Customer),
    };
    save_session(store.as_ref(), &session).unwrap();
    store
}

#[test]
fn valid_token_passes_the_guard() {
    let now = Utc.with_ymd_and_hms(2025, 11, 17, 10, 0, 0).unwrap();
    let store = store_with_session(now.timestamp() + 3600);
    let guard = AuthGuard::new(store);

    let session = guard.check_auth(now).unwrap().expect("session expected");
    assert_eq!(session.user.first_name, "Jane");
}

#[test]
fn expired_token_behaves_like_no_token_and_clears_credentials() {
    let now = Utc.with_ymd_and_hms(2025, 11, 17, 10, 0, 0).unwrap();
    let store = store_with_session(now.timestamp() - 60);
    let guard = AuthGuard::new(store.clone());

    assert!(guard.check_auth(now).unwrap().is_none());
    // The lazy expiry check doubles as logout.
    assert!(store.get(TOKEN_KEY).unwrap().is_none());
    assert!(store.is_empty());
}

#[test]
fn garbage_token_is_treated_as_expired() {
    let now = Utc.with_ymd_and_hms(2025, 11, 17, 10, 0, 0).unwrap();
    let store = Arc::new(MemoryStore::new());
    let session = Session {
        access_token: "garbage".to_string(),
        refresh_token: None,
        user: user(UserRole::Customer),
    };
    save_session(store.as_ref(), &session).unwrap();

    let guard = AuthGuard::new(store.clone());
    assert!(guard.check_auth(now).unwrap().is_none());
    assert!(store.is_empty());
}

#[test]
fn require_auth_records_the_intended_destination() {
    let now = Utc.with_ymd_and_hms(2025, 11, 17, 10, 0, 0).unwrap();
    let store = Arc::new(MemoryStore::new());
    let guard = AuthGuard::new(store);

    let err = guard
        .require_auth("booking?shopId=3&serviceId=9", now)
        .unwrap_err();
    assert!(matches!(err, BookingError::Authentication(_)));

    assert_eq!(
        guard.post_login_destination().unwrap().as_deref(),
        Some("booking?shopId=3&serviceId=9")
    );
    // Consumed on read.
    assert!(guard.post_login_destination().unwrap().is_none());
}

#[test]
fn logout_clears_and_lands_on_the_public_view() {
    let now = Utc.with_ymd_and_hms(2025, 11, 17, 10, 0, 0).unwrap();
    let store = store_with_session(now.timestamp() + 3600);
    let guard = AuthGuard::new(store.clone());

    assert_eq!(guard.logout().unwrap(), Page::Landing);
    assert!(store.is_empty());
    assert!(guard.check_auth(now).unwrap().is_none());
}

#[test]
fn landing_page_depends_on_role() {
    assert_eq!(
        AuthGuard::landing_for(&user(UserRole::Customer)),
        Page::Dashboard
    );
    assert_eq!(AuthGuard::landing_for(&user(UserRole::Staff)), Page::Dashboard);
    assert_eq!(
        AuthGuard::landing_for(&user(UserRole::ShopOwner)),
        Page::OwnerDashboard
    );
}

#[tokio::test]
async fn near_expiry_token_is_refreshed() {
    let now = Utc.with_ymd_and_hms(2025, 11, 17, 10, 0, 0).unwrap();
    let store = store_with_session(now.timestamp() + 120);
    let guard = AuthGuard::new(store.clone());

    let fresh = forge_token(now.timestamp() + 3600);
    let fresh_for_mock = fresh.clone();
    let mut api = MockApi::new();
    api.expect_refresh()
        .withf(|request| request.refresh_token == "refresh-token")
        .returning(move |_| {
            Ok(AuthResponse {
                access_token: fresh_for_mock.clone(),
                token_type: Some("Bearer".to_string()),
                expires_in: Some(3600),
                refresh_token: None,
                user: user(UserRole::Customer),
            })
        });

    assert!(guard.refresh_if_needed(&api, now).await.unwrap());
    assert_eq!(store.get(TOKEN_KEY).unwrap().as_deref(), Some(fresh.as_str()));
}

#[tokio::test]
async fn fresh_token_skips_the_refresh_call() {
    let now = Utc.with_ymd_and_hms(2025, 11, 17, 10, 0, 0).unwrap();
    let store = store_with_session(now.timestamp() + 3600);
    let guard = AuthGuard::new(store);

    let mut api = MockApi::new();
    api.expect_refresh().times(0);

    assert!(!guard.refresh_if_needed(&api, now).await.unwrap());
}
