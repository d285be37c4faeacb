use barberbook_core::models::user::{User, UserRole};
use barberbook_core::session::Session;
use barberbook_store::mock::MemoryStore;
use barberbook_store::{
    FileSessionStore, REDIRECT_KEY, SessionStore, TOKEN_KEY, USER_KEY, clear_session,
    load_session, save_session, save_user, set_redirect, take_redirect,
};
use fake::Fake;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::{FirstName, LastName};
use pretty_assertions::assert_eq;

fn fake_user() -> User {
    User {
        id: (1i64..10_000).fake(),
        email: SafeEmail().fake(),
        role: UserRole::Customer,
        first_name: FirstName().fake(),
        last_name: LastName().fake(),
        phone: Some("+3531234567".to_string()),
        is_active: Some(true),
        created_at: None,
        updated_at: None,
    }
}

fn fake_session() -> Session {
    Session {
        access_token: "header.payload.signature".to_string(),
        refresh_token: Some("refresh-token".to_string()),
        user: fake_user(),
    }
}

#[test]
fn memory_store_round_trips_a_session() {
    let store = MemoryStore::new();
    let session = fake_session();

    save_session(&store, &session).unwrap();
    let loaded = load_session(&store).unwrap().expect("session should load");

    assert_eq!(loaded.access_token, session.access_token);
    assert_eq!(loaded.refresh_token, session.refresh_token);
    assert_eq!(loaded.user.email, session.user.email);
}

#[test]
fn session_requires_both_token_and_user() {
    let store = MemoryStore::new();
    store.set(TOKEN_KEY, "just-a-token").unwrap();
    assert!(load_session(&store).unwrap().is_none());

    let store = MemoryStore::new();
    store.set(USER_KEY, "{}").unwrap();
    assert!(load_session(&store).unwrap().is_none());
}

#[test]
fn unreadable_user_profile_discards_the_session() {
    let store = MemoryStore::new();
    store.set(TOKEN_KEY, "token").unwrap();
    store.set(USER_KEY, "not json").unwrap();

    assert!(load_session(&store).unwrap().is_none());
    // The stale credentials were cleared along the way.
    assert!(store.get(TOKEN_KEY).unwrap().is_none());
}

#[test]
fn clear_session_removes_every_credential_key() {
    let store = MemoryStore::new();
    save_session(&store, &fake_session()).unwrap();
    assert!(!store.is_empty());

    clear_session(&store).unwrap();
    assert!(store.is_empty());
    assert!(load_session(&store).unwrap().is_none());
}

#[test]
fn redirect_target_is_consumed_on_read() {
    let store = MemoryStore::new();
    set_redirect(&store, "booking?shopId=3&serviceId=9").unwrap();

    assert_eq!(
        take_redirect(&store).unwrap().as_deref(),
        Some("booking?shopId=3&serviceId=9")
    );
    assert!(take_redirect(&store).unwrap().is_none());
    assert!(store.get(REDIRECT_KEY).unwrap().is_none());
}

#[test]
fn save_user_replaces_only_the_profile() {
    let store = MemoryStore::new();
    let session = fake_session();
    save_session(&store, &session).unwrap();

    let mut updated = session.user.clone();
    updated.first_name = "Renamed".to_string();
    save_user(&store, &updated).unwrap();

    let loaded = load_session(&store).unwrap().unwrap();
    assert_eq!(loaded.user.first_name, "Renamed");
    assert_eq!(loaded.access_token, session.access_token);
}

#[test]
fn file_store_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let session = fake_session();
    {
        let store = FileSessionStore::open(&path).unwrap();
        save_session(&store, &session).unwrap();
    }

    let store = FileSessionStore::open(&path).unwrap();
    let loaded = load_session(&store).unwrap().expect("session should persist");
    assert_eq!(loaded.user.id, session.user.id);
    assert_eq!(loaded.access_token, session.access_token);
}

#[test]
fn file_store_remove_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    {
        let store = FileSessionStore::open(&path).unwrap();
        save_session(&store, &fake_session()).unwrap();
        clear_session(&store).unwrap();
    }

    let store = FileSessionStore::open(&path).unwrap();
    assert!(load_session(&store).unwrap().is_none());
}

#[test]
fn file_store_rejects_corrupt_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "not json at all").unwrap();

    assert!(FileSessionStore::open(&path).is_err());
}
