use super::*;

fn store() -> SessionStore {
    Arc::new(RwLock::new(HashMap::new()))
}

fn restaurant_admin() -> Role {
    Role::RestaurantAdmin { restaurant_id: "1".into() }
}

// =============================================================================
// bytes_to_hex
// =============================================================================

#[test]
fn bytes_to_hex_empty() {
    assert_eq!(bytes_to_hex(&[]), "");
}

#[test]
fn bytes_to_hex_leading_zero() {
    assert_eq!(bytes_to_hex(&[0x0a]), "0a");
}

#[test]
fn bytes_to_hex_multi_byte() {
    assert_eq!(bytes_to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
}

// =============================================================================
// generate_token
// =============================================================================

#[test]
fn generate_token_is_64_hex_chars() {
    let token = generate_token();
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_token_two_calls_differ() {
    assert_ne!(generate_token(), generate_token());
}

// =============================================================================
// session lifecycle
// =============================================================================

#[tokio::test]
async fn created_session_validates() {
    let store = store();
    let token = create_session(&store, "admin@nebula.ai", Role::SuperAdmin, Duration::from_secs(60)).await;

    let session = validate_session(&store, &token).await.expect("live session");
    assert_eq!(session.email, "admin@nebula.ai");
    assert_eq!(session.role, Role::SuperAdmin);
}

#[tokio::test]
async fn unknown_token_is_rejected() {
    assert!(validate_session(&store(), "nope").await.is_none());
}

#[tokio::test]
async fn expired_session_is_evicted() {
    let store = store();
    let token = create_session(&store, "restaurant@nebula.ai", restaurant_admin(), Duration::ZERO).await;

    assert!(validate_session(&store, &token).await.is_none());
    assert!(store.read().await.is_empty());
}

#[tokio::test]
async fn deleted_session_no_longer_validates() {
    let store = store();
    let token = create_session(&store, "admin@nebula.ai", Role::SuperAdmin, Duration::from_secs(60)).await;

    delete_session(&store, &token).await;
    assert!(validate_session(&store, &token).await.is_none());
    delete_session(&store, &token).await;
}

#[tokio::test]
async fn sessions_are_independent() {
    let store = store();
    let a = create_session(&store, "admin@nebula.ai", Role::SuperAdmin, Duration::from_secs(60)).await;
    let b = create_session(&store, "restaurant@nebula.ai", restaurant_admin(), Duration::from_secs(60)).await;

    delete_session(&store, &a).await;
    assert!(validate_session(&store, &b).await.is_some());
}

// =============================================================================
// SessionUser
// =============================================================================

#[test]
fn session_user_for_restaurant_admin() {
    let session = Session {
        email: "restaurant@nebula.ai".into(),
        role: restaurant_admin(),
        expires_at: Instant::now(),
    };
    let user = SessionUser::from(&session);
    assert_eq!(user.role, UserRole::RestaurantAdmin);
    assert_eq!(user.restaurant_id.as_deref(), Some("1"));
    assert_eq!(user.home, "/restaurant-dashboard");
}

#[test]
fn session_user_serializes() {
    let session = Session { email: "admin@nebula.ai".into(), role: Role::SuperAdmin, expires_at: Instant::now() };
    let json = serde_json::to_value(SessionUser::from(&session)).expect("json");
    assert_eq!(
        json,
        serde_json::json!({
            "email": "admin@nebula.ai",
            "role": "super_admin",
            "restaurant_id": null,
            "home": "/dashboard",
        })
    );
}

// =============================================================================
// table size
// =============================================================================

#[tokio::test]
async fn new_session_replaces_same_identity() {
    let store = store();
    let first = create_session(&store, "admin@nebula.ai", Role::SuperAdmin, Duration::from_secs(60)).await;
    let second = create_session(&store, "admin@nebula.ai", Role::SuperAdmin, Duration::from_secs(60)).await;

    assert!(validate_session(&store, &first).await.is_none());
    assert!(validate_session(&store, &second).await.is_some());
    assert_eq!(store.read().await.len(), 1);
}

#[tokio::test]
async fn new_session_prunes_expired_entries() {
    let store = store();
    let stale = create_session(&store, "restaurant@nebula.ai", restaurant_admin(), Duration::ZERO).await;
    create_session(&store, "admin@nebula.ai", Role::SuperAdmin, Duration::from_secs(60)).await;

    let sessions = store.read().await;
    assert_eq!(sessions.len(), 1);
    assert!(!sessions.contains_key(&stale));
}

#[tokio::test]
async fn repeated_logins_keep_table_bounded() {
    let store = store();
    for _ in 0..500 {
        create_session(&store, "admin@nebula.ai", Role::SuperAdmin, Duration::from_secs(60)).await;
        create_session(&store, "restaurant@nebula.ai", restaurant_admin(), Duration::from_secs(60)).await;
    }
    assert_eq!(store.read().await.len(), 2);
}
