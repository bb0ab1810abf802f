//! In-memory session management.
//!
//! ARCHITECTURE
//! ============
//! A successful demo login mints a random token that the browser carries in
//! an HttpOnly cookie. The token maps to the authenticated [`Role`] in a
//! process-local table; restarting the server signs everyone out.
//!
//! TRADE-OFFS
//! ==========
//! Expired sessions are evicted on lookup and whenever a new session is
//! created, instead of by a sweeper task. Each identity holds at most one
//! session: a fresh login replaces the previous one, so the table never holds
//! more entries than there are sign-in identities.

use std::collections::HashMap;
use std::fmt::Write;
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::Rng;
use serde::Serialize;
use tokio::sync::RwLock;
use views::Role;
use views::model::UserRole;

/// Upper bound applied when the configured TTL overflows the clock.
const MAX_TTL: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Token -> session table shared by every handler.
pub type SessionStore = Arc<RwLock<HashMap<String, Session>>>;

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub email: String,
    pub role: Role,
    pub expires_at: Instant,
}

impl Session {
    fn is_live(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// Signed-in user as reported to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionUser {
    pub email: String,
    pub role: UserRole,
    /// Set only for restaurant admins.
    pub restaurant_id: Option<String>,
    /// Landing path for this role.
    pub home: &'static str,
}

impl SessionUser {
    #[must_use]
    pub fn new(email: &str, role: &Role) -> Self {
        Self {
            email: email.to_owned(),
            role: role.user_role(),
            restaurant_id: role.tenant().map(str::to_owned),
            home: role.home().path(),
        }
    }
}

impl From<&Session> for SessionUser {
    fn from(session: &Session) -> Self {
        Self::new(&session.email, &session.role)
    }
}

/// Create a session for `role`, returning the token.
///
/// Expired sessions and any earlier session of the same identity are dropped.
pub async fn create_session(store: &SessionStore, email: &str, role: Role, ttl: Duration) -> String {
    let token = generate_token();
    let now = Instant::now();
    let expires_at = now.checked_add(ttl).unwrap_or(now + MAX_TTL);

    let mut sessions = store.write().await;
    sessions.retain(|_, s| s.is_live(now) && !(s.email == email && s.role == role));
    sessions.insert(token.clone(), Session { email: email.to_owned(), role, expires_at });
    token
}

/// Look up a live session. Expired entries are removed.
pub async fn validate_session(store: &SessionStore, token: &str) -> Option<Session> {
    let now = Instant::now();
    {
        let sessions = store.read().await;
        match sessions.get(token) {
            None => return None,
            Some(session) if session.is_live(now) => return Some(session.clone()),
            Some(_) => {}
        }
    }

    store.write().await.remove(token);
    None
}

/// Delete a session by token. Unknown tokens are ignored.
pub async fn delete_session(store: &SessionStore, token: &str) {
    store.write().await.remove(token);
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
