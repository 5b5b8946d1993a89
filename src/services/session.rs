//! Admin session gate
//!
//! A single shared plaintext password unlocks the panel; a successful
//! login issues a random token kept in a process-local set and referenced
//! by a cookie. Tokens are transient: a restart logs everyone out. This
//! keeps the panel out of casual reach and is explicitly not an
//! access-control mechanism.

use std::collections::HashSet;
use std::sync::RwLock;

use uuid::Uuid;

/// In-memory set of live admin session tokens
pub struct AdminSessions {
    password: String,
    tokens: RwLock<HashSet<String>>,
}

impl AdminSessions {
    pub fn new(password: String) -> Self {
        Self {
            password,
            tokens: RwLock::new(HashSet::new()),
        }
    }

    /// Compare the attempt against the shared password; a match issues a
    /// new session token.
    pub fn login(&self, attempt: &str) -> Option<String> {
        if attempt != self.password {
            return None;
        }
        let token = Uuid::new_v4().to_string();
        self.tokens.write().unwrap().insert(token.clone());
        Some(token)
    }

    /// Whether a token belongs to a live session
    pub fn is_valid(&self, token: &str) -> bool {
        self.tokens.read().unwrap().contains(token)
    }

    /// Revoke a token; revoking an unknown token is a no-op
    pub fn logout(&self, token: &str) {
        self.tokens.write().unwrap().remove(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_accepts_only_the_shared_password() {
        let sessions = AdminSessions::new("sneha123".into());
        assert!(sessions.login("wrong").is_none());
        assert!(sessions.login("sneha123").is_some());
    }

    #[test]
    fn test_tokens_are_live_until_logout() {
        let sessions = AdminSessions::new("pw".into());
        let token = sessions.login("pw").unwrap();
        assert!(sessions.is_valid(&token));

        sessions.logout(&token);
        assert!(!sessions.is_valid(&token));
        // Revoking again is harmless
        sessions.logout(&token);
    }

    #[test]
    fn test_unknown_tokens_are_rejected() {
        let sessions = AdminSessions::new("pw".into());
        assert!(!sessions.is_valid("made-up"));
    }

    #[test]
    fn test_each_login_issues_a_fresh_token() {
        let sessions = AdminSessions::new("pw".into());
        let a = sessions.login("pw").unwrap();
        let b = sessions.login("pw").unwrap();
        assert_ne!(a, b);
        assert!(sessions.is_valid(&a) && sessions.is_valid(&b));
    }
}
