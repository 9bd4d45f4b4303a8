//! Client-side session bootstrap.
//!
//! On start-up the client restores its authentication state from a token
//! kept in local storage. The token payload is decoded without checking the
//! signature; the server verifies every request anyway.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};

/// Local storage key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "jwtToken";

/// Where the client is sent when its stored token has expired.
pub const LOGIN_PATH: &str = "/login";

/// Key/value storage that survives page reloads (browser local storage).
pub trait TokenStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// Errors raised while decoding a stored token.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Token is not a JWT")]
    Malformed,

    #[error("Token payload is not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),

    #[error("Token payload is not valid JSON: {0}")]
    Payload(#[from] serde_json::Error),
}

/// User information carried in the token payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    #[serde(rename = "sub")]
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub roles: Vec<String>,
    /// Expiration, seconds since the Unix epoch.
    pub exp: i64,
}

impl CurrentUser {
    pub fn is_expired(&self, now: i64) -> bool {
        self.exp < now
    }
}

/// Decode the payload segment of a JWT.
pub fn decode_token(token: &str) -> Result<CurrentUser, SessionError> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next(), segments.next()) {
        (Some(_), Some(payload), Some(_)) if segments.next().is_none() => payload,
        _ => return Err(SessionError::Malformed),
    };

    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Actions accepted by the auth state container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthAction {
    SetCurrentUser(CurrentUser),
    Logout,
}

/// Authentication state of the client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub user: Option<CurrentUser>,
    /// Value sent in the `Authorization` header of every API call.
    pub auth_header: Option<String>,
}

impl AuthState {
    pub fn reduce(self, action: AuthAction) -> Self {
        match action {
            AuthAction::SetCurrentUser(user) => Self {
                is_authenticated: true,
                user: Some(user),
                ..self
            },
            AuthAction::Logout => Self::default(),
        }
    }

    pub fn with_token(self, token: &str) -> Self {
        Self {
            auth_header: Some(format!("Bearer {token}")),
            ..self
        }
    }
}

/// Result of restoring the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bootstrap {
    pub state: AuthState,
    /// Set when the client must navigate away, e.g. to the login page.
    pub redirect: Option<&'static str>,
}

/// Log out: forget the stored token and reset the state.
pub fn logout(storage: &mut impl TokenStorage, state: AuthState) -> AuthState {
    storage.remove(TOKEN_STORAGE_KEY);
    state.reduce(AuthAction::Logout)
}

/// Restore authentication state from `storage`. `now` is seconds since the
/// Unix epoch.
pub fn bootstrap(storage: &mut impl TokenStorage, now: i64) -> Bootstrap {
    let Some(token) = storage.get(TOKEN_STORAGE_KEY) else {
        return Bootstrap {
            state: AuthState::default(),
            redirect: None,
        };
    };

    let state = AuthState::default().with_token(&token);
    let user = match decode_token(&token) {
        Ok(user) => user,
        Err(_) => {
            return Bootstrap {
                state: logout(storage, state),
                redirect: None,
            };
        }
    };

    let expired = user.is_expired(now);
    let state = state.reduce(AuthAction::SetCurrentUser(user));
    if expired {
        return Bootstrap {
            state: logout(storage, state),
            redirect: Some(LOGIN_PATH),
        };
    }

    Bootstrap {
        state,
        redirect: None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[derive(Default)]
    struct MemoryStorage(HashMap<String, String>);

    impl TokenStorage for MemoryStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }

        fn set(&mut self, key: &str, value: &str) {
            self.0.insert(key.to_string(), value.to_string());
        }

        fn remove(&mut self, key: &str) {
            self.0.remove(key);
        }
    }

    fn token_with(payload: serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload.to_string());
        format!("{header}.{body}.signature")
    }

    fn storage_with(token: &str) -> MemoryStorage {
        let mut storage = MemoryStorage::default();
        storage.set(TOKEN_STORAGE_KEY, token);
        storage
    }

    #[test]
    fn test_no_token() {
        let mut storage = MemoryStorage::default();

        let boot = bootstrap(&mut storage, 1_000);

        assert_eq!(boot.state, AuthState::default());
        assert_eq!(boot.redirect, None);
    }

    #[test]
    fn test_valid_token() {
        let token = token_with(serde_json::json!({
            "sub": "user-1", "email": "a@b.c", "roles": ["user"], "exp": 2_000
        }));
        let mut storage = storage_with(&token);

        let boot = bootstrap(&mut storage, 1_000);

        assert!(boot.state.is_authenticated);
        assert_eq!(boot.state.user.as_ref().map(|u| u.id.as_str()), Some("user-1"));
        assert_eq!(boot.state.auth_header, Some(format!("Bearer {token}")));
        assert_eq!(boot.redirect, None);
        assert!(storage.get(TOKEN_STORAGE_KEY).is_some());
    }

    #[test]
    fn test_expired_token_logs_out() {
        let token = token_with(serde_json::json!({ "sub": "user-1", "exp": 500 }));
        let mut storage = storage_with(&token);

        let boot = bootstrap(&mut storage, 1_000);

        assert_eq!(boot.state, AuthState::default());
        assert_eq!(boot.redirect, Some(LOGIN_PATH));
        assert!(storage.get(TOKEN_STORAGE_KEY).is_none());
    }

    #[test]
    fn test_malformed_token_is_discarded() {
        let mut storage = storage_with("not-a-token");

        let boot = bootstrap(&mut storage, 1_000);

        assert!(!boot.state.is_authenticated);
        assert_eq!(boot.redirect, None);
        assert!(storage.get(TOKEN_STORAGE_KEY).is_none());
    }

    #[test]
    fn test_decode_rejects_bad_payload() {
        assert!(matches!(decode_token("a.b"), Err(SessionError::Malformed)));
        assert!(matches!(
            decode_token("a.!!!.c"),
            Err(SessionError::Encoding(_))
        ));

        let not_json = format!("a.{}.c", URL_SAFE_NO_PAD.encode("plain"));
        assert!(matches!(decode_token(&not_json), Err(SessionError::Payload(_))));
    }

    #[test]
    fn test_reducer() {
        let user = CurrentUser {
            id: "user-1".to_string(),
            email: String::new(),
            roles: vec![],
            exp: 10,
        };

        let state = AuthState::default().reduce(AuthAction::SetCurrentUser(user.clone()));
        assert!(state.is_authenticated);
        assert_eq!(state.user, Some(user));

        let state = state.with_token("t").reduce(AuthAction::Logout);
        assert_eq!(state, AuthState::default());
    }
}
