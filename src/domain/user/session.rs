use super::account::{User, UserLimits};
use serde::{Deserialize, Serialize};

/// Client-side session bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSession {
    pub user: User,
    pub limits: UserLimits,
    pub liked_bottles: Vec<u64>,
}

impl UserSession {
    pub fn has_liked(&self, bottle_id: u64) -> bool {
        self.liked_bottles.contains(&bottle_id)
    }
}

/// Authentication lifecycle as observed by a client.
///
/// `loading` marks an in-flight authentication check. The constructors keep
/// `is_authenticated` in step with the presence of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub is_authenticated: bool,
    pub user: Option<User>,
    pub session: Option<UserSession>,
    pub loading: bool,
}

impl AuthState {
    pub fn loading() -> Self {
        Self {
            is_authenticated: false,
            user: None,
            session: None,
            loading: true,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            loading: false,
            ..Self::loading()
        }
    }

    pub fn signed_in(session: UserSession) -> Self {
        Self {
            is_authenticated: true,
            user: Some(session.user.clone()),
            session: Some(session),
            loading: false,
        }
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::signed_out()
    }
}
