use crate::model::user::User;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};

/// The fixed token handed out on every successful login or registration.
pub const PLACEHOLDER_AUTH_TOKEN: &str = "mock-jwt-token";

/// An opaque session token. No signature, no expiry: every session gets the same placeholder.
#[derive(Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct AuthToken(String);

/// What a successful login or registration hands back.
#[derive(Clone, Eq, PartialEq, Debug, Hash, Deserialize, Serialize)]
pub struct Session {
    pub user: User,
    pub token: AuthToken,
}

impl AuthToken {
    #[must_use]
    pub fn placeholder() -> Self {
        Self(PLACEHOLDER_AUTH_TOKEN.to_owned())
    }

    #[must_use]
    pub fn as_token_str(&self) -> &str {
        &self.0
    }
}

impl Debug for AuthToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("AuthToken").field(&"[redacted]").finish()
    }
}
