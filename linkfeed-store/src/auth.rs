use crate::{latency::simulate, record::UserRecord, store::MockStore};
use linkfeed_common::{
    model::{
        auth::{AuthToken, Session},
        user::{RegisterUser, User},
    },
    snowflake::SnowflakeTimestampFromDateTimeError,
};
use std::sync::Arc;
use thiserror::Error;
use time::OffsetDateTime;
use tracing::{debug, info, warn};

pub const DEFAULT_BIO: &str = "New to the platform!";
pub const DEFAULT_AVATAR: &str =
    "https://images.unsplash.com/photo-1535713875002-d1d0cf377fde?w=150&h=150&fit=crop&crop=face";

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Error)]
pub enum AuthError {
    /// Deliberately the same for an unknown email and a wrong password.
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("Could not assign a user id: {0}")]
    IdAssignment(#[from] SnowflakeTimestampFromDateTimeError),
}

#[derive(Clone, Debug)]
pub struct AuthService {
    store: Arc<MockStore>,
}

impl AuthService {
    #[must_use]
    pub fn new(store: Arc<MockStore>) -> Self {
        Self { store }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        debug!(email, "Login requested");
        simulate(self.store.latency().login).await;

        let state = self.store.read().await;
        let Some(record) = state
            .users
            .iter()
            .find(|user| user.matches_credentials(email, password))
        else {
            warn!(email, "Login rejected");
            return Err(AuthError::InvalidCredentials);
        };

        debug!(user_id = %record.id, "Login succeeded");
        Ok(Session {
            user: User::from(record),
            token: AuthToken::placeholder(),
        })
    }

    pub async fn register(&self, user: RegisterUser) -> Result<Session, AuthError> {
        debug!(email = %user.email, "Registration requested");
        simulate(self.store.latency().register).await;

        let mut state = self.store.write().await;
        if state.users.iter().any(|existing| existing.email == user.email) {
            warn!(email = %user.email, "Registration rejected, email taken");
            return Err(AuthError::UserAlreadyExists);
        }

        let id = state
            .snowflake_generator
            .generate_at(OffsetDateTime::now_utc())?
            .into();
        let record = UserRecord {
            id,
            name: user.name,
            email: user.email,
            password: user.password,
            bio: DEFAULT_BIO.to_owned(),
            avatar: DEFAULT_AVATAR.to_owned(),
        };
        let registered = User::from(&record);
        state.users.push(record);

        info!(user_id = %registered.id, "Registered user");
        Ok(Session {
            user: registered,
            token: AuthToken::placeholder(),
        })
    }
}
