use crate::{latency::simulate, store::MockStore};
use linkfeed_common::model::{
    Id,
    user::{User, UserMarker},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Error)]
pub enum UserError {
    #[error("User not found")]
    UserNotFound(Id<UserMarker>),
}

#[derive(Clone, Debug)]
pub struct UserService {
    store: Arc<MockStore>,
}

impl UserService {
    #[must_use]
    pub fn new(store: Arc<MockStore>) -> Self {
        Self { store }
    }

    pub async fn get_user_by_id(&self, user_id: Id<UserMarker>) -> Option<User> {
        debug!(%user_id, "Fetching user");
        simulate(self.store.latency().user_lookup).await;

        let state = self.store.read().await;
        state
            .users
            .iter()
            .find(|user| user.id == user_id)
            .map(User::from)
    }

    pub async fn update_user_bio(
        &self,
        user_id: Id<UserMarker>,
        bio: String,
    ) -> Result<User, UserError> {
        debug!(%user_id, "Updating bio");
        simulate(self.store.latency().bio_update).await;

        let mut state = self.store.write().await;
        let Some(record) = state.users.iter_mut().find(|user| user.id == user_id) else {
            warn!(%user_id, "Bio update for unknown user");
            return Err(UserError::UserNotFound(user_id));
        };
        record.bio = bio;

        info!(%user_id, "Updated bio");
        Ok(User::from(&*record))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        Latency, MockStore,
        store::test_store,
        users::{UserError, UserService},
    };
    use linkfeed_common::{
        model::Id,
        snowflake::{ProcessId, WorkerId},
    };
    use std::{sync::Arc, time::Duration};

    fn slow_service() -> UserService {
        UserService::new(Arc::new(MockStore::new(
            WorkerId::new_unchecked(0),
            ProcessId::new_unchecked(0),
            Latency::default(),
        )))
    }

    #[tokio::test]
    async fn lookup_strips_password() {
        let service = UserService::new(test_store());

        let user = service.get_user_by_id(Id::from(2_u64)).await.unwrap();

        assert_eq!(user.name, "Jane Smith");
        assert_eq!(user.email, "jane@example.com");
        assert!(service.get_user_by_id(Id::from(3_u64)).await.is_none());
    }

    #[tokio::test]
    async fn bio_update_is_visible_to_lookups() {
        let service = UserService::new(test_store());

        let updated = service
            .update_user_bio(Id::from(1_u64), "Rustacean now.".to_owned())
            .await
            .unwrap();
        let fetched = service.get_user_by_id(Id::from(1_u64)).await.unwrap();

        assert_eq!(updated.bio, "Rustacean now.");
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn bio_update_for_unknown_user_changes_nothing() {
        let store = test_store();
        let service = UserService::new(store.clone());
        let before = store.read().await.users.clone();

        let result = service
            .update_user_bio(Id::from(404_u64), "ghost".to_owned())
            .await;

        assert_eq!(result, Err(UserError::UserNotFound(Id::from(404_u64))));
        assert_eq!(result.unwrap_err().to_string(), "User not found");
        assert_eq!(store.read().await.users, before);
    }

    #[tokio::test(start_paused = true)]
    async fn lookup_waits_for_latency() {
        let service = slow_service();

        let start = tokio::time::Instant::now();
        service.get_user_by_id(Id::from(1_u64)).await.unwrap();

        assert!(start.elapsed() >= Duration::from_millis(300));
    }

    #[tokio::test(start_paused = true)]
    async fn bio_update_waits_for_latency() {
        let service = slow_service();

        let start = tokio::time::Instant::now();
        service
            .update_user_bio(Id::from(1_u64), "Slow and steady.".to_owned())
            .await
            .unwrap();

        assert!(start.elapsed() >= Duration::from_millis(500));
    }
}
