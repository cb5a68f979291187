use crate::{latency::Latency, record::UserRecord};
use linkfeed_common::{
    model::{Id, LinkfeedSnowflakeGenerator, post::Post},
    snowflake::{ProcessId, WorkerId},
};
use time::{Duration, OffsetDateTime};
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

#[derive(Debug)]
pub(crate) struct StoreState {
    pub users: Vec<UserRecord>,
    /// Newest first.
    pub posts: Vec<Post>,
    pub snowflake_generator: LinkfeedSnowflakeGenerator,
}

/// In-memory stand-in for a database.
///
/// Constructed once, seeded with sample users and posts, and shared between the services behind an
/// `Arc`. Reads take the lock shared, writes take it exclusively, so a check-then-insert done under
/// one write guard cannot interleave with another write.
#[derive(Debug)]
pub struct MockStore {
    state: RwLock<StoreState>,
    latency: Latency,
}

impl MockStore {
    #[must_use]
    pub fn new(worker_id: WorkerId, process_id: ProcessId, latency: Latency) -> Self {
        let now = OffsetDateTime::now_utc();
        let state = StoreState {
            users: seed_users(),
            posts: seed_posts(now),
            snowflake_generator: LinkfeedSnowflakeGenerator::new(worker_id, process_id),
        };
        debug!(
            users = state.users.len(),
            posts = state.posts.len(),
            "Seeded mock store"
        );

        Self {
            state: RwLock::new(state),
            latency,
        }
    }

    #[must_use]
    pub fn latency(&self) -> Latency {
        self.latency
    }

    pub async fn user_count(&self) -> usize {
        self.state.read().await.users.len()
    }

    pub async fn post_count(&self) -> usize {
        self.state.read().await.posts.len()
    }

    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().await
    }
}

fn seed_users() -> Vec<UserRecord> {
    vec![
        UserRecord {
            id: Id::from(1_u64),
            name: "John Doe".to_owned(),
            email: "john@example.com".to_owned(),
            password: "password123".to_owned(),
            bio: "Full Stack Developer passionate about React and Node.js. \
                Love building scalable applications."
                .to_owned(),
            avatar: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e\
                ?w=150&h=150&fit=crop&crop=face"
                .to_owned(),
        },
        UserRecord {
            id: Id::from(2_u64),
            name: "Jane Smith".to_owned(),
            email: "jane@example.com".to_owned(),
            password: "password123".to_owned(),
            bio: "UI/UX Designer creating beautiful and intuitive user experiences.".to_owned(),
            avatar: "https://images.unsplash.com/photo-1494790108755-2616c2e96e21\
                ?w=150&h=150&fit=crop&crop=face"
                .to_owned(),
        },
    ]
}

fn seed_posts(now: OffsetDateTime) -> Vec<Post> {
    vec![
        Post {
            id: Id::from(2_u64),
            author_id: Id::from(2_u64),
            author_name: "Jane Smith".to_owned(),
            content: "Working on some amazing UI designs today. \
                The creative process never gets old! ✨"
                .to_owned(),
            timestamp: now - Duration::minutes(30),
            likes: 8,
            comments: 1,
        },
        Post {
            id: Id::from(1_u64),
            author_id: Id::from(1_u64),
            author_name: "John Doe".to_owned(),
            content: "Just launched my new React project! \
                Excited to share it with the community. 🚀"
                .to_owned(),
            timestamp: now - Duration::hours(2),
            likes: 12,
            comments: 3,
        },
    ]
}

#[cfg(test)]
pub(crate) fn test_store() -> std::sync::Arc<MockStore> {
    std::sync::Arc::new(MockStore::new(
        WorkerId::new_unchecked(0),
        ProcessId::new_unchecked(0),
        Latency::none(),
    ))
}

#[cfg(test)]
mod tests {
    use crate::store::test_store;
    use linkfeed_common::model::Id;

    #[tokio::test]
    async fn seeded_with_sample_rows() {
        let store = test_store();
        assert_eq!(store.user_count().await, 2);
        assert_eq!(store.post_count().await, 2);

        let state = store.read().await;
        let emails: Vec<_> = state.users.iter().map(|user| user.email.as_str()).collect();
        assert_eq!(emails, ["john@example.com", "jane@example.com"]);
        assert!(state.posts[0].timestamp > state.posts[1].timestamp);
        assert_eq!(state.posts[0].id, Id::from(2_u64));
    }
}
