use crate::{latency::simulate, store::MockStore};
use linkfeed_common::{
    model::{Id, post::Post, user::UserMarker},
    snowflake::SnowflakeTimestampFromDateTimeError,
};
use std::sync::Arc;
use thiserror::Error;
use time::OffsetDateTime;
use tracing::{debug, info};

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Error)]
pub enum PostError {
    #[error("Could not assign a post id: {0}")]
    IdAssignment(#[from] SnowflakeTimestampFromDateTimeError),
}

#[derive(Clone, Debug)]
pub struct PostService {
    store: Arc<MockStore>,
}

/// Owned copies of `posts`, newest first. Stable, so equal timestamps keep store order.
fn newest_first<'a>(posts: impl IntoIterator<Item = &'a Post>) -> Vec<Post> {
    let mut posts: Vec<Post> = posts.into_iter().cloned().collect();
    posts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    posts
}

impl PostService {
    #[must_use]
    pub fn new(store: Arc<MockStore>) -> Self {
        Self { store }
    }

    pub async fn get_all_posts(&self) -> Vec<Post> {
        debug!("Fetching all posts");
        simulate(self.store.latency().posts).await;

        let state = self.store.read().await;
        newest_first(&state.posts)
    }

    /// Content is stored as given; callers decide what counts as postable.
    pub async fn create_post(
        &self,
        content: String,
        author_id: Id<UserMarker>,
        author_name: String,
    ) -> Result<Post, PostError> {
        debug!(%author_id, "Creating post");
        simulate(self.store.latency().posts).await;

        let mut state = self.store.write().await;
        let timestamp = OffsetDateTime::now_utc();
        let post = Post {
            id: state.snowflake_generator.generate_at(timestamp)?.into(),
            author_id,
            author_name,
            content,
            timestamp,
            likes: 0,
            comments: 0,
        };
        state.posts.insert(0, post.clone());

        info!(post_id = %post.id, %author_id, "Created post");
        Ok(post)
    }

    pub async fn get_user_posts(&self, user_id: Id<UserMarker>) -> Vec<Post> {
        debug!(%user_id, "Fetching user posts");
        simulate(self.store.latency().posts).await;

        let state = self.store.read().await;
        newest_first(state.posts.iter().filter(|post| post.author_id == user_id))
    }
}
