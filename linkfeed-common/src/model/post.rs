use crate::model::Id;
use crate::model::user::UserMarker;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub struct PostMarker;

#[derive(Clone, Eq, PartialEq, Debug, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Id<PostMarker>,
    pub author_id: Id<UserMarker>,
    /// Copied from the author at creation time and not kept in sync afterwards.
    pub author_name: String,
    pub content: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub likes: u32,
    pub comments: u32,
}

#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePost {
    pub content: String,
    pub author_id: Id<UserMarker>,
    pub author_name: String,
}

#[cfg(test)]
mod tests {
    use crate::model::{
        Id,
        post::{CreatePost, Post},
    };
    use time::macros::datetime;

    #[test]
    fn post_wire_format() {
        let post = Post {
            id: Id::from(7_u64),
            author_id: Id::from(1_u64),
            author_name: "John Doe".to_owned(),
            content: "hello".to_owned(),
            timestamp: datetime!(2025-06-01 12:00 UTC),
            likes: 0,
            comments: 0,
        };

        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["id"], "7");
        assert_eq!(json["authorId"], "1");
        assert_eq!(json["authorName"], "John Doe");
        assert_eq!(json["timestamp"], "2025-06-01T12:00:00Z");

        let back: Post = serde_json::from_value(json).unwrap();
        assert_eq!(back, post);
    }

    #[test]
    fn create_post_reads_camel_case() {
        let request: CreatePost = serde_json::from_str(
            r#"{"content":"hi","authorId":"2","authorName":"Jane Smith"}"#,
        )
        .unwrap();

        assert_eq!(request.author_id, Id::from(2_u64));
        assert_eq!(request.author_name, "Jane Smith");
    }
}
