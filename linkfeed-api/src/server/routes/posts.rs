use crate::server::{Result, ServerError, ServerRouter, json::Json};
use axum::extract::State;
use axum_extra::routing::{RouterExt, TypedPath};
use linkfeed_common::model::post::{CreatePost, Post};
use linkfeed_store::posts::PostService;
use serde::Deserialize;

pub fn routes() -> ServerRouter {
    ServerRouter::new()
        .typed_get(get_posts)
        .typed_post(create_post)
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/posts", rejection(ServerError))]
struct PostsPath();

async fn get_posts(PostsPath(): PostsPath, State(posts): State<PostService>) -> Json<Vec<Post>> {
    Json(posts.get_all_posts().await)
}

async fn create_post(
    PostsPath(): PostsPath,
    State(posts): State<PostService>,
    Json(post): Json<CreatePost>,
) -> Result<Json<Post>> {
    let content = post.content.trim();
    if content.is_empty() {
        return Err(ServerError::EmptyPostContent);
    }

    let post = posts
        .create_post(content.to_owned(), post.author_id, post.author_name)
        .await?;

    Ok(Json(post))
}

#[cfg(test)]
mod tests {
    use crate::server::test_util::{app, request, send};
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    #[tokio::test]
    async fn created_post_heads_the_feed() {
        let app = app();

        let (status, created) = request(
            &app,
            Method::POST,
            "/posts",
            Some(json!({"content": "  hello  ", "authorId": "1", "authorName": "John Doe"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(created["content"], "hello");
        assert_eq!(created["likes"], 0);
        assert_eq!(created["comments"], 0);

        let (status, feed) = request(&app, Method::GET, "/posts", None).await;
        assert_eq!(status, StatusCode::OK);

        let ids: Vec<_> = feed
            .as_array()
            .unwrap()
            .iter()
            .map(|post| post["id"].clone())
            .collect();
        assert_eq!(ids, [created["id"].clone(), json!("2"), json!("1")]);
    }

    #[tokio::test]
    async fn blank_post_is_rejected() {
        let (status, body) = send(
            Method::POST,
            "/posts",
            Some(json!({"content": " \n ", "authorId": "1", "authorName": "John Doe"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Post content must not be empty");
    }
}
