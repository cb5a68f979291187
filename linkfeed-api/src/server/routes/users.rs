use crate::server::{
    Result, ServerError, ServerRouter,
    json::{Json, Success},
};
use axum::extract::State;
use axum_extra::routing::{RouterExt, TypedPath};
use linkfeed_common::model::{
    Id,
    post::Post,
    user::{UpdateBio, User, UserMarker},
};
use linkfeed_store::{posts::PostService, users::UserService};
use serde::{Deserialize, Serialize};

pub fn routes() -> ServerRouter {
    ServerRouter::new()
        .typed_get(get_user)
        .typed_get(get_user_posts)
        .typed_put(update_bio)
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/users/{id}", rejection(ServerError))]
struct GetUserPath {
    id: Id<UserMarker>,
}

async fn get_user(
    GetUserPath { id }: GetUserPath,
    State(users): State<UserService>,
) -> Result<Json<User>> {
    let user = users
        .get_user_by_id(id)
        .await
        .ok_or(ServerError::UserByIdNotFound(id))?;

    Ok(Json(user))
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/users/{id}/posts", rejection(ServerError))]
struct GetUserPostsPath {
    id: Id<UserMarker>,
}

async fn get_user_posts(
    GetUserPostsPath { id }: GetUserPostsPath,
    State(posts): State<PostService>,
) -> Json<Vec<Post>> {
    Json(posts.get_user_posts(id).await)
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/users/{id}/bio", rejection(ServerError))]
struct UpdateBioPath {
    id: Id<UserMarker>,
}

#[derive(Clone, Eq, PartialEq, Debug, Hash, Serialize)]
struct UpdatedUser {
    user: User,
}

async fn update_bio(
    UpdateBioPath { id }: UpdateBioPath,
    State(users): State<UserService>,
    Json(UpdateBio { bio }): Json<UpdateBio>,
) -> Result<Json<Success<UpdatedUser>>> {
    let user = users.update_user_bio(id, bio).await?;

    Ok(Json(Success::new(UpdatedUser { user })))
}

#[cfg(test)]
mod tests {
    use crate::server::test_util::{app, request, send};
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    #[tokio::test]
    async fn fetch_seeded_user() {
        let (status, body) = send(Method::GET, "/users/2", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Jane Smith");
        assert!(body.get("password").is_none());
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let (status, body) = send(Method::GET, "/users/77", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "User not found");
    }

    #[tokio::test]
    async fn malformed_id_is_rejected() {
        let (status, _) = send(Method::GET, "/users/john", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn user_posts_are_filtered() {
        let (status, body) = send(Method::GET, "/users/1/posts", None).await;

        assert_eq!(status, StatusCode::OK);
        let posts = body.as_array().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0]["authorId"], "1");
    }

    #[tokio::test]
    async fn bio_update_round_trip() {
        let app = app();

        let (status, body) = request(
            &app,
            Method::PUT,
            "/users/1/bio",
            Some(json!({"bio": "Shipping Rust."})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["user"]["bio"], "Shipping Rust.");

        let (_, user) = request(&app, Method::GET, "/users/1", None).await;
        assert_eq!(user["bio"], "Shipping Rust.");
    }

    #[tokio::test]
    async fn bio_update_for_unknown_user() {
        let (status, body) = send(
            Method::PUT,
            "/users/404/bio",
            Some(json!({"bio": "ghost"})),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "User not found");
    }
}
