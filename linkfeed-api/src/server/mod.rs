use axum::{
    Router,
    extract::{
        FromRef, Request,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use json::{Failure, Json};
use linkfeed_common::model::{Id, user::UserMarker};
use linkfeed_store::{
    MockStore,
    auth::{AuthError, AuthService},
    posts::{PostError, PostService},
    users::{UserError, UserService},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, warn};

mod json;
mod routes;
#[cfg(test)]
mod test_util;

pub type ServerRouter = Router<ServerState>;

#[derive(Clone, Debug, FromRef)]
pub struct ServerState {
    pub auth: AuthService,
    pub posts: PostService,
    pub users: UserService,
}

impl ServerState {
    #[must_use]
    pub fn new(store: Arc<MockStore>) -> Self {
        Self {
            auth: AuthService::new(store.clone()),
            posts: PostService::new(store.clone()),
            users: UserService::new(store),
        }
    }
}

pub fn routes() -> ServerRouter {
    routes::routes().fallback(fallback)
}

pub async fn fallback(request: Request) -> ServerError {
    ServerError::UnknownRoute(request.into_parts().0.uri)
}

pub type Result<T, E = ServerError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Unknown route requested: {0}")]
    UnknownRoute(Uri),
    #[error("Path rejected: {0}")]
    PathRejection(#[from] PathRejection),
    #[error("Incoming JSON rejected: {0}")]
    JsonRejection(#[from] JsonRejection),
    #[error("JSON response could not be serialized: {0}")]
    JsonResponse(#[from] serde_json::Error),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Post(#[from] PostError),
    #[error(transparent)]
    User(#[from] UserError),
    #[error("User not found")]
    UserByIdNotFound(Id<UserMarker>),
    #[error("Post content must not be empty")]
    EmptyPostContent,
    #[error("{0} must not be empty")]
    BlankField(&'static str),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::UnknownRoute(_)
            | ServerError::PathRejection(_)
            | ServerError::User(UserError::UserNotFound(_))
            | ServerError::UserByIdNotFound(_) => StatusCode::NOT_FOUND,
            ServerError::Auth(AuthError::InvalidCredentials) => StatusCode::UNAUTHORIZED,
            ServerError::Auth(AuthError::UserAlreadyExists) => StatusCode::CONFLICT,
            ServerError::JsonRejection(_)
            | ServerError::EmptyPostContent
            | ServerError::BlankField(_) => StatusCode::BAD_REQUEST,
            ServerError::JsonResponse(_)
            | ServerError::Auth(AuthError::IdAssignment(_))
            | ServerError::Post(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            error!(error = %self, %status, "Replying with error");
        } else {
            warn!(error = %self, %status, "Replying with error");
        }

        let failure = Failure::new(status.as_u16(), self.to_string());
        (status, Json(failure)).into_response()
    }
}
