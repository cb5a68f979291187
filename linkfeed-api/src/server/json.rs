use crate::server::ServerError;
use axum::{
    Json as AxumJson,
    extract::FromRequest,
    response::{IntoResponse, Response},
};
use axum_extra::TypedHeader;
use headers::ContentType;
use serde::Serialize;

/// JSON body extractor and responder whose failures surface as [`ServerError`].
#[derive(FromRequest, Debug, Clone, Copy, Default)]
#[from_request(via(AxumJson), rejection(ServerError))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.0) {
            Ok(json) => (TypedHeader(ContentType::json()), json).into_response(),
            Err(err) => ServerError::JsonResponse(err).into_response(),
        }
    }
}

/// `{"success": true, ...body}`, the envelope for service calls that can fail with a message.
#[derive(Clone, Eq, PartialEq, Debug, Hash, Serialize)]
pub struct Success<T> {
    success: bool,
    #[serde(flatten)]
    body: T,
}

impl<T> Success<T> {
    #[must_use]
    pub fn new(body: T) -> Self {
        Self {
            success: true,
            body,
        }
    }
}

/// `{"success": false, "status": ..., "error": ...}`, sent for every failed request.
#[derive(Clone, Eq, PartialEq, Debug, Hash, Serialize)]
pub struct Failure {
    success: bool,
    status: u16,
    error: String,
}

impl Failure {
    #[must_use]
    pub fn new(status: u16, error: String) -> Self {
        Self {
            success: false,
            status,
            error,
        }
    }
}
