use crate::server::{
    Result, ServerError, ServerRouter,
    json::{Json, Success},
};
use axum::extract::State;
use axum_extra::routing::{RouterExt, TypedPath};
use linkfeed_common::model::{
    auth::Session,
    user::{Credentials, RegisterUser},
};
use linkfeed_store::auth::AuthService;
use serde::Deserialize;

pub fn routes() -> ServerRouter {
    ServerRouter::new()
        .typed_post(login)
        .typed_post(register)
}

/// With `trim`, whitespace-only counts as blank. Passwords are compared verbatim, so not trimmed.
fn require(field: &'static str, value: &str, trim: bool) -> Result<()> {
    let value = if trim { value.trim() } else { value };
    if value.is_empty() {
        return Err(ServerError::BlankField(field));
    }

    Ok(())
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/auth/login", rejection(ServerError))]
struct LoginPath();

async fn login(
    LoginPath(): LoginPath,
    State(auth): State<AuthService>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<Success<Session>>> {
    require("email", &credentials.email, true)?;
    require("password", &credentials.password, false)?;

    let session = auth
        .login(&credentials.email, &credentials.password)
        .await?;

    Ok(Json(Success::new(session)))
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/auth/register", rejection(ServerError))]
struct RegisterPath();

async fn register(
    RegisterPath(): RegisterPath,
    State(auth): State<AuthService>,
    Json(user): Json<RegisterUser>,
) -> Result<Json<Success<Session>>> {
    require("name", &user.name, true)?;
    require("email", &user.email, true)?;
    require("password", &user.password, false)?;

    let session = auth.register(user).await?;

    Ok(Json(Success::new(session)))
}
