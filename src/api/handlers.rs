use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tracing::{info, instrument};
use crate::domain::{User, UserCreate, UserPatch};
use super::error::ApiError;
use super::params::parse_id;
use super::AppState;

#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct DeletedUser {
    pub message: &'static str,
    pub user: User,
}

pub async fn health() -> Json<MessageBody> {
    Json(MessageBody {
        message: "User registry API is running",
    })
}

pub async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

// A missing or unreadable body counts as `{}`: create then fails validation
// and update changes nothing.

#[instrument(skip(state, body))]
pub async fn create_user(
    State(state): State<AppState>,
    body: Option<Json<UserCreate>>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let payload = body.map(|Json(payload)| payload).unwrap_or_default();
    let user = state.users.create_user(payload).await?;
    info!(user_id = user.id, "User created");
    Ok((StatusCode::CREATED, Json(user)))
}

#[instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    Ok(Json(state.users.list_users().await?))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(segment): Path<String>,
) -> Result<Json<User>, ApiError> {
    let user = state.users.get_user(parse_id(&segment)).await?;
    Ok(Json(user))
}

#[instrument(skip(state, body))]
pub async fn update_user(
    State(state): State<AppState>,
    Path(segment): Path<String>,
    body: Option<Json<UserPatch>>,
) -> Result<Json<User>, ApiError> {
    let patch = body.map(|Json(patch)| patch).unwrap_or_default();
    let user = state.users.update_user(parse_id(&segment), patch).await?;
    Ok(Json(user))
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(segment): Path<String>,
) -> Result<Json<DeletedUser>, ApiError> {
    let user = state.users.delete_user(parse_id(&segment)).await?;
    info!(user_id = user.id, "User deleted");
    Ok(Json(DeletedUser {
        message: "User deleted successfully",
        user,
    }))
}
