use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::api::AppState;
use crate::db::models::User;
use crate::error::AppResult;

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub username: String,
    pub password: String,
}

/// Full user projection; the password hash is skipped by the model's
/// serde attributes.
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> AppResult<Json<User>> {
    let user = state.accounts.get_by_id(id).await?;
    Ok(Json(user))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateUserRequest>,
) -> AppResult<Json<Value>> {
    let user = state.accounts.update(id, &body.username, &body.password).await?;

    Ok(Json(json!({
        "id": user.id,
        "username": user.username,
    })))
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.accounts.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
