use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use crate::api::AppState;
use crate::error::AppResult;

#[derive(Deserialize)]
pub struct CredentialsRequest {
    username: String,
    password: String,
}

pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CredentialsRequest>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let user = state.accounts.create(&req.username, &req.password).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "id": user.id,
            "username": user.username,
        })),
    ))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CredentialsRequest>,
) -> AppResult<Json<Value>> {
    let issued = state.authenticator.login(&req.username, &req.password).await?;

    Ok(Json(json!({
        "token": issued.token,
        "expires_in": issued.expires_in,
    })))
}
