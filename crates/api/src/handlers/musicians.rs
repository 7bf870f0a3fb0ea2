use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use catalog::{validate_musician, MusicianDraft, MusicianInput};
use db::MusicianRow;
use serde_json::{json, Value};
use tracing::info;

use super::{parse_id, AppState};
use crate::ApiError;

const MUSICIAN: &str = "Musician";

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<MusicianRow>>, ApiError> {
    let musicians = state.musicians.list().await.map_err(ApiError::db(MUSICIAN))?;
    Ok(Json(musicians))
}

pub async fn get(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MusicianRow>, ApiError> {
    let id = parse_id(&id, MUSICIAN)?;
    let musician = state.musicians.get(id).await.map_err(ApiError::db(MUSICIAN))?;
    Ok(Json(musician))
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<MusicianInput>, JsonRejection>,
) -> Result<(StatusCode, Json<MusicianRow>), ApiError> {
    let draft = validated(payload)?;
    let musician = state.musicians.create(&draft).await.map_err(ApiError::db(MUSICIAN))?;

    info!(id = musician.id, "Musician created");
    Ok((StatusCode::CREATED, Json(musician)))
}

pub async fn update(
    Path(id): Path<String>,
    State(state): State<AppState>,
    payload: Result<Json<MusicianInput>, JsonRejection>,
) -> Result<Json<MusicianRow>, ApiError> {
    // Validation runs before the lookup: a bad body is a 400 even for an unknown id.
    let draft = validated(payload)?;
    let id = parse_id(&id, MUSICIAN)?;
    let musician = state
        .musicians
        .update(id, &draft)
        .await
        .map_err(ApiError::db(MUSICIAN))?;

    info!(id, "Musician updated");
    Ok(Json(musician))
}

pub async fn delete(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&id, MUSICIAN)?;
    state.musicians.delete(id).await.map_err(ApiError::db(MUSICIAN))?;

    info!(id, "Musician deleted");
    Ok(Json(json!({ "message": "Musician deleted" })))
}

fn validated(payload: Result<Json<MusicianInput>, JsonRejection>) -> Result<MusicianDraft, ApiError> {
    let Json(input) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    Ok(validate_musician(&input)?)
}
