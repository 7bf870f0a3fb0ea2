use axum::{
    extract::{Path, State},
    Json,
};
use db::BandWithMusicians;

use super::{parse_id, AppState};
use crate::ApiError;

const BAND: &str = "Band";

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<BandWithMusicians>>, ApiError> {
    let bands = state.bands.list_with_musicians().await.map_err(ApiError::db(BAND))?;
    Ok(Json(bands))
}

pub async fn get(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<BandWithMusicians>, ApiError> {
    let id = parse_id(&id, BAND)?;
    let band = state
        .bands
        .get_with_musicians(id)
        .await
        .map_err(ApiError::db(BAND))?;
    Ok(Json(band))
}
