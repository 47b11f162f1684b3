use crate::{ApiResult, AppState};

use axum::{Json, extract::State};
use roster_core::MergedRecord;

/// GET / - Resolved member roster for the configured board
pub async fn get_roster(State(state): State<AppState>) -> ApiResult<Json<Vec<MergedRecord>>> {
    let records = state.pipeline.roster().await?;
    Ok(Json(records))
}
