use crate::{
    dto::{AddDomainRequest, RemoveDomainResponse, WhitelistEntryResponse},
    errors::ApiError,
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, instrument};

#[instrument(skip(state), name = "api_get_whitelist")]
pub async fn get_whitelist(
    State(state): State<AppState>,
) -> Result<Json<Vec<WhitelistEntryResponse>>, ApiError> {
    let entries = state.get_whitelist.execute().await?;
    debug!(count = entries.len(), "Whitelist retrieved successfully");

    Ok(Json(
        entries
            .into_iter()
            .map(WhitelistEntryResponse::from_entry)
            .collect(),
    ))
}

#[instrument(skip(state, req), name = "api_add_domain")]
pub async fn add_domain(
    State(state): State<AppState>,
    Json(req): Json<AddDomainRequest>,
) -> Result<(StatusCode, Json<WhitelistEntryResponse>), ApiError> {
    let entry = state.add_domain.execute(req.owner_id, &req.domain).await?;

    Ok((
        StatusCode::CREATED,
        Json(WhitelistEntryResponse::from_entry(entry)),
    ))
}

#[instrument(skip(state), name = "api_delete_domain")]
pub async fn delete_domain(
    State(state): State<AppState>,
    Path(domain): Path<String>,
) -> Result<Json<RemoveDomainResponse>, ApiError> {
    let removed = state.remove_domain.execute(&domain).await?;

    Ok(Json(RemoveDomainResponse { removed }))
}
