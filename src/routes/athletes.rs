use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::error::ApiError;
use crate::models::{Athlete, AthleteFilter, AthleteResponse, MessageResponse, Page};

const DEFAULT_PAGE_LIMIT: usize = 50;
const MAX_PAGE_LIMIT: usize = 100;

/// Query parameters for listing athletes
#[derive(Deserialize)]
pub struct ListAthletesQuery {
    #[serde(default, alias = "nome")]
    name: Option<String>,
    #[serde(default, alias = "cpf")]
    national_id: Option<String>,
    #[serde(default)]
    limit: Option<usize>,
    #[serde(default)]
    offset: Option<usize>,
}

/// Plain list, or a page envelope when `limit`/`offset` was requested.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum AthleteListing {
    All(Vec<AthleteResponse>),
    Page(Page<AthleteResponse>),
}

// GET /athlete?name=&national_id=&limit=&offset= - List athletes
pub async fn get_athletes(
    State(registry): State<AppState>,
    Query(params): Query<ListAthletesQuery>,
) -> Result<Json<AthleteListing>, ApiError> {
    let filter = AthleteFilter::new(params.name, params.national_id);

    if params.limit.is_none() && params.offset.is_none() {
        let athletes = registry.list(&filter).await?;
        return Ok(Json(AthleteListing::All(athletes)));
    }

    let limit = params
        .limit
        .unwrap_or(DEFAULT_PAGE_LIMIT)
        .clamp(1, MAX_PAGE_LIMIT);
    let offset = params.offset.unwrap_or(0);

    let page = registry.list_paginated(&filter, limit, offset).await?;

    Ok(Json(AthleteListing::Page(page)))
}

// POST /athlete - Register a new athlete
pub async fn create_athlete(
    State(registry): State<AppState>,
    Json(athlete): Json<Athlete>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let national_id = athlete.national_id.clone();

    if let Err(e) = registry.create(athlete).await {
        tracing::warn!("Failed to create athlete {}: {}", national_id, e);
        return Err(e.into());
    }

    tracing::info!("Created athlete {}", national_id);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Athlete created successfully".to_string(),
        }),
    ))
}
