use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use ethiens_model::{MovieDetail, SearchResponse};
use serde::Deserialize;
use tracing::info;

use crate::{AppError, AppResult, AppState};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: Option<String>,
}

/// `GET /movie/tmdb/search?query=...`
pub async fn search_movies_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<SearchResponse>> {
    // The query is forwarded exactly as received; only empty input is refused.
    let query = params
        .query
        .filter(|query| !query.is_empty())
        .ok_or_else(|| AppError::bad_request("Query parameter is required"))?;

    info!(%query, "searching movies");
    let results = state.resolver.resolve_search(&query).await?;
    Ok(Json(SearchResponse::from(results)))
}

/// `GET /movie/tmdb/{identifier}`: a numeric TMDB id or an IMDb `tt…` id.
pub async fn movie_details_handler(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> AppResult<Json<MovieDetail>> {
    info!(%identifier, "fetching movie details");
    let detail = state.resolver.resolve_detail(&identifier).await?;
    Ok(Json(detail))
}
