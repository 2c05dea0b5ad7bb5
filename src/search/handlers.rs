use super::engine::search;
use super::error::SearchError;
use super::types::ErrorMessage;
use crate::store::memory::EntityStore;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

pub async fn handle_search(
    Query(params): Query<SearchParams>,
    Extension(store): Extension<Arc<EntityStore>>,
) -> Response {
    // An omitted `q` is treated the same as a blank one.
    let query = params.q.unwrap_or_default();

    match search(&query, &store).await {
        Ok(results) => (StatusCode::OK, Json(results)).into_response(),
        Err(SearchError::InvalidQuery) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorMessage {
                message: "Query parameter is required".to_string(),
            }),
        )
            .into_response(),
        Err(SearchError::Store { stage, cause }) => {
            tracing::error!("Search failed in {}: {:?}", stage, cause);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorMessage {
                    message: "Server error during search".to_string(),
                }),
            )
                .into_response()
        }
    }
}
