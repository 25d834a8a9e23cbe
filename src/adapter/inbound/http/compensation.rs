//! `GET /compensation` runs a calculation from share-link query parameters.

use std::sync::Arc;

use axum::extract::{RawQuery, State};
use axum::Json;

use super::error::ApiError;
use super::state::AppState;
use crate::application::CompensationReport;
use crate::domain::form::FormFields;

/// Query parameter requesting the sensitivity series.
pub const CHART_PARAM: &str = "chart";

/// `GET /compensation?stock=..&rsu=..&eso=..&strikePrice=..&currency=..`
pub async fn compensation(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Result<Json<CompensationReport>, ApiError> {
    let query = query.unwrap_or_default();
    let fields = FormFields::from_query(&query);
    let report = state
        .service
        .calculate(&fields, wants_chart(&query))
        .await?;
    Ok(Json(report))
}

fn wants_chart(query: &str) -> bool {
    url::form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
        .find(|(key, _)| key == CHART_PARAM)
        .is_some_and(|(_, value)| {
            matches!(
                value.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes"
            )
        })
}
