use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use std::sync::Arc;

/// Successful lookup payload: which dataset element answered the query and
/// at what position.
#[derive(Debug, Serialize)]
pub struct LookupResponse {
    pub index: usize,
    pub value: i64,
}

/// Look up the dataset entry closest to `value`.
///
/// Returns the exact entry if the value is stored, otherwise the nearest
/// bracketing neighbor whose proportional tolerance band covers the query.
/// The path segment is parsed here rather than by the extractor so a
/// malformed query is rejected with a 400 before the engine is involved;
/// a miss maps to 404.
pub async fn get_value(
    State(state): State<Arc<ServerState>>,
    Path(raw): Path<String>,
) -> ServerResult<impl IntoResponse> {
    let target: i64 = raw.parse().map_err(|_| {
        tracing::warn!(value = %raw, "query value is not an integer");
        ServerError::BadRequest(format!("invalid integer value: {raw}"))
    })?;

    let entry = match state.engine.find(target) {
        Ok(entry) => entry,
        Err(err) => {
            tracing::debug!(value = target, %err, "lookup miss");
            return Err(err.into());
        }
    };

    Ok(Json(LookupResponse {
        index: entry.index,
        value: entry.value,
    }))
}
