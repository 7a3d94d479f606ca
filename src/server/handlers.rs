use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};

use super::state::AppState;

/// Query string of `GET /api/run`.
#[derive(Debug, Default, Deserialize)]
pub struct RunParams {
    #[serde(default)]
    pub n: String,
    #[serde(default)]
    pub mode: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorBody { error: message })).into_response()
}

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    "binary-race is running"
}

/// GET /api/run - single runs for the selected mode plus the chart
pub async fn run(State(state): State<AppState>, Query(params): Query<RunParams>) -> Response {
    let bench = state.bench();

    // Measurement is a synchronous busy loop; keep it off the async workers.
    let outcome =
        tokio::task::spawn_blocking(move || bench.run_query(&params.n, &params.mode)).await;

    match outcome {
        Ok(Ok(report)) => Json(report).into_response(),
        Ok(Err(err)) => {
            tracing::debug!(kind = err.kind(), error = %err, "rejected run request");
            error_response(StatusCode::from(&err), err.to_string())
        }
        Err(join_err) => {
            tracing::error!(error = %join_err, "run task failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "measurement failed".to_string())
        }
    }
}
