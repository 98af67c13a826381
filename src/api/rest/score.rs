use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::routing::post;
use axum::Router;
use tracing::{debug, info, warn};

use crate::engine::scoring::worker_score;
use crate::error::AppError;
use crate::models::payload::ScorePayload;
use crate::state::AppState;

const FUNCTION_KEY_HEADER: &str = "x-functions-key";

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/score", post(score_worker))
}

async fn score_worker(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: String,
) -> Result<String, AppError> {
    check_function_key(&state, &headers)?;

    let start = Instant::now();
    debug!(body = %body, "received score request");

    let payload = match ScorePayload::from_json(&body) {
        Ok(payload) => payload,
        Err(err) => {
            warn!(error = %err, "invalid JSON payload");
            record_outcome(&state, "rejected", start);
            return Err(AppError::InvalidJson);
        }
    };

    debug!(payload = ?payload, "parsed score payload");

    let (Some(job), Some(worker)) = (&payload.job, &payload.worker) else {
        warn!("payload missing job or worker");
        record_outcome(&state, "rejected", start);
        return Err(AppError::MissingJobOrWorker);
    };

    let score = worker_score(job, worker, &payload.selectors);
    let outcome = if score == 100 { "match" } else { "no_match" };
    record_outcome(&state, outcome, start);

    info!(worker_id = %worker.id, score, outcome, "worker scored");

    Ok(score.to_string())
}

fn check_function_key(state: &AppState, headers: &HeaderMap) -> Result<(), AppError> {
    let Some(expected) = state.function_key.as_deref() else {
        return Ok(());
    };

    let provided = headers
        .get(FUNCTION_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    if provided == Some(expected) {
        Ok(())
    } else {
        warn!("missing or mismatched function key");
        Err(AppError::InvalidFunctionKey)
    }
}

fn record_outcome(state: &AppState, outcome: &str, start: Instant) {
    state
        .metrics
        .scores_total
        .with_label_values(&[outcome])
        .inc();
    state
        .metrics
        .score_latency_seconds
        .with_label_values(&[outcome])
        .observe(start.elapsed().as_secs_f64());
}
