use crate::observability::metrics::Metrics;

/// Shared, request-independent application state. Scoring itself is
/// stateless, so this only carries the metrics registry and the optional
/// function key; nothing here is mutated per request.
pub struct AppState {
    pub metrics: Metrics,
    pub function_key: Option<String>,
}

impl AppState {
    pub fn new(function_key: Option<String>) -> Self {
        Self {
            metrics: Metrics::new(),
            function_key,
        }
    }
}
