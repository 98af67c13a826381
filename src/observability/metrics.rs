use prometheus::{Encoder, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    pub scores_total: IntCounterVec,
    pub score_latency_seconds: HistogramVec,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let scores_total = IntCounterVec::new(
            Opts::new("scores_total", "Total score requests by outcome"),
            &["outcome"],
        )
        .expect("valid scores_total metric");

        let score_latency_seconds = HistogramVec::new(
            prometheus::HistogramOpts::new(
                "score_latency_seconds",
                "Latency of score request processing in seconds",
            ),
            &["outcome"],
        )
        .expect("valid score_latency_seconds metric");

        registry
            .register(Box::new(scores_total.clone()))
            .expect("register scores_total");
        registry
            .register(Box::new(score_latency_seconds.clone()))
            .expect("register score_latency_seconds");

        Self {
            registry,
            scores_total,
            score_latency_seconds,
        }
    }

    pub fn encode(&self) -> Result<String, String> {
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();

        TextEncoder::new()
            .encode(&metric_families, &mut buffer)
            .map_err(|err| format!("failed to encode metrics: {err}"))?;

        String::from_utf8(buffer).map_err(|err| format!("metrics are not valid utf8: {err}"))
    }
}
