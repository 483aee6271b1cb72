use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};
use std::time::Duration;

/// Per-invocation counters, exposed on `/metrics`.
pub struct Metrics {
    registry: Registry,
    invocations: IntCounterVec,
    latency: HistogramVec,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let invocations = IntCounterVec::new(
            Opts::new("wayfarer_invocations_total", "Agent function invocations"),
            &["agent", "function", "outcome"],
        )?;
        let latency = HistogramVec::new(
            HistogramOpts::new("wayfarer_invocation_seconds", "Agent function latency"),
            &["agent", "function"],
        )?;

        registry.register(Box::new(invocations.clone()))?;
        registry.register(Box::new(latency.clone()))?;

        Ok(Self { registry, invocations, latency })
    }

    pub fn observe(&self, agent: &str, function: &str, outcome: &str, elapsed: Duration) {
        self.invocations
            .with_label_values(&[agent, function, outcome])
            .inc();
        self.latency
            .with_label_values(&[agent, function])
            .observe(elapsed.as_secs_f64());
    }

    pub fn render(&self) -> anyhow::Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}
