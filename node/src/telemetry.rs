// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use metrics::Unit;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use nutri_core::types::{Admin, Client, Dish, Entity, Nutritionist, Product, User};
use std::sync::OnceLock;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "nutri_node=debug,tower_http=debug";

/// Values of the `entity` label on the record counters.
pub const ENTITY_LABELS: [&str; 6] = [
    User::NAME,
    Client::NAME,
    Nutritionist::NAME,
    Admin::NAME,
    Product::NAME,
    Dish::NAME,
];

static PROM_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Installs the log subscriber and the Prometheus recorder.
pub fn init_telemetry() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            if PROM_HANDLE.set(handle).is_err() {
                tracing::warn!("Prometheus handle already set. Telemetry re-initialized?");
            }
            register_metrics();
        }
        Err(e) => tracing::warn!("Prometheus recorder not installed, /metrics stays empty: {}", e),
    }
}

fn register_metrics() {
    metrics::describe_counter!(
        "nutri_records_created_total",
        Unit::Count,
        "Records created, labelled by entity"
    );
    metrics::describe_counter!(
        "nutri_records_updated_total",
        Unit::Count,
        "Records patched, labelled by entity"
    );
    metrics::describe_histogram!(
        "nutri_store_persist_duration_seconds",
        Unit::Seconds,
        "Time taken to rewrite one entity file"
    );

    // Every entity series shows up at zero before the first request.
    for entity in ENTITY_LABELS {
        metrics::counter!("nutri_records_created_total", 0, "entity" => entity);
        metrics::counter!("nutri_records_updated_total", 0, "entity" => entity);
    }

    metrics::gauge!("nutri_node_up", 1.0);
}

/// Prometheus text exposition, or a placeholder when no recorder is installed.
pub fn get_metrics() -> String {
    match PROM_HANDLE.get() {
        Some(handle) => handle.render(),
        None => "# metrics not initialized".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_labels_are_distinct() {
        let mut labels = ENTITY_LABELS.to_vec();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), ENTITY_LABELS.len());
    }
}
