// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, HeaderValue, StatusCode},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use nutri_core::state::nutri::not_found;
use nutri_core::types::{Admin, Client, Dish, Nutritionist, Product, User};

use crate::api::Resource;
use crate::config::{NodeConfig, DEFAULT_CORS_ORIGIN};
use crate::engine::Engine;
use crate::errors::EngineError;

pub type SharedEngine = Arc<Mutex<Engine>>;

pub fn build_router(state: SharedEngine, cfg: &NodeConfig) -> Router {
    Router::new()
        .merge(resource_routes::<User>())
        .merge(resource_routes::<Client>())
        .merge(resource_routes::<Nutritionist>())
        .merge(resource_routes::<Admin>())
        .merge(resource_routes::<Product>())
        .merge(resource_routes::<Dish>())
        .route("/api/nutritionists/verifyCode/:code", get(verify_code))
        // Observability
        .route("/metrics", get(metrics_handler))
        .with_state(state)
        .layer(cors_layer(&cfg.cors_origin))
        .layer(TraceLayer::new_for_http())
}

fn resource_routes<T: Resource>() -> Router<SharedEngine> {
    Router::new()
        .route(T::ROUTE, get(list::<T>).post(create::<T>))
        .route(&format!("{}/:key", T::ROUTE), get(fetch::<T>).patch(update::<T>))
}

fn cors_layer(origin: &str) -> CorsLayer {
    let origin = origin.parse::<HeaderValue>().unwrap_or_else(|_| {
        tracing::warn!("Invalid CORS origin {:?}, using {}", origin, DEFAULT_CORS_ORIGIN);
        HeaderValue::from_static(DEFAULT_CORS_ORIGIN)
    });
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Returns the raw path segment together with the key it parses to.
fn parse_key<T: Resource>(
    path: Result<Path<String>, PathRejection>,
) -> Result<(String, T::Key), EngineError> {
    let Path(raw) = path?;
    match T::parse_key(&raw) {
        Some(key) => Ok((raw, key)),
        None => Err(EngineError::InvalidInput(format!("Invalid {} '{}'", T::KEY_FIELD, raw))),
    }
}

async fn list<T: Resource>(State(state): State<SharedEngine>) -> Json<Vec<T>> {
    let engine = state.lock().await;
    Json(T::store(&engine.state).all().to_vec())
}

async fn fetch<T: Resource>(
    State(state): State<SharedEngine>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<T>, EngineError> {
    let (raw, key) = parse_key::<T>(path)?;
    let engine = state.lock().await;
    let record = T::store(&engine.state)
        .get(&key)
        .cloned()
        .ok_or_else(|| not_found::<T>(raw))?;
    Ok(Json(record))
}

async fn create<T: Resource>(
    State(state): State<SharedEngine>,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<T>), EngineError> {
    let Json(record) = payload?;
    let mut engine = state.lock().await;
    let created = T::create(&mut engine.state, record)?;

    metrics::counter!("nutri_records_created_total", 1, "entity" => T::NAME);
    tracing::info!("Created {} {}", T::NAME, created.path_key());

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, created.location())],
        Json(created),
    ))
}

async fn update<T: Resource>(
    State(state): State<SharedEngine>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<StatusCode, EngineError> {
    let (raw, key) = parse_key::<T>(path)?;
    let Json(incoming) = payload?;
    let mut engine = state.lock().await;
    T::patch(&mut engine.state, &key, &incoming)?;

    metrics::counter!("nutri_records_updated_total", 1, "entity" => T::NAME);
    tracing::debug!("Patched {} {}", T::NAME, raw);

    Ok(StatusCode::NO_CONTENT)
}

async fn verify_code(
    State(state): State<SharedEngine>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<bool>, EngineError> {
    let Path(raw) = path?;
    let code: i32 = raw
        .parse()
        .map_err(|_| EngineError::InvalidInput(format!("Invalid Code '{}'", raw)))?;
    let engine = state.lock().await;
    Ok(Json(engine.state.verify_code(code)))
}

async fn metrics_handler() -> String {
    crate::telemetry::get_metrics()
}
