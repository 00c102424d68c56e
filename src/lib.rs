//! Fleet Maintenance API
//! 
//! Backend para el seguimiento del mantenimiento de flotas de camiones:
//! empresas, camiones, registros de mantenimiento y dashboard.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::{middleware::from_fn_with_state, response::Json, routing::get, Router};
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::middleware::{auth::auth_middleware, cors::cors_layer};
use crate::routes::{company_routes, dashboard_routes, truck_routes};
use crate::state::AppState;

/// Construir el router completo de la API
pub fn build_router(state: AppState) -> Router {
    let protected = Router::new()
        .nest("/api/company", company_routes::create_company_profile_router())
        .nest("/api/trucks", truck_routes::create_truck_router())
        .nest("/api/dashboard", dashboard_routes::create_dashboard_router())
        .route_layer(from_fn_with_state(state.clone(), auth_middleware));

    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/company", company_routes::create_company_auth_router())
        .merge(protected)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(cors),
        )
        .with_state(state)
}

/// Health check simple
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "fleet-maintenance-api",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
