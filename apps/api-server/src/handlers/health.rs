//! Health check endpoint.

use actix_web::{HttpResponse, web};
use blog_core::ports::BaseRepository;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub storage: &'static str,
    pub version: &'static str,
    pub timestamp: String,
}

/// Health check endpoint - returns server status and whether storage answers.
///
/// GET /api/health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let storage_ok = match state.categories.find_all().await {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!("Health check storage probe failed: {}", e);
            false
        }
    };

    let response = HealthResponse {
        status: if storage_ok { "ok" } else { "degraded" },
        storage: if storage_ok { "up" } else { "down" },
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    if storage_ok {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}
