use std::time::Duration;

use actix_web::{web, HttpResponse, Result};
use serde::Serialize;

use shared::{ApiError, ApiSuccess};

use crate::models::AppState;
use crate::services::health as health_service;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/health")
            .route("", web::get().to(liveness))
            .route("/check", web::post().to(run_check)),
    );
}

#[derive(Serialize)]
struct Liveness {
    status: &'static str,
}

/// Unauthenticated liveness endpoint. Says nothing about the store; use
/// the probe endpoint for that.
async fn liveness() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiSuccess::new(Liveness { status: "ok" })))
}

/// Run the full store probe sequence. Failed secret checks count against
/// the caller's rate-limit budget to slow down brute forcing.
async fn run_check(
    state: web::Data<AppState>,
    req: actix_web::HttpRequest,
) -> Result<HttpResponse> {
    let peer_key = req
        .peer_addr()
        .map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    if !state.secret_rate_limiter.check(&peer_key) {
        return Ok(HttpResponse::TooManyRequests().json(ApiError {
            error: "rate_limited".to_string(),
            message: "Too many failed attempts, try again later".to_string(),
        }));
    }

    if crate::middleware::auth::authorize(&req, &state.config.app_secret).is_err() {
        state.secret_rate_limiter.record(&peer_key);
        return Ok(super::unauthorized_response());
    }
    state.secret_rate_limiter.clear(&peer_key);

    let step_timeout = Duration::from_secs(state.config.probe_timeout_secs);
    let report = health_service::run_probes(&state.store, step_timeout).await;

    if !report.healthy {
        log::warn!("Health check failed: {:?}", report.results);
    }

    Ok(HttpResponse::Ok().json(ApiSuccess::new(report)))
}
