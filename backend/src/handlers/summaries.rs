use actix_web::{web, HttpResponse, Result};
use chrono::NaiveDate;

use shared::{ApiError, ApiSuccess, SaveSummaryRequest};

use crate::models::AppState;
use crate::services::summaries as summary_service;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/summaries")
            .route("/{date}", web::get().to(get_summary))
            .route("/{date}", web::put().to(save_summary)),
    );
}

fn summary_error_response(err: &summary_service::SummaryError) -> HttpResponse {
    match err {
        summary_service::SummaryError::Store(e) => super::store_error_response(e),
    }
}

fn invalid_date_response() -> HttpResponse {
    HttpResponse::BadRequest().json(ApiError {
        error: "invalid_date".to_string(),
        message: "Date must be in YYYY-MM-DD format".to_string(),
    })
}

async fn get_summary(
    state: web::Data<AppState>,
    req: actix_web::HttpRequest,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    if crate::middleware::auth::authorize(&req, &state.config.app_secret).is_err() {
        return Ok(super::unauthorized_response());
    }

    let date = match path.into_inner().parse::<NaiveDate>() {
        Ok(date) => date,
        Err(_) => return Ok(invalid_date_response()),
    };

    match summary_service::get_summary(&state.store, date).await {
        Ok(summary) => Ok(HttpResponse::Ok().json(ApiSuccess::new(summary))),
        Err(e) => {
            log::error!("Error reading summary for {}: {:?}", date, e);
            Ok(summary_error_response(&e))
        }
    }
}

async fn save_summary(
    state: web::Data<AppState>,
    req: actix_web::HttpRequest,
    path: web::Path<String>,
    body: web::Json<SaveSummaryRequest>,
) -> Result<HttpResponse> {
    if crate::middleware::auth::authorize(&req, &state.config.app_secret).is_err() {
        return Ok(super::unauthorized_response());
    }

    let date = match path.into_inner().parse::<NaiveDate>() {
        Ok(date) => date,
        Err(_) => return Ok(invalid_date_response()),
    };

    match summary_service::save_summary(&state.store, date, &body.summary).await {
        Ok(summary) => Ok(HttpResponse::Ok().json(ApiSuccess::new(summary))),
        Err(e) => {
            log::error!("Error saving summary for {}: {:?}", date, e);
            Ok(summary_error_response(&e))
        }
    }
}
