use actix_web::{web, HttpResponse, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use shared::{
    ApiError, ApiSuccess, BulkCreateFailure, BulkCreateResponse, BulkCreateTaskRequest,
    CreateTaskRequest, UpdateTaskRequest,
};

use crate::models::AppState;
use crate::services::{date_range, tasks as task_service};

#[derive(Debug, Deserialize)]
struct RangeQuery {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl RangeQuery {
    /// Missing bounds default to today; a missing end collapses the range
    /// to the single start day.
    fn bounds(&self) -> (NaiveDate, NaiveDate) {
        let start = self.start.unwrap_or_else(date_range::today);
        let end = self.end.unwrap_or(start);
        (start, end)
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/tasks")
            .route("", web::get().to(list_tasks))
            .route("", web::post().to(create_task))
            .route("/bulk", web::post().to(create_bulk))
            .route("/groups", web::get().to(list_grouped))
            .route("/{task_id}", web::put().to(update_task))
            .route("/{task_id}", web::delete().to(delete_task)),
    );
}

fn task_error_response(err: &task_service::TaskError) -> HttpResponse {
    match err {
        task_service::TaskError::EmptyText => HttpResponse::BadRequest().json(ApiError {
            error: "validation_error".to_string(),
            message: "Task text is required".to_string(),
        }),
        task_service::TaskError::NotFound => HttpResponse::NotFound().json(ApiError {
            error: "not_found".to_string(),
            message: "Task not found".to_string(),
        }),
        task_service::TaskError::Store(e) => super::store_error_response(e),
    }
}

async fn list_tasks(
    state: web::Data<AppState>,
    req: actix_web::HttpRequest,
    query: web::Query<RangeQuery>,
) -> Result<HttpResponse> {
    if crate::middleware::auth::authorize(&req, &state.config.app_secret).is_err() {
        return Ok(super::unauthorized_response());
    }

    let (start, end) = query.bounds();

    match task_service::list_range(&state.store, start, end).await {
        Ok(tasks) => Ok(HttpResponse::Ok().json(ApiSuccess::new(tasks))),
        Err(e) => {
            log::error!("Error listing tasks: {:?}", e);
            Ok(task_error_response(&e))
        }
    }
}

async fn list_grouped(
    state: web::Data<AppState>,
    req: actix_web::HttpRequest,
    query: web::Query<RangeQuery>,
) -> Result<HttpResponse> {
    if crate::middleware::auth::authorize(&req, &state.config.app_secret).is_err() {
        return Ok(super::unauthorized_response());
    }

    let (start, end) = query.bounds();

    match task_service::list_grouped(&state.store, start, end).await {
        Ok(groups) => Ok(HttpResponse::Ok().json(ApiSuccess::new(groups))),
        Err(e) => {
            log::error!("Error listing grouped tasks: {:?}", e);
            Ok(task_error_response(&e))
        }
    }
}

async fn create_task(
    state: web::Data<AppState>,
    req: actix_web::HttpRequest,
    body: web::Json<CreateTaskRequest>,
) -> Result<HttpResponse> {
    if crate::middleware::auth::authorize(&req, &state.config.app_secret).is_err() {
        return Ok(super::unauthorized_response());
    }

    match task_service::add_task(&state.store, &body.text, body.date).await {
        Ok(task) => Ok(HttpResponse::Created().json(ApiSuccess::new(task))),
        Err(e) => {
            log::error!("Error creating task: {:?}", e);
            Ok(task_error_response(&e))
        }
    }
}

async fn create_bulk(
    state: web::Data<AppState>,
    req: actix_web::HttpRequest,
    body: web::Json<BulkCreateTaskRequest>,
) -> Result<HttpResponse> {
    if crate::middleware::auth::authorize(&req, &state.config.app_secret).is_err() {
        return Ok(super::unauthorized_response());
    }

    match task_service::create_bulk(&state.store, &body.text, body.start_date, body.end_date)
        .await
    {
        Ok(outcome) => {
            if !outcome.failed.is_empty() {
                log::warn!(
                    "Bulk create {}: {} dates persisted, {} failed",
                    outcome.bulk_id,
                    outcome.created.len(),
                    outcome.failed.len()
                );
            }

            let response = BulkCreateResponse {
                bulk_id: outcome.bulk_id,
                created: outcome.created,
                failed: outcome
                    .failed
                    .iter()
                    .map(|f| BulkCreateFailure {
                        date: f.date,
                        error: f.error.kind().to_string(),
                        message: f.error.to_string(),
                    })
                    .collect(),
            };

            Ok(HttpResponse::Created().json(ApiSuccess::new(response)))
        }
        Err(e) => {
            log::error!("Error creating bulk tasks: {:?}", e);
            Ok(task_error_response(&e))
        }
    }
}

async fn update_task(
    state: web::Data<AppState>,
    req: actix_web::HttpRequest,
    path: web::Path<String>,
    body: web::Json<UpdateTaskRequest>,
) -> Result<HttpResponse> {
    if crate::middleware::auth::authorize(&req, &state.config.app_secret).is_err() {
        return Ok(super::unauthorized_response());
    }

    let task_id = match Uuid::parse_str(&path.into_inner()) {
        Ok(id) => id,
        Err(_) => {
            return Ok(HttpResponse::BadRequest().json(ApiError {
                error: "invalid_id".to_string(),
                message: "Invalid task ID format".to_string(),
            }));
        }
    };

    match task_service::set_completed(&state.store, &task_id, body.completed).await {
        Ok(()) => Ok(HttpResponse::Ok().json(ApiSuccess::new(()))),
        Err(e) => {
            log::error!("Error updating task: {:?}", e);
            Ok(task_error_response(&e))
        }
    }
}

async fn delete_task(
    state: web::Data<AppState>,
    req: actix_web::HttpRequest,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    if crate::middleware::auth::authorize(&req, &state.config.app_secret).is_err() {
        return Ok(super::unauthorized_response());
    }

    let task_id = match Uuid::parse_str(&path.into_inner()) {
        Ok(id) => id,
        Err(_) => {
            return Ok(HttpResponse::BadRequest().json(ApiError {
                error: "invalid_id".to_string(),
                message: "Invalid task ID format".to_string(),
            }));
        }
    };

    match task_service::delete_task(&state.store, &task_id).await {
        Ok(()) => Ok(HttpResponse::NoContent().finish()),
        Err(e) => {
            log::error!("Error deleting task: {:?}", e);
            Ok(task_error_response(&e))
        }
    }
}
