use actix_web::{web, HttpResponse};
use shared::ApiError;

use crate::store::StoreError;

pub mod health;
pub mod summaries;
pub mod tasks;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(tasks::configure)
            .configure(summaries::configure)
            .configure(health::configure),
    );
}

/// Map a classified store failure to an HTTP response. The classification
/// tag rides along in the body so clients can branch without parsing
/// message text.
pub(crate) fn store_error_response(err: &StoreError) -> HttpResponse {
    let body = ApiError {
        error: err.kind().to_string(),
        message: err.to_string(),
    };

    match err {
        StoreError::PermissionDenied => HttpResponse::Forbidden().json(body),
        StoreError::Unauthenticated => HttpResponse::Unauthorized().json(body),
        StoreError::Unavailable | StoreError::Network(_) => {
            HttpResponse::ServiceUnavailable().json(body)
        }
        StoreError::InvalidArgument(_) => HttpResponse::BadRequest().json(body),
        StoreError::NotFound => HttpResponse::NotFound().json(body),
        StoreError::Unclassified(_) => HttpResponse::InternalServerError().json(body),
    }
}

pub(crate) fn unauthorized_response() -> HttpResponse {
    HttpResponse::Unauthorized().json(ApiError {
        error: "unauthorized".to_string(),
        message: "Invalid or missing app secret".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;

    #[actix_web::test]
    async fn test_store_error_body_carries_classification_tag() {
        let resp = store_error_response(&StoreError::Unavailable);
        let body = to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["error"], "unavailable");
        assert!(json["message"].is_string());
    }

    #[test]
    fn test_store_error_status_mapping() {
        assert_eq!(
            store_error_response(&StoreError::PermissionDenied).status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            store_error_response(&StoreError::Unauthenticated).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            store_error_response(&StoreError::Unavailable).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            store_error_response(&StoreError::Network("offline".to_string())).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            store_error_response(&StoreError::InvalidArgument("bad".to_string())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            store_error_response(&StoreError::NotFound).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            store_error_response(&StoreError::Unclassified("other".to_string())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
