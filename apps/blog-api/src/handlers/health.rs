//! Health check endpoint.

use actix_web::{HttpResponse, http::StatusCode, web};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub storage: &'static str,
    pub timestamp: String,
}

/// Health check endpoint - returns server and storage status.
///
/// GET /api/health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let (status, code) = match state.storage.ping().await {
        Ok(()) => ("ok", StatusCode::OK),
        Err(e) => {
            tracing::warn!(error = %e, "Storage ping failed");
            ("degraded", StatusCode::SERVICE_UNAVAILABLE)
        }
    };

    let response = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        storage: state.storage.name(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    HttpResponse::build(code).json(response)
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test, web};

    use crate::handlers::configure_routes;
    use crate::state::AppState;

    #[actix_web::test]
    async fn reports_memory_storage() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::in_memory()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "ok");
        assert_eq!(body["storage"], "memory");
    }

    #[cfg(feature = "postgres")]
    #[actix_web::test]
    async fn unreachable_database_is_degraded() {
        let state = AppState::postgres(sea_orm::DatabaseConnection::Disconnected);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "degraded");
        assert_eq!(body["storage"], "postgres");
    }
}
