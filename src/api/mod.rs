//! API handlers for the library records REST endpoints

pub mod books;
pub mod health;
pub mod members;
pub mod openapi;

use std::num::IntErrorKind;

use axum::{
    extract::Path,
    routing::get,
    Json, Router,
};
use axum_extra::extract::WithRejection;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    error::{AppError, AppResult},
    AppState,
};

/// JSON body whose rejection is answered as `400 { "error": ... }`
pub type JsonBody<T> = WithRejection<Json<T>, AppError>;

/// Raw `{id}` path segment, turned into a row ID by [`parse_id`]
pub type IdPath = WithRejection<Path<String>, AppError>;

/// Parse a row ID from the path
///
/// An integer too large for the ID column cannot match any row and answers
/// `not_found`; anything that is not an integer is a bad request.
pub fn parse_id(raw: &str, not_found: &str) -> AppResult<i32> {
    raw.parse::<i32>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            AppError::NotFound(not_found.to_string())
        }
        _ => AppError::BadRequest(format!("Invalid id '{}': {}", raw, e)),
    })
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // Books
        .route("/books", get(books::list_books).post(books::create_book))
        .route(
            "/books/:id",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        // Members
        .route("/members", get(members::list_members).post(members::create_member))
        .route(
            "/members/:id",
            get(members::get_member)
                .put(members::update_member)
                .delete(members::delete_member),
        );

    Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .nest("/api", api)
        .with_state(state)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::AppConfig, repository::Repository};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use sqlx::postgres::PgPoolOptions;
    use std::time::Duration;
    use tower::ServiceExt;

    /// Router over a pool that never manages to connect
    fn test_app() -> Router {
        let mut config = AppConfig::default();
        config.database.host = "127.0.0.1".to_string();
        config.database.port = 1;

        let pool = PgPoolOptions::new()
            .acquire_timeout(Duration::from_millis(500))
            .connect_lazy_with(config.database.connect_options());

        create_router(AppState {
            repository: Repository::new(pool),
        })
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = test_app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn test_health_does_not_touch_database() {
        let (status, body) = send(Request::get("/health").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_ready_reports_unreachable_database() {
        let (status, body) = send(Request::get("/ready").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_storage_failure_is_500_with_error() {
        let (status, body) = send(Request::get("/api/books").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_malformed_json_is_400_with_error() {
        let request = Request::post("/api/books")
            .header("content-type", "application/json")
            .body(Body::from("{\"title\": "))
            .unwrap();

        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_400_with_error() {
        let (status, body) =
            send(Request::get("/api/members/abc").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_out_of_range_id_is_404_with_message() {
        let (status, body) =
            send(Request::get("/api/books/3000000000").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Book not found");

        let (status, body) = send(
            Request::delete("/api/members/99999999999")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Member not found");

        let request = Request::put("/api/members/3000000000")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"name": "x", "address": "x", "phone": "x", "email": "x"}"#))
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Member not found");
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42", "missing").unwrap(), 42);
        assert!(matches!(
            parse_id("-99999999999", "missing"),
            Err(AppError::NotFound(msg)) if msg == "missing"
        ));
        assert!(matches!(parse_id("abc", "missing"), Err(AppError::BadRequest(_))));
        assert!(matches!(parse_id("", "missing"), Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let (status, _) = send(Request::get("/api/loans").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unsupported_method_is_405() {
        let request = Request::patch("/api/books/1").body(Body::empty()).unwrap();
        let (status, _) = send(request).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_openapi_document_lists_resources() {
        let (status, body) =
            send(Request::get("/api-docs/openapi.json").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"]["/api/books/{id}"].is_object());
        assert!(body["paths"]["/api/members"].is_object());
    }
}
