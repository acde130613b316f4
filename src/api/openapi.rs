//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health, members};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Library Records API",
        version = "0.1.0",
        description = "Books and members of the library, backed by a relational store"
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
        // Members
        members::list_members,
        members::get_member,
        members::create_member,
        members::update_member,
        members::delete_member,
    ),
    components(
        schemas(
            // Books
            crate::models::book::Book,
            crate::models::book::CreateBook,
            crate::models::book::CreatedBook,
            crate::models::book::UpdateBook,
            // Members
            crate::models::member::Member,
            crate::models::member::CreateMember,
            crate::models::member::CreatedMember,
            crate::models::member::UpdateMember,
            // Health
            health::HealthResponse,
            // Responses
            crate::models::MessageResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Book records"),
        (name = "members", description = "Member records")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
