//! Book API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;

use crate::{
    error::{AppResult, ErrorResponse},
    models::{
        book::{Book, CreateBook, CreatedBook, UpdateBook},
        MessageResponse,
    },
    repository::books::BOOK_NOT_FOUND,
    AppState,
};

use super::{parse_id, IdPath, JsonBody};

/// List all books
#[utoipa::path(
    get,
    path = "/api/books",
    tag = "books",
    responses(
        (status = 200, description = "Every book, unordered", body = Vec<Book>),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.repository.books_list().await?;
    Ok(Json(books))
}

/// Get book by ID
#[utoipa::path(
    get,
    path = "/api/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found", body = MessageResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    WithRejection(Path(raw_id), _): IdPath,
) -> AppResult<Json<Book>> {
    let id = parse_id(&raw_id, BOOK_NOT_FOUND)?;
    let book = state.repository.books_get_by_id(id).await?;
    Ok(Json(book))
}

/// Create a book
#[utoipa::path(
    post,
    path = "/api/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = CreatedBook),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    WithRejection(Json(data), _): JsonBody<CreateBook>,
) -> AppResult<(StatusCode, Json<CreatedBook>)> {
    let id = state.repository.books_create(&data).await?;
    tracing::info!(book_id = id, "Book created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedBook {
            id,
            title: data.title,
            isbn: data.isbn,
        }),
    ))
}

/// Update title, ISBN and available copies of a book
#[utoipa::path(
    put,
    path = "/api/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = MessageResponse),
        (status = 404, description = "Book not found", body = MessageResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    WithRejection(Path(raw_id), _): IdPath,
    WithRejection(Json(data), _): JsonBody<UpdateBook>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_id(&raw_id, BOOK_NOT_FOUND)?;
    state.repository.books_update(id, &data).await?;
    Ok(Json(MessageResponse::new("Book updated successfully")))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/api/books/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 400, description = "Book is referenced by a loan", body = MessageResponse),
        (status = 404, description = "Book not found", body = MessageResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    WithRejection(Path(raw_id), _): IdPath,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_id(&raw_id, BOOK_NOT_FOUND)?;
    state.repository.books_delete(id).await?;
    tracing::info!(book_id = id, "Book deleted");
    Ok(Json(MessageResponse::new("Book deleted successfully")))
}
