//! Books domain methods on Repository

use super::Repository;
use crate::{
    error::{AppError, AppResult, StorageErrorKind},
    models::book::{Book, CreateBook, UpdateBook},
};

pub const BOOK_NOT_FOUND: &str = "Book not found";
pub const BOOK_ON_LOAN: &str = "Cannot delete book. It is currently on loan.";

const BOOK_COLUMNS: &str = r#"
    BookID AS book_id, Title AS title, ISBN AS isbn, PublishedDate AS published_date,
    TotalCopies AS total_copies, AvailableCopies AS available_copies, GenreID AS genre_id
"#;

impl Repository {
    /// List every book, unfiltered and unordered
    pub async fn books_list(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>(&format!("SELECT {} FROM Books", BOOK_COLUMNS))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get book by ID
    pub async fn books_get_by_id(&self, id: i32) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(&format!(
            "SELECT {} FROM Books WHERE BookID = $1",
            BOOK_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(BOOK_NOT_FOUND.to_string()))
    }

    /// Insert a book and return its generated ID
    pub async fn books_create(&self, data: &CreateBook) -> AppResult<i32> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO Books (Title, ISBN, PublishedDate, TotalCopies, AvailableCopies, GenreID)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING BookID
            "#,
        )
        .bind(&data.title)
        .bind(&data.isbn)
        .bind(data.published_date)
        .bind(data.total_copies)
        .bind(data.available_copies)
        .bind(data.genre_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    /// Update title, ISBN and available copies of a book
    pub async fn books_update(&self, id: i32, data: &UpdateBook) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE Books SET Title = $1, ISBN = $2, AvailableCopies = $3 WHERE BookID = $4",
        )
        .bind(&data.title)
        .bind(&data.isbn)
        .bind(data.available_copies)
        .bind(id)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(BOOK_NOT_FOUND.to_string()));
        }
        Ok(())
    }

    /// Delete a book, refused while a loan still references it
    pub async fn books_delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM Books WHERE BookID = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| match StorageErrorKind::classify(&e) {
                StorageErrorKind::Referenced => AppError::Conflict(BOOK_ON_LOAN.to_string()),
                _ => AppError::Database(e),
            })?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(BOOK_NOT_FOUND.to_string()));
        }
        Ok(())
    }
}
