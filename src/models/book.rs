//! Book model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Book record, serialized with the `Books` column names
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    #[serde(rename = "BookID")]
    pub book_id: i32,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "ISBN")]
    pub isbn: String,
    #[serde(rename = "PublishedDate")]
    pub published_date: Option<NaiveDate>,
    #[serde(rename = "TotalCopies")]
    pub total_copies: i32,
    /// Not checked against `TotalCopies`
    #[serde(rename = "AvailableCopies")]
    pub available_copies: i32,
    /// References `Genres.GenreID`
    #[serde(rename = "GenreID")]
    pub genre_id: Option<i32>,
}

/// Create book request
///
/// Every field is optional here; a missing value is bound as NULL and left
/// for the database constraints to reject.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBook {
    pub title: Option<String>,
    pub isbn: Option<String>,
    pub published_date: Option<NaiveDate>,
    pub total_copies: Option<i32>,
    pub available_copies: Option<i32>,
    pub genre_id: Option<i32>,
}

/// Create book response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatedBook {
    pub id: i32,
    pub title: Option<String>,
    pub isbn: Option<String>,
}

/// Update book request
///
/// Only these three columns are writable after creation. Other keys in the
/// body (`totalCopies`, `genreId`, ...) are ignored.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBook {
    pub title: Option<String>,
    pub isbn: Option<String>,
    pub available_copies: Option<i32>,
}
