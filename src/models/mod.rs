//! Data models for the library records server

pub mod book;
pub mod member;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub use book::{Book, CreateBook, CreatedBook, UpdateBook};
pub use member::{CreateMember, CreatedMember, Member, UpdateMember};

/// Plain `{ "message": ... }` body, used for confirmations and for
/// not-found / conflict answers
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
