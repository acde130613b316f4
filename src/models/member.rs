//! Member model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Member record, serialized with the `Members` column names
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Member {
    #[serde(rename = "MemberID")]
    pub member_id: i32,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Address")]
    pub address: Option<String>,
    #[serde(rename = "PhoneNumber")]
    pub phone_number: Option<String>,
    #[serde(rename = "Email")]
    pub email: Option<String>,
}

/// Create member request
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateMember {
    pub name: Option<String>,
    pub address: Option<String>,
    /// Stored in `PhoneNumber`
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Create member response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatedMember {
    pub id: i32,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Update member request, replaces all four fields
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateMember {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}
