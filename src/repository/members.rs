//! Members domain methods on Repository

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::member::{CreateMember, Member, UpdateMember},
};

pub const MEMBER_NOT_FOUND: &str = "Member not found";

const MEMBER_COLUMNS: &str = r#"
    MemberID AS member_id, Name AS name, Address AS address,
    PhoneNumber AS phone_number, Email AS email
"#;

impl Repository {
    /// List every member
    pub async fn members_list(&self) -> AppResult<Vec<Member>> {
        let rows = sqlx::query_as::<_, Member>(&format!("SELECT {} FROM Members", MEMBER_COLUMNS))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get member by ID
    pub async fn members_get_by_id(&self, id: i32) -> AppResult<Member> {
        sqlx::query_as::<_, Member>(&format!(
            "SELECT {} FROM Members WHERE MemberID = $1",
            MEMBER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(MEMBER_NOT_FOUND.to_string()))
    }

    /// Insert a member and return its generated ID
    pub async fn members_create(&self, data: &CreateMember) -> AppResult<i32> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO Members (Name, Address, PhoneNumber, Email)
            VALUES ($1, $2, $3, $4)
            RETURNING MemberID
            "#,
        )
        .bind(&data.name)
        .bind(&data.address)
        .bind(&data.phone)
        .bind(&data.email)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    /// Replace all four member fields in one statement
    pub async fn members_update(&self, id: i32, data: &UpdateMember) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE Members SET Name = $1, Address = $2, PhoneNumber = $3, Email = $4
            WHERE MemberID = $5
            "#,
        )
        .bind(&data.name)
        .bind(&data.address)
        .bind(&data.phone)
        .bind(&data.email)
        .bind(id)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(MEMBER_NOT_FOUND.to_string()));
        }
        Ok(())
    }

    /// Delete a member
    ///
    /// Unlike books, a foreign-key failure here is not singled out and
    /// surfaces as a plain database error.
    pub async fn members_delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM Members WHERE MemberID = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(MEMBER_NOT_FOUND.to_string()));
        }
        Ok(())
    }
}
