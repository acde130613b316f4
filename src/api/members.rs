//! Member API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;

use crate::{
    error::{AppResult, ErrorResponse},
    models::{
        member::{CreateMember, CreatedMember, Member, UpdateMember},
        MessageResponse,
    },
    repository::members::MEMBER_NOT_FOUND,
    AppState,
};

use super::{parse_id, IdPath, JsonBody};

/// List all members
#[utoipa::path(
    get,
    path = "/api/members",
    tag = "members",
    responses(
        (status = 200, description = "Every member, unordered", body = Vec<Member>),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn list_members(State(state): State<AppState>) -> AppResult<Json<Vec<Member>>> {
    let members = state.repository.members_list().await?;
    Ok(Json(members))
}

/// Get member by ID
#[utoipa::path(
    get,
    path = "/api/members/{id}",
    tag = "members",
    params(("id" = i32, Path, description = "Member ID")),
    responses(
        (status = 200, description = "Member details", body = Member),
        (status = 404, description = "Member not found", body = MessageResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn get_member(
    State(state): State<AppState>,
    WithRejection(Path(raw_id), _): IdPath,
) -> AppResult<Json<Member>> {
    let id = parse_id(&raw_id, MEMBER_NOT_FOUND)?;
    let member = state.repository.members_get_by_id(id).await?;
    Ok(Json(member))
}

/// Register a member
#[utoipa::path(
    post,
    path = "/api/members",
    tag = "members",
    request_body = CreateMember,
    responses(
        (status = 201, description = "Member created", body = CreatedMember),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn create_member(
    State(state): State<AppState>,
    WithRejection(Json(data), _): JsonBody<CreateMember>,
) -> AppResult<(StatusCode, Json<CreatedMember>)> {
    let id = state.repository.members_create(&data).await?;
    tracing::info!(member_id = id, "Member created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedMember {
            id,
            name: data.name,
            email: data.email,
        }),
    ))
}

/// Update a member
#[utoipa::path(
    put,
    path = "/api/members/{id}",
    tag = "members",
    params(("id" = i32, Path, description = "Member ID")),
    request_body = UpdateMember,
    responses(
        (status = 200, description = "Member updated", body = MessageResponse),
        (status = 404, description = "Member not found", body = MessageResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn update_member(
    State(state): State<AppState>,
    WithRejection(Path(raw_id), _): IdPath,
    WithRejection(Json(data), _): JsonBody<UpdateMember>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_id(&raw_id, MEMBER_NOT_FOUND)?;
    state.repository.members_update(id, &data).await?;
    Ok(Json(MessageResponse::new("Member updated successfully")))
}

/// Delete a member
#[utoipa::path(
    delete,
    path = "/api/members/{id}",
    tag = "members",
    params(("id" = i32, Path, description = "Member ID")),
    responses(
        (status = 200, description = "Member deleted", body = MessageResponse),
        (status = 404, description = "Member not found", body = MessageResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn delete_member(
    State(state): State<AppState>,
    WithRejection(Path(raw_id), _): IdPath,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_id(&raw_id, MEMBER_NOT_FOUND)?;
    state.repository.members_delete(id).await?;
    tracing::info!(member_id = id, "Member deleted");
    Ok(Json(MessageResponse::new("Member deleted successfully")))
}
