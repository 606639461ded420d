//! Member handlers
//!
//! Endpoints for the member search, its paged variants and member management.

use axum::{extract::State, Json};
use roster_core::{MemberId, MemberSummary, MemberTeamDto};
use roster_service::dto::MemberListQuery;
use roster_service::{
    CreateMemberRequest, MemberResponse, MemberSearchRequest, MemberService, PageParams,
    PageResponse, SearchService,
};
use serde::Serialize;

use crate::extractors::{IdPath, ValidatedJson, ValidatedQuery};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Search members joined with their team
///
/// GET /members/search?username&teamName&ageGoe&ageLoe
pub async fn search_members(
    State(state): State<AppState>,
    ValidatedQuery(request): ValidatedQuery<MemberSearchRequest>,
) -> ApiResult<Json<Vec<MemberTeamDto>>> {
    let service = SearchService::new(state.service_context());
    let rows = service.search(request).await?;
    Ok(Json(rows))
}

/// One page of the member search
///
/// GET /members/search/page?...&page&size&strategy
pub async fn search_members_page(
    State(state): State<AppState>,
    ValidatedQuery(request): ValidatedQuery<MemberSearchRequest>,
    ValidatedQuery(params): ValidatedQuery<PageParams>,
) -> ApiResult<Json<PageResponse<MemberTeamDto>>> {
    let service = SearchService::new(state.service_context());
    let page = service.search_page(request, params).await?;
    Ok(Json(page))
}

/// Number of members matching the search filters
#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub count: i64,
}

/// Count members matching the search filters
///
/// GET /members/search/count?username&teamName&ageGoe&ageLoe
pub async fn count_members(
    State(state): State<AppState>,
    ValidatedQuery(request): ValidatedQuery<MemberSearchRequest>,
) -> ApiResult<Json<CountResponse>> {
    let service = SearchService::new(state.service_context());
    let count = service.count(request).await?;
    Ok(Json(CountResponse { count }))
}

/// List members, optionally only those with the given username
///
/// GET /members?username=
pub async fn list_members(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<MemberListQuery>,
) -> ApiResult<Json<Vec<MemberResponse>>> {
    let service = MemberService::new(state.service_context());
    let members = service.list_members(query.username.as_deref()).await?;
    Ok(Json(members))
}

/// Username and age of every member
///
/// GET /members/summaries
pub async fn list_member_summaries(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<MemberSummary>>> {
    let service = MemberService::new(state.service_context());
    let summaries = service.list_summaries().await?;
    Ok(Json(summaries))
}

/// Create a member
///
/// POST /members
pub async fn create_member(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateMemberRequest>,
) -> ApiResult<Created<MemberResponse>> {
    let service = MemberService::new(state.service_context());
    let member = service.create_member(request).await?;
    Ok(Created(member))
}

/// Get member by ID
///
/// GET /members/{member_id}
pub async fn get_member(
    State(state): State<AppState>,
    IdPath(member_id): IdPath<MemberId>,
) -> ApiResult<Json<MemberResponse>> {
    let service = MemberService::new(state.service_context());
    let member = service.get_member(member_id).await?;
    Ok(Json(member))
}

/// Delete a member
///
/// DELETE /members/{member_id}
pub async fn delete_member(
    State(state): State<AppState>,
    IdPath(member_id): IdPath<MemberId>,
) -> ApiResult<NoContent> {
    let service = MemberService::new(state.service_context());
    service.delete_member(member_id).await?;
    Ok(NoContent)
}
