//! Team handlers
//!
//! Endpoints for team creation, lookup and removal.

use axum::{extract::State, Json};
use roster_core::TeamId;
use roster_service::dto::TeamLookupQuery;
use roster_service::{CreateTeamRequest, TeamResponse, TeamService, TeamWithMembersResponse};

use crate::extractors::{IdPath, ValidatedJson, ValidatedQuery};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create a team
///
/// POST /teams
pub async fn create_team(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateTeamRequest>,
) -> ApiResult<Created<TeamResponse>> {
    let service = TeamService::new(state.service_context());
    let team = service.create_team(request).await?;
    Ok(Created(team))
}

/// Get team by ID with its members
///
/// GET /teams/{team_id}
pub async fn get_team(
    State(state): State<AppState>,
    IdPath(team_id): IdPath<TeamId>,
) -> ApiResult<Json<TeamWithMembersResponse>> {
    let service = TeamService::new(state.service_context());
    let team = service.get_team(team_id).await?;
    Ok(Json(team))
}

/// Find a team by its exact name
///
/// GET /teams?name=
pub async fn find_team_by_name(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<TeamLookupQuery>,
) -> ApiResult<Json<TeamResponse>> {
    let service = TeamService::new(state.service_context());
    let team = service.find_by_name(&query.name).await?;
    Ok(Json(team))
}

/// Delete a team; its members stay without a team
///
/// DELETE /teams/{team_id}
pub async fn delete_team(
    State(state): State<AppState>,
    IdPath(team_id): IdPath<TeamId>,
) -> ApiResult<NoContent> {
    let service = TeamService::new(state.service_context());
    service.delete_team(team_id).await?;
    Ok(NoContent)
}
