//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use roster_core::{NewMember, NewTeam, PagingStrategy, SearchCondition, TeamId};
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Search Requests
// ============================================================================

/// Member search filters from the query string
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MemberSearchRequest {
    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub team_name: Option<String>,

    #[serde(default)]
    #[validate(range(min = 0, message = "ageGoe must not be negative"))]
    pub age_goe: Option<i32>,

    #[serde(default)]
    #[validate(range(min = 0, message = "ageLoe must not be negative"))]
    pub age_loe: Option<i32>,
}

impl From<MemberSearchRequest> for SearchCondition {
    fn from(request: MemberSearchRequest) -> Self {
        SearchCondition {
            username: request.username,
            team_name: request.team_name,
            age_goe: request.age_goe,
            age_loe: request.age_loe,
        }
    }
}

/// Offset paging parameters; absent values fall back to the configured defaults
#[derive(Debug, Clone, Copy, Default, Deserialize, Validate)]
pub struct PageParams {
    /// Zero-based page number
    #[serde(default)]
    #[validate(range(min = 0, message = "page must not be negative"))]
    pub page: Option<i64>,

    #[serde(default)]
    #[validate(range(min = 1, message = "size must be at least 1"))]
    pub size: Option<i64>,

    /// Overrides the configured paging strategy
    #[serde(default)]
    pub strategy: Option<PagingStrategy>,
}

// ============================================================================
// Member Requests
// ============================================================================

/// Create member request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMemberRequest {
    #[validate(length(min = 1, max = 255, message = "Username must be 1-255 characters"))]
    pub username: Option<String>,

    #[validate(range(min = 0, message = "Age must not be negative"))]
    pub age: i32,

    #[serde(default)]
    pub team_id: Option<TeamId>,
}

impl From<CreateMemberRequest> for NewMember {
    fn from(request: CreateMemberRequest) -> Self {
        NewMember {
            username: request.username,
            age: request.age,
            team_id: request.team_id,
        }
    }
}

/// Member listing filter
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct MemberListQuery {
    #[serde(default)]
    pub username: Option<String>,
}

// ============================================================================
// Team Requests
// ============================================================================

/// Create team request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTeamRequest {
    #[validate(length(min = 1, max = 255, message = "Team name must be 1-255 characters"))]
    pub name: String,
}

impl From<CreateTeamRequest> for NewTeam {
    fn from(request: CreateTeamRequest) -> Self {
        NewTeam::new(request.name)
    }
}

/// Team lookup by name
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TeamLookupQuery {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
}
