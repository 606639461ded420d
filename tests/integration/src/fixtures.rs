//! Test fixtures and data generators
//!
//! Provides reusable request/response shapes and a roster builder that gives
//! every test its own uniquely named team.

use anyhow::Result;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::helpers::{assert_json, TestServer};

/// Get a unique suffix for test data
pub fn unique_suffix() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Create team request
#[derive(Debug, Serialize)]
pub struct CreateTeamRequest {
    pub name: String,
}

impl CreateTeamRequest {
    pub fn unique() -> Self {
        Self {
            name: format!("team-{}", unique_suffix()),
        }
    }
}

/// Team response
#[derive(Debug, Deserialize)]
pub struct TeamResponse {
    pub id: i64,
    pub name: String,
}

/// Team response with members
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamWithMembersResponse {
    pub id: i64,
    pub name: String,
    pub member_count: usize,
    pub members: Vec<MemberResponse>,
}

/// Create member request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMemberRequest {
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<i64>,
}

impl CreateMemberRequest {
    pub fn unique(age: i32, team_id: Option<i64>) -> Self {
        Self {
            username: Some(format!("member-{}", unique_suffix())),
            age,
            team_id,
        }
    }
}

/// Member response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberResponse {
    pub id: i64,
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<i64>,
}

/// Member joined with its team
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberTeamRow {
    pub member_id: i64,
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<i64>,
    pub team_name: Option<String>,
}

/// Page of search results
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageBody {
    pub content: Vec<MemberTeamRow>,
    pub page: i64,
    pub size: i64,
    pub total_elements: i64,
    pub total_pages: i64,
    pub has_next: bool,
    pub has_previous: bool,
    pub strategy: String,
}

/// Count response
#[derive(Debug, Deserialize)]
pub struct CountBody {
    pub count: i64,
}

/// Error response body
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

/// A freshly created team and its members, in creation order
pub struct Roster {
    pub team: TeamResponse,
    pub members: Vec<MemberResponse>,
}

impl Roster {
    /// Create a uniquely named team with one member per age
    pub async fn create(server: &TestServer, ages: &[i32]) -> Result<Self> {
        let response = server.post("/api/v1/teams", &CreateTeamRequest::unique()).await?;
        let team: TeamResponse = assert_json(response, StatusCode::CREATED).await?;

        let mut members = Vec::with_capacity(ages.len());
        for &age in ages {
            let request = CreateMemberRequest::unique(age, Some(team.id));
            let response = server.post("/api/v1/members", &request).await?;
            members.push(assert_json(response, StatusCode::CREATED).await?);
        }

        Ok(Self { team, members })
    }

    /// Usernames of the given members, in order
    pub fn usernames(&self, indexes: &[usize]) -> Vec<Option<String>> {
        indexes
            .iter()
            .map(|&i| self.members[i].username.clone())
            .collect()
    }
}
