//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use roster_core::{Member, Page, PagingStrategy, Team, TeamWithMembers};

use super::responses::{MemberResponse, PageResponse, TeamResponse, TeamWithMembersResponse};

// ============================================================================
// Member Mappers
// ============================================================================

impl From<&Member> for MemberResponse {
    fn from(member: &Member) -> Self {
        Self {
            id: member.id,
            username: member.username.clone(),
            age: member.age,
            team_id: member.team_id,
        }
    }
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self {
            id: member.id,
            username: member.username,
            age: member.age,
            team_id: member.team_id,
        }
    }
}

// ============================================================================
// Team Mappers
// ============================================================================

impl From<Team> for TeamResponse {
    fn from(team: Team) -> Self {
        Self {
            id: team.id,
            name: team.name,
        }
    }
}

impl From<TeamWithMembers> for TeamWithMembersResponse {
    fn from(loaded: TeamWithMembers) -> Self {
        Self {
            id: loaded.team.id,
            name: loaded.team.name,
            member_count: loaded.members.len(),
            members: loaded.members.into_iter().map(MemberResponse::from).collect(),
        }
    }
}

// ============================================================================
// Page Mappers
// ============================================================================

impl<T> PageResponse<T> {
    /// Flatten a page and the strategy that produced it
    pub fn from_page(page: Page<T>, strategy: PagingStrategy) -> Self {
        let request = page.request();
        Self {
            page: page.number(),
            size: request.size(),
            total_elements: page.total(),
            total_pages: page.total_pages(),
            has_next: page.has_next(),
            has_previous: page.has_previous(),
            strategy,
            content: page.into_content(),
        }
    }
}
