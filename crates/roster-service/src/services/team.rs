//! Team service
//!
//! Handles team creation, lookup and removal.

use roster_core::{DomainError, NewTeam, TeamId};
use tracing::{info, instrument};

use crate::dto::{CreateTeamRequest, TeamResponse, TeamWithMembersResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Team service
pub struct TeamService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TeamService<'a> {
    /// Create a new TeamService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a team; names are unique
    #[instrument(skip(self))]
    pub async fn create_team(&self, request: CreateTeamRequest) -> ServiceResult<TeamResponse> {
        if request.name.trim().is_empty() {
            return Err(ServiceError::validation("Team name must not be blank"));
        }

        let team = self.ctx.team_repo().save(&NewTeam::from(request)).await?;

        info!(team_id = %team.id, name = %team.name, "Team created");

        Ok(TeamResponse::from(team))
    }

    /// Get team by ID with its members
    #[instrument(skip(self))]
    pub async fn get_team(&self, id: TeamId) -> ServiceResult<TeamWithMembersResponse> {
        let loaded = self
            .ctx
            .team_repo()
            .find_with_members(id)
            .await?
            .ok_or(DomainError::TeamNotFound(id))?;

        Ok(TeamWithMembersResponse::from(loaded))
    }

    /// Get team by its name
    #[instrument(skip(self))]
    pub async fn find_by_name(&self, name: &str) -> ServiceResult<TeamResponse> {
        let team = self
            .ctx
            .team_repo()
            .find_by_name(name)
            .await?
            .ok_or_else(|| ServiceError::not_found("Team", name))?;

        Ok(TeamResponse::from(team))
    }

    /// Delete a team; its members remain without a team
    #[instrument(skip(self))]
    pub async fn delete_team(&self, id: TeamId) -> ServiceResult<()> {
        self.ctx.team_repo().delete(id).await?;

        info!(team_id = %id, "Team deleted");

        Ok(())
    }
}
