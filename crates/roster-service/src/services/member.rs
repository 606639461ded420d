//! Member service
//!
//! Handles member creation, lookup, listing and removal.

use roster_core::{DomainError, MemberId, MemberSummary, NewMember};
use tracing::{info, instrument};

use crate::dto::{CreateMemberRequest, MemberResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Member service
pub struct MemberService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MemberService<'a> {
    /// Create a new MemberService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a member, optionally inside an existing team
    #[instrument(skip(self))]
    pub async fn create_member(&self, request: CreateMemberRequest) -> ServiceResult<MemberResponse> {
        let member = NewMember::from(request);

        // Verify team exists
        if let Some(team_id) = member.team_id {
            self.ctx
                .team_repo()
                .find_by_id(team_id)
                .await?
                .ok_or(DomainError::TeamNotFound(team_id))?;
        }

        let saved = self.ctx.member_repo().save(&member).await?;

        info!(member_id = %saved.id, team_id = ?saved.team_id, "Member created");

        Ok(MemberResponse::from(saved))
    }

    /// Get member by ID
    #[instrument(skip(self))]
    pub async fn get_member(&self, id: MemberId) -> ServiceResult<MemberResponse> {
        let member = self
            .ctx
            .member_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::MemberNotFound(id))?;

        Ok(MemberResponse::from(member))
    }

    /// Members with exactly this username, or every member when none is given
    #[instrument(skip(self))]
    pub async fn list_members(&self, username: Option<&str>) -> ServiceResult<Vec<MemberResponse>> {
        let members = match username {
            Some(username) => self.ctx.member_repo().find_by_username(username).await?,
            None => self.ctx.member_repo().find_all().await?,
        };

        Ok(members.into_iter().map(MemberResponse::from).collect())
    }

    /// Username and age of every member
    #[instrument(skip(self))]
    pub async fn list_summaries(&self) -> ServiceResult<Vec<MemberSummary>> {
        Ok(self.ctx.member_repo().find_summaries().await?)
    }

    /// Delete a member
    #[instrument(skip(self))]
    pub async fn delete_member(&self, id: MemberId) -> ServiceResult<()> {
        self.ctx.member_repo().delete(id).await?;

        info!(member_id = %id, "Member deleted");

        Ok(())
    }
}
