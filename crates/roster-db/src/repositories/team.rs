//! PostgreSQL implementation of TeamRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{info, instrument};

use roster_core::error::DomainError;
use roster_core::traits::{RepoResult, TeamRepository};
use roster_core::{Member, NewTeam, Team, TeamId, TeamWithMembers};

use crate::models::{MemberModel, TeamModel};

use super::error::{map_db_error, map_unique_violation, team_not_found};

/// PostgreSQL implementation of TeamRepository
#[derive(Clone)]
pub struct PgTeamRepository {
    pool: PgPool,
}

impl PgTeamRepository {
    /// Create a new PgTeamRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load_members(&self, id: TeamId) -> Result<Vec<Member>, DomainError> {
        let members = sqlx::query_as::<_, MemberModel>(
            r#"
            SELECT member_id, username, age, team_id
            FROM member
            WHERE team_id = $1
            ORDER BY member_id
            "#,
        )
        .bind(id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(members.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl TeamRepository for PgTeamRepository {
    #[instrument(skip(self))]
    async fn save(&self, team: &NewTeam) -> RepoResult<Team> {
        let model = sqlx::query_as::<_, TeamModel>(
            r#"
            INSERT INTO team (name)
            VALUES ($1)
            RETURNING team_id, name
            "#,
        )
        .bind(&team.name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::TeamNameExists(team.name.clone())))?;

        info!(team_id = model.team_id, "Team saved");
        Ok(model.into())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: TeamId) -> RepoResult<Option<Team>> {
        let result = sqlx::query_as::<_, TeamModel>(
            r#"
            SELECT team_id, name FROM team WHERE team_id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Into::into))
    }

    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Team>> {
        let result = sqlx::query_as::<_, TeamModel>(
            r#"
            SELECT team_id, name FROM team WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Into::into))
    }

    #[instrument(skip(self))]
    async fn find_with_members(&self, id: TeamId) -> RepoResult<Option<TeamWithMembers>> {
        let Some(team) = self.find_by_id(id).await? else {
            return Ok(None);
        };
        let members = self.load_members(id).await?;

        Ok(Some(TeamWithMembers { team, members }))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: TeamId) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM team WHERE team_id = $1
            "#,
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(team_not_found(id));
        }

        info!(team_id = %id, "Team deleted");
        Ok(())
    }
}
