//! PostgreSQL implementation of MemberRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{info, instrument};

use roster_core::traits::{MemberRepository, RepoResult};
use roster_core::{Member, MemberId, MemberSummary, NewMember, Predicate, TeamId};

use crate::models::{MemberModel, MemberSummaryModel};
use crate::query::statements;

use super::error::{map_db_error, map_foreign_key_violation, member_not_found, team_not_found};

/// PostgreSQL implementation of MemberRepository
#[derive(Clone)]
pub struct PgMemberRepository {
    pool: PgPool,
}

impl PgMemberRepository {
    /// Create a new PgMemberRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for PgMemberRepository {
    #[instrument(skip(self))]
    async fn save(&self, member: &NewMember) -> RepoResult<Member> {
        let model = sqlx::query_as::<_, MemberModel>(
            r#"
            INSERT INTO member (username, age, team_id)
            VALUES ($1, $2, $3)
            RETURNING member_id, username, age, team_id
            "#,
        )
        .bind(&member.username)
        .bind(member.age)
        .bind(member.team_id.map(TeamId::into_inner))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match member.team_id {
            Some(team_id) => map_foreign_key_violation(e, || team_not_found(team_id)),
            None => map_db_error(e),
        })?;

        info!(member_id = model.member_id, "Member saved");
        Ok(model.into())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: MemberId) -> RepoResult<Option<Member>> {
        let result = sqlx::query_as::<_, MemberModel>(
            r#"
            SELECT member_id, username, age, team_id
            FROM member
            WHERE member_id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Into::into))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Member>> {
        let results = sqlx::query_as::<_, MemberModel>(
            r#"
            SELECT member_id, username, age, team_id
            FROM member
            ORDER BY member_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> RepoResult<Vec<Member>> {
        let results = sqlx::query_as::<_, MemberModel>(
            r#"
            SELECT member_id, username, age, team_id
            FROM member
            WHERE username = $1
            ORDER BY member_id
            "#,
        )
        .bind(username)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self, predicate), fields(predicate = %predicate))]
    async fn find_all_matching(&self, predicate: &Predicate) -> RepoResult<Vec<Member>> {
        predicate.validate()?;

        let results = statements::select_members(predicate)
            .build_query_as::<MemberModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self))]
    async fn find_summaries(&self) -> RepoResult<Vec<MemberSummary>> {
        let results = sqlx::query_as::<_, MemberSummaryModel>(
            r#"
            SELECT username, age
            FROM member
            ORDER BY member_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: MemberId) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM member WHERE member_id = $1
            "#,
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(member_not_found(id));
        }

        info!(member_id = %id, "Member deleted");
        Ok(())
    }
}
