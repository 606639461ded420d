//! PostgreSQL implementation of MemberQueryRepository
//!
//! Search over `member LEFT JOIN team`, projected into `MemberTeamDto`.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use roster_core::error::DomainError;
use roster_core::traits::{MemberQueryRepository, RepoResult};
use roster_core::{MemberTeamDto, Page, PageRequest, Predicate, SearchCondition};

use crate::models::{MemberTeamModel, PagedMemberTeamModel};
use crate::query::statements;

use super::error::map_db_error;

/// PostgreSQL implementation of MemberQueryRepository
#[derive(Clone)]
pub struct PgMemberQueryRepository {
    pool: PgPool,
}

impl PgMemberQueryRepository {
    /// Create a new PgMemberQueryRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Predicate for `condition`, checked before any SQL is built
    fn predicate(condition: &SearchCondition) -> Result<Predicate, DomainError> {
        let predicate = condition.to_predicate();
        predicate.validate()?;
        Ok(predicate)
    }

    async fn count_matching(&self, predicate: &Predicate) -> Result<i64, DomainError> {
        statements::count_members(predicate)
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}

#[async_trait]
impl MemberQueryRepository for PgMemberQueryRepository {
    #[instrument(skip(self))]
    async fn search(&self, condition: &SearchCondition) -> RepoResult<Vec<MemberTeamDto>> {
        let predicate = Self::predicate(condition)?;

        let rows = statements::search_rows(&predicate)
            .build_query_as::<MemberTeamModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self))]
    async fn search_page_simple(
        &self,
        condition: &SearchCondition,
        page: PageRequest,
    ) -> RepoResult<Page<MemberTeamDto>> {
        let predicate = Self::predicate(condition)?;

        let rows = statements::search_page_with_total(&predicate, page)
            .build_query_as::<PagedMemberTeamModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        // The window total rides on every row, so an empty page carries none
        let total = match rows.first() {
            Some(row) => row.total_count,
            None => self.count_matching(&predicate).await?,
        };
        let content = rows.into_iter().map(|paged| paged.row.into()).collect();

        Ok(Page::new(content, page, total))
    }

    #[instrument(skip(self))]
    async fn search_page_complex(
        &self,
        condition: &SearchCondition,
        page: PageRequest,
    ) -> RepoResult<Page<MemberTeamDto>> {
        let predicate = Self::predicate(condition)?;

        let rows = statements::search_page(&predicate, page)
            .build_query_as::<MemberTeamModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;
        let content: Vec<MemberTeamDto> = rows.into_iter().map(Into::into).collect();

        let fetched = content.len();
        let predicate = &predicate;
        let page = Page::assemble(content, page, || async move {
            debug!(fetched, "Total not implied by page, counting");
            self.count_matching(predicate).await
        })
        .await?;

        Ok(page)
    }

    #[instrument(skip(self))]
    async fn count(&self, condition: &SearchCondition) -> RepoResult<i64> {
        let predicate = Self::predicate(condition)?;
        self.count_matching(&predicate).await
    }
}
