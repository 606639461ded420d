//! Member search service
//!
//! Runs the dynamic member search and the paged variants over the
//! member/team projection.

use roster_core::{MemberTeamDto, PageRequest, PagingStrategy, SearchCondition};
use tracing::{info, instrument};

use crate::dto::{MemberSearchRequest, PageParams, PageResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Member search service
pub struct SearchService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SearchService<'a> {
    /// Create a new SearchService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Every member matching the filters, team columns filled when present
    #[instrument(skip(self))]
    pub async fn search(&self, request: MemberSearchRequest) -> ServiceResult<Vec<MemberTeamDto>> {
        let condition = SearchCondition::from(request);
        let rows = self.ctx.member_query_repo().search(&condition).await?;
        Ok(rows)
    }

    /// One page of the search
    ///
    /// Page size and strategy fall back to the configured defaults.
    #[instrument(skip(self))]
    pub async fn search_page(
        &self,
        request: MemberSearchRequest,
        params: PageParams,
    ) -> ServiceResult<PageResponse<MemberTeamDto>> {
        let (page, strategy) = self.resolve(params)?;
        let condition = SearchCondition::from(request);
        let repo = self.ctx.member_query_repo();

        let result = match strategy {
            PagingStrategy::Simple => repo.search_page_simple(&condition, page).await?,
            PagingStrategy::Optimized => repo.search_page_complex(&condition, page).await?,
        };

        info!(
            strategy = strategy.as_str(),
            offset = page.offset(),
            size = page.size(),
            rows = result.len(),
            total = result.total(),
            "Member page served"
        );

        Ok(PageResponse::from_page(result, strategy))
    }

    /// Number of members matching the filters
    #[instrument(skip(self))]
    pub async fn count(&self, request: MemberSearchRequest) -> ServiceResult<i64> {
        let condition = SearchCondition::from(request);
        Ok(self.ctx.member_query_repo().count(&condition).await?)
    }

    /// Page window and strategy for a request
    fn resolve(&self, params: PageParams) -> ServiceResult<(PageRequest, PagingStrategy)> {
        let paging = self.ctx.paging();

        let size = params.size.unwrap_or(paging.default_size);
        if size > paging.max_size {
            return Err(ServiceError::validation(format!(
                "size must not exceed {}",
                paging.max_size
            )));
        }

        let page = PageRequest::of(params.page.unwrap_or(0), size)?;
        Ok((page, params.strategy.unwrap_or(paging.strategy)))
    }
}
