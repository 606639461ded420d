//! Service context - dependency container for services
//!
//! Holds the pool, the repositories and the paging settings needed by services.

use std::sync::Arc;

use roster_common::PagingConfig;
use roster_core::traits::{MemberQueryRepository, MemberRepository, TeamRepository};
use roster_db::{PgMemberQueryRepository, PgMemberRepository, PgPool, PgTeamRepository};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Repositories sit behind trait objects so tests can swap in other stores.
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    member_repo: Arc<dyn MemberRepository>,
    team_repo: Arc<dyn TeamRepository>,
    member_query_repo: Arc<dyn MemberQueryRepository>,

    // Settings
    paging: PagingConfig,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: PgPool,
        member_repo: Arc<dyn MemberRepository>,
        team_repo: Arc<dyn TeamRepository>,
        member_query_repo: Arc<dyn MemberQueryRepository>,
        paging: PagingConfig,
    ) -> Self {
        Self {
            pool,
            member_repo,
            team_repo,
            member_query_repo,
            paging,
        }
    }

    /// Wire the PostgreSQL repositories onto one pool
    pub fn postgres(pool: PgPool, paging: PagingConfig) -> Self {
        Self::new(
            pool.clone(),
            Arc::new(PgMemberRepository::new(pool.clone())),
            Arc::new(PgTeamRepository::new(pool.clone())),
            Arc::new(PgMemberQueryRepository::new(pool)),
            paging,
        )
    }

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the member repository
    pub fn member_repo(&self) -> &dyn MemberRepository {
        self.member_repo.as_ref()
    }

    /// Get the team repository
    pub fn team_repo(&self) -> &dyn TeamRepository {
        self.team_repo.as_ref()
    }

    /// Get the member search repository
    pub fn member_query_repo(&self) -> &dyn MemberQueryRepository {
        self.member_query_repo.as_ref()
    }

    /// Get the paging settings
    pub fn paging(&self) -> &PagingConfig {
        &self.paging
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .field("paging", &self.paging)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom repositories
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    member_repo: Option<Arc<dyn MemberRepository>>,
    team_repo: Option<Arc<dyn TeamRepository>>,
    member_query_repo: Option<Arc<dyn MemberQueryRepository>>,
    paging: Option<PagingConfig>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn member_repo(mut self, repo: Arc<dyn MemberRepository>) -> Self {
        self.member_repo = Some(repo);
        self
    }

    pub fn team_repo(mut self, repo: Arc<dyn TeamRepository>) -> Self {
        self.team_repo = Some(repo);
        self
    }

    pub fn member_query_repo(mut self, repo: Arc<dyn MemberQueryRepository>) -> Self {
        self.member_query_repo = Some(repo);
        self
    }

    pub fn paging(mut self, paging: PagingConfig) -> Self {
        self.paging = Some(paging);
        self
    }

    /// Build the ServiceContext
    ///
    /// Repositories that were not set default to the PostgreSQL ones on the pool.
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if the pool is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let pool = self
            .pool
            .ok_or_else(|| ServiceError::validation("pool is required"))?;

        let member_repo = self
            .member_repo
            .unwrap_or_else(|| Arc::new(PgMemberRepository::new(pool.clone())));
        let team_repo = self
            .team_repo
            .unwrap_or_else(|| Arc::new(PgTeamRepository::new(pool.clone())));
        let member_query_repo = self
            .member_query_repo
            .unwrap_or_else(|| Arc::new(PgMemberQueryRepository::new(pool.clone())));

        Ok(ServiceContext::new(
            pool,
            member_repo,
            team_repo,
            member_query_repo,
            self.paging.unwrap_or_default(),
        ))
    }
}
