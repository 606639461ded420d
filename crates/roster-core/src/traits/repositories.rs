//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Member, NewMember, NewTeam, Team, TeamWithMembers};
use crate::error::DomainError;
use crate::query::{MemberSummary, MemberTeamDto, Page, PageRequest, Predicate, SearchCondition};
use crate::value_objects::{MemberId, TeamId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Member Repository
// ============================================================================

#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Persist a new member and return it with its assigned id
    async fn save(&self, member: &NewMember) -> RepoResult<Member>;

    /// Find member by ID
    async fn find_by_id(&self, id: MemberId) -> RepoResult<Option<Member>>;

    /// List every member
    async fn find_all(&self) -> RepoResult<Vec<Member>>;

    /// List members with exactly this username
    async fn find_by_username(&self, username: &str) -> RepoResult<Vec<Member>>;

    /// List members matching an arbitrary predicate
    async fn find_all_matching(&self, predicate: &Predicate) -> RepoResult<Vec<Member>>;

    /// Username and age of every member
    async fn find_summaries(&self) -> RepoResult<Vec<MemberSummary>>;

    /// Delete a member
    async fn delete(&self, id: MemberId) -> RepoResult<()>;
}

// ============================================================================
// Team Repository
// ============================================================================

#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Persist a new team and return it with its assigned id
    async fn save(&self, team: &NewTeam) -> RepoResult<Team>;

    /// Find team by ID
    async fn find_by_id(&self, id: TeamId) -> RepoResult<Option<Team>>;

    /// Find team by its name
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Team>>;

    /// Find team by ID together with its members
    async fn find_with_members(&self, id: TeamId) -> RepoResult<Option<TeamWithMembers>>;

    /// Delete a team; its members stay, without a team
    async fn delete(&self, id: TeamId) -> RepoResult<()>;
}

// ============================================================================
// Member Search
// ============================================================================

#[async_trait]
pub trait MemberQueryRepository: Send + Sync {
    /// All rows matching the condition, no limit
    async fn search(&self, condition: &SearchCondition) -> RepoResult<Vec<MemberTeamDto>>;

    /// One page, total computed in the same round trip
    async fn search_page_simple(
        &self,
        condition: &SearchCondition,
        page: PageRequest,
    ) -> RepoResult<Page<MemberTeamDto>>;

    /// One page, count query issued only when the content leaves the total open
    async fn search_page_complex(
        &self,
        condition: &SearchCondition,
        page: PageRequest,
    ) -> RepoResult<Page<MemberTeamDto>>;

    /// Number of members matching the condition
    async fn count(&self, condition: &SearchCondition) -> RepoResult<i64>;
}
