//! # roster-core
//!
//! Domain layer containing entities, value objects, the member search model
//! (conditions, predicates, paging) and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod query;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Member, NewMember, NewTeam, Team, TeamWithMembers};
pub use error::DomainError;
pub use query::{
    Column, MemberSummary, MemberTeamDto, Page, PageRequest, PagingStrategy, Predicate,
    SearchCondition,
};
pub use traits::{MemberQueryRepository, MemberRepository, RepoResult, TeamRepository};
pub use value_objects::{IdParseError, MemberId, TeamId};
