//! Repository traits

mod repositories;

pub use repositories::{MemberQueryRepository, MemberRepository, RepoResult, TeamRepository};
