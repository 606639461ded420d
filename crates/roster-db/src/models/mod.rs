//! Database models - SQLx-compatible structs for PostgreSQL tables

mod member;
mod team;

pub use member::{MemberModel, MemberSummaryModel, MemberTeamModel, PagedMemberTeamModel};
pub use team::TeamModel;
