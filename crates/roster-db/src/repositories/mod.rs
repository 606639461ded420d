//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in roster-core.

mod error;
mod member;
mod member_query;
mod team;

pub use member::PgMemberRepository;
pub use member_query::PgMemberQueryRepository;
pub use team::PgTeamRepository;

pub(crate) use error::map_db_error;
