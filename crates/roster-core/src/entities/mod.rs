//! Domain entities - core business objects

mod member;
mod team;

pub use member::{Member, NewMember};
pub use team::{NewTeam, Team, TeamWithMembers};
