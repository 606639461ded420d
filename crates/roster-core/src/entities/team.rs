//! Team entity - groups members

use crate::entities::Member;
use crate::value_objects::TeamId;

/// Stored team row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
}

/// Team that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTeam {
    pub name: String,
}

impl NewTeam {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Attach the id assigned by the store
    pub fn into_team(self, id: TeamId) -> Team {
        Team { id, name: self.name }
    }
}

/// Team together with its members
///
/// The member list is the inverse side of `Member::team_id`; it is loaded,
/// never written through this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamWithMembers {
    pub team: Team,
    pub members: Vec<Member>,
}

impl TeamWithMembers {
    /// Number of members in the team
    #[inline]
    pub fn member_count(&self) -> usize {
        self.members.len()
    }
}
