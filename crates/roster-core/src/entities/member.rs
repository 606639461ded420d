//! Member entity - a person who may belong to one team

use crate::value_objects::{MemberId, TeamId};

/// Stored member row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: MemberId,
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<TeamId>,
}

impl Member {
    /// Check if the member belongs to the given team
    #[inline]
    pub fn is_in_team(&self, team_id: TeamId) -> bool {
        self.team_id == Some(team_id)
    }

    /// Move the member to another team, or out of any team with `None`
    pub fn change_team(&mut self, team_id: Option<TeamId>) {
        self.team_id = team_id;
    }
}

/// Member that has not been persisted yet
///
/// The surrogate key is assigned by the store on save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<TeamId>,
}

impl NewMember {
    /// Create a member without a team
    pub fn new(username: impl Into<String>, age: i32) -> Self {
        Self {
            username: Some(username.into()),
            age,
            team_id: None,
        }
    }

    /// Create a member that belongs to a team
    pub fn in_team(username: impl Into<String>, age: i32, team_id: TeamId) -> Self {
        Self {
            username: Some(username.into()),
            age,
            team_id: Some(team_id),
        }
    }

    /// Attach the id assigned by the store
    pub fn into_member(self, id: MemberId) -> Member {
        Member {
            id,
            username: self.username,
            age: self.age,
            team_id: self.team_id,
        }
    }
}
