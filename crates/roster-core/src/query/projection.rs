//! Flat read models returned by searches

use serde::{Deserialize, Serialize};

use crate::value_objects::{MemberId, TeamId};

/// One row of the member/team join.
///
/// `team_id` and `team_name` are absent for members without a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberTeamDto {
    pub member_id: MemberId,
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<TeamId>,
    pub team_name: Option<String>,
}

impl MemberTeamDto {
    #[inline]
    pub fn has_team(&self) -> bool {
        self.team_id.is_some()
    }
}

/// Username and age only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberSummary {
    pub username: Option<String>,
    pub age: i32,
}
