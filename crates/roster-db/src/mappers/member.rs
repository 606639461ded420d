//! Member row <-> entity/projection mappers

use roster_core::{Member, MemberId, MemberSummary, MemberTeamDto, TeamId};

use crate::models::{MemberModel, MemberSummaryModel, MemberTeamModel};

impl From<MemberModel> for Member {
    fn from(model: MemberModel) -> Self {
        Member {
            id: MemberId::new(model.member_id),
            username: model.username,
            age: model.age,
            team_id: model.team_id.map(TeamId::new),
        }
    }
}

impl From<MemberTeamModel> for MemberTeamDto {
    fn from(model: MemberTeamModel) -> Self {
        MemberTeamDto {
            member_id: MemberId::new(model.member_id),
            username: model.username,
            age: model.age,
            team_id: model.team_id.map(TeamId::new),
            team_name: model.team_name,
        }
    }
}

impl From<MemberSummaryModel> for MemberSummary {
    fn from(model: MemberSummaryModel) -> Self {
        MemberSummary {
            username: model.username,
            age: model.age,
        }
    }
}
