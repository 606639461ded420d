//! Team row -> entity mapper

use roster_core::{Team, TeamId};

use crate::models::TeamModel;

impl From<TeamModel> for Team {
    fn from(model: TeamModel) -> Self {
        Team {
            id: TeamId::new(model.team_id),
            name: model.name,
        }
    }
}
