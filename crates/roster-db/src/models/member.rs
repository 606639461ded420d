//! Member database models

use sqlx::FromRow;

/// Database model for the member table
#[derive(Debug, Clone, FromRow)]
pub struct MemberModel {
    pub member_id: i64,
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<i64>,
}

/// Row of the member/team search projection
#[derive(Debug, Clone, FromRow)]
pub struct MemberTeamModel {
    pub member_id: i64,
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<i64>,
    pub team_name: Option<String>,
}

/// Search row carrying the window total of its page
#[derive(Debug, Clone, FromRow)]
pub struct PagedMemberTeamModel {
    #[sqlx(flatten)]
    pub row: MemberTeamModel,
    pub total_count: i64,
}

/// Username/age projection
#[derive(Debug, Clone, FromRow)]
pub struct MemberSummaryModel {
    pub username: Option<String>,
    pub age: i32,
}
