//! Statements of the member search
//!
//! Each function returns a ready-to-execute [`QueryBuilder`]; callers pick the
//! row type with `build_query_as` or `build_query_scalar`.

use roster_core::{PageRequest, Predicate};
use sqlx::{Postgres, QueryBuilder};

use super::render::push_predicate;

const SEARCH_COLUMNS: &str = "m.member_id, m.username, m.age, m.team_id, t.name AS team_name";
const MEMBER_COLUMNS: &str = "m.member_id, m.username, m.age, m.team_id";
const MEMBER_FROM: &str = " FROM member m";
const TEAM_JOIN: &str = " LEFT JOIN team t ON t.team_id = m.team_id";
const ORDER_BY: &str = " ORDER BY m.member_id ASC";

fn push_where(builder: &mut QueryBuilder<'_, Postgres>, predicate: &Predicate) {
    builder.push(" WHERE ");
    push_predicate(builder, predicate);
}

fn push_window(builder: &mut QueryBuilder<'_, Postgres>, page: PageRequest) {
    builder.push(" LIMIT ");
    builder.push_bind(page.size());
    builder.push(" OFFSET ");
    builder.push_bind(page.offset());
}

/// Every matching row of the `member LEFT JOIN team` projection
pub fn search_rows(predicate: &Predicate) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!("SELECT {SEARCH_COLUMNS}{MEMBER_FROM}{TEAM_JOIN}"));
    push_where(&mut builder, predicate);
    builder.push(ORDER_BY);
    builder
}

/// One window of the projection, each row carrying the total via `COUNT(*) OVER ()`
pub fn search_page_with_total(
    predicate: &Predicate,
    page: PageRequest,
) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!(
        "SELECT {SEARCH_COLUMNS}, COUNT(*) OVER () AS total_count{MEMBER_FROM}{TEAM_JOIN}"
    ));
    push_where(&mut builder, predicate);
    builder.push(ORDER_BY);
    push_window(&mut builder, page);
    builder
}

/// One window of the projection, content only
pub fn search_page(predicate: &Predicate, page: PageRequest) -> QueryBuilder<'static, Postgres> {
    let mut builder = search_rows(predicate);
    push_window(&mut builder, page);
    builder
}

/// Number of members matching `predicate`.
///
/// The team join is added only when the predicate filters on a team column;
/// the joined form counts distinct member ids.
pub fn count_members(predicate: &Predicate) -> QueryBuilder<'static, Postgres> {
    let mut builder = if predicate.references_team() {
        QueryBuilder::new(format!(
            "SELECT COUNT(DISTINCT m.member_id){MEMBER_FROM}{TEAM_JOIN}"
        ))
    } else {
        QueryBuilder::new(format!("SELECT COUNT(*){MEMBER_FROM}"))
    };
    push_where(&mut builder, predicate);
    builder
}

/// Member rows matching `predicate`, joining the team table only when needed
pub fn select_members(predicate: &Predicate) -> QueryBuilder<'static, Postgres> {
    let join = if predicate.references_team() { TEAM_JOIN } else { "" };
    let mut builder = QueryBuilder::new(format!("SELECT {MEMBER_COLUMNS}{MEMBER_FROM}{join}"));
    push_where(&mut builder, predicate);
    builder.push(ORDER_BY);
    builder
}
