//! Member search condition and its translation into a predicate

use serde::{Deserialize, Serialize};

use super::predicate::{Column, Predicate};

/// Optional filters for a member search.
///
/// Every field may be absent; an absent or blank field does not filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCondition {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub team_name: Option<String>,
    /// Minimum age, inclusive
    #[serde(default)]
    pub age_goe: Option<i32>,
    /// Maximum age, inclusive
    #[serde(default)]
    pub age_loe: Option<i32>,
}

/// One optional filter derived from a condition
type Clause = fn(&SearchCondition) -> Option<Predicate>;

/// Applied in order, absent clauses are skipped
const CLAUSES: [Clause; 3] = [username_eq, team_name_eq, age_range];

impl SearchCondition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_team_name(mut self, team_name: impl Into<String>) -> Self {
        self.team_name = Some(team_name.into());
        self
    }

    pub fn with_age_goe(mut self, age: i32) -> Self {
        self.age_goe = Some(age);
        self
    }

    pub fn with_age_loe(mut self, age: i32) -> Self {
        self.age_loe = Some(age);
        self
    }

    /// Combined filter for this condition.
    ///
    /// Never produces an empty conjunction: with no effective filter the
    /// result is the literal `Predicate::True`.
    pub fn to_predicate(&self) -> Predicate {
        Predicate::all(CLAUSES.iter().filter_map(|clause| clause(self)))
    }

    /// True when no field would contribute a filter
    pub fn is_unfiltered(&self) -> bool {
        self.to_predicate().is_true()
    }
}

/// A string filter counts only if it contains a non-whitespace character
fn has_text(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

fn username_eq(condition: &SearchCondition) -> Option<Predicate> {
    has_text(condition.username.as_deref()).map(|name| Column::Username.eq(name))
}

fn team_name_eq(condition: &SearchCondition) -> Option<Predicate> {
    has_text(condition.team_name.as_deref()).map(|name| Column::TeamName.eq(name))
}

fn age_goe(age: Option<i32>) -> Option<Predicate> {
    age.map(|age| Column::Age.gte(age))
}

fn age_loe(age: Option<i32>) -> Option<Predicate> {
    age.map(|age| Column::Age.lte(age))
}

#[allow(clippy::unnecessary_wraps)]
fn age_range(condition: &SearchCondition) -> Option<Predicate> {
    Some(age_between(condition))
}

/// Age range filter; literal `True` when both bounds are absent
fn age_between(condition: &SearchCondition) -> Predicate {
    Predicate::all(
        [age_goe(condition.age_goe), age_loe(condition.age_loe)]
            .into_iter()
            .flatten(),
    )
}
