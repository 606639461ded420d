//! Predicate AST
//!
//! Store-agnostic boolean filter over the member/team join. Nothing here
//! knows about SQL; `roster-db` renders a predicate into a parameterized
//! statement after it has been validated.

use std::fmt;
use std::ops::{BitAnd, BitOr, Not};

use crate::error::DomainError;
use crate::value_objects::{MemberId, TeamId};

///
/// Column
///

/// Filterable columns of the member/team join
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Column {
    MemberId,
    Username,
    Age,
    /// Foreign key on the member row, usable without the join
    TeamId,
    /// Lives on the team row, needs the join
    TeamName,
}

impl Column {
    /// Kind of value this column can be compared with
    #[must_use]
    pub const fn kind(self) -> ValueKind {
        match self {
            Self::MemberId | Self::TeamId => ValueKind::BigInt,
            Self::Age => ValueKind::Int,
            Self::Username | Self::TeamName => ValueKind::Text,
        }
    }

    /// Whether filtering on this column requires the team table
    #[must_use]
    pub const fn is_team_column(self) -> bool {
        matches!(self, Self::TeamName)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MemberId => "member_id",
            Self::Username => "username",
            Self::Age => "age",
            Self::TeamId => "team_id",
            Self::TeamName => "team_name",
        }
    }

    pub fn eq(self, value: impl Into<Value>) -> Predicate {
        Predicate::compare(self, CompareOp::Eq, value)
    }

    pub fn ne(self, value: impl Into<Value>) -> Predicate {
        Predicate::compare(self, CompareOp::Ne, value)
    }

    pub fn lt(self, value: impl Into<Value>) -> Predicate {
        Predicate::compare(self, CompareOp::Lt, value)
    }

    pub fn lte(self, value: impl Into<Value>) -> Predicate {
        Predicate::compare(self, CompareOp::Lte, value)
    }

    pub fn gt(self, value: impl Into<Value>) -> Predicate {
        Predicate::compare(self, CompareOp::Gt, value)
    }

    pub fn gte(self, value: impl Into<Value>) -> Predicate {
        Predicate::compare(self, CompareOp::Gte, value)
    }

    /// Inclusive range, `lower <= column <= upper`
    pub fn between(self, lower: impl Into<Value>, upper: impl Into<Value>) -> Predicate {
        self.gte(lower) & self.lte(upper)
    }

    pub fn is_null(self) -> Predicate {
        Predicate::IsNull(self)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

///
/// Value
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValueKind {
    BigInt,
    Int,
    Text,
}

/// Literal operand of a comparison
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Value {
    BigInt(i64),
    Int(i32),
    Text(String),
}

impl Value {
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::BigInt(_) => ValueKind::BigInt,
            Self::Int(_) => ValueKind::Int,
            Self::Text(_) => ValueKind::Text,
        }
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::BigInt(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<MemberId> for Value {
    fn from(v: MemberId) -> Self {
        Self::BigInt(v.into_inner())
    }
}

impl From<TeamId> for Value {
    fn from(v: TeamId) -> Self {
        Self::BigInt(v.into_inner())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BigInt(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Text(v) => write!(f, "'{v}'"),
        }
    }
}

///
/// CompareOp
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
}

impl CompareOp {
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "<>",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Gt => ">",
            Self::Gte => ">=",
        }
    }
}

///
/// ComparePredicate
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ComparePredicate {
    pub column: Column,
    pub op: CompareOp,
    pub value: Value,
}

///
/// Predicate
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Predicate {
    True,
    False,
    And(Vec<Self>),
    Or(Vec<Self>),
    Not(Box<Self>),
    Compare(ComparePredicate),
    IsNull(Column),
}

impl Predicate {
    pub fn compare(column: Column, op: CompareOp, value: impl Into<Value>) -> Self {
        Self::Compare(ComparePredicate {
            column,
            op,
            value: value.into(),
        })
    }

    /// Conjunction of every predicate in `preds`.
    ///
    /// Literal `True` members are dropped and nested conjunctions flattened.
    /// An empty input yields `True`, never an empty `And`.
    pub fn all(preds: impl IntoIterator<Item = Self>) -> Self {
        let mut terms = Vec::new();
        for pred in preds {
            match pred {
                Self::True => {}
                Self::And(inner) => terms.extend(inner),
                other => terms.push(other),
            }
        }

        match terms.len() {
            0 => Self::True,
            1 => terms.remove(0),
            _ => Self::And(terms),
        }
    }

    /// Disjunction of every predicate in `preds`; empty input yields `False`
    pub fn any(preds: impl IntoIterator<Item = Self>) -> Self {
        let mut terms = Vec::new();
        for pred in preds {
            match pred {
                Self::False => {}
                Self::Or(inner) => terms.extend(inner),
                other => terms.push(other),
            }
        }

        match terms.len() {
            0 => Self::False,
            1 => terms.remove(0),
            _ => Self::Or(terms),
        }
    }

    #[must_use]
    pub const fn is_true(&self) -> bool {
        matches!(self, Self::True)
    }

    /// Whether any leaf filters on a column of the team table
    #[must_use]
    pub fn references_team(&self) -> bool {
        match self {
            Self::True | Self::False => false,
            Self::And(preds) | Self::Or(preds) => preds.iter().any(Self::references_team),
            Self::Not(inner) => inner.references_team(),
            Self::Compare(cmp) => cmp.column.is_team_column(),
            Self::IsNull(column) => column.is_team_column(),
        }
    }

    /// Check every comparison against its column's value kind.
    pub fn validate(&self) -> Result<(), DomainError> {
        match self {
            Self::True | Self::False | Self::IsNull(_) => Ok(()),
            Self::And(preds) | Self::Or(preds) => preds.iter().try_for_each(Self::validate),
            Self::Not(inner) => inner.validate(),
            Self::Compare(cmp) => {
                if cmp.column.kind() == cmp.value.kind() {
                    Ok(())
                } else {
                    Err(DomainError::InvalidPredicate(format!(
                        "cannot compare {} with {:?} value {}",
                        cmp.column,
                        cmp.value.kind(),
                        cmp.value
                    )))
                }
            }
        }
    }
}

impl BitAnd for Predicate {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::all([self, rhs])
    }
}

impl BitOr for Predicate {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::any([self, rhs])
    }
}

impl Not for Predicate {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Self::True => Self::False,
            Self::False => Self::True,
            Self::Not(inner) => *inner,
            other => Self::Not(Box::new(other)),
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn join(f: &mut fmt::Formatter<'_>, preds: &[Predicate], sep: &str) -> fmt::Result {
            f.write_str("(")?;
            for (i, pred) in preds.iter().enumerate() {
                if i > 0 {
                    f.write_str(sep)?;
                }
                write!(f, "{pred}")?;
            }
            f.write_str(")")
        }

        match self {
            Self::True => f.write_str("TRUE"),
            Self::False => f.write_str("FALSE"),
            Self::And(preds) => join(f, preds, " AND "),
            Self::Or(preds) => join(f, preds, " OR "),
            Self::Not(inner) => write!(f, "NOT {inner}"),
            Self::Compare(cmp) => write!(f, "{} {} {}", cmp.column, cmp.op.symbol(), cmp.value),
            Self::IsNull(column) => write!(f, "{column} IS NULL"),
        }
    }
}
