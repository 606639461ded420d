//! SQL for the member search
//!
//! [`render`] turns a validated `Predicate` into a bound-parameter expression;
//! [`statements`] wraps it into the select, page and count statements.

pub mod render;
pub mod statements;

pub use render::{column_sql, push_predicate};
