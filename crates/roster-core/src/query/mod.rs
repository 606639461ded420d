//! Dynamic member search
//!
//! A [`SearchCondition`] turns into a [`Predicate`]; repositories execute the
//! predicate and hand back [`MemberTeamDto`] rows, optionally as a [`Page`].

mod condition;
mod page;
mod predicate;
mod projection;

pub use condition::SearchCondition;
pub use page::{known_total, Page, PageRequest, PagingStrategy, DEFAULT_PAGE_SIZE};
pub use predicate::{Column, CompareOp, ComparePredicate, Predicate, Value, ValueKind};
pub use projection::{MemberSummary, MemberTeamDto};
