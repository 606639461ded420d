//! Business logic services
//!
//! Services orchestrate repository calls, apply request rules and map
//! domain types into response DTOs.

pub mod context;
pub mod error;
pub mod member;
pub mod search;
pub mod team;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use member::MemberService;
pub use search::SearchService;
pub use team::TeamService;
