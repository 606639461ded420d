//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{MemberId, TeamId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Member not found: {0}")]
    MemberNotFound(MemberId),

    #[error("Team not found: {0}")]
    TeamNotFound(TeamId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid predicate: {0}")]
    InvalidPredicate(String),

    #[error("Invalid page request: {0}")]
    InvalidPageRequest(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Team name already in use: {0}")]
    TeamNameExists(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::MemberNotFound(_) => "UNKNOWN_MEMBER",
            Self::TeamNotFound(_) => "UNKNOWN_TEAM",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidPredicate(_) => "INVALID_PREDICATE",
            Self::InvalidPageRequest(_) => "INVALID_PAGE_REQUEST",
            Self::TeamNameExists(_) => "TEAM_NAME_EXISTS",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::MemberNotFound(_) | Self::TeamNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::InvalidPredicate(_) | Self::InvalidPageRequest(_)
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::TeamNameExists(_))
    }

    /// Check if this came from the store rather than from the caller
    pub fn is_store_failure(&self) -> bool {
        matches!(self, Self::DatabaseError(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(DomainError::MemberNotFound(MemberId::new(1)).code(), "UNKNOWN_MEMBER");
        assert_eq!(
            DomainError::InvalidPredicate("age".to_string()).code(),
            "INVALID_PREDICATE"
        );
    }

    #[test]
    fn test_classification() {
        assert!(DomainError::TeamNotFound(TeamId::new(1)).is_not_found());
        assert!(!DomainError::TeamNotFound(TeamId::new(1)).is_validation());
        assert!(DomainError::InvalidPageRequest("size".to_string()).is_validation());
        assert!(DomainError::TeamNameExists("teamA".to_string()).is_conflict());
        assert!(DomainError::DatabaseError("down".to_string()).is_store_failure());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::MemberNotFound(MemberId::new(123));
        assert_eq!(err.to_string(), "Member not found: 123");

        let err = DomainError::InvalidPageRequest("page size must be at least 1, got 0".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid page request: page size must be at least 1, got 0"
        );
    }
}
