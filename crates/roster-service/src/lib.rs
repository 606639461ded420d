//! # roster-service
//!
//! Application layer containing the member search, member and team services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    CreateMemberRequest, CreateTeamRequest, HealthChecks, HealthResponse, MemberResponse,
    MemberSearchRequest, PageParams, PageResponse, ReadinessResponse, TeamResponse,
    TeamWithMembersResponse,
};
pub use services::{
    MemberService, SearchService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, TeamService,
};
