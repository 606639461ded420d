//! Route definitions
//!
//! Member and team routes are mounted under /api/v1; health probes sit at the root.

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers::{health, members, teams};
use crate::state::AppState;

/// Create the main router with health probes and all API routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(health_routes())
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new().merge(member_routes()).merge(team_routes())
}

/// Member routes
fn member_routes() -> Router<AppState> {
    Router::new()
        // Search
        .route("/members/search", get(members::search_members))
        .route("/members/search/page", get(members::search_members_page))
        .route("/members/search/count", get(members::count_members))
        // Member CRUD
        .route("/members", get(members::list_members))
        .route("/members", post(members::create_member))
        .route("/members/summaries", get(members::list_member_summaries))
        .route("/members/:member_id", get(members::get_member))
        .route("/members/:member_id", delete(members::delete_member))
}

/// Team routes
fn team_routes() -> Router<AppState> {
    Router::new()
        .route("/teams", get(teams::find_team_by_name))
        .route("/teams", post(teams::create_team))
        .route("/teams/:team_id", get(teams::get_team))
        .route("/teams/:team_id", delete(teams::delete_team))
}
