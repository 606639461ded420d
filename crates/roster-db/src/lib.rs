//! # roster-db
//!
//! Database layer implementing the roster-core repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management and migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Predicate rendering into bound-parameter SQL
//! - Repository implementations, including the paged member search
//! - Sample data seeding
//!
//! ## Usage
//!
//! ```rust,ignore
//! use roster_db::{create_pool, run_migrations, PgMemberQueryRepository, PoolConfig};
//! use roster_core::{MemberQueryRepository, PageRequest, SearchCondition};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&PoolConfig::new("postgres://localhost/roster")).await?;
//!     run_migrations(&pool).await?;
//!
//!     let repo = PgMemberQueryRepository::new(pool);
//!     let condition = SearchCondition::new().with_team_name("teamB");
//!     let page = repo.search_page_complex(&condition, PageRequest::of(0, 10)?).await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod query;
pub mod repositories;
pub mod seed;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, EmbeddedMigrations, PgPool, PoolConfig, MIGRATIONS};
pub use repositories::{PgMemberQueryRepository, PgMemberRepository, PgTeamRepository};
pub use seed::{seed_sample_data, SeedOutcome};
