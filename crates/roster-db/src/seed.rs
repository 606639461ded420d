//! Sample data for local runs
//!
//! Two teams and a hundred members spread across them, inserted in one
//! transaction and only into an empty member table.

use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::{info, instrument};

use roster_core::error::DomainError;

use crate::repositories::map_db_error;

/// Number of sample members
pub const SAMPLE_MEMBER_COUNT: i32 = 100;

/// Names of the sample teams; even-aged members join the first
pub const SAMPLE_TEAMS: [&str; 2] = ["teamA", "teamB"];

/// What a seeding run did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Inserted { teams: usize, members: usize },
    /// The member table already had rows
    Skipped,
}

/// Username, age and team slot of the `i`-th sample member
fn sample_member(i: i32) -> (String, i32, usize) {
    let slot = usize::from(i % 2 != 0);
    (format!("member{i}"), i, slot)
}

/// Seed the sample teams and members unless members already exist
#[instrument(skip(pool))]
pub async fn seed_sample_data(pool: &PgPool) -> Result<SeedOutcome, DomainError> {
    let mut tx = pool.begin().await.map_err(map_db_error)?;

    let existing = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM member")
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;
    if existing > 0 {
        info!(existing, "Members present, skipping sample data");
        return Ok(SeedOutcome::Skipped);
    }

    let mut team_ids = Vec::with_capacity(SAMPLE_TEAMS.len());
    for name in SAMPLE_TEAMS {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO team (name) VALUES ($1)
            ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
            RETURNING team_id
            "#,
        )
        .bind(name)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;
        team_ids.push(id);
    }

    let mut insert = QueryBuilder::<Postgres>::new("INSERT INTO member (username, age, team_id) ");
    insert.push_values((0..SAMPLE_MEMBER_COUNT).map(sample_member), |mut row, (username, age, slot)| {
        row.push_bind(username)
            .push_bind(age)
            .push_bind(team_ids[slot]);
    });
    let inserted = insert
        .build()
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?
        .rows_affected();

    tx.commit().await.map_err(map_db_error)?;

    let members = usize::try_from(inserted).unwrap_or(usize::MAX);
    info!(teams = team_ids.len(), members, "Sample data inserted");
    Ok(SeedOutcome::Inserted {
        teams: team_ids.len(),
        members,
    })
}
