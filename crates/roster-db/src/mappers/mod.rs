//! Model to entity mappers
//!
//! `From<Model>` conversions from database rows into `roster-core` types.
//! Inserts bind straight from `NewMember`/`NewTeam`, so there are no insert structs.

mod member;
mod team;
