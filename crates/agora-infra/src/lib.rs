//! # Agora Infrastructure
//!
//! Concrete implementations of the ports defined in `agora-core`.
//! This crate contains the post and profile stores, bearer token
//! verification and payload validation.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external services, in-memory stores only
//! - `postgres` - PostgreSQL storage via SeaORM
//! - `auth` - JWT bearer tokens

pub mod database;
pub mod validation;

#[cfg(feature = "auth")]
pub mod auth;

// Re-exports - In-Memory
pub use database::{InMemoryPostRepository, InMemoryProfileRepository};
pub use validation::PostInputRules;

#[cfg(feature = "auth")]
pub use auth::{JwtConfig, JwtTokenService};

// Re-exports - PostgreSQL
#[cfg(feature = "postgres")]
pub use database::{
    DatabaseConfig, DatabaseConnections, PostgresPostRepository, PostgresProfileRepository,
};
