//! # guide-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `guide-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity <-> model mappers
//! - Repository implementations
//! - Schema migrations (see `migrations/`)

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    PgAvailabilityRepository, PgBookingRepository, PgComplaintRepository,
    PgGuideLanguageRepository, PgGuideRepository, PgLanguageRepository, PgSearchRepository,
};
