//! # stratus-database
//!
//! PostgreSQL connection management and concrete repository
//! implementations for all Stratus entities.

pub mod pool;
pub mod repositories;
