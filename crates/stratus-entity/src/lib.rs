//! # stratus-entity
//!
//! Domain entity models for Stratus: users, folders, files, share links,
//! and permission grants. All models derive `sqlx::FromRow` and map
//! one-to-one onto the migration schema.

pub mod file;
pub mod folder;
pub mod permission;
pub mod share;
pub mod user;
