//! HTTP handlers, one module per domain.

pub mod auth;
pub mod file;
pub mod folder;
pub mod health;
pub mod payment;
pub mod permission;
pub mod public;
pub mod search;
pub mod share;
