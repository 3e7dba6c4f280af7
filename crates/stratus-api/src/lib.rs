//! # stratus-api
//!
//! HTTP API layer for Stratus built on Axum.
//!
//! Provides all REST endpoints, the authentication extractor, DTOs,
//! error mapping, and the application builder that wires repositories
//! and services into shared state.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use app::{build_app, build_state};
pub use state::AppState;
