//! # stratus-service
//!
//! Business services for Stratus. Each service owns one domain concern
//! and composes repositories, the ownership guard, and the object store.
//! Services re-run authorization on every call; nothing is cached
//! between requests.

pub mod account;
pub mod context;
pub mod file;
pub mod folder;
pub mod payment;
pub mod permission;
pub mod share;
