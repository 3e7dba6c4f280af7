//! # stratus-auth
//!
//! Authentication and authorization for Stratus: JWT issuance and
//! validation, Argon2id password hashing, and the ownership guard that
//! gates every file and folder operation.

pub mod guard;
pub mod jwt;
pub mod password;

pub use guard::OwnershipGuard;
