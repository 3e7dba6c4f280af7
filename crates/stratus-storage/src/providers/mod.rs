//! Concrete `ObjectStore` implementations.

pub mod local;
pub mod s3;
