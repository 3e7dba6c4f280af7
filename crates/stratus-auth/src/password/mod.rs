pub mod hasher;

pub use hasher::PasswordHasher;
