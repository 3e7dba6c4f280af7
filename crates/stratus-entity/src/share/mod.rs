pub mod model;

pub use model::{CreateShareLink, ShareLink, SharePermission};
