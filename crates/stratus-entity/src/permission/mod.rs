pub mod model;

pub use model::{GrantRole, PermissionGrant};
