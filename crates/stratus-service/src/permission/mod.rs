pub mod service;

pub use service::PermissionService;
