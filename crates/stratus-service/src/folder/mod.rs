pub mod service;

pub use service::FolderService;
