pub mod download;
pub mod search;
pub mod service;
pub mod upload;

pub use download::{DownloadService, SignedUrl};
pub use search::SearchService;
pub use service::FileService;
pub use upload::{UploadService, UploadedFile};
