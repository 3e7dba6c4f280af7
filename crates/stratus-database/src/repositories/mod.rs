//! Concrete repository implementations, one per entity.

pub mod file;
pub mod folder;
pub mod permission;
pub mod share;
pub mod user;

pub use file::FileRepository;
pub use folder::FolderRepository;
pub use permission::PermissionRepository;
pub use share::ShareRepository;
pub use user::UserRepository;

/// Escape LIKE wildcards so user input matches literally.
pub(crate) fn escape_like(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
