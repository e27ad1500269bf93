use thiserror::Error;

/// Shared result type for store operations.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Failures a directory backend may surface.
///
/// The in-memory store never returns any of these; the type exists so a
/// persistent backend can slot behind [`crate::EmployeeStore`] without
/// changing the call contract.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("directory backend unavailable: {0}")]
    Unavailable(String),
}
