//! In-memory adapter error types.

use themeswitch_domain::error::ThemeError;

/// Errors specific to the in-memory adapter.
#[derive(Debug, thiserror::Error)]
pub enum MemoryError {
    /// Storage was switched off with [`crate::OriginStorage::disable`].
    #[error("origin storage is disabled")]
    StorageDisabled,
}

impl From<MemoryError> for ThemeError {
    fn from(err: MemoryError) -> Self {
        match err {
            MemoryError::StorageDisabled => ThemeError::storage(err),
        }
    }
}
