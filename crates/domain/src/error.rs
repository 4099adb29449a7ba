//! Common error types used across the workspace.
//!
//! Port implementations report failures as [`ThemeError`]. Each adapter
//! defines its own typed error and converts into one of these variants via
//! `From`, boxing itself as the source.

/// Boxed source error carried by [`ThemeError`] variants.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure reported by a port while reading or applying a theme.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// The preference store could not be read or written.
    #[error("preference storage error")]
    Storage(#[source] BoxError),

    /// The document root could not be read or updated.
    #[error("document root error")]
    Document(#[source] BoxError),

    /// The page lifecycle refused a callback registration.
    #[error("page lifecycle error")]
    Lifecycle(#[source] BoxError),
}

impl ThemeError {
    /// Wrap any error as a [`ThemeError::Storage`].
    pub fn storage(err: impl Into<BoxError>) -> Self {
        Self::Storage(err.into())
    }

    /// Wrap any error as a [`ThemeError::Document`].
    pub fn document(err: impl Into<BoxError>) -> Self {
        Self::Document(err.into())
    }

    /// Wrap any error as a [`ThemeError::Lifecycle`].
    pub fn lifecycle(err: impl Into<BoxError>) -> Self {
        Self::Lifecycle(err.into())
    }
}
