use thiserror::Error;

/// The loader could not produce a module
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("Module '{module_id}' could not be loaded")]
    NotFound { module_id: String },
}

/// A module was requested from the cache before it was loaded
///
/// This is a caller bug: collect and load a tree's modules before
/// resolving it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    #[error("Module '{module_id}' is not loaded")]
    NotLoaded { module_id: String },
}
