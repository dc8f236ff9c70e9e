use pagecraft_registry::{LoadError, ResolutionError};
use thiserror::Error;

pub type RenderResult<T> = Result<T, RenderError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// A module was missing from the registry when its node was resolved
    #[error("Cannot resolve component '{node_id}': {source}")]
    Resolution {
        node_id: String,
        #[source]
        source: ResolutionError,
    },

    #[error(transparent)]
    Load(#[from] LoadError),
}
