use crate::error::DocumentError;

/// Result type alias for document operations
pub type DocumentResult<T> = Result<T, DocumentError>;
