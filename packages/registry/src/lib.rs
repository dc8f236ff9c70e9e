//! # Pagecraft Registry
//!
//! Loads and caches the renderer modules named by page components.
//!
//! ```rust,ignore
//! use pagecraft_registry::{DirectoryLoader, ModuleRegistry};
//!
//! let registry = ModuleRegistry::new(DirectoryLoader::new("modules"));
//! registry.load("core.Text").await?;
//! let module = registry.get_loaded("core.Text")?;
//! ```

pub mod error;
pub mod loader;
pub mod module;
pub mod registry;

pub use error::{LoadError, ResolutionError};
pub use loader::{DirectoryLoader, ModuleLoader, StaticLoader};
pub use module::Module;
pub use registry::ModuleRegistry;
