//! # Module Registry
//!
//! Loads renderer modules on demand and keeps them for the registry's
//! lifetime.
//!
//! ## Contract
//!
//! - `load` is idempotent: a cached module returns immediately without
//!   touching the loader.
//! - A failed load is not cached; the next `load` tries again.
//! - `get_loaded` never loads. Callers must load a tree's modules before
//!   resolving it.
//! - The cache is append-only. There is no eviction.
//!
//! ## Concurrency
//!
//! The cache is guarded by an `RwLock` that is never held across an await.
//! Two concurrent `load` calls for the same identifier that both miss the
//! cache will both reach the loader; the second insert keeps the first
//! module. Callers needing exactly-once loading must track in-flight loads
//! themselves.

use crate::error::{LoadError, ResolutionError};
use crate::loader::ModuleLoader;
use crate::module::Module;
use futures::future::try_join_all;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, instrument, trace, warn};

pub struct ModuleRegistry<L> {
    loader: L,
    modules: RwLock<HashMap<String, Arc<Module>>>,
}

impl<L: ModuleLoader> ModuleRegistry<L> {
    /// Create an empty registry backed by `loader`
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            modules: RwLock::new(HashMap::new()),
        }
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Ensure `module_id` is loaded
    #[instrument(skip(self))]
    pub async fn load(&self, module_id: &str) -> Result<(), LoadError> {
        if self.is_loaded(module_id) {
            trace!("Module already cached");
            return Ok(());
        }

        let Some(module) = self.loader.load(module_id).await else {
            warn!("Module load failed");
            return Err(LoadError::NotFound {
                module_id: module_id.to_string(),
            });
        };

        self.write()
            .entry(module_id.to_string())
            .or_insert_with(|| Arc::new(module));
        debug!("Module loaded");
        Ok(())
    }

    /// Load every identifier concurrently, failing on the first error
    pub async fn load_all<I, S>(&self, module_ids: I) -> Result<(), LoadError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let module_ids: Vec<S> = module_ids.into_iter().collect();
        try_join_all(module_ids.iter().map(|id| self.load(id.as_ref()))).await?;
        Ok(())
    }

    /// Look up a module that was loaded earlier
    pub fn get_loaded(&self, module_id: &str) -> Result<Arc<Module>, ResolutionError> {
        self.read()
            .get(module_id)
            .cloned()
            .ok_or_else(|| ResolutionError::NotLoaded {
                module_id: module_id.to_string(),
            })
    }

    pub fn is_loaded(&self, module_id: &str) -> bool {
        self.read().contains_key(module_id)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Identifiers of every cached module, sorted
    pub fn loaded_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.read().keys().cloned().collect();
        ids.sort();
        ids
    }

    // A panic while holding the lock cannot leave the map half-written:
    // every write is a single insert.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Arc<Module>>> {
        self.modules.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Arc<Module>>> {
        self.modules.write().unwrap_or_else(PoisonError::into_inner)
    }
}
