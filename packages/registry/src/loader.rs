//! # Module Loaders
//!
//! A loader turns a module identifier into a [`Module`], or nothing.
//!
//! Loaders are the platform seam of the registry: they may hit the disk,
//! the network or a static table. They report failure as `None`; the
//! registry turns that into a [`LoadError`](crate::LoadError).

use crate::module::Module;
use std::collections::HashMap;
use std::future::Future;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Dynamic module loading capability
pub trait ModuleLoader: Send + Sync {
    /// Load the module named `module_id`, or `None` if nothing usable came back
    fn load(&self, module_id: &str) -> impl Future<Output = Option<Module>> + Send;
}

/// In-memory module table
#[derive(Debug, Clone, Default)]
pub struct StaticLoader {
    modules: HashMap<String, Module>,
}

impl StaticLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_module(mut self, module: Module) -> Self {
        self.modules.insert(module.id.clone(), module);
        self
    }

    /// Register a module whose renderer is named after its identifier's last segment
    pub fn with_modules<'a>(mut self, module_ids: impl IntoIterator<Item = &'a str>) -> Self {
        for module_id in module_ids {
            let renderer = module_id.rsplit('.').next().unwrap_or(module_id);
            self.modules
                .insert(module_id.to_string(), Module::new(module_id, renderer));
        }
        self
    }
}

impl ModuleLoader for StaticLoader {
    async fn load(&self, module_id: &str) -> Option<Module> {
        self.modules.get(module_id).cloned()
    }
}

/// Loads module descriptors from `<root>/<module_id>.json`
#[derive(Debug, Clone)]
pub struct DirectoryLoader {
    root: PathBuf,
}

impl DirectoryLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the descriptor for `module_id`
    pub fn descriptor_path(&self, module_id: &str) -> PathBuf {
        self.root.join(format!("{module_id}.json"))
    }
}

impl ModuleLoader for DirectoryLoader {
    async fn load(&self, module_id: &str) -> Option<Module> {
        if !is_safe_identifier(module_id) {
            warn!(module_id = %module_id, "Refusing to load module with unsafe identifier");
            return None;
        }

        let path = self.descriptor_path(module_id);
        let source = match tokio::fs::read_to_string(&path).await {
            Ok(source) => source,
            Err(e) => {
                debug!(module_id = %module_id, path = %path.display(), error = %e, "Module descriptor unreadable");
                return None;
            }
        };

        let mut module: Module = match serde_json::from_str(&source) {
            Ok(module) => module,
            Err(e) => {
                warn!(module_id = %module_id, path = %path.display(), error = %e, "Malformed module descriptor");
                return None;
            }
        };

        if module.id.is_empty() {
            module.id = module_id.to_string();
        } else if module.id != module_id {
            warn!(module_id = %module_id, declared = %module.id, "Module descriptor declares a different id");
            return None;
        }

        Some(module)
    }
}

/// Identifiers map onto file names, so they must not escape the root
fn is_safe_identifier(module_id: &str) -> bool {
    !module_id.is_empty()
        && !module_id.starts_with('.')
        && !module_id.contains("..")
        && !module_id.contains(['/', '\\', ':'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_identifiers() {
        assert!(is_safe_identifier("core.Text"));
        assert!(is_safe_identifier("layout.grid.Column"));
        assert!(!is_safe_identifier(""));
        assert!(!is_safe_identifier("../secrets"));
        assert!(!is_safe_identifier("a/b"));
        assert!(!is_safe_identifier("a\\b"));
        assert!(!is_safe_identifier(".hidden"));
        assert!(!is_safe_identifier("c:evil"));
    }

    #[test]
    fn test_static_loader_renderer_names() {
        let loader = StaticLoader::new().with_modules(["core.Text", "Plain"]);
        assert_eq!(loader.modules["core.Text"].renderer, "Text");
        assert_eq!(loader.modules["Plain"].renderer, "Plain");
    }

    #[test]
    fn test_directory_loader_paths() {
        let loader = DirectoryLoader::new("site/modules");
        assert_eq!(loader.root(), Path::new("site/modules"));
        assert_eq!(
            loader.descriptor_path("core.Text"),
            Path::new("site/modules").join("core.Text.json")
        );
    }
}
