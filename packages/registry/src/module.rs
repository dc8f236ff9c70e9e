use serde::{Deserialize, Serialize};

/// A loaded renderer module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    /// Identifier the module was requested by
    #[serde(default)]
    pub id: String,

    /// Name of the renderer the UI layer instantiates
    pub renderer: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Module {
    pub fn new(id: impl Into<String>, renderer: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            renderer: renderer.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
