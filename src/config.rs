//! Settings controlling how the instance layer is wired at startup.

use serde::{Deserialize, Serialize};

/// Storage backend selection for the instance layer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphBackend {
    /// Process-local store, primarily for tests and tooling.
    #[default]
    InMemory,
}

/// Settings consumed by [`EntityService::from_config`].
///
/// [`EntityService::from_config`]: crate::graph::EntityService::from_config
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSettings {
    /// Which storage collaborator to instantiate.
    #[serde(default)]
    pub backend: GraphBackend,
    /// Freeze the schema registry when the first instance is created.
    ///
    /// Declaring kinds or relationships while instance traffic is running
    /// has undefined visibility; the safe default rejects it.
    #[serde(default = "default_freeze_on_first_use")]
    pub freeze_on_first_use: bool,
}

fn default_freeze_on_first_use() -> bool {
    true
}

impl Default for GraphSettings {
    fn default() -> Self {
        Self {
            backend: GraphBackend::default(),
            freeze_on_first_use: default_freeze_on_first_use(),
        }
    }
}

impl GraphSettings {
    /// Parses settings from a YAML document.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }
}
