//! Task blueprints: flow blocks not yet instantiated for an employee.

use super::{BlockConfig, BlockType};
use serde::{Deserialize, Serialize};

/// A template definition for one onboarding task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskBlueprint {
    title: String,
    description: String,
    config: BlockConfig,
}

impl TaskBlueprint {
    /// Creates a blueprint. The block type is taken from `config`.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        config: impl Into<BlockConfig>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            config: config.into(),
        }
    }

    /// Returns the block type.
    #[must_use]
    pub const fn block_type(&self) -> BlockType {
        self.config.block_type()
    }

    /// Returns the title copied onto instantiated tasks.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description copied onto instantiated tasks.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the block configuration.
    #[must_use]
    pub const fn config(&self) -> &BlockConfig {
        &self.config
    }
}
