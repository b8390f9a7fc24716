//! Onboarding phases that group flow templates.

use super::ParseFlowPhaseError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// When a flow runs relative to the employee's start date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowPhase {
    /// Before the first working day.
    PreOnboarding,
    /// From the first working day onwards.
    PostOnboarding,
}

impl FlowPhase {
    /// Returns the canonical representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PreOnboarding => "pre_onboarding",
            Self::PostOnboarding => "post_onboarding",
        }
    }
}

impl fmt::Display for FlowPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for FlowPhase {
    type Error = ParseFlowPhaseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "pre_onboarding" => Ok(Self::PreOnboarding),
            "post_onboarding" => Ok(Self::PostOnboarding),
            _ => Err(ParseFlowPhaseError(value.to_owned())),
        }
    }
}
