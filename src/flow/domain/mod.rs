//! Domain model for onboarding flow templates.
//!
//! Templates are authored by administrators per onboarding phase and hold
//! ordered task blueprints with typed block configuration.

mod blueprint;
mod config;
mod error;
mod ids;
mod phase;
mod template;

pub use blueprint::TaskBlueprint;
pub use config::{
    BlockConfig, BlockType, BuddyConfig, DocumentConfig, EmailConfig, MeetingConfig, SetupConfig,
};
pub use error::{FlowDomainError, ParseFlowPhaseError};
pub use ids::FlowTemplateId;
pub use phase::FlowPhase;
pub use template::FlowTemplate;
