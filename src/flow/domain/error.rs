//! Error types for flow template validation and parsing.

use super::{BlockType, FlowTemplateId};
use thiserror::Error;

/// Errors returned while constructing or editing flow templates.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FlowDomainError {
    /// A block configuration failed validation.
    #[error("invalid {block_type} block configuration: {reason}")]
    InvalidBlockConfig {
        /// Block type whose configuration was rejected.
        block_type: BlockType,
        /// Constraint that was violated.
        reason: &'static str,
    },

    /// The template name is blank after trimming.
    #[error("flow template name must not be blank")]
    EmptyTemplateName,

    /// A blueprint position does not exist in the template.
    #[error("flow template {template_id} has {len} blueprints, no position {position}")]
    BlueprintPositionOutOfRange {
        /// Template being edited.
        template_id: FlowTemplateId,
        /// Requested zero-based position.
        position: usize,
        /// Number of blueprints in the template.
        len: usize,
    },
}

/// Error returned while parsing a flow phase string.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown flow phase: {0}")]
pub struct ParseFlowPhaseError(pub String);
