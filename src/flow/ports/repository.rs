//! Repository port for flow template persistence and lookup.

use crate::flow::domain::{FlowTemplate, FlowTemplateId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for flow template repository operations.
pub type FlowTemplateRepositoryResult<T> = Result<T, FlowTemplateRepositoryError>;

/// Flow template persistence contract.
#[async_trait]
pub trait FlowTemplateRepository: Send + Sync {
    /// Stores a new template.
    ///
    /// # Errors
    ///
    /// Returns [`FlowTemplateRepositoryError::DuplicateTemplate`] when the
    /// template ID already exists.
    async fn store(&self, template: &FlowTemplate) -> FlowTemplateRepositoryResult<()>;

    /// Persists edits to an existing template.
    ///
    /// # Errors
    ///
    /// Returns [`FlowTemplateRepositoryError::NotFound`] when the template
    /// does not exist.
    async fn update(&self, template: &FlowTemplate) -> FlowTemplateRepositoryResult<()>;

    /// Finds a template by identifier.
    ///
    /// Returns `None` when the template does not exist.
    async fn find_by_id(
        &self,
        id: FlowTemplateId,
    ) -> FlowTemplateRepositoryResult<Option<FlowTemplate>>;

    /// Returns every template in creation order.
    async fn list_all(&self) -> FlowTemplateRepositoryResult<Vec<FlowTemplate>>;
}

/// Errors returned by flow template repository implementations.
#[derive(Debug, Clone, Error)]
pub enum FlowTemplateRepositoryError {
    /// A template with the same identifier already exists.
    #[error("duplicate flow template identifier: {0}")]
    DuplicateTemplate(FlowTemplateId),

    /// The template was not found.
    #[error("flow template not found: {0}")]
    NotFound(FlowTemplateId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl FlowTemplateRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
