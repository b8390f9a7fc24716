//! Service layer for flow template authoring and lookup.

use crate::flow::{
    domain::{FlowDomainError, FlowPhase, FlowTemplate, FlowTemplateId, TaskBlueprint},
    ports::{FlowTemplateRepository, FlowTemplateRepositoryError},
};
use crate::locks::RecordLocks;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Request payload for creating a flow template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTemplateRequest {
    name: String,
    phase: FlowPhase,
    blueprints: Vec<TaskBlueprint>,
}

impl CreateTemplateRequest {
    /// Creates a request for an empty template.
    #[must_use]
    pub fn new(name: impl Into<String>, phase: FlowPhase) -> Self {
        Self {
            name: name.into(),
            phase,
            blueprints: Vec::new(),
        }
    }

    /// Sets the initial blueprints, in order.
    #[must_use]
    pub fn with_blueprints(mut self, blueprints: impl IntoIterator<Item = TaskBlueprint>) -> Self {
        self.blueprints = blueprints.into_iter().collect();
        self
    }
}

/// Service-level errors for flow template operations.
#[derive(Debug, Error)]
pub enum FlowTemplateServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] FlowDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] FlowTemplateRepositoryError),
}

/// Result type for flow template service operations.
pub type FlowTemplateServiceResult<T> = Result<T, FlowTemplateServiceError>;

/// Flow template authoring service.
///
/// Blueprint edits to the same template are serialized, so concurrent
/// appends and removals never overwrite each other.
#[derive(Clone)]
pub struct FlowTemplateService<R, C>
where
    R: FlowTemplateRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    locks: Arc<RecordLocks<FlowTemplateId>>,
}

impl<R, C> FlowTemplateService<R, C>
where
    R: FlowTemplateRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new flow template service.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            repository,
            clock,
            locks: Arc::new(RecordLocks::default()),
        }
    }

    /// Creates and stores a new template.
    ///
    /// # Errors
    ///
    /// Returns [`FlowTemplateServiceError`] when the name is blank or the
    /// repository rejects persistence.
    pub async fn create_template(
        &self,
        request: CreateTemplateRequest,
    ) -> FlowTemplateServiceResult<FlowTemplate> {
        let CreateTemplateRequest {
            name,
            phase,
            blueprints,
        } = request;
        let template = FlowTemplate::new(name, phase, blueprints, &*self.clock)?;
        self.repository.store(&template).await?;
        info!(
            template_id = %template.id(),
            phase = %template.phase(),
            blueprints = template.blueprints().len(),
            "flow template created"
        );
        Ok(template)
    }

    /// Stores the standard pre- and post-onboarding templates and returns
    /// them in that order.
    ///
    /// # Errors
    ///
    /// Returns [`FlowTemplateServiceError`] when persistence fails.
    pub async fn install_standard_templates(
        &self,
    ) -> FlowTemplateServiceResult<Vec<FlowTemplate>> {
        let pre = FlowTemplate::standard_pre_onboarding(&*self.clock)?;
        let post = FlowTemplate::standard_post_onboarding(&*self.clock)?;
        for template in [&pre, &post] {
            self.repository.store(template).await?;
        }
        info!("standard flow templates installed");
        Ok(vec![pre, post])
    }

    /// Appends a blueprint to an existing template.
    ///
    /// Employees already instantiated from the template are unaffected.
    ///
    /// # Errors
    ///
    /// Returns [`FlowTemplateServiceError::Repository`] when the template is
    /// not found or persistence fails.
    pub async fn append_blueprint(
        &self,
        template_id: FlowTemplateId,
        blueprint: TaskBlueprint,
    ) -> FlowTemplateServiceResult<FlowTemplate> {
        let _guard = self.locks.acquire(template_id).await;
        let mut template = self.find_by_id_or_error(template_id).await?;
        let block_type = blueprint.block_type();
        template.append_blueprint(blueprint, &*self.clock);
        self.repository.update(&template).await?;
        info!(template_id = %template_id, block_type = %block_type, "blueprint appended");
        Ok(template)
    }

    /// Removes the blueprint at a zero-based position.
    ///
    /// # Errors
    ///
    /// Returns [`FlowTemplateServiceError::Domain`] when the position does
    /// not exist, or [`FlowTemplateServiceError::Repository`] when the
    /// template is not found or persistence fails.
    pub async fn remove_blueprint(
        &self,
        template_id: FlowTemplateId,
        position: usize,
    ) -> FlowTemplateServiceResult<FlowTemplate> {
        let _guard = self.locks.acquire(template_id).await;
        let mut template = self.find_by_id_or_error(template_id).await?;
        let removed = template.remove_blueprint(position, &*self.clock)?;
        self.repository.update(&template).await?;
        info!(
            template_id = %template_id,
            position,
            title = removed.title(),
            "blueprint removed"
        );
        Ok(template)
    }

    /// Returns a template by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`FlowTemplateServiceError::Repository`] when the template is
    /// not found or the lookup fails.
    pub async fn get_template(
        &self,
        template_id: FlowTemplateId,
    ) -> FlowTemplateServiceResult<FlowTemplate> {
        self.find_by_id_or_error(template_id).await
    }

    /// Lists templates in creation order, optionally restricted to a phase.
    ///
    /// # Errors
    ///
    /// Returns [`FlowTemplateServiceError::Repository`] when the lookup
    /// fails.
    pub async fn list_templates(
        &self,
        phase: Option<FlowPhase>,
    ) -> FlowTemplateServiceResult<Vec<FlowTemplate>> {
        let templates: Vec<FlowTemplate> = self
            .repository
            .list_all()
            .await?
            .into_iter()
            .filter(|template| phase.is_none_or(|wanted| template.phase() == wanted))
            .collect();
        debug!(phase = ?phase, count = templates.len(), "flow templates listed");
        Ok(templates)
    }

    async fn find_by_id_or_error(
        &self,
        template_id: FlowTemplateId,
    ) -> FlowTemplateServiceResult<FlowTemplate> {
        self.repository
            .find_by_id(template_id)
            .await?
            .ok_or_else(|| FlowTemplateRepositoryError::NotFound(template_id).into())
    }
}
