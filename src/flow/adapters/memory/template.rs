//! In-memory repository for flow templates.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::flow::{
    domain::{FlowTemplate, FlowTemplateId},
    ports::{FlowTemplateRepository, FlowTemplateRepositoryError, FlowTemplateRepositoryResult},
};

/// Thread-safe in-memory flow template repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFlowTemplateRepository {
    templates: Arc<RwLock<Vec<FlowTemplate>>>,
}

impl InMemoryFlowTemplateRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: impl std::fmt::Display) -> FlowTemplateRepositoryError {
    FlowTemplateRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl FlowTemplateRepository for InMemoryFlowTemplateRepository {
    async fn store(&self, template: &FlowTemplate) -> FlowTemplateRepositoryResult<()> {
        let mut templates = self.templates.write().map_err(poisoned)?;
        if templates.iter().any(|existing| existing.id() == template.id()) {
            return Err(FlowTemplateRepositoryError::DuplicateTemplate(
                template.id(),
            ));
        }
        templates.push(template.clone());
        Ok(())
    }

    async fn update(&self, template: &FlowTemplate) -> FlowTemplateRepositoryResult<()> {
        let mut templates = self.templates.write().map_err(poisoned)?;
        let slot = templates
            .iter_mut()
            .find(|existing| existing.id() == template.id())
            .ok_or(FlowTemplateRepositoryError::NotFound(template.id()))?;
        *slot = template.clone();
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: FlowTemplateId,
    ) -> FlowTemplateRepositoryResult<Option<FlowTemplate>> {
        let templates = self.templates.read().map_err(poisoned)?;
        Ok(templates.iter().find(|template| template.id() == id).cloned())
    }

    async fn list_all(&self) -> FlowTemplateRepositoryResult<Vec<FlowTemplate>> {
        let templates = self.templates.read().map_err(poisoned)?;
        Ok(templates.clone())
    }
}
