//! Flow template aggregate root.

use super::{
    BuddyConfig, DocumentConfig, EmailConfig, FlowDomainError, FlowPhase, FlowTemplateId,
    MeetingConfig, SetupConfig, TaskBlueprint,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Ordered set of task blueprints for one onboarding phase.
///
/// Employees copy blueprints at instantiation time, so editing a template
/// never changes tasks that already exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowTemplate {
    id: FlowTemplateId,
    name: String,
    phase: FlowPhase,
    blueprints: Vec<TaskBlueprint>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl FlowTemplate {
    /// Creates a template.
    ///
    /// # Errors
    ///
    /// Returns [`FlowDomainError::EmptyTemplateName`] when `name` is blank.
    pub fn new(
        name: impl Into<String>,
        phase: FlowPhase,
        blueprints: Vec<TaskBlueprint>,
        clock: &impl Clock,
    ) -> Result<Self, FlowDomainError> {
        let raw_name = name.into();
        let trimmed = raw_name.trim();
        if trimmed.is_empty() {
            return Err(FlowDomainError::EmptyTemplateName);
        }
        let timestamp = clock.utc();
        Ok(Self {
            id: FlowTemplateId::new(),
            name: trimmed.to_owned(),
            phase,
            blueprints,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Builds the standard pre-onboarding flow: a welcome email followed by
    /// document collection.
    ///
    /// # Errors
    ///
    /// Returns [`FlowDomainError`] if a built-in block configuration is
    /// rejected.
    pub fn standard_pre_onboarding(clock: &impl Clock) -> Result<Self, FlowDomainError> {
        let blueprints = vec![
            TaskBlueprint::new(
                "Send Welcome Email",
                "Automated welcome message with next steps",
                EmailConfig::new("Welcome to the team!", "welcome")?,
            ),
            TaskBlueprint::new(
                "Collect Documents",
                "Request required paperwork and forms",
                DocumentConfig::new(["ID", "Tax forms", "Emergency contact"])?,
            ),
        ];
        Self::new("Standard pre-onboarding", FlowPhase::PreOnboarding, blueprints, clock)
    }

    /// Builds the standard post-onboarding flow: IT access, a manager 1:1
    /// and a buddy assignment.
    ///
    /// # Errors
    ///
    /// Returns [`FlowDomainError`] if a built-in block configuration is
    /// rejected.
    pub fn standard_post_onboarding(clock: &impl Clock) -> Result<Self, FlowDomainError> {
        let blueprints = vec![
            TaskBlueprint::new(
                "Set Up IT Access",
                "Provision accounts and equipment",
                SetupConfig::new(["Email", "Slack", "GitHub", "Figma"])?,
            ),
            TaskBlueprint::new(
                "Schedule Manager 1:1",
                "First meeting with direct manager",
                MeetingConfig::new(60, "intro")?,
            ),
            TaskBlueprint::new(
                "Assign Buddy",
                "Pair with experienced team member",
                BuddyConfig::new(true, 2)?,
            ),
        ];
        Self::new("Standard post-onboarding", FlowPhase::PostOnboarding, blueprints, clock)
    }

    /// Returns the template identifier.
    #[must_use]
    pub const fn id(&self) -> FlowTemplateId {
        self.id
    }

    /// Returns the template name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the onboarding phase.
    #[must_use]
    pub const fn phase(&self) -> FlowPhase {
        self.phase
    }

    /// Returns the blueprints in instantiation order.
    #[must_use]
    pub fn blueprints(&self) -> &[TaskBlueprint] {
        &self.blueprints
    }

    /// Returns whether the template has no blueprints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blueprints.is_empty()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest edit timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Appends a blueprint to the end of the template.
    pub fn append_blueprint(&mut self, blueprint: TaskBlueprint, clock: &impl Clock) {
        self.blueprints.push(blueprint);
        self.touch(clock);
    }

    /// Removes and returns the blueprint at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`FlowDomainError::BlueprintPositionOutOfRange`] when the
    /// position does not exist.
    pub fn remove_blueprint(
        &mut self,
        position: usize,
        clock: &impl Clock,
    ) -> Result<TaskBlueprint, FlowDomainError> {
        if position >= self.blueprints.len() {
            return Err(FlowDomainError::BlueprintPositionOutOfRange {
                template_id: self.id,
                position,
                len: self.blueprints.len(),
            });
        }
        let removed = self.blueprints.remove(position);
        self.touch(clock);
        Ok(removed)
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
