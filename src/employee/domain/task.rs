//! Onboarding task entity and the default task set.

use super::TaskId;
use crate::flow::domain::{BlockConfig, BlockType, FlowTemplate, TaskBlueprint};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of onboarding work a task represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskCategory {
    /// An email is sent to or by the employee.
    Email,
    /// Paperwork is collected or signed.
    Document,
    /// A meeting is held or scheduled.
    Meeting,
    /// Accounts or equipment are provisioned.
    Setup,
    /// A video is watched.
    Video,
}

impl TaskCategory {
    /// Returns the canonical representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Document => "document",
            Self::Meeting => "meeting",
            Self::Setup => "setup",
            Self::Video => "video",
        }
    }
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<BlockType> for TaskCategory {
    fn from(block_type: BlockType) -> Self {
        match block_type {
            BlockType::Email => Self::Email,
            BlockType::Document => Self::Document,
            BlockType::Meeting => Self::Meeting,
            BlockType::Setup | BlockType::Buddy => Self::Setup,
        }
    }
}

/// A single unit of onboarding work owned by an employee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    category: TaskCategory,
    completed: bool,
    config: Option<BlockConfig>,
}

impl Task {
    /// Creates a new incomplete task.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: TaskCategory,
    ) -> Self {
        Self {
            id: TaskId::new(),
            title: title.into(),
            description: description.into(),
            category,
            completed: false,
            config: None,
        }
    }

    /// Creates a new incomplete task from a flow blueprint.
    ///
    /// The blueprint configuration is cloned, so later edits to the template
    /// never reach the task.
    #[must_use]
    pub fn from_blueprint(blueprint: &TaskBlueprint) -> Self {
        Self {
            id: TaskId::new(),
            title: blueprint.title().to_owned(),
            description: blueprint.description().to_owned(),
            category: TaskCategory::from(blueprint.block_type()),
            completed: false,
            config: Some(blueprint.config().clone()),
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the task category.
    #[must_use]
    pub const fn category(&self) -> TaskCategory {
        self.category
    }

    /// Returns whether the task has been completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the block configuration copied from the source blueprint.
    #[must_use]
    pub const fn config(&self) -> Option<&BlockConfig> {
        self.config.as_ref()
    }

    /// Flips the completion flag.
    pub(crate) const fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// Returns the task set assigned when no flow template is selected.
#[must_use]
pub fn default_task_set() -> Vec<Task> {
    vec![
        Task::new(
            "Welcome Email Sent",
            "Automated welcome message with first-day details",
            TaskCategory::Email,
        ),
        Task::new(
            "Documents Uploaded",
            "ID, tax forms and emergency contact on file",
            TaskCategory::Document,
        ),
        Task::new(
            "IT Setup",
            "Laptop, accounts and access provisioned",
            TaskCategory::Setup,
        ),
        Task::new(
            "Manager 1:1 Scheduled",
            "First meeting with the direct manager",
            TaskCategory::Meeting,
        ),
        Task::new(
            "Buddy Assignment",
            "Paired with an experienced team member",
            TaskCategory::Setup,
        ),
        Task::new(
            "Company Intro Video",
            "Watch company culture and values presentation",
            TaskCategory::Video,
        ),
    ]
}

/// Instantiates one incomplete task per blueprint, in template order.
///
/// Empty templates are accepted and yield an empty task set; rejecting them
/// is a caller policy.
#[must_use]
pub fn instantiate(template: &FlowTemplate) -> Vec<Task> {
    template.blueprints().iter().map(Task::from_blueprint).collect()
}
