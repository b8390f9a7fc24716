//! Error types for employee domain validation and parsing.

use super::{EmployeeId, ProfileField, TaskId};
use crate::flow::domain::FlowTemplateId;
use thiserror::Error;

/// Errors returned while constructing or mutating employee domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmployeeDomainError {
    /// A required profile field is blank after trimming.
    #[error("validation failed for '{0}': value must not be blank")]
    MissingField(ProfileField),

    /// The email address does not contain exactly one `@`.
    #[error("validation failed for 'email': '{0}' must contain exactly one '@'")]
    MalformedEmail(String),

    /// The referenced task does not belong to the employee.
    #[error("task {task_id} not found for employee {employee_id}")]
    TaskNotFound {
        /// Employee whose task set was searched.
        employee_id: EmployeeId,
        /// Task identifier that was not found.
        task_id: TaskId,
    },

    /// The selected flow template has no blueprints and at least one task is
    /// required.
    #[error("flow template {0} has no blueprints")]
    EmptyTemplate(FlowTemplateId),

    /// A note author is blank after trimming.
    #[error("note author must not be blank")]
    EmptyNoteAuthor,

    /// A note body is blank after trimming.
    #[error("note content must not be blank")]
    EmptyNoteContent,
}

impl EmployeeDomainError {
    /// Returns the profile field that failed validation, if any.
    #[must_use]
    pub const fn invalid_field(&self) -> Option<ProfileField> {
        match self {
            Self::MissingField(field) => Some(*field),
            Self::MalformedEmail(_) => Some(ProfileField::Email),
            Self::TaskNotFound { .. }
            | Self::EmptyTemplate(_)
            | Self::EmptyNoteAuthor
            | Self::EmptyNoteContent => None,
        }
    }
}

/// Error returned while parsing an employee status string.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown employee status: {0}")]
pub struct ParseEmployeeStatusError(pub String);

/// Error returned when a percentage above 100 is supplied.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("progress {0} is outside 0..=100")]
pub struct ProgressOutOfRange(pub u8);
