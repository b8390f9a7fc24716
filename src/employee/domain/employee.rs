//! Employee aggregate root.

use super::{
    EmployeeDomainError, EmployeeId, EmployeeNote, EmployeeProfile, EmployeeStatus, Progress,
    ProgressSnapshot, Task, TaskId, default_task_set, instantiate, recompute,
};
use crate::flow::domain::FlowTemplate;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Employee record tracked through onboarding.
///
/// `progress` and `status` are derived from the task set and the pause flag
/// and are refreshed by every mutating method; callers cannot set them.
/// Both are serialized for readers but ignored on deserialization, where
/// they are recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "EmployeeRecord")]
pub struct Employee {
    id: EmployeeId,
    profile: EmployeeProfile,
    tasks: Vec<Task>,
    notes: Vec<EmployeeNote>,
    progress: Progress,
    paused: bool,
    status: EmployeeStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Stored form of an [`Employee`] without its derived fields.
#[derive(Deserialize)]
struct EmployeeRecord {
    id: EmployeeId,
    profile: EmployeeProfile,
    tasks: Vec<Task>,
    #[serde(default)]
    notes: Vec<EmployeeNote>,
    #[serde(default)]
    paused: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<EmployeeRecord> for Employee {
    fn from(record: EmployeeRecord) -> Self {
        let mut employee = Self {
            id: record.id,
            profile: record.profile,
            tasks: record.tasks,
            notes: record.notes,
            progress: Progress::ZERO,
            paused: record.paused,
            status: EmployeeStatus::InProgress,
            created_at: record.created_at,
            updated_at: record.updated_at,
        };
        employee.refresh();
        employee
    }
}

impl Employee {
    /// Creates an employee with the default task set.
    #[must_use]
    pub fn new(profile: EmployeeProfile, clock: &impl Clock) -> Self {
        Self::with_tasks(profile, default_task_set(), clock)
    }

    /// Creates an employee whose tasks are instantiated from a flow template.
    #[must_use]
    pub fn from_template(
        profile: EmployeeProfile,
        template: &FlowTemplate,
        clock: &impl Clock,
    ) -> Self {
        Self::with_tasks(profile, instantiate(template), clock)
    }

    fn with_tasks(profile: EmployeeProfile, tasks: Vec<Task>, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        let mut employee = Self {
            id: EmployeeId::new(),
            profile,
            tasks,
            notes: Vec::new(),
            progress: Progress::ZERO,
            paused: false,
            status: EmployeeStatus::InProgress,
            created_at: timestamp,
            updated_at: timestamp,
        };
        employee.refresh();
        employee
    }

    /// Returns the employee identifier.
    #[must_use]
    pub const fn id(&self) -> EmployeeId {
        self.id
    }

    /// Returns the validated profile.
    #[must_use]
    pub const fn profile(&self) -> &EmployeeProfile {
        &self.profile
    }

    /// Returns the tasks in display order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up a task by identifier.
    #[must_use]
    pub fn task(&self, task_id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == task_id)
    }

    /// Returns HR notes in the order they were written.
    #[must_use]
    pub fn notes(&self) -> &[EmployeeNote] {
        &self.notes
    }

    /// Returns the derived completion percentage.
    #[must_use]
    pub const fn progress(&self) -> Progress {
        self.progress
    }

    /// Returns whether onboarding was explicitly paused.
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Returns the derived onboarding status.
    #[must_use]
    pub const fn status(&self) -> EmployeeStatus {
        self.status
    }

    /// Returns the full progress breakdown for the current task set.
    #[must_use]
    pub fn progress_snapshot(&self) -> ProgressSnapshot {
        recompute(&self.tasks)
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Flips the completion flag of one task and refreshes progress.
    ///
    /// # Errors
    ///
    /// Returns [`EmployeeDomainError::TaskNotFound`] when the task is not in
    /// this employee's task set. Nothing is modified in that case.
    pub fn toggle_task(
        &mut self,
        task_id: TaskId,
        clock: &impl Clock,
    ) -> Result<(), EmployeeDomainError> {
        let employee_id = self.id;
        let task = self
            .tasks
            .iter_mut()
            .find(|candidate| candidate.id() == task_id)
            .ok_or(EmployeeDomainError::TaskNotFound {
                employee_id,
                task_id,
            })?;
        task.toggle();
        self.refresh();
        self.touch(clock);
        Ok(())
    }

    /// Appends a task to the end of the task set and refreshes progress.
    ///
    /// Adding an incomplete task to a completed employee moves it back to
    /// [`EmployeeStatus::InProgress`].
    pub fn add_task(&mut self, task: Task, clock: &impl Clock) {
        self.tasks.push(task);
        self.refresh();
        self.touch(clock);
    }

    /// Appends an HR note.
    pub fn add_note(&mut self, note: EmployeeNote, clock: &impl Clock) {
        self.notes.push(note);
        self.touch(clock);
    }

    /// Sets the explicit pause flag. Pausing twice is a no-op.
    pub fn pause(&mut self, clock: &impl Clock) {
        if !self.paused {
            self.paused = true;
            self.refresh();
            self.touch(clock);
        }
    }

    /// Clears the explicit pause flag. Resuming an active employee is a no-op.
    pub fn resume(&mut self, clock: &impl Clock) {
        if self.paused {
            self.paused = false;
            self.refresh();
            self.touch(clock);
        }
    }

    /// Recomputes the derived fields from tasks and the pause flag.
    fn refresh(&mut self) {
        let snapshot = recompute(&self.tasks);
        self.progress = snapshot.progress();
        self.status = snapshot.status_with(self.paused);
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
