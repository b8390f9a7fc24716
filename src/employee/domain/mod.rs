//! Domain model for employee onboarding.
//!
//! The employee domain models profiles, onboarding tasks, the progress
//! engine that derives completion and status, and the pure directory
//! filtering used by list views. Infrastructure concerns stay outside the
//! domain boundary.

mod directory;
mod employee;
mod error;
mod ids;
mod note;
mod profile;
mod progress;
mod task;

pub use directory::{
    ALL_SENTINEL, DepartmentFilter, DirectorySummary, EmployeeFilter, StatusFilter, departments,
    filter_employees,
};
pub use employee::Employee;
pub use error::{EmployeeDomainError, ParseEmployeeStatusError, ProgressOutOfRange};
pub use ids::{EmployeeId, NoteId, TaskId};
pub use note::EmployeeNote;
pub use profile::{EmployeeProfile, ProfileField, ProfileInput};
pub use progress::{EmployeeStatus, Progress, ProgressSnapshot, recompute};
pub use task::{Task, TaskCategory, default_task_set, instantiate};
