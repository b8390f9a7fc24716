//! Application services for employee onboarding orchestration.

mod lifecycle;

pub use lifecycle::{
    AddTaskRequest, CreateEmployeeRequest, EmployeeLifecycleError, EmployeeLifecycleResult,
    EmployeeLifecycleService,
};
