//! Port contracts for employee onboarding.
//!
//! Ports define infrastructure-agnostic interfaces used by employee services.

pub mod repository;

pub use repository::{EmployeeRepository, EmployeeRepositoryError, EmployeeRepositoryResult};
