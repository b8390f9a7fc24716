//! Repository port for the employee directory.

use crate::employee::domain::{Employee, EmployeeId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for employee repository operations.
pub type EmployeeRepositoryResult<T> = Result<T, EmployeeRepositoryError>;

/// Employee directory persistence contract.
///
/// Implementations replace whole records atomically so that readers never
/// observe progress and status from different mutations.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Appends a new employee to the directory.
    ///
    /// # Errors
    ///
    /// Returns [`EmployeeRepositoryError::DuplicateEmployee`] when the
    /// employee ID already exists.
    async fn store(&self, employee: &Employee) -> EmployeeRepositoryResult<()>;

    /// Replaces an existing employee record in place, keeping its directory
    /// position.
    ///
    /// # Errors
    ///
    /// Returns [`EmployeeRepositoryError::NotFound`] when the employee does
    /// not exist.
    async fn update(&self, employee: &Employee) -> EmployeeRepositoryResult<()>;

    /// Finds an employee by identifier.
    ///
    /// Returns `None` when the employee does not exist.
    async fn find_by_id(&self, id: EmployeeId) -> EmployeeRepositoryResult<Option<Employee>>;

    /// Returns every employee in insertion order.
    async fn list_all(&self) -> EmployeeRepositoryResult<Vec<Employee>>;
}

/// Errors returned by employee repository implementations.
#[derive(Debug, Clone, Error)]
pub enum EmployeeRepositoryError {
    /// An employee with the same identifier already exists.
    #[error("duplicate employee identifier: {0}")]
    DuplicateEmployee(EmployeeId),

    /// The employee was not found.
    #[error("employee not found: {0}")]
    NotFound(EmployeeId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl EmployeeRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
