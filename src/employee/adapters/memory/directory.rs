//! In-memory employee directory preserving insertion order.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::employee::{
    domain::{Employee, EmployeeId},
    ports::{EmployeeRepository, EmployeeRepositoryError, EmployeeRepositoryResult},
};

/// Thread-safe in-memory employee directory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEmployeeRepository {
    state: Arc<RwLock<InMemoryDirectoryState>>,
}

#[derive(Debug, Default)]
struct InMemoryDirectoryState {
    employees: Vec<Employee>,
    positions: HashMap<EmployeeId, usize>,
}

impl InMemoryEmployeeRepository {
    /// Creates an empty in-memory directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: impl std::fmt::Display) -> EmployeeRepositoryError {
    EmployeeRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn store(&self, employee: &Employee) -> EmployeeRepositoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        if state.positions.contains_key(&employee.id()) {
            return Err(EmployeeRepositoryError::DuplicateEmployee(employee.id()));
        }

        let position = state.employees.len();
        state.positions.insert(employee.id(), position);
        state.employees.push(employee.clone());
        Ok(())
    }

    async fn update(&self, employee: &Employee) -> EmployeeRepositoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        let position = *state
            .positions
            .get(&employee.id())
            .ok_or(EmployeeRepositoryError::NotFound(employee.id()))?;
        let slot = state
            .employees
            .get_mut(position)
            .ok_or(EmployeeRepositoryError::NotFound(employee.id()))?;
        *slot = employee.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: EmployeeId) -> EmployeeRepositoryResult<Option<Employee>> {
        let state = self.state.read().map_err(poisoned)?;
        let employee = state
            .positions
            .get(&id)
            .and_then(|position| state.employees.get(*position))
            .cloned();
        Ok(employee)
    }

    async fn list_all(&self) -> EmployeeRepositoryResult<Vec<Employee>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.employees.clone())
    }
}
