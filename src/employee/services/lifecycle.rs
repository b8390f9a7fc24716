//! Service layer for employee onboarding commands and directory queries.

use crate::config::OnboardingConfig;
use crate::employee::{
    domain::{
        DirectorySummary, Employee, EmployeeDomainError, EmployeeFilter, EmployeeId,
        EmployeeNote, EmployeeProfile, ProfileInput, Task, TaskCategory, TaskId, departments,
        filter_employees,
    },
    ports::{EmployeeRepository, EmployeeRepositoryError},
};
use crate::flow::{
    domain::FlowTemplateId,
    ports::{FlowTemplateRepository, FlowTemplateRepositoryError},
};
use crate::locks::RecordLocks;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};


/// Request payload for adding an employee to the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEmployeeRequest {
    profile: ProfileInput,
    template_id: Option<FlowTemplateId>,
}

impl CreateEmployeeRequest {
    /// Creates a request that assigns the default task set.
    #[must_use]
    pub const fn new(profile: ProfileInput) -> Self {
        Self {
            profile,
            template_id: None,
        }
    }

    /// Instantiates tasks from the given flow template instead of the
    /// default task set.
    #[must_use]
    pub const fn with_template(mut self, template_id: FlowTemplateId) -> Self {
        self.template_id = Some(template_id);
        self
    }
}

/// Request payload for appending a task to an existing employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTaskRequest {
    employee_id: EmployeeId,
    title: String,
    description: String,
    category: TaskCategory,
}

impl AddTaskRequest {
    /// Creates a request for a task without a description.
    #[must_use]
    pub fn new(employee_id: EmployeeId, title: impl Into<String>, category: TaskCategory) -> Self {
        Self {
            employee_id,
            title: title.into(),
            description: String::new(),
            category,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Service-level errors for employee onboarding operations.
#[derive(Debug, Error)]
pub enum EmployeeLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] EmployeeDomainError),
    /// Employee repository operation failed.
    #[error(transparent)]
    Repository(#[from] EmployeeRepositoryError),
    /// Flow template lookup failed.
    #[error(transparent)]
    FlowRepository(#[from] FlowTemplateRepositoryError),
    /// The selected flow template does not exist.
    #[error("flow template not found: {0}")]
    TemplateNotFound(FlowTemplateId),
}

impl EmployeeLifecycleError {
    /// Returns whether the error reports a missing employee.
    #[must_use]
    pub const fn is_employee_not_found(&self) -> bool {
        matches!(self, Self::Repository(EmployeeRepositoryError::NotFound(_)))
    }
}

/// Result type for employee lifecycle service operations.
pub type EmployeeLifecycleResult<T> = Result<T, EmployeeLifecycleError>;

/// Employee onboarding orchestration service.
///
/// Every mutation holds the per-employee lock for its whole
/// read-modify-write cycle.
#[derive(Clone)]
pub struct EmployeeLifecycleService<R, T, C>
where
    R: EmployeeRepository,
    T: FlowTemplateRepository,
    C: Clock + Send + Sync,
{
    employees: Arc<R>,
    templates: Arc<T>,
    clock: Arc<C>,
    config: OnboardingConfig,
    locks: Arc<RecordLocks<EmployeeId>>,
}

impl<R, T, C> EmployeeLifecycleService<R, T, C>
where
    R: EmployeeRepository,
    T: FlowTemplateRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new employee lifecycle service with default configuration.
    #[must_use]
    pub fn new(employees: Arc<R>, templates: Arc<T>, clock: Arc<C>) -> Self {
        Self {
            employees,
            templates,
            clock,
            config: OnboardingConfig::default(),
            locks: Arc::new(RecordLocks::default()),
        }
    }

    /// Replaces the service configuration.
    #[must_use]
    pub const fn with_config(mut self, config: OnboardingConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &OnboardingConfig {
        &self.config
    }

    /// Validates a profile and adds a new employee to the directory.
    ///
    /// Nothing is written when validation or template resolution fails.
    ///
    /// # Errors
    ///
    /// Returns [`EmployeeLifecycleError::Domain`] for profile validation
    /// failures and for empty templates when tasks are required,
    /// [`EmployeeLifecycleError::TemplateNotFound`] when the template does
    /// not exist, or a repository error when persistence fails.
    pub async fn create_employee(
        &self,
        request: CreateEmployeeRequest,
    ) -> EmployeeLifecycleResult<Employee> {
        let CreateEmployeeRequest {
            profile,
            template_id,
        } = request;

        let validated = EmployeeProfile::new(&profile).inspect_err(|err| {
            warn!(field = ?err.invalid_field(), error = %err, "employee profile rejected");
        })?;

        let employee = match template_id {
            Some(id) => {
                let template = self
                    .templates
                    .find_by_id(id)
                    .await?
                    .ok_or(EmployeeLifecycleError::TemplateNotFound(id))?;
                if self.config.require_tasks && template.is_empty() {
                    warn!(template_id = %id, "empty flow template rejected");
                    return Err(EmployeeDomainError::EmptyTemplate(id).into());
                }
                Employee::from_template(validated, &template, &*self.clock)
            }
            None => Employee::new(validated, &*self.clock),
        };

        self.employees.store(&employee).await?;
        info!(
            employee_id = %employee.id(),
            template_id = ?template_id,
            task_count = employee.tasks().len(),
            "employee created"
        );
        Ok(employee)
    }

    /// Flips the completion flag of one task and recomputes progress.
    ///
    /// # Errors
    ///
    /// Returns [`EmployeeLifecycleError::Repository`] with
    /// [`EmployeeRepositoryError::NotFound`] when the employee does not exist,
    /// or [`EmployeeLifecycleError::Domain`] with
    /// [`EmployeeDomainError::TaskNotFound`] when the task does not belong to
    /// the employee.
    pub async fn toggle_task(
        &self,
        employee_id: EmployeeId,
        task_id: TaskId,
    ) -> EmployeeLifecycleResult<Employee> {
        let employee = self
            .mutate(employee_id, |employee, clock| {
                employee.toggle_task(task_id, clock)
            })
            .await?;
        info!(
            employee_id = %employee_id,
            task_id = %task_id,
            progress = employee.progress().value(),
            status = %employee.status(),
            "task toggled"
        );
        Ok(employee)
    }

    /// Marks an employee's onboarding as paused.
    ///
    /// # Errors
    ///
    /// Returns [`EmployeeLifecycleError::Repository`] when the employee is
    /// not found or persistence fails.
    pub async fn pause_employee(
        &self,
        employee_id: EmployeeId,
    ) -> EmployeeLifecycleResult<Employee> {
        let employee = self
            .mutate(employee_id, |employee, clock| {
                employee.pause(clock);
                Ok(())
            })
            .await?;
        info!(employee_id = %employee_id, "onboarding paused");
        Ok(employee)
    }

    /// Clears an employee's pause flag; the status is derived from progress
    /// again.
    ///
    /// # Errors
    ///
    /// Returns [`EmployeeLifecycleError::Repository`] when the employee is
    /// not found or persistence fails.
    pub async fn resume_employee(
        &self,
        employee_id: EmployeeId,
    ) -> EmployeeLifecycleResult<Employee> {
        let employee = self
            .mutate(employee_id, |employee, clock| {
                employee.resume(clock);
                Ok(())
            })
            .await?;
        info!(employee_id = %employee_id, status = %employee.status(), "onboarding resumed");
        Ok(employee)
    }

    /// Appends a new incomplete task to an employee.
    ///
    /// # Errors
    ///
    /// Returns [`EmployeeLifecycleError::Repository`] when the employee is
    /// not found or persistence fails.
    pub async fn add_task(&self, request: AddTaskRequest) -> EmployeeLifecycleResult<Employee> {
        let AddTaskRequest {
            employee_id,
            title,
            description,
            category,
        } = request;
        let task = Task::new(title, description, category);
        let task_id = task.id();
        let employee = self
            .mutate(employee_id, move |employee, clock| {
                employee.add_task(task, clock);
                Ok(())
            })
            .await?;
        info!(
            employee_id = %employee_id,
            task_id = %task_id,
            status = %employee.status(),
            "task added"
        );
        Ok(employee)
    }

    /// Attaches an HR note to an employee.
    ///
    /// # Errors
    ///
    /// Returns [`EmployeeLifecycleError::Domain`] when the author or content
    /// is blank, or [`EmployeeLifecycleError::Repository`] when the employee
    /// is not found or persistence fails.
    pub async fn add_note(
        &self,
        employee_id: EmployeeId,
        author: impl Into<String>,
        content: impl Into<String>,
    ) -> EmployeeLifecycleResult<Employee> {
        let note = EmployeeNote::new(author, content, &*self.clock)?;
        let employee = self
            .mutate(employee_id, move |employee, clock| {
                employee.add_note(note, clock);
                Ok(())
            })
            .await?;
        debug!(employee_id = %employee_id, "note added");
        Ok(employee)
    }

    /// Returns an employee by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`EmployeeLifecycleError::Repository`] with
    /// [`EmployeeRepositoryError::NotFound`] when the employee does not exist.
    pub async fn get_employee(&self, employee_id: EmployeeId) -> EmployeeLifecycleResult<Employee> {
        self.find_by_id_or_error(employee_id).await
    }

    /// Returns the employees accepted by `filter`, in directory order.
    ///
    /// # Errors
    ///
    /// Returns [`EmployeeLifecycleError::Repository`] when the directory
    /// cannot be read.
    pub async fn list_employees(
        &self,
        filter: &EmployeeFilter,
    ) -> EmployeeLifecycleResult<Vec<Employee>> {
        let snapshot = self.employees.list_all().await?;
        let matched = filter_employees(&snapshot, filter);
        debug!(
            query = filter.query(),
            total = snapshot.len(),
            matched = matched.len(),
            "employees listed"
        );
        Ok(matched)
    }

    /// Summarizes the employees accepted by `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`EmployeeLifecycleError::Repository`] when the directory
    /// cannot be read.
    pub async fn summarize(
        &self,
        filter: &EmployeeFilter,
    ) -> EmployeeLifecycleResult<DirectorySummary> {
        let matched = self.list_employees(filter).await?;
        Ok(DirectorySummary::from_employees(&matched))
    }

    /// Returns every department present in the directory, in first-seen
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`EmployeeLifecycleError::Repository`] when the directory
    /// cannot be read.
    pub async fn departments(&self) -> EmployeeLifecycleResult<Vec<String>> {
        let snapshot = self.employees.list_all().await?;
        Ok(departments(&snapshot))
    }

    async fn mutate<F>(
        &self,
        employee_id: EmployeeId,
        apply: F,
    ) -> EmployeeLifecycleResult<Employee>
    where
        F: FnOnce(&mut Employee, &C) -> Result<(), EmployeeDomainError> + Send,
    {
        let _guard = self.locks.acquire(employee_id).await;
        let mut employee = self.find_by_id_or_error(employee_id).await?;
        apply(&mut employee, &*self.clock).inspect_err(|err| {
            warn!(employee_id = %employee_id, error = %err, "employee command rejected");
        })?;
        self.employees.update(&employee).await?;
        Ok(employee)
    }

    async fn find_by_id_or_error(
        &self,
        employee_id: EmployeeId,
    ) -> EmployeeLifecycleResult<Employee> {
        self.employees
            .find_by_id(employee_id)
            .await?
            .ok_or_else(|| EmployeeRepositoryError::NotFound(employee_id).into())
    }
}
