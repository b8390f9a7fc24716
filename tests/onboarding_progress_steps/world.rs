//! Shared world state for onboarding BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use onboarding::employee::{
    adapters::memory::InMemoryEmployeeRepository,
    domain::Employee,
    services::{EmployeeLifecycleError, EmployeeLifecycleService},
};
use onboarding::flow::{
    adapters::memory::InMemoryFlowTemplateRepository, services::FlowTemplateService,
};
use rstest::fixture;

/// Employee service type used by the BDD world.
pub type TestEmployeeService = EmployeeLifecycleService<
    InMemoryEmployeeRepository,
    InMemoryFlowTemplateRepository,
    DefaultClock,
>;

/// Template service type used by the BDD world.
pub type TestTemplateService = FlowTemplateService<InMemoryFlowTemplateRepository, DefaultClock>;

/// Scenario world for onboarding behaviour tests.
pub struct OnboardingWorld {
    pub service: TestEmployeeService,
    pub templates: TestTemplateService,
    pub current: Option<Employee>,
    pub last_create_error: Option<EmployeeLifecycleError>,
    pub results: Vec<Employee>,
}

impl OnboardingWorld {
    /// Creates a world over empty in-memory repositories.
    #[must_use]
    pub fn new() -> Self {
        let clock = Arc::new(DefaultClock);
        let template_repo = Arc::new(InMemoryFlowTemplateRepository::new());
        let service = EmployeeLifecycleService::new(
            Arc::new(InMemoryEmployeeRepository::new()),
            Arc::clone(&template_repo),
            Arc::clone(&clock),
        );

        Self {
            service,
            templates: FlowTemplateService::new(template_repo, clock),
            current: None,
            last_create_error: None,
            results: Vec::new(),
        }
    }

    /// Returns the employee the scenario is working on.
    ///
    /// # Errors
    ///
    /// Returns an error when no employee has been created yet.
    pub fn current(&self) -> Result<&Employee, eyre::Report> {
        self.current
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing current employee in scenario world"))
    }
}

impl Default for OnboardingWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> OnboardingWorld {
    OnboardingWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
