//! Shared fixtures for in-memory onboarding integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use onboarding::employee::{
    adapters::memory::InMemoryEmployeeRepository, domain::ProfileInput,
    services::EmployeeLifecycleService,
};
use onboarding::flow::{
    adapters::memory::InMemoryFlowTemplateRepository, services::FlowTemplateService,
};
use rstest::fixture;

/// Employee service wired to in-memory adapters.
pub type EmployeeService = EmployeeLifecycleService<
    InMemoryEmployeeRepository,
    InMemoryFlowTemplateRepository,
    DefaultClock,
>;

/// Template service sharing the employee service's template store.
pub type TemplateService = FlowTemplateService<InMemoryFlowTemplateRepository, DefaultClock>;

/// Both onboarding services over one set of in-memory repositories.
pub struct Stack {
    pub employees: EmployeeService,
    pub templates: TemplateService,
}

/// Provides a fresh service stack for each test.
#[fixture]
pub fn stack() -> Stack {
    let clock = Arc::new(DefaultClock);
    let template_repo = Arc::new(InMemoryFlowTemplateRepository::new());
    Stack {
        employees: EmployeeLifecycleService::new(
            Arc::new(InMemoryEmployeeRepository::new()),
            Arc::clone(&template_repo),
            Arc::clone(&clock),
        ),
        templates: FlowTemplateService::new(template_repo, clock),
    }
}

/// Builds a valid profile with the given identity fields.
pub fn hire(name: &str, email: &str, role: &str, department: &str) -> ProfileInput {
    ProfileInput::new(name, email, role, department, "2024-03-01", "Lisa Wang")
}
