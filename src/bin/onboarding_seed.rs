//! Seeds an in-memory onboarding directory and logs the dashboard summary.
//!
//! Usage:
//!
//! ```text
//! RUST_LOG=debug onboarding_seed
//! ```
//!
//! Configuration is read from the environment (see
//! [`onboarding::config::OnboardingConfig::from_env`]). With
//! `ONBOARDING_SEED_SAMPLE_DATA=false` only the standard flow templates are
//! installed.

use std::sync::Arc;

use mockable::DefaultClock;
use onboarding::{
    config::OnboardingConfig,
    employee::{
        adapters::memory::InMemoryEmployeeRepository,
        domain::{EmployeeFilter, EmployeeStatus, StatusFilter},
        services::EmployeeLifecycleService,
    },
    flow::{
        adapters::memory::InMemoryFlowTemplateRepository,
        domain::{FlowPhase, FlowTemplate},
        services::FlowTemplateService,
    },
    seed::seed_sample_directory,
};
use tokio::runtime::Builder;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = OnboardingConfig::from_env()?;
    let runtime = Builder::new_current_thread().enable_all().build()?;
    runtime.block_on(run(config))
}

async fn run(config: OnboardingConfig) -> Result<(), BoxError> {
    let clock = Arc::new(DefaultClock);
    let templates = Arc::new(InMemoryFlowTemplateRepository::new());
    let flows = FlowTemplateService::new(Arc::clone(&templates), Arc::clone(&clock));
    let employees = EmployeeLifecycleService::new(
        Arc::new(InMemoryEmployeeRepository::new()),
        templates,
        clock,
    )
    .with_config(config);

    let installed = flows.install_standard_templates().await?;
    let post_onboarding = installed
        .iter()
        .find(|template| template.phase() == FlowPhase::PostOnboarding)
        .map(FlowTemplate::id);

    if !config.seed_sample_data {
        info!(templates = installed.len(), "sample data disabled");
        return Ok(());
    }

    seed_sample_directory(&employees, post_onboarding).await?;

    let summary = employees.summarize(&EmployeeFilter::all()).await?;
    info!(
        total = summary.total,
        in_progress = summary.in_progress,
        completed = summary.completed,
        paused = summary.paused,
        average_progress = summary.average_progress.value(),
        "directory summary"
    );

    for status in EmployeeStatus::ALL {
        let filter = EmployeeFilter::all().with_status(StatusFilter::Exact(status));
        for employee in employees.list_employees(&filter).await? {
            info!(
                status = %status,
                name = employee.profile().name(),
                department = employee.profile().department(),
                progress = employee.progress().value(),
                "employee"
            );
        }
    }

    info!(departments = ?employees.departments().await?, "departments");
    Ok(())
}
