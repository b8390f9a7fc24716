//! In-memory integration tests for employee onboarding commands.

use super::helpers::{Stack, hire, stack};
use onboarding::employee::{
    domain::{EmployeeDomainError, EmployeeStatus, Task, TaskCategory, TaskId},
    services::{AddTaskRequest, CreateEmployeeRequest, EmployeeLifecycleError},
};
use onboarding::flow::{
    domain::{FlowPhase, MeetingConfig, TaskBlueprint},
    services::CreateTemplateRequest,
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn employee_from_authored_template_progresses_to_completion(
    stack: Stack,
) -> Result<(), eyre::Report> {
    let template = stack
        .templates
        .create_template(
            CreateTemplateRequest::new("Manager onboarding", FlowPhase::PostOnboarding)
                .with_blueprints([
                    TaskBlueprint::new("Team intro", "", MeetingConfig::new(30, "team")?),
                    TaskBlueprint::new("Skip-level", "", MeetingConfig::new(45, "skip_level")?),
                ]),
        )
        .await?;

    let created = stack
        .employees
        .create_employee(
            CreateEmployeeRequest::new(hire(
                "Jordan Lee",
                "jordan.lee@company.com",
                "Engineering Manager",
                "Engineering",
            ))
            .with_template(template.id()),
        )
        .await?;
    eyre::ensure!(created.tasks().len() == 2, "expected two instantiated tasks");

    let ids: Vec<TaskId> = created.tasks().iter().map(Task::id).collect();
    let mut latest = created.clone();
    for (index, task_id) in ids.iter().enumerate() {
        latest = stack.employees.toggle_task(created.id(), *task_id).await?;
        if index == 0 {
            eyre::ensure!(latest.progress().value() == 50, "half way expected");
            eyre::ensure!(latest.status() == EmployeeStatus::InProgress);
        }
    }

    eyre::ensure!(latest.progress().value() == 100);
    eyre::ensure!(latest.status() == EmployeeStatus::Completed);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn template_edits_after_creation_leave_employee_untouched(
    stack: Stack,
) -> Result<(), eyre::Report> {
    let installed = stack.templates.install_standard_templates().await?;
    let pre = installed
        .first()
        .ok_or_else(|| eyre::eyre!("missing pre-onboarding template"))?;
    let created = stack
        .employees
        .create_employee(
            CreateEmployeeRequest::new(hire(
                "Emily Rodriguez",
                "emily.rodriguez@company.com",
                "UX Designer",
                "Design",
            ))
            .with_template(pre.id()),
        )
        .await?;

    stack.templates.remove_blueprint(pre.id(), 0).await?;

    let fetched = stack.employees.get_employee(created.id()).await?;
    eyre::ensure!(fetched.tasks() == created.tasks(), "tasks should be unchanged");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn added_task_reopens_completed_onboarding(stack: Stack) -> Result<(), eyre::Report> {
    let created = stack
        .employees
        .create_employee(CreateEmployeeRequest::new(hire(
            "Marcus Johnson",
            "marcus.johnson@company.com",
            "Product Manager",
            "Product",
        )))
        .await?;
    for task in created.tasks() {
        stack.employees.toggle_task(created.id(), task.id()).await?;
    }

    let updated = stack
        .employees
        .add_task(AddTaskRequest::new(
            created.id(),
            "Compliance refresher",
            TaskCategory::Document,
        ))
        .await?;

    eyre::ensure!(updated.progress().value() == 86);
    eyre::ensure!(updated.status() == EmployeeStatus::InProgress);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn malformed_email_is_rejected(stack: Stack) {
    let result = stack
        .employees
        .create_employee(CreateEmployeeRequest::new(hire(
            "Priya Patel",
            "priya.patel.company.com",
            "Backend Developer",
            "Engineering",
        )))
        .await;

    assert!(matches!(
        result,
        Err(EmployeeLifecycleError::Domain(EmployeeDomainError::MalformedEmail(_)))
    ));
}
