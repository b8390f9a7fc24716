//! In-memory integration tests for directory listing and summaries.

use super::helpers::{Stack, hire, stack};
use onboarding::employee::{
    domain::{DepartmentFilter, EmployeeFilter, EmployeeStatus, StatusFilter},
    services::CreateEmployeeRequest,
};
use rstest::rstest;

async fn populate(stack: &Stack) -> Result<(), eyre::Report> {
    let hires = [
        hire("Sarah Chen", "sarah.chen@company.com", "Frontend Developer", "Engineering"),
        hire("Priya Patel", "priya.patel@company.com", "Backend Developer", "Engineering"),
        hire("Emily Rodriguez", "emily.rodriguez@company.com", "UX Designer", "Design"),
    ];
    for profile in hires {
        stack
            .employees
            .create_employee(CreateEmployeeRequest::new(profile))
            .await?;
    }
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn department_and_query_filters_combine(stack: Stack) -> Result<(), eyre::Report> {
    populate(&stack).await?;

    let engineers = stack
        .employees
        .list_employees(
            &EmployeeFilter::all().with_department(DepartmentFilter::parse("Engineering")),
        )
        .await?;
    let backend = stack
        .employees
        .list_employees(
            &EmployeeFilter::all()
                .with_department(DepartmentFilter::parse("Engineering"))
                .with_query("backend"),
        )
        .await?;

    let engineer_names: Vec<&str> = engineers.iter().map(|e| e.profile().name()).collect();
    eyre::ensure!(engineer_names == ["Sarah Chen", "Priya Patel"]);
    eyre::ensure!(backend.len() == 1);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn paused_employees_are_listed_and_counted(stack: Stack) -> Result<(), eyre::Report> {
    populate(&stack).await?;
    let everyone = stack.employees.list_employees(&EmployeeFilter::all()).await?;
    let target = everyone
        .get(2)
        .ok_or_else(|| eyre::eyre!("expected three employees"))?;
    stack.employees.pause_employee(target.id()).await?;

    let paused = stack
        .employees
        .list_employees(
            &EmployeeFilter::all().with_status(StatusFilter::Exact(EmployeeStatus::Paused)),
        )
        .await?;
    let summary = stack.employees.summarize(&EmployeeFilter::all()).await?;

    eyre::ensure!(paused.len() == 1);
    eyre::ensure!(summary.paused == 1 && summary.in_progress == 2 && summary.completed == 0);
    eyre::ensure!(stack.employees.departments().await? == ["Engineering", "Design"]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_directory_summary_is_zero(stack: Stack) -> Result<(), eyre::Report> {
    let summary = stack.employees.summarize(&EmployeeFilter::all()).await?;

    eyre::ensure!(summary.total == 0);
    eyre::ensure!(summary.average_progress.value() == 0);
    Ok(())
}
