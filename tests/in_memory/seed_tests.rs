//! In-memory integration tests for the sample directory.

use super::helpers::{Stack, stack};
use onboarding::employee::domain::{EmployeeFilter, EmployeeStatus};
use onboarding::seed::seed_sample_directory;
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn sample_directory_has_mixed_statuses(stack: Stack) -> Result<(), eyre::Report> {
    let installed = stack.templates.install_standard_templates().await?;
    let post_id = installed.get(1).map(|template| template.id());

    let seeded = seed_sample_directory(&stack.employees, post_id).await?;

    let statuses: Vec<EmployeeStatus> = seeded.iter().map(|e| e.status()).collect();
    eyre::ensure!(
        statuses
            == [
                EmployeeStatus::InProgress,
                EmployeeStatus::Completed,
                EmployeeStatus::InProgress
            ]
    );
    let progress: Vec<u8> = seeded.iter().map(|e| e.progress().value()).collect();
    eyre::ensure!(progress == [75, 100, 45], "unexpected progress {progress:?}");

    let sarah = seeded
        .first()
        .ok_or_else(|| eyre::eyre!("missing first sample hire"))?;
    eyre::ensure!(sarah.notes().len() == 1);

    let summary = stack.employees.summarize(&EmployeeFilter::all()).await?;
    eyre::ensure!(summary.average_progress.value() == 73);

    let listed = stack.employees.list_employees(&EmployeeFilter::all()).await?;
    eyre::ensure!(listed == seeded, "directory should hold the seeded records");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn sample_directory_without_template_pads_default_tasks(
    stack: Stack,
) -> Result<(), eyre::Report> {
    let seeded = seed_sample_directory(&stack.employees, None).await?;

    let task_counts: Vec<usize> = seeded.iter().map(|e| e.tasks().len()).collect();
    eyre::ensure!(task_counts == [8, 6, 11], "unexpected task counts {task_counts:?}");
    let progress: Vec<u8> = seeded.iter().map(|e| e.progress().value()).collect();
    eyre::ensure!(progress == [75, 100, 45], "unexpected progress {progress:?}");
    Ok(())
}
