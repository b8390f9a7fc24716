//! When steps for onboarding BDD scenarios.

use super::world::{OnboardingWorld, run_async};
use eyre::WrapErr;
use onboarding::employee::{
    domain::{EmployeeFilter, ProfileInput, Task, TaskId},
    services::CreateEmployeeRequest,
};
use rstest_bdd_macros::when;

/// Toggles the first `count` tasks of the current employee.
///
/// # Errors
///
/// Returns an error when there is no current employee or a toggle fails.
pub fn toggle_first_tasks(world: &mut OnboardingWorld, count: usize) -> Result<(), eyre::Report> {
    let employee = world.current()?;
    let employee_id = employee.id();
    let task_ids: Vec<TaskId> = employee.tasks().iter().take(count).map(Task::id).collect();
    eyre::ensure!(task_ids.len() == count, "employee has fewer than {count} tasks");
    for task_id in task_ids {
        let updated = run_async(world.service.toggle_task(employee_id, task_id))
            .wrap_err("toggle task in scenario")?;
        world.current = Some(updated);
    }
    Ok(())
}

#[when("{count:usize} tasks are toggled")]
fn tasks_are_toggled(world: &mut OnboardingWorld, count: usize) -> Result<(), eyre::Report> {
    toggle_first_tasks(world, count)
}

#[when("the first task is toggled twice")]
fn first_task_toggled_twice(world: &mut OnboardingWorld) -> Result<(), eyre::Report> {
    let employee = world.current()?;
    let employee_id = employee.id();
    let task_id = employee
        .tasks()
        .first()
        .map(Task::id)
        .ok_or_else(|| eyre::eyre!("employee has no tasks"))?;
    for _ in 0..2 {
        let updated = run_async(world.service.toggle_task(employee_id, task_id))
            .wrap_err("toggle task in scenario")?;
        world.current = Some(updated);
    }
    Ok(())
}

#[when("onboarding is resumed")]
fn onboarding_is_resumed(world: &mut OnboardingWorld) -> Result<(), eyre::Report> {
    let employee_id = world.current()?.id();
    let resumed = run_async(world.service.resume_employee(employee_id))
        .wrap_err("resume employee in scenario")?;
    world.current = Some(resumed);
    Ok(())
}

#[when(r#"a hire is added with email "{email}""#)]
fn hire_added_with_email(world: &mut OnboardingWorld, email: String) {
    let profile = ProfileInput::new(
        "Sarah Chen",
        email,
        "Frontend Developer",
        "Engineering",
        "2024-02-15",
        "Alex Rodriguez",
    );
    match run_async(
        world
            .service
            .create_employee(CreateEmployeeRequest::new(profile)),
    ) {
        Ok(created) => world.current = Some(created),
        Err(err) => world.last_create_error = Some(err),
    }
}

#[when(r#"the directory is searched for "{query}""#)]
fn directory_searched(world: &mut OnboardingWorld, query: String) -> Result<(), eyre::Report> {
    let filter = EmployeeFilter::all().with_query(query);
    world.results =
        run_async(world.service.list_employees(&filter)).wrap_err("search directory")?;
    Ok(())
}

#[when(r#"the directory is filtered by status "{status}""#)]
fn directory_filtered_by_status(
    world: &mut OnboardingWorld,
    status: String,
) -> Result<(), eyre::Report> {
    let filter = EmployeeFilter::from_parts("", "all", &status)
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    world.results =
        run_async(world.service.list_employees(&filter)).wrap_err("filter directory")?;
    Ok(())
}

#[when(r#"the directory is filtered by department "{department}""#)]
fn directory_filtered_by_department(
    world: &mut OnboardingWorld,
    department: String,
) -> Result<(), eyre::Report> {
    let filter = EmployeeFilter::from_parts("", &department, "all")
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    world.results =
        run_async(world.service.list_employees(&filter)).wrap_err("filter directory")?;
    Ok(())
}
