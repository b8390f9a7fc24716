//! Given steps for onboarding BDD scenarios.

use super::when::toggle_first_tasks;
use super::world::{OnboardingWorld, run_async};
use eyre::WrapErr;
use onboarding::employee::{domain::ProfileInput, services::CreateEmployeeRequest};
use onboarding::seed::seed_sample_directory;
use rstest_bdd_macros::given;

#[given(r#"a new hire "{name}" in "{department}" with the default task set"#)]
fn new_hire(
    world: &mut OnboardingWorld,
    name: String,
    department: String,
) -> Result<(), eyre::Report> {
    let email = format!("{}@company.com", name.to_lowercase().replace(' ', "."));
    let profile = ProfileInput::new(
        name,
        email,
        "Individual Contributor",
        department,
        "2024-02-15",
        "Alex Rodriguez",
    );
    let created = run_async(
        world
            .service
            .create_employee(CreateEmployeeRequest::new(profile)),
    )
    .wrap_err("create employee for onboarding scenario")?;
    world.current = Some(created);
    Ok(())
}

#[given("{count:usize} tasks are already complete")]
fn tasks_already_complete(world: &mut OnboardingWorld, count: usize) -> Result<(), eyre::Report> {
    toggle_first_tasks(world, count)
}

#[given("onboarding is paused")]
fn onboarding_is_paused(world: &mut OnboardingWorld) -> Result<(), eyre::Report> {
    let employee_id = world.current()?.id();
    let paused = run_async(world.service.pause_employee(employee_id))
        .wrap_err("pause employee in scenario setup")?;
    world.current = Some(paused);
    Ok(())
}

#[given("the sample directory")]
fn sample_directory(world: &mut OnboardingWorld) -> Result<(), eyre::Report> {
    let installed = run_async(world.templates.install_standard_templates())
        .wrap_err("install standard templates")?;
    let post_onboarding = installed.get(1).map(|template| template.id());
    run_async(seed_sample_directory(&world.service, post_onboarding))
        .wrap_err("seed sample directory")?;
    Ok(())
}
