//! Then steps for onboarding BDD scenarios.

use super::world::{OnboardingWorld, run_async};
use onboarding::employee::{
    domain::{EmployeeDomainError, EmployeeFilter, EmployeeStatus},
    services::EmployeeLifecycleError,
};
use rstest_bdd_macros::then;

#[then("the progress is {value:u8} percent")]
fn progress_is(world: &OnboardingWorld, value: u8) -> Result<(), eyre::Report> {
    let actual = world.current()?.progress();
    if actual.value() != value {
        return Err(eyre::eyre!("expected progress {value}%, found {actual}"));
    }
    Ok(())
}

#[then(r#"the employee status is "{status}""#)]
fn employee_status_is(world: &OnboardingWorld, status: String) -> Result<(), eyre::Report> {
    let expected = EmployeeStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let actual = world.current()?.status();
    if actual != expected {
        return Err(eyre::eyre!(
            "expected status {}, found {}",
            expected.as_str(),
            actual.as_str()
        ));
    }
    Ok(())
}

#[then("the hire is rejected for a malformed email")]
fn hire_rejected_for_malformed_email(world: &OnboardingWorld) -> Result<(), eyre::Report> {
    let err = world
        .last_create_error
        .as_ref()
        .ok_or_else(|| eyre::eyre!("expected employee creation to fail"))?;
    if !matches!(
        err,
        EmployeeLifecycleError::Domain(EmployeeDomainError::MalformedEmail(_))
    ) {
        return Err(eyre::eyre!("expected MalformedEmail error, got {err:?}"));
    }
    Ok(())
}

#[then("the directory is empty")]
fn directory_is_empty(world: &OnboardingWorld) -> Result<(), eyre::Report> {
    let listed = run_async(world.service.list_employees(&EmployeeFilter::all()))?;
    if !listed.is_empty() {
        return Err(eyre::eyre!("expected empty directory, found {}", listed.len()));
    }
    Ok(())
}

#[then(r#"the results are "{names}""#)]
fn results_are(world: &OnboardingWorld, names: String) -> Result<(), eyre::Report> {
    let expected: Vec<&str> = names.split(',').map(str::trim).collect();
    let actual: Vec<&str> = world
        .results
        .iter()
        .map(|employee| employee.profile().name())
        .collect();
    if actual != expected {
        return Err(eyre::eyre!("expected {expected:?}, found {actual:?}"));
    }
    Ok(())
}

#[then("the directory average progress is {value:u8} percent")]
fn directory_average_is(world: &OnboardingWorld, value: u8) -> Result<(), eyre::Report> {
    let summary = run_async(world.service.summarize(&EmployeeFilter::all()))?;
    if summary.average_progress.value() != value {
        return Err(eyre::eyre!(
            "expected average {value}%, found {}",
            summary.average_progress
        ));
    }
    Ok(())
}
