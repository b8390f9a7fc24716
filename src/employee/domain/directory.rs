//! Directory search, filtering and summary statistics.
//!
//! These are pure functions over a snapshot of employee records. Filtering is
//! stable: results keep directory insertion order.

use super::{Employee, EmployeeStatus, ParseEmployeeStatusError, Progress};
use super::progress::{round_half_up, widen};
use serde::{Deserialize, Serialize};

/// Filter value that accepts every record.
pub const ALL_SENTINEL: &str = "all";

fn is_all_sentinel(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case(ALL_SENTINEL)
}

/// Exact-match department filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DepartmentFilter {
    /// Accept every department.
    #[default]
    All,
    /// Accept only the named department.
    Exact(String),
}

impl DepartmentFilter {
    /// Parses a department choice, mapping the `all` sentinel to
    /// [`DepartmentFilter::All`].
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if is_all_sentinel(value) {
            Self::All
        } else {
            Self::Exact(value.trim().to_owned())
        }
    }

    fn matches(&self, department: &str) -> bool {
        match self {
            Self::All => true,
            Self::Exact(expected) => expected == department,
        }
    }
}

/// Exact-match status filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusFilter {
    /// Accept every status.
    #[default]
    All,
    /// Accept only the given status.
    Exact(EmployeeStatus),
}

impl StatusFilter {
    fn matches(self, status: EmployeeStatus) -> bool {
        match self {
            Self::All => true,
            Self::Exact(expected) => expected == status,
        }
    }
}

impl TryFrom<&str> for StatusFilter {
    type Error = ParseEmployeeStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if is_all_sentinel(value) {
            return Ok(Self::All);
        }
        EmployeeStatus::try_from(value).map(Self::Exact)
    }
}

/// Combined search and filter criteria for directory listings.
///
/// The query, department and status predicates are ANDed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeFilter {
    query: String,
    department: DepartmentFilter,
    status: StatusFilter,
}

impl EmployeeFilter {
    /// Creates a filter that accepts every employee.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Builds a filter from raw list-view inputs.
    ///
    /// # Errors
    ///
    /// Returns [`ParseEmployeeStatusError`] when `status` is neither the `all`
    /// sentinel nor a known status.
    pub fn from_parts(
        query: impl Into<String>,
        department: &str,
        status: &str,
    ) -> Result<Self, ParseEmployeeStatusError> {
        Ok(Self {
            query: query.into(),
            department: DepartmentFilter::parse(department),
            status: StatusFilter::try_from(status)?,
        })
    }

    /// Sets the free-text query matched against name, email and role.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Sets the department filter.
    #[must_use]
    pub fn with_department(mut self, department: DepartmentFilter) -> Self {
        self.department = department;
        self
    }

    /// Sets the status filter.
    #[must_use]
    pub const fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    /// Returns the free-text query.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns whether the employee passes every predicate.
    #[must_use]
    pub fn matches(&self, employee: &Employee) -> bool {
        let profile = employee.profile();
        self.matches_query(profile.name(), profile.email(), profile.role())
            && self.department.matches(profile.department())
            && self.status.matches(employee.status())
    }

    fn matches_query(&self, name: &str, email: &str, role: &str) -> bool {
        let needle = self.query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [name, email, role]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Returns the employees accepted by `filter`, in directory order.
#[must_use]
pub fn filter_employees(employees: &[Employee], filter: &EmployeeFilter) -> Vec<Employee> {
    employees
        .iter()
        .filter(|employee| filter.matches(employee))
        .cloned()
        .collect()
}

/// Returns each distinct department in first-seen order.
#[must_use]
pub fn departments(employees: &[Employee]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for employee in employees {
        let department = employee.profile().department();
        if !seen.iter().any(|known| known == department) {
            seen.push(department.to_owned());
        }
    }
    seen
}

/// Aggregate counts shown on the dashboard and list views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectorySummary {
    /// Number of employees considered.
    pub total: usize,
    /// Employees currently in progress.
    pub in_progress: usize,
    /// Employees who completed onboarding.
    pub completed: usize,
    /// Employees whose onboarding is paused.
    pub paused: usize,
    /// Mean progress rounded half-up; zero for an empty set.
    pub average_progress: Progress,
}

impl DirectorySummary {
    /// Summarizes a set of employees.
    #[must_use]
    pub fn from_employees(employees: &[Employee]) -> Self {
        let count_with = |status: EmployeeStatus| {
            employees
                .iter()
                .filter(|employee| employee.status() == status)
                .count()
        };
        let progress_sum: u64 = employees
            .iter()
            .map(|employee| u64::from(employee.progress().value()))
            .sum();
        let average = round_half_up(progress_sum, widen(employees.len()));

        Self {
            total: employees.len(),
            in_progress: count_with(EmployeeStatus::InProgress),
            completed: count_with(EmployeeStatus::Completed),
            paused: count_with(EmployeeStatus::Paused),
            average_progress: Progress::saturating_from(average),
        }
    }
}
