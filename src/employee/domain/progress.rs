//! Progress engine: derives completion percentage and status from tasks.
//!
//! Everything here is a pure function of its input. The engine uses integer
//! arithmetic with round-half-up semantics, so `5 / 6` reports `83` and
//! `1 / 8` reports `13`.

use super::{ParseEmployeeStatusError, ProgressOutOfRange, Task};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Completion percentage in the range `0..=100`.
///
/// Serialized as a bare integer; deserializing a value above 100 fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Progress(u8);

impl Progress {
    /// No work completed.
    pub const ZERO: Self = Self(0);

    /// All work completed.
    pub const COMPLETE: Self = Self(100);

    /// Computes the rounded percentage of `completed` out of `total`.
    ///
    /// Returns [`Progress::ZERO`] when `total` is zero. `completed` values
    /// above `total` are clamped.
    #[must_use]
    pub fn from_counts(completed: usize, total: usize) -> Self {
        let done = widen(completed.min(total));
        Self::saturating_from(round_half_up(done.saturating_mul(100), widen(total)))
    }

    /// Converts an already-rounded percentage, capping it at 100.
    pub(crate) fn saturating_from(percent: u64) -> Self {
        u8::try_from(percent.min(100)).map_or(Self::COMPLETE, Self)
    }

    /// Returns the percentage value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns whether the percentage is 100.
    #[must_use]
    pub const fn is_complete(self) -> bool {
        self.0 == 100
    }
}

impl TryFrom<u8> for Progress {
    type Error = ProgressOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > 100 {
            return Err(ProgressOutOfRange(value));
        }
        Ok(Self(value))
    }
}

impl From<Progress> for u8 {
    fn from(progress: Progress) -> Self {
        progress.0
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Onboarding status of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    /// Onboarding is underway.
    InProgress,
    /// Every task is complete.
    Completed,
    /// Onboarding was explicitly paused.
    Paused,
}

impl EmployeeStatus {
    /// Every status, in display order.
    pub const ALL: [Self; 3] = [Self::InProgress, Self::Completed, Self::Paused];

    /// Returns the canonical representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Paused => "paused",
        }
    }
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for EmployeeStatus {
    type Error = ParseEmployeeStatusError;

    /// Accepts the canonical form as well as display labels such as
    /// `In Progress`, case-insensitively.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "paused" => Ok(Self::Paused),
            _ => Err(ParseEmployeeStatusError(value.to_owned())),
        }
    }
}

/// Result of a progress recomputation over a task set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSnapshot {
    progress: Progress,
    completed_tasks: usize,
    total_tasks: usize,
}

impl ProgressSnapshot {
    /// Returns the rounded completion percentage.
    #[must_use]
    pub const fn progress(&self) -> Progress {
        self.progress
    }

    /// Returns how many tasks are complete.
    #[must_use]
    pub const fn completed_tasks(&self) -> usize {
        self.completed_tasks
    }

    /// Returns the size of the task set.
    #[must_use]
    pub const fn total_tasks(&self) -> usize {
        self.total_tasks
    }

    /// Returns the status derivable from tasks alone.
    ///
    /// This is never [`EmployeeStatus::Paused`]; see [`Self::status_with`].
    #[must_use]
    pub const fn status(&self) -> EmployeeStatus {
        if self.progress.is_complete() {
            EmployeeStatus::Completed
        } else {
            EmployeeStatus::InProgress
        }
    }

    /// Returns the status once the explicit pause flag is applied.
    ///
    /// The pause flag wins over completion.
    #[must_use]
    pub const fn status_with(&self, paused: bool) -> EmployeeStatus {
        if paused {
            EmployeeStatus::Paused
        } else {
            self.status()
        }
    }
}

/// Recomputes progress for a task set.
///
/// An empty task set yields progress 0 and [`EmployeeStatus::InProgress`].
#[must_use]
pub fn recompute(tasks: &[Task]) -> ProgressSnapshot {
    let completed_tasks = tasks.iter().filter(|task| task.is_completed()).count();
    let total_tasks = tasks.len();
    ProgressSnapshot {
        progress: Progress::from_counts(completed_tasks, total_tasks),
        completed_tasks,
        total_tasks,
    }
}

/// Divides with round-half-up semantics, returning 0 for a zero divisor.
pub(crate) fn round_half_up(numerator: u64, denominator: u64) -> u64 {
    numerator
        .saturating_mul(2)
        .saturating_add(denominator)
        .checked_div(denominator.saturating_mul(2))
        .unwrap_or(0)
}

pub(crate) fn widen(value: usize) -> u64 {
    u64::try_from(value).unwrap_or(u64::MAX)
}
