//! Employee profile input and validation.

use super::EmployeeDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Required profile attributes, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    /// Full display name.
    Name,
    /// Work email address.
    Email,
    /// Job title.
    Role,
    /// Owning department.
    Department,
    /// First working day, as supplied by the caller.
    StartDate,
    /// Direct manager.
    Manager,
}

impl ProfileField {
    /// Every profile field in the order validation reports them.
    pub const VALIDATION_ORDER: [Self; 6] = [
        Self::Name,
        Self::Email,
        Self::Role,
        Self::Department,
        Self::StartDate,
        Self::Manager,
    ];

    /// Returns the canonical field name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Role => "role",
            Self::Department => "department",
            Self::StartDate => "start_date",
            Self::Manager => "manager",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unvalidated profile payload supplied by the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileInput {
    /// Full display name.
    pub name: String,
    /// Work email address.
    pub email: String,
    /// Job title.
    pub role: String,
    /// Owning department.
    pub department: String,
    /// First working day.
    pub start_date: String,
    /// Direct manager.
    pub manager: String,
}

impl ProfileInput {
    /// Creates a profile payload from its six required attributes.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
        department: impl Into<String>,
        start_date: impl Into<String>,
        manager: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role: role.into(),
            department: department.into(),
            start_date: start_date.into(),
            manager: manager.into(),
        }
    }

    const fn field(&self, field: ProfileField) -> &String {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Email => &self.email,
            ProfileField::Role => &self.role,
            ProfileField::Department => &self.department,
            ProfileField::StartDate => &self.start_date,
            ProfileField::Manager => &self.manager,
        }
    }
}

/// Validated employee profile.
///
/// Deserialization runs the same validation as [`EmployeeProfile::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProfileInput")]
pub struct EmployeeProfile {
    name: String,
    email: String,
    role: String,
    department: String,
    start_date: String,
    manager: String,
}

impl TryFrom<ProfileInput> for EmployeeProfile {
    type Error = EmployeeDomainError;

    fn try_from(input: ProfileInput) -> Result<Self, Self::Error> {
        Self::new(&input)
    }
}

impl EmployeeProfile {
    /// Validates a profile payload.
    ///
    /// Fields are checked in [`ProfileField::VALIDATION_ORDER`] and the first
    /// failure is reported. Values are stored trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`EmployeeDomainError::MissingField`] for a blank field, or
    /// [`EmployeeDomainError::MalformedEmail`] when the email does not contain
    /// exactly one `@`.
    pub fn new(input: &ProfileInput) -> Result<Self, EmployeeDomainError> {
        for field in ProfileField::VALIDATION_ORDER {
            let value = input.field(field).trim();
            if value.is_empty() {
                return Err(EmployeeDomainError::MissingField(field));
            }
            if field == ProfileField::Email && value.matches('@').count() != 1 {
                return Err(EmployeeDomainError::MalformedEmail(input.email.clone()));
            }
        }

        Ok(Self {
            name: input.name.trim().to_owned(),
            email: input.email.trim().to_owned(),
            role: input.role.trim().to_owned(),
            department: input.department.trim().to_owned(),
            start_date: input.start_date.trim().to_owned(),
            manager: input.manager.trim().to_owned(),
        })
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the job title.
    #[must_use]
    pub fn role(&self) -> &str {
        &self.role
    }

    /// Returns the department.
    #[must_use]
    pub fn department(&self) -> &str {
        &self.department
    }

    /// Returns the start date as supplied.
    #[must_use]
    pub fn start_date(&self) -> &str {
        &self.start_date
    }

    /// Returns the manager name.
    #[must_use]
    pub fn manager(&self) -> &str {
        &self.manager
    }
}
