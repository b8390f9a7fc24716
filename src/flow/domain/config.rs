//! Typed per-block configuration for flow blueprints.
//!
//! Each block type has exactly one configuration shape, validated when it is
//! constructed or deserialized. The block type of a blueprint is read off its
//! configuration, so the two cannot disagree.

use super::FlowDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of flow block an administrator can place in a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockType {
    /// Send an email.
    Email,
    /// Collect documents.
    Document,
    /// Book a meeting.
    Meeting,
    /// Provision systems.
    Setup,
    /// Assign an onboarding buddy.
    Buddy,
}

impl BlockType {
    /// Returns the canonical representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Document => "document",
            Self::Meeting => "meeting",
            Self::Setup => "setup",
            Self::Buddy => "buddy",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for an email block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawEmailConfig")]
pub struct EmailConfig {
    subject: String,
    template: String,
}

#[derive(Deserialize)]
struct RawEmailConfig {
    subject: String,
    template: String,
}

impl TryFrom<RawEmailConfig> for EmailConfig {
    type Error = FlowDomainError;

    fn try_from(raw: RawEmailConfig) -> Result<Self, Self::Error> {
        Self::new(raw.subject, raw.template)
    }
}

impl EmailConfig {
    /// Creates a validated email configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FlowDomainError::InvalidBlockConfig`] when the subject or
    /// template name is blank.
    pub fn new(
        subject: impl Into<String>,
        template: impl Into<String>,
    ) -> Result<Self, FlowDomainError> {
        let subject_value = required_text(subject.into(), BlockType::Email, "subject is blank")?;
        let template_value =
            required_text(template.into(), BlockType::Email, "template name is blank")?;
        Ok(Self {
            subject: subject_value,
            template: template_value,
        })
    }

    /// Returns the email subject line.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Returns the name of the email template.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }
}

/// Configuration for a document collection block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDocumentConfig")]
pub struct DocumentConfig {
    documents: Vec<String>,
}

#[derive(Deserialize)]
struct RawDocumentConfig {
    documents: Vec<String>,
}

impl TryFrom<RawDocumentConfig> for DocumentConfig {
    type Error = FlowDomainError;

    fn try_from(raw: RawDocumentConfig) -> Result<Self, Self::Error> {
        Self::new(raw.documents)
    }
}

impl DocumentConfig {
    /// Creates a validated document list.
    ///
    /// # Errors
    ///
    /// Returns [`FlowDomainError::InvalidBlockConfig`] when the list is empty
    /// or contains a blank name.
    pub fn new<I, S>(documents: I) -> Result<Self, FlowDomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            documents: required_list(documents, BlockType::Document)?,
        })
    }

    /// Returns the documents to collect.
    #[must_use]
    pub fn documents(&self) -> &[String] {
        &self.documents
    }
}

/// Configuration for a meeting block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMeetingConfig")]
pub struct MeetingConfig {
    duration_minutes: u32,
    kind: String,
}

#[derive(Deserialize)]
struct RawMeetingConfig {
    duration_minutes: u32,
    kind: String,
}

impl TryFrom<RawMeetingConfig> for MeetingConfig {
    type Error = FlowDomainError;

    fn try_from(raw: RawMeetingConfig) -> Result<Self, Self::Error> {
        Self::new(raw.duration_minutes, raw.kind)
    }
}

impl MeetingConfig {
    /// Creates a validated meeting configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FlowDomainError::InvalidBlockConfig`] when the duration is
    /// zero or the meeting kind is blank.
    pub fn new(duration_minutes: u32, kind: impl Into<String>) -> Result<Self, FlowDomainError> {
        if duration_minutes == 0 {
            return Err(FlowDomainError::InvalidBlockConfig {
                block_type: BlockType::Meeting,
                reason: "duration must be at least one minute",
            });
        }
        let kind_value = required_text(kind.into(), BlockType::Meeting, "meeting kind is blank")?;
        Ok(Self {
            duration_minutes,
            kind: kind_value,
        })
    }

    /// Returns the meeting length in minutes.
    #[must_use]
    pub const fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    /// Returns the meeting kind, e.g. `intro`.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }
}

/// Configuration for a systems setup block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSetupConfig")]
pub struct SetupConfig {
    systems: Vec<String>,
}

#[derive(Deserialize)]
struct RawSetupConfig {
    systems: Vec<String>,
}

impl TryFrom<RawSetupConfig> for SetupConfig {
    type Error = FlowDomainError;

    fn try_from(raw: RawSetupConfig) -> Result<Self, Self::Error> {
        Self::new(raw.systems)
    }
}

impl SetupConfig {
    /// Creates a validated systems list.
    ///
    /// # Errors
    ///
    /// Returns [`FlowDomainError::InvalidBlockConfig`] when the list is empty
    /// or contains a blank name.
    pub fn new<I, S>(systems: I) -> Result<Self, FlowDomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            systems: required_list(systems, BlockType::Setup)?,
        })
    }

    /// Returns the systems to provision.
    #[must_use]
    pub fn systems(&self) -> &[String] {
        &self.systems
    }
}

/// Configuration for a buddy assignment block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBuddyConfig")]
pub struct BuddyConfig {
    same_department: bool,
    duration_weeks: u32,
}

#[derive(Deserialize)]
struct RawBuddyConfig {
    same_department: bool,
    duration_weeks: u32,
}

impl TryFrom<RawBuddyConfig> for BuddyConfig {
    type Error = FlowDomainError;

    fn try_from(raw: RawBuddyConfig) -> Result<Self, Self::Error> {
        Self::new(raw.same_department, raw.duration_weeks)
    }
}

impl BuddyConfig {
    /// Creates a validated buddy configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FlowDomainError::InvalidBlockConfig`] when the pairing lasts
    /// zero weeks.
    pub const fn new(same_department: bool, duration_weeks: u32) -> Result<Self, FlowDomainError> {
        if duration_weeks == 0 {
            return Err(FlowDomainError::InvalidBlockConfig {
                block_type: BlockType::Buddy,
                reason: "pairing must last at least one week",
            });
        }
        Ok(Self {
            same_department,
            duration_weeks,
        })
    }

    /// Returns whether the buddy comes from the employee's department.
    #[must_use]
    pub const fn same_department(&self) -> bool {
        self.same_department
    }

    /// Returns the pairing length in weeks.
    #[must_use]
    pub const fn duration_weeks(&self) -> u32 {
        self.duration_weeks
    }
}

/// Configuration of a flow block, one shape per block type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockConfig {
    /// Email block settings.
    Email(EmailConfig),
    /// Document block settings.
    Document(DocumentConfig),
    /// Meeting block settings.
    Meeting(MeetingConfig),
    /// Setup block settings.
    Setup(SetupConfig),
    /// Buddy block settings.
    Buddy(BuddyConfig),
}

impl BlockConfig {
    /// Returns the block type this configuration belongs to.
    #[must_use]
    pub const fn block_type(&self) -> BlockType {
        match self {
            Self::Email(_) => BlockType::Email,
            Self::Document(_) => BlockType::Document,
            Self::Meeting(_) => BlockType::Meeting,
            Self::Setup(_) => BlockType::Setup,
            Self::Buddy(_) => BlockType::Buddy,
        }
    }
}

impl From<EmailConfig> for BlockConfig {
    fn from(config: EmailConfig) -> Self {
        Self::Email(config)
    }
}

impl From<DocumentConfig> for BlockConfig {
    fn from(config: DocumentConfig) -> Self {
        Self::Document(config)
    }
}

impl From<MeetingConfig> for BlockConfig {
    fn from(config: MeetingConfig) -> Self {
        Self::Meeting(config)
    }
}

impl From<SetupConfig> for BlockConfig {
    fn from(config: SetupConfig) -> Self {
        Self::Setup(config)
    }
}

impl From<BuddyConfig> for BlockConfig {
    fn from(config: BuddyConfig) -> Self {
        Self::Buddy(config)
    }
}

fn required_text(
    value: String,
    block_type: BlockType,
    reason: &'static str,
) -> Result<String, FlowDomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FlowDomainError::InvalidBlockConfig { block_type, reason });
    }
    Ok(trimmed.to_owned())
}

fn required_list<I, S>(values: I, block_type: BlockType) -> Result<Vec<String>, FlowDomainError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let items = values
        .into_iter()
        .map(|value| required_text(value.into(), block_type, "list contains a blank entry"))
        .collect::<Result<Vec<_>, _>>()?;
    if items.is_empty() {
        return Err(FlowDomainError::InvalidBlockConfig {
            block_type,
            reason: "list must not be empty",
        });
    }
    Ok(items)
}
