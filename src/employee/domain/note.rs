//! HR notes attached to an employee record.

use super::{EmployeeDomainError, NoteId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Free-text note written by HR or a manager about an employee's onboarding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "NoteRecord")]
pub struct EmployeeNote {
    id: NoteId,
    author: String,
    content: String,
    created_at: DateTime<Utc>,
}

#[derive(Deserialize)]
struct NoteRecord {
    id: NoteId,
    author: String,
    content: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<NoteRecord> for EmployeeNote {
    type Error = EmployeeDomainError;

    fn try_from(record: NoteRecord) -> Result<Self, Self::Error> {
        let (author, content) = validated_text(&record.author, record.content)?;
        Ok(Self {
            id: record.id,
            author,
            content,
            created_at: record.created_at,
        })
    }
}

fn validated_text(author: &str, content: String) -> Result<(String, String), EmployeeDomainError> {
    if author.trim().is_empty() {
        return Err(EmployeeDomainError::EmptyNoteAuthor);
    }
    if content.trim().is_empty() {
        return Err(EmployeeDomainError::EmptyNoteContent);
    }
    Ok((author.trim().to_owned(), content))
}

impl EmployeeNote {
    /// Creates a validated note stamped with the current clock time.
    ///
    /// # Errors
    ///
    /// Returns [`EmployeeDomainError::EmptyNoteAuthor`] or
    /// [`EmployeeDomainError::EmptyNoteContent`] when either value is blank.
    pub fn new(
        author: impl Into<String>,
        content: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Self, EmployeeDomainError> {
        let raw_author: String = author.into();
        let (author_text, content_text) = validated_text(&raw_author, content.into())?;
        Ok(Self {
            id: NoteId::new(),
            author: author_text,
            content: content_text,
            created_at: clock.utc(),
        })
    }

    /// Returns the note identifier.
    #[must_use]
    pub const fn id(&self) -> NoteId {
        self.id
    }

    /// Returns the author name.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the note body.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns when the note was written.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
