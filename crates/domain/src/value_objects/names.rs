//! Validated name newtypes for players
//!
//! These newtypes ensure that names are valid by construction. Lengths are
//! counted in characters, not bytes. Values are stored exactly as supplied.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length of a player name
pub const MAX_NAME_LENGTH: usize = 12;

/// Maximum length of a player title
pub const MAX_TITLE_LENGTH: usize = 30;

// ============================================================================
// PlayerName
// ============================================================================

/// A validated player name (non-blank, <=12 chars)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerName(String);

impl PlayerName {
    /// Create a new validated player name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The name is empty or only whitespace
    /// - The name exceeds 12 characters
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("Player name cannot be empty"));
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Player name cannot exceed {} characters",
                MAX_NAME_LENGTH
            )));
        }
        Ok(Self(name))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for PlayerName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<PlayerName> for String {
    fn from(name: PlayerName) -> String {
        name.0
    }
}

// ============================================================================
// PlayerTitle
// ============================================================================

/// A validated player title (<=30 chars, may be empty)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerTitle(String);

impl PlayerTitle {
    /// Create a new validated title.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the title exceeds 30 characters.
    pub fn new(title: impl Into<String>) -> Result<Self, DomainError> {
        let title = title.into();
        if title.chars().count() > MAX_TITLE_LENGTH {
            return Err(DomainError::validation(format!(
                "Player title cannot exceed {} characters",
                MAX_TITLE_LENGTH
            )));
        }
        Ok(Self(title))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for PlayerTitle {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<PlayerTitle> for String {
    fn from(title: PlayerTitle) -> String {
        title.0
    }
}
