use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Storage-assigned player identity. Always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct PlayerId(i64);

impl PlayerId {
    pub fn new(raw: i64) -> Result<Self, DomainError> {
        if raw <= 0 {
            return Err(DomainError::invalid_id(format!(
                "Player id must be positive, got {raw}"
            )));
        }
        Ok(Self(raw))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for PlayerId {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PlayerId> for i64 {
    fn from(value: PlayerId) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_ids_are_accepted() {
        let id = PlayerId::new(42).unwrap();
        assert_eq!(id.get(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn zero_and_negative_ids_are_rejected() {
        assert!(matches!(PlayerId::new(0), Err(DomainError::InvalidId(_))));
        assert!(matches!(PlayerId::new(-7), Err(DomainError::InvalidId(_))));
    }

    #[test]
    fn deserializing_a_non_positive_id_fails() {
        assert!(serde_json::from_str::<PlayerId>("0").is_err());
        let id: PlayerId = serde_json::from_str("3").unwrap();
        assert_eq!(id.get(), 3);
    }
}
