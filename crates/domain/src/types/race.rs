//! Player races.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The race a player belongs to.
///
/// Serialized in SCREAMING_SNAKE_CASE (`"HUMAN"`, `"HOBBIT"`), which is also
/// the form persisted by the SQLite adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Race {
    Human,
    Dwarf,
    Elf,
    Giant,
    Orc,
    Troll,
    Hobbit,
}

impl Race {
    pub fn all() -> &'static [Race] {
        &[
            Race::Human,
            Race::Dwarf,
            Race::Elf,
            Race::Giant,
            Race::Orc,
            Race::Troll,
            Race::Hobbit,
        ]
    }

    /// Wire and storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Race::Human => "HUMAN",
            Race::Dwarf => "DWARF",
            Race::Elf => "ELF",
            Race::Giant => "GIANT",
            Race::Orc => "ORC",
            Race::Troll => "TROLL",
            Race::Hobbit => "HOBBIT",
        }
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Race {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Race::all()
            .iter()
            .copied()
            .find(|race| race.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::parse(format!("Unknown race: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_as_str() {
        for race in Race::all() {
            assert_eq!(race.as_str().parse::<Race>().unwrap(), *race);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("hobbit".parse::<Race>().unwrap(), Race::Hobbit);
    }

    #[test]
    fn unknown_race_is_a_parse_error() {
        let err = "DRAGON".parse::<Race>().unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
    }

    #[test]
    fn serializes_screaming_case() {
        assert_eq!(serde_json::to_string(&Race::Giant).unwrap(), "\"GIANT\"");
        let race: Race = serde_json::from_str("\"TROLL\"").unwrap();
        assert_eq!(race, Race::Troll);
    }
}
