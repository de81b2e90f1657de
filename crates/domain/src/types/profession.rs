//! Player professions.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The profession a player follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Profession {
    Warrior,
    Rogue,
    Sorcerer,
    Cleric,
    Paladin,
    Nazgul,
    Warlock,
    Druid,
}

impl Profession {
    pub fn all() -> &'static [Profession] {
        &[
            Profession::Warrior,
            Profession::Rogue,
            Profession::Sorcerer,
            Profession::Cleric,
            Profession::Paladin,
            Profession::Nazgul,
            Profession::Warlock,
            Profession::Druid,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Profession::Warrior => "WARRIOR",
            Profession::Rogue => "ROGUE",
            Profession::Sorcerer => "SORCERER",
            Profession::Cleric => "CLERIC",
            Profession::Paladin => "PALADIN",
            Profession::Nazgul => "NAZGUL",
            Profession::Warlock => "WARLOCK",
            Profession::Druid => "DRUID",
        }
    }
}

impl fmt::Display for Profession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Profession {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Profession::all()
            .iter()
            .copied()
            .find(|profession| profession.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::parse(format!("Unknown profession: {s}")))
    }
}
