//! Player entity
//!
//! A player is a registered character with a name, a title, a race and a
//! profession, plus experience-driven progression. Identity is assigned by
//! storage: an unsaved player is a [`NewPlayer`] and only becomes a
//! [`Player`] once it has an id.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::ids::PlayerId;
use crate::types::{Profession, Race};
use crate::value_objects::{PlayerName, PlayerTitle, Progress};

/// A persisted player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: PlayerName,
    pub title: PlayerTitle,
    pub race: Race,
    pub profession: Profession,
    /// Serialized as epoch milliseconds
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub birthday: DateTime<Utc>,
    pub banned: bool,
    /// Experience, level and until-next-level, flattened on the wire
    #[serde(flatten)]
    pub progress: Progress,
}

impl Player {
    pub fn experience(&self) -> u32 {
        self.progress.experience()
    }

    pub fn level(&self) -> u32 {
        self.progress.level()
    }

    pub fn until_next_level(&self) -> u32 {
        self.progress.until_next_level()
    }
}

/// A validated player that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlayer {
    pub name: PlayerName,
    pub title: PlayerTitle,
    pub race: Race,
    pub profession: Profession,
    pub birthday: DateTime<Utc>,
    pub banned: bool,
    pub progress: Progress,
}

impl NewPlayer {
    /// Attach the storage-assigned identity.
    pub fn with_id(self, id: PlayerId) -> Player {
        Player {
            id,
            name: self.name,
            title: self.title,
            race: self.race,
            profession: self.profession,
            birthday: self.birthday,
            banned: self.banned,
            progress: self.progress,
        }
    }
}
