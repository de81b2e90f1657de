//! Create/update payloads and their validation.
//!
//! A [`PlayerPayload`] is what a caller sends. [`PlayerPayload::validate`]
//! checks every supplied attribute and yields [`PlayerChanges`], which can
//! then either become a [`NewPlayer`] (all attributes required) or be applied
//! on top of an existing [`Player`].

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::entities::{NewPlayer, Player};
use crate::error::DomainError;
use crate::types::{Profession, Race};
use crate::value_objects::{Field, PlayerName, PlayerTitle, Progress};

/// Raw create/update body.
///
/// Keys outside this set (`id`, `level`, `untilNextLevel`) are ignored: the
/// identity comes from storage and the level data is always derived.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerPayload {
    pub name: Field<String>,
    pub title: Field<String>,
    pub race: Field<Race>,
    pub profession: Field<Profession>,
    /// Epoch milliseconds
    pub birthday: Field<i64>,
    /// `null` counts as not supplied, so a create defaults it to `false`
    #[serde(deserialize_with = "Field::nullable")]
    pub banned: Field<bool>,
    pub experience: Field<i64>,
}

impl PlayerPayload {
    /// Check every supplied attribute against its constraints.
    pub fn validate(self) -> Result<PlayerChanges, DomainError> {
        Ok(PlayerChanges {
            name: self.name.try_map(PlayerName::new)?,
            title: self.title.try_map(PlayerTitle::new)?,
            race: self.race,
            profession: self.profession,
            birthday: self.birthday.try_map(birthday_from_millis)?,
            banned: self.banned,
            progress: self.experience.try_map(Progress::from_experience)?,
        })
    }

    /// Validate a create request: every attribute except `banned` is required.
    pub fn into_new_player(self) -> Result<NewPlayer, DomainError> {
        self.validate()?.into_new_player()
    }
}

/// A payload whose supplied attributes have all passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerChanges {
    pub name: Field<PlayerName>,
    pub title: Field<PlayerTitle>,
    pub race: Field<Race>,
    pub profession: Field<Profession>,
    pub birthday: Field<DateTime<Utc>>,
    pub banned: Field<bool>,
    pub progress: Field<Progress>,
}

impl PlayerChanges {
    pub fn into_new_player(self) -> Result<NewPlayer, DomainError> {
        Ok(NewPlayer {
            name: self.name.required("name")?,
            title: self.title.required("title")?,
            race: self.race.required("race")?,
            profession: self.profession.required("profession")?,
            birthday: self.birthday.required("birthday")?,
            banned: self.banned.into_option().unwrap_or(false),
            progress: self.progress.required("experience")?,
        })
    }

    /// Overlay the supplied attributes on `existing`.
    ///
    /// Level and until-next-level travel with experience inside
    /// [`Progress`], so they change exactly when experience was supplied.
    pub fn apply_to(self, mut existing: Player) -> Player {
        self.name.apply_to(&mut existing.name);
        self.title.apply_to(&mut existing.title);
        self.race.apply_to(&mut existing.race);
        self.profession.apply_to(&mut existing.profession);
        self.birthday.apply_to(&mut existing.birthday);
        self.banned.apply_to(&mut existing.banned);
        self.progress.apply_to(&mut existing.progress);
        existing
    }

    pub fn is_empty(&self) -> bool {
        !(self.name.is_set()
            || self.title.is_set()
            || self.race.is_set()
            || self.profession.is_set()
            || self.birthday.is_set()
            || self.banned.is_set()
            || self.progress.is_set())
    }
}

/// Convert epoch milliseconds into a birthday. Negative values are rejected.
pub fn birthday_from_millis(millis: i64) -> Result<DateTime<Utc>, DomainError> {
    if millis < 0 {
        return Err(DomainError::validation(format!(
            "Birthday must not be before the epoch, got {millis}"
        )));
    }
    DateTime::from_timestamp_millis(millis).ok_or_else(|| {
        DomainError::validation(format!("Birthday {millis} is out of range"))
    })
}
