//! Search criteria and the predicate built from them.
//!
//! [`SearchCriteria`] mirrors what a caller can ask for; every field is
//! optional and an absent field means "no constraint". [`SearchCriteria::to_filter`]
//! turns the supplied fields into a [`PlayerFilter`]: a flat list of
//! [`Condition`]s joined with AND. The filter is a plain value so storage
//! adapters can either evaluate it in memory or render it into a query.

use chrono::{DateTime, Utc};

use crate::entities::Player;
use crate::types::{Profession, Race};

/// Optional search constraints over players.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub name: Option<String>,
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    /// Inclusive lower bound on birthday
    pub after: Option<DateTime<Utc>>,
    /// Inclusive upper bound on birthday
    pub before: Option<DateTime<Utc>>,
    pub banned: Option<bool>,
    pub min_experience: Option<i64>,
    pub max_experience: Option<i64>,
    pub min_level: Option<i64>,
    pub max_level: Option<i64>,
}

impl SearchCriteria {
    /// Build the AND-combined predicate for the supplied fields.
    pub fn to_filter(&self) -> PlayerFilter {
        let candidates = [
            self.name.clone().map(Condition::NameContains),
            self.title.clone().map(Condition::TitleContains),
            self.race.map(Condition::RaceIs),
            self.profession.map(Condition::ProfessionIs),
            self.after.map(Condition::BornOnOrAfter),
            self.before.map(Condition::BornOnOrBefore),
            self.banned.map(Condition::BannedIs),
            self.min_experience.map(Condition::ExperienceAtLeast),
            self.max_experience.map(Condition::ExperienceAtMost),
            self.min_level.map(Condition::LevelAtLeast),
            self.max_level.map(Condition::LevelAtMost),
        ];

        candidates
            .into_iter()
            .flatten()
            .fold(PlayerFilter::all(), PlayerFilter::and)
    }
}

/// A single field/operator/value test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// Case-sensitive substring of the name
    NameContains(String),
    /// Case-sensitive substring of the title
    TitleContains(String),
    RaceIs(Race),
    ProfessionIs(Profession),
    BornOnOrAfter(DateTime<Utc>),
    BornOnOrBefore(DateTime<Utc>),
    BannedIs(bool),
    ExperienceAtLeast(i64),
    ExperienceAtMost(i64),
    LevelAtLeast(i64),
    LevelAtMost(i64),
}

impl Condition {
    pub fn matches(&self, player: &Player) -> bool {
        match self {
            Condition::NameContains(needle) => player.name.as_str().contains(needle.as_str()),
            Condition::TitleContains(needle) => player.title.as_str().contains(needle.as_str()),
            Condition::RaceIs(race) => player.race == *race,
            Condition::ProfessionIs(profession) => player.profession == *profession,
            Condition::BornOnOrAfter(after) => player.birthday >= *after,
            Condition::BornOnOrBefore(before) => player.birthday <= *before,
            Condition::BannedIs(banned) => player.banned == *banned,
            Condition::ExperienceAtLeast(min) => i64::from(player.experience()) >= *min,
            Condition::ExperienceAtMost(max) => i64::from(player.experience()) <= *max,
            Condition::LevelAtLeast(min) => i64::from(player.level()) >= *min,
            Condition::LevelAtMost(max) => i64::from(player.level()) <= *max,
        }
    }
}

/// Conjunction of conditions. An empty filter matches every player.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerFilter {
    conditions: Vec<Condition>,
}

impl PlayerFilter {
    /// The always-true filter.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn and(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn is_unconstrained(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn matches(&self, player: &Player) -> bool {
        self.conditions.iter().all(|condition| condition.matches(player))
    }
}
