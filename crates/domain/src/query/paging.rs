//! Ordering and slicing of filtered players.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entities::Player;
use crate::error::DomainError;

/// Page size used when the caller does not ask for one
pub const DEFAULT_PAGE_SIZE: u32 = 3;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }

    /// Orient an ascending comparison.
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

impl FromStr for SortDirection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ASC" => Ok(SortDirection::Asc),
            "DESC" => Ok(SortDirection::Desc),
            _ => Err(DomainError::parse(format!("Unknown sort direction: {s}"))),
        }
    }
}

/// The player field a listing is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerOrder {
    #[default]
    Id,
    Name,
    Title,
    Race,
    Profession,
    Birthday,
    Banned,
    Experience,
    Level,
    UntilNextLevel,
}

impl PlayerOrder {
    pub fn all() -> &'static [PlayerOrder] {
        &[
            PlayerOrder::Id,
            PlayerOrder::Name,
            PlayerOrder::Title,
            PlayerOrder::Race,
            PlayerOrder::Profession,
            PlayerOrder::Birthday,
            PlayerOrder::Banned,
            PlayerOrder::Experience,
            PlayerOrder::Level,
            PlayerOrder::UntilNextLevel,
        ]
    }

    /// Field name as it appears in the JSON representation.
    pub fn field_name(&self) -> &'static str {
        match self {
            PlayerOrder::Id => "id",
            PlayerOrder::Name => "name",
            PlayerOrder::Title => "title",
            PlayerOrder::Race => "race",
            PlayerOrder::Profession => "profession",
            PlayerOrder::Birthday => "birthday",
            PlayerOrder::Banned => "banned",
            PlayerOrder::Experience => "experience",
            PlayerOrder::Level => "level",
            PlayerOrder::UntilNextLevel => "untilNextLevel",
        }
    }

    /// Ascending comparison of two players on this field.
    ///
    /// Enumerations compare by their stored string form so in-memory and
    /// SQL orderings agree.
    pub fn compare(&self, a: &Player, b: &Player) -> Ordering {
        match self {
            PlayerOrder::Id => a.id.cmp(&b.id),
            PlayerOrder::Name => a.name.as_str().cmp(b.name.as_str()),
            PlayerOrder::Title => a.title.as_str().cmp(b.title.as_str()),
            PlayerOrder::Race => a.race.as_str().cmp(b.race.as_str()),
            PlayerOrder::Profession => a.profession.as_str().cmp(b.profession.as_str()),
            PlayerOrder::Birthday => a.birthday.cmp(&b.birthday),
            PlayerOrder::Banned => a.banned.cmp(&b.banned),
            PlayerOrder::Experience => a.experience().cmp(&b.experience()),
            PlayerOrder::Level => a.level().cmp(&b.level()),
            PlayerOrder::UntilNextLevel => a.until_next_level().cmp(&b.until_next_level()),
        }
    }
}

impl fmt::Display for PlayerOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

impl FromStr for PlayerOrder {
    type Err = DomainError;

    /// Accepts either the field name (`untilNextLevel`) or the constant form
    /// (`UNTIL_NEXT_LEVEL`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('_', "");
        PlayerOrder::all()
            .iter()
            .copied()
            .find(|order| order.field_name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| DomainError::parse(format!("Unknown sort field: {s}")))
    }
}

/// Which page of a listing to return and how to order it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSpec {
    page_number: u32,
    page_size: u32,
    order: PlayerOrder,
    direction: SortDirection,
}

impl Default for PageSpec {
    fn default() -> Self {
        Self {
            page_number: 0,
            page_size: DEFAULT_PAGE_SIZE,
            order: PlayerOrder::default(),
            direction: SortDirection::default(),
        }
    }
}

impl PageSpec {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when `page_size` is zero.
    pub fn new(
        page_number: u32,
        page_size: u32,
        order: PlayerOrder,
        direction: SortDirection,
    ) -> Result<Self, DomainError> {
        if page_size == 0 {
            return Err(DomainError::validation("Page size must be greater than zero"));
        }
        Ok(Self {
            page_number,
            page_size,
            order,
            direction,
        })
    }

    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn order(&self) -> PlayerOrder {
        self.order
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Index of the first row of this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page_number) * u64::from(self.page_size)
    }

    /// Compare two players by the configured field and direction.
    ///
    /// Ties fall back to ascending id so repeated listings are stable.
    pub fn compare(&self, a: &Player, b: &Player) -> Ordering {
        self.direction
            .apply(self.order.compare(a, b))
            .then_with(|| a.id.cmp(&b.id))
    }

    /// Sort `players` and cut out this page, keeping the pre-slice count.
    pub fn paginate(&self, mut players: Vec<Player>) -> Page<Player> {
        let total = players.len() as u64;
        players.sort_by(|a, b| self.compare(a, b));

        let offset = usize::try_from(self.offset()).unwrap_or(usize::MAX);
        let items = players
            .into_iter()
            .skip(offset)
            .take(self.page_size as usize)
            .collect();

        Page { items, total }
    }
}

/// One page of results plus the size of the whole filtered set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::PlayerId;
    use crate::payload::PlayerPayload;
    use crate::types::{Profession, Race};
    use crate::value_objects::Field;

    fn player(id: i64, name: &str, experience: i64) -> Player {
        PlayerPayload {
            name: Field::Set(name.to_string()),
            title: Field::Set(String::new()),
            race: Field::Set(Race::Human),
            profession: Field::Set(Profession::Paladin),
            birthday: Field::Set(0),
            banned: Field::Unchanged,
            experience: Field::Set(experience),
        }
        .into_new_player()
        .unwrap()
        .with_id(PlayerId::new(id).unwrap())
    }

    fn ids(page: &Page<Player>) -> Vec<i64> {
        page.items.iter().map(|p| p.id.get()).collect()
    }

    fn roster() -> Vec<Player> {
        vec![
            player(4, "Dora", 500),
            player(1, "Ansel", 3_000),
            player(3, "Cid", 500),
            player(2, "Bree", 10),
            player(5, "Eli", 70_000),
        ]
    }

    #[test]
    fn defaults_are_first_page_of_three_by_id() {
        let spec = PageSpec::default();
        assert_eq!(spec.page_number(), 0);
        assert_eq!(spec.page_size(), 3);
        assert_eq!(spec.order(), PlayerOrder::Id);
        assert_eq!(spec.direction(), SortDirection::Asc);
        assert_eq!(ids(&spec.paginate(roster())), vec![1, 2, 3]);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        assert!(PageSpec::new(0, 0, PlayerOrder::Id, SortDirection::Asc).is_err());
    }

    #[test]
    fn second_page_holds_the_remainder() {
        let spec = PageSpec::new(1, 3, PlayerOrder::Id, SortDirection::Asc).unwrap();
        let page = spec.paginate(roster());
        assert_eq!(ids(&page), vec![4, 5]);
        assert_eq!(page.total, 5);
    }

    #[test]
    fn page_past_the_end_is_empty_but_counts_everything() {
        let spec = PageSpec::new(7, 3, PlayerOrder::Id, SortDirection::Asc).unwrap();
        let page = spec.paginate(roster());
        assert!(page.items.is_empty());
        assert_eq!(page.total, 5);
    }

    #[test]
    fn descending_experience_breaks_ties_by_id() {
        let spec = PageSpec::new(0, 10, PlayerOrder::Experience, SortDirection::Desc).unwrap();
        assert_eq!(ids(&spec.paginate(roster())), vec![5, 1, 3, 4, 2]);
    }

    #[test]
    fn sorts_by_name() {
        let spec = PageSpec::new(0, 2, PlayerOrder::Name, SortDirection::Desc).unwrap();
        assert_eq!(ids(&spec.paginate(roster())), vec![5, 4]);
    }

    #[test]
    fn order_parses_field_names_and_constants() {
        assert_eq!("level".parse::<PlayerOrder>().unwrap(), PlayerOrder::Level);
        assert_eq!(
            "UNTIL_NEXT_LEVEL".parse::<PlayerOrder>().unwrap(),
            PlayerOrder::UntilNextLevel
        );
        assert_eq!(
            "untilNextLevel".parse::<PlayerOrder>().unwrap(),
            PlayerOrder::UntilNextLevel
        );
        assert!("power".parse::<PlayerOrder>().is_err());
    }

    #[test]
    fn direction_parses_case_insensitively() {
        assert_eq!("desc".parse::<SortDirection>().unwrap(), SortDirection::Desc);
        assert!("sideways".parse::<SortDirection>().is_err());
    }
}
