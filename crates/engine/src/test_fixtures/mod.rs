//! Common test helpers for building players.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::players;
//!
//! let frodo = players::new_player("Frodo", Race::Hobbit, 100);
//! ```

pub mod players {
    use questlog_domain::{
        Field, NewPlayer, Player, PlayerId, PlayerPayload, Profession, Race,
    };

    /// A complete create payload.
    pub fn payload(name: &str, race: Race, experience: i64) -> PlayerPayload {
        PlayerPayload {
            name: Field::Set(name.to_string()),
            title: Field::Set(format!("{name} the Bold")),
            race: Field::Set(race),
            profession: Field::Set(Profession::Warrior),
            birthday: Field::Set(1_000_000_000_000),
            banned: Field::Unchanged,
            experience: Field::Set(experience),
        }
    }

    pub fn new_player(name: &str, race: Race, experience: i64) -> NewPlayer {
        payload(name, race, experience)
            .into_new_player()
            .unwrap_or_else(|e| panic!("invalid fixture player '{name}': {e}"))
    }

    pub fn stored_player(id: i64, name: &str, race: Race, experience: i64) -> Player {
        let id = PlayerId::new(id).unwrap_or_else(|e| panic!("invalid fixture id: {e}"));
        new_player(name, race, experience).with_id(id)
    }
}
