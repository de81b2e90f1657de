//! Closed vocabularies used by the player model.

mod profession;
mod race;

pub use profession::Profession;
pub use race::Race;
