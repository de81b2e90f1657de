//! Value objects: validated fields and derived progression.

mod field;
mod names;
mod progression;

pub use field::Field;
pub use names::{PlayerName, PlayerTitle, MAX_NAME_LENGTH, MAX_TITLE_LENGTH};
pub use progression::{level_for, until_next_level, Progress, MAX_EXPERIENCE};
