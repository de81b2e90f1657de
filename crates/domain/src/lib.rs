//! Questlog domain: the player model and everything that can be decided
//! about players without touching storage.
//!
//! - `entities` - [`Player`] and the unsaved [`NewPlayer`]
//! - `value_objects` - validated names, [`Progress`] and the [`Field`] wrapper
//! - `payload` - create/update validation and derivation
//! - `query` - search criteria, filters, ordering and paging

pub mod entities;
pub mod error;
pub mod ids;
pub mod payload;
pub mod query;
pub mod types;
pub mod value_objects;

pub use entities::{NewPlayer, Player};
pub use error::DomainError;
pub use ids::PlayerId;
pub use payload::{birthday_from_millis, PlayerChanges, PlayerPayload};
pub use query::{
    Condition, Page, PageSpec, PlayerFilter, PlayerOrder, SearchCriteria, SortDirection,
    DEFAULT_PAGE_SIZE,
};
pub use types::{Profession, Race};
pub use value_objects::{
    level_for, until_next_level, Field, PlayerName, PlayerTitle, Progress, MAX_EXPERIENCE,
    MAX_NAME_LENGTH, MAX_TITLE_LENGTH,
};
