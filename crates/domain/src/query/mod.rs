//! Filtering, ordering and paging of player collections.

mod criteria;
mod paging;

pub use criteria::{Condition, PlayerFilter, SearchCriteria};
pub use paging::{Page, PageSpec, PlayerOrder, SortDirection, DEFAULT_PAGE_SIZE};
