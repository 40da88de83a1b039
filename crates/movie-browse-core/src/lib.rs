pub mod library;
pub mod rating;
pub mod search;
pub mod store;

pub use library::{LibraryError, WatchedLibrary, WatchedSummary};
pub use rating::StarRating;
pub use search::{SearchSession, SearchState, SearchUpdate, MIN_QUERY_LEN};
pub use store::{StoreError, WatchedStore};
