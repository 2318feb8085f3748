//! Resource managers: thin endpoint groupings borrowing the client.
//!
//! Each manager wraps one family of endpoints, forwarding optional query
//! parameters and feeding fetched structures into the client's identity
//! cache. `get` methods take a `force` flag: when false a cached object is
//! returned without network traffic, when true the fetch always happens and
//! refreshes the cache entry.

pub mod albums;
pub mod artists;
pub mod episodes;
pub mod playlists;
pub mod search;
pub mod shows;
pub mod tracks;
pub mod users;

pub use albums::Albums;
pub use artists::Artists;
pub use episodes::Episodes;
pub use playlists::Playlists;
pub use search::Search;
pub use shows::Shows;
pub use tracks::Tracks;
pub use users::Users;
