//! Query layer over the session's in-memory SQLite store, split across logical
//! submodules.

mod artists;
mod columns;
mod connection;
mod stats;
mod venues;

pub use artists::{
    count_artists, fetch_artist_professions, fetch_artist_zones, fetch_artists, insert_artist,
};
pub use connection::open_session_store;
pub use stats::{count_artists_by_profession, count_venues_by_zone, mean_price_by_profession};
pub use venues::{count_venues, fetch_venue_zones, fetch_venues, insert_venue};
