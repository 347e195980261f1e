//! Session-scoped context holding both registries. A session is created when
//! the app starts and everything it holds is discarded when it is dropped.

use anyhow::Result;
use rusqlite::Connection;
use tracing::info;

use crate::db::open_session_store;
use crate::registry::{ArtistRegistry, Registry, VenueRegistry};
use crate::stats::{compute_stats, StatsReport};

pub struct Session {
    conn: Connection,
}

impl Session {
    /// Start an empty session backed by a private in-memory store.
    pub fn open() -> Result<Self> {
        let conn = open_session_store()?;
        info!("session opened");
        Ok(Self { conn })
    }

    pub fn artists(&self) -> ArtistRegistry<'_> {
        ArtistRegistry::new(&self.conn)
    }

    pub fn venues(&self) -> VenueRegistry<'_> {
        VenueRegistry::new(&self.conn)
    }

    /// Recompute every aggregate from the current tables.
    pub fn statistics(&self) -> Result<StatsReport> {
        compute_stats(&self.conn)
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        let artists = self.artists().count().unwrap_or_default();
        let venues = self.venues().count().unwrap_or_default();
        info!(artists, venues, "session closed, discarding registries");
    }
}
