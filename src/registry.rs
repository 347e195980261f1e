//! The shared shape of the artist and venue tables: append, filtered read and
//! count. Each registry borrows the session's connection, so both kinds of
//! profile live in the same private store.

use anyhow::Result;
use rusqlite::Connection;
use tracing::{debug, info};

use crate::db::{
    count_artists, count_venues, fetch_artist_professions, fetch_artist_zones, fetch_artists,
    fetch_venue_zones, fetch_venues, insert_artist, insert_venue,
};
use crate::models::{
    ArtistDraft, ArtistFilter, ArtistProfile, Profession, VenueDraft, VenueFilter, VenueProfile,
    Zone,
};

pub trait Registry {
    type Profile;
    type Draft;
    type Filter;

    /// Append a profile built from `draft`, stored exactly as given. An empty
    /// name is the only rejected input: nothing is stored and `None` comes
    /// back.
    fn register(&self, draft: &Self::Draft) -> Result<Option<Self::Profile>>;

    /// Profiles matching every set filter, in insertion order.
    fn list_filtered(&self, filter: &Self::Filter) -> Result<Vec<Self::Profile>>;

    fn count(&self) -> Result<usize>;
}

#[derive(Clone, Copy)]
pub struct ArtistRegistry<'a> {
    conn: &'a Connection,
}

impl<'a> ArtistRegistry<'a> {
    pub(crate) fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Professions present in the table, in order of first appearance.
    pub fn professions(&self) -> Result<Vec<Profession>> {
        fetch_artist_professions(self.conn)
    }

    /// Zones present among artists, in order of first appearance.
    pub fn zones(&self) -> Result<Vec<Zone>> {
        fetch_artist_zones(self.conn)
    }
}

impl Registry for ArtistRegistry<'_> {
    type Profile = ArtistProfile;
    type Draft = ArtistDraft;
    type Filter = ArtistFilter;

    fn register(&self, draft: &ArtistDraft) -> Result<Option<ArtistProfile>> {
        if draft.name.is_empty() {
            debug!("skipping artist registration with empty name");
            return Ok(None);
        }
        let artist = insert_artist(self.conn, draft)?;
        info!(id = artist.id, name = %artist.name, profession = %artist.profession, "registered artist");
        Ok(Some(artist))
    }

    fn list_filtered(&self, filter: &ArtistFilter) -> Result<Vec<ArtistProfile>> {
        let artists = fetch_artists(self.conn, filter)?;
        debug!(?filter, matches = artists.len(), "filtered artists");
        Ok(artists)
    }

    fn count(&self) -> Result<usize> {
        count_artists(self.conn)
    }
}

#[derive(Clone, Copy)]
pub struct VenueRegistry<'a> {
    conn: &'a Connection,
}

impl<'a> VenueRegistry<'a> {
    pub(crate) fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn zones(&self) -> Result<Vec<Zone>> {
        fetch_venue_zones(self.conn)
    }
}

impl Registry for VenueRegistry<'_> {
    type Profile = VenueProfile;
    type Draft = VenueDraft;
    type Filter = VenueFilter;

    fn register(&self, draft: &VenueDraft) -> Result<Option<VenueProfile>> {
        if draft.name.is_empty() {
            debug!("skipping venue registration with empty name");
            return Ok(None);
        }
        let venue = insert_venue(self.conn, draft)?;
        info!(id = venue.id, name = %venue.name, zone = %venue.zone, "registered venue");
        Ok(Some(venue))
    }

    fn list_filtered(&self, filter: &VenueFilter) -> Result<Vec<VenueProfile>> {
        let venues = fetch_venues(self.conn, filter)?;
        debug!(?filter, matches = venues.len(), "filtered venues");
        Ok(venues)
    }

    fn count(&self) -> Result<usize> {
        count_venues(self.conn)
    }
}
