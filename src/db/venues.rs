use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use crate::models::{VenueDraft, VenueFilter, VenueProfile, Zone};

/// Append a venue row and echo it back with its new id.
pub fn insert_venue(conn: &Connection, draft: &VenueDraft) -> Result<VenueProfile> {
    conn.execute(
        "INSERT INTO venues (name, zone, address, contact, social)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            draft.name,
            draft.zone,
            draft.address,
            draft.contact,
            draft.social,
        ],
    )
    .context("failed to insert venue")?;

    let id = conn.last_insert_rowid();
    Ok(VenueProfile {
        id,
        name: draft.name.clone(),
        zone: draft.zone,
        address: draft.address.clone(),
        contact: draft.contact.clone(),
        social: draft.social.clone(),
        rating: 0.0,
        reviews: String::new(),
    })
}

/// Fetch venues in insertion order, optionally restricted to one zone.
pub fn fetch_venues(conn: &Connection, filter: &VenueFilter) -> Result<Vec<VenueProfile>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, name, zone, address, contact, social, rating, reviews
             FROM venues
             WHERE (?1 IS NULL OR zone = ?1)
             ORDER BY id",
        )
        .context("failed to prepare venue query")?;

    let venues = stmt
        .query_map(params![filter.zone], |row| {
            Ok(VenueProfile {
                id: row.get(0)?,
                name: row.get(1)?,
                zone: row.get(2)?,
                address: row.get(3)?,
                contact: row.get(4)?,
                social: row.get(5)?,
                rating: row.get(6)?,
                reviews: row.get(7)?,
            })
        })
        .context("failed to iterate venues")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect venues")?;

    Ok(venues)
}

pub fn count_venues(conn: &Connection) -> Result<usize> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM venues", [], |row| row.get(0))
        .context("failed to count venues")?;
    Ok(count as usize)
}

/// Zones that occur among venues, ordered by first registration.
pub fn fetch_venue_zones(conn: &Connection) -> Result<Vec<Zone>> {
    let mut stmt = conn
        .prepare(
            "SELECT zone FROM venues
             GROUP BY zone
             ORDER BY MIN(id)",
        )
        .context("failed to prepare venue zone query")?;

    let mut rows = stmt.query([]).context("failed to execute venue zone query")?;

    let mut zones = Vec::new();
    while let Some(row) = rows.next().context("failed to fetch venue zone row")? {
        let zone: Zone = row.get(0).context("failed to read venue zone value")?;
        zones.push(zone);
    }

    Ok(zones)
}
