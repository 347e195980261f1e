use anyhow::{Context, Result};
use rusqlite::{params, Connection, Row};

use crate::models::{ArtistDraft, ArtistFilter, ArtistProfile, Profession, Zone};

const ARTIST_COLUMNS: &str =
    "id, name, profession, style, price, zone, contact, social, rating, reviews";

fn artist_from_row(row: &Row<'_>) -> rusqlite::Result<ArtistProfile> {
    Ok(ArtistProfile {
        id: row.get(0)?,
        name: row.get(1)?,
        profession: row.get(2)?,
        style: row.get(3)?,
        price: row.get(4)?,
        zone: row.get(5)?,
        contact: row.get(6)?,
        social: row.get(7)?,
        rating: row.get(8)?,
        reviews: row.get(9)?,
    })
}

/// Append an artist row. Rating and reviews always start at their defaults;
/// the hydrated struct is returned so callers do not need to re-query.
pub fn insert_artist(conn: &Connection, draft: &ArtistDraft) -> Result<ArtistProfile> {
    conn.execute(
        "INSERT INTO artists (name, profession, style, price, zone, contact, social)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            draft.name,
            draft.profession,
            draft.style,
            draft.price,
            draft.zone,
            draft.contact,
            draft.social,
        ],
    )
    .context("failed to insert artist")?;

    let id = conn.last_insert_rowid();
    Ok(ArtistProfile {
        id,
        name: draft.name.clone(),
        profession: draft.profession,
        style: draft.style.clone(),
        price: draft.price,
        zone: draft.zone,
        contact: draft.contact.clone(),
        social: draft.social.clone(),
        rating: 0.0,
        reviews: String::new(),
    })
}

/// Fetch artists matching every set filter, in insertion order. An unset
/// filter binds NULL and therefore matches all rows.
pub fn fetch_artists(conn: &Connection, filter: &ArtistFilter) -> Result<Vec<ArtistProfile>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {ARTIST_COLUMNS}
             FROM artists
             WHERE (?1 IS NULL OR profession = ?1)
               AND (?2 IS NULL OR zone = ?2)
             ORDER BY id"
        ))
        .context("failed to prepare artist query")?;

    let artists = stmt
        .query_map(params![filter.profession, filter.zone], artist_from_row)
        .context("failed to iterate artists")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect artists")?;

    Ok(artists)
}

pub fn count_artists(conn: &Connection) -> Result<usize> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM artists", [], |row| row.get(0))
        .context("failed to count artists")?;
    Ok(count as usize)
}

/// Professions that occur at least once, ordered by first registration. These
/// feed the filter selector so it never offers an option with no matches.
pub fn fetch_artist_professions(conn: &Connection) -> Result<Vec<Profession>> {
    let mut stmt = conn
        .prepare(
            "SELECT profession FROM artists
             GROUP BY profession
             ORDER BY MIN(id)",
        )
        .context("failed to prepare profession query")?;

    let professions = stmt
        .query_map([], |row| row.get(0))
        .context("failed to iterate professions")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect professions")?;

    Ok(professions)
}

/// Zones that occur among artists, ordered by first registration.
pub fn fetch_artist_zones(conn: &Connection) -> Result<Vec<Zone>> {
    let mut stmt = conn
        .prepare(
            "SELECT zone FROM artists
             GROUP BY zone
             ORDER BY MIN(id)",
        )
        .context("failed to prepare artist zone query")?;

    let zones = stmt
        .query_map([], |row| row.get(0))
        .context("failed to iterate artist zones")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect artist zones")?;

    Ok(zones)
}
