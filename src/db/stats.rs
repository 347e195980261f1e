use anyhow::{Context, Result};
use rusqlite::Connection;

use crate::models::{Profession, Zone};

/// Number of artists per profession, ordered by first registration.
pub fn count_artists_by_profession(conn: &Connection) -> Result<Vec<(Profession, usize)>> {
    let mut stmt = conn
        .prepare(
            "SELECT profession, COUNT(*) FROM artists
             GROUP BY profession
             ORDER BY MIN(id)",
        )
        .context("failed to prepare profession count query")?;

    let counts = stmt
        .query_map([], |row| {
            let count: i64 = row.get(1)?;
            Ok((row.get(0)?, count as usize))
        })
        .context("failed to iterate profession counts")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect profession counts")?;

    Ok(counts)
}

/// Number of venues per zone, ordered by first registration.
pub fn count_venues_by_zone(conn: &Connection) -> Result<Vec<(Zone, usize)>> {
    let mut stmt = conn
        .prepare(
            "SELECT zone, COUNT(*) FROM venues
             GROUP BY zone
             ORDER BY MIN(id)",
        )
        .context("failed to prepare zone count query")?;

    let counts = stmt
        .query_map([], |row| {
            let count: i64 = row.get(1)?;
            Ok((row.get(0)?, count as usize))
        })
        .context("failed to iterate zone counts")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect zone counts")?;

    Ok(counts)
}

/// Arithmetic mean of `price` per profession, ordered by first registration.
pub fn mean_price_by_profession(conn: &Connection) -> Result<Vec<(Profession, f64)>> {
    let mut stmt = conn
        .prepare(
            "SELECT profession, AVG(price) FROM artists
             GROUP BY profession
             ORDER BY MIN(id)",
        )
        .context("failed to prepare mean price query")?;

    let means = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
        .context("failed to iterate mean prices")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect mean prices")?;

    Ok(means)
}
