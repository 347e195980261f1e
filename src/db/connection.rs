use anyhow::{Context, Result};
use rusqlite::Connection;

/// Open a private in-memory database and create both registry tables. Every
/// call yields an independent store, so each session owns its own data and
/// nothing outlives the connection.
pub fn open_session_store() -> Result<Connection> {
    let conn = Connection::open_in_memory().context("failed to open in-memory SQLite database")?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS artists (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            profession TEXT NOT NULL,
            style TEXT NOT NULL DEFAULT '',
            price INTEGER NOT NULL DEFAULT 0 CHECK (price >= 0),
            zone TEXT NOT NULL,
            contact TEXT NOT NULL DEFAULT '',
            social TEXT NOT NULL DEFAULT '',
            rating REAL NOT NULL DEFAULT 0,
            reviews TEXT NOT NULL DEFAULT ''
        )",
        [],
    )
    .context("failed to create artists table")?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS venues (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            zone TEXT NOT NULL,
            address TEXT NOT NULL DEFAULT '',
            contact TEXT NOT NULL DEFAULT '',
            social TEXT NOT NULL DEFAULT '',
            rating REAL NOT NULL DEFAULT 0,
            reviews TEXT NOT NULL DEFAULT ''
        )",
        [],
    )
    .context("failed to create venues table")?;

    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_are_isolated_from_each_other() -> Result<()> {
        let first = open_session_store()?;
        let second = open_session_store()?;
        first.execute(
            "INSERT INTO venues (name, zone) VALUES ('Bar Sur', 'San Telmo')",
            [],
        )?;

        let count: i64 = second.query_row("SELECT COUNT(*) FROM venues", [], |row| row.get(0))?;
        assert_eq!(count, 0);
        Ok(())
    }
}
