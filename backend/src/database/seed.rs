use anyhow::Result;
use chrono::{DateTime, Utc};
use log::{info, warn};
use rusqlite::Connection;

use super::persons;

/// Inserts `names` as absent persons when the table is still empty.
/// Returns how many persons were created.
pub fn seed_if_empty(conn: &Connection, names: &[&str], now: DateTime<Utc>) -> Result<usize> {
    if persons::count(conn)? > 0 {
        info!("Database already seeded, skipping");
        return Ok(0);
    }

    let mut created = 0;
    for name in names {
        match persons::insert_person(conn, name, false, now) {
            Ok(_) => created += 1,
            Err(e) => warn!("Failed to seed person {}: {:?}", name, e),
        }
    }

    info!("Seeded database with {} persons", created);
    Ok(created)
}
