use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use super::models::{Winner, WinnerWithPerson};
use super::persons::parse_person_at;

pub fn insert_winner(
    conn: &Connection,
    person_id: i64,
    won_at: DateTime<Utc>,
) -> Result<Winner> {
    let sql = "INSERT INTO winners (person_id, won_at, created_at)
               VALUES (?1, ?2, ?2)
               RETURNING id, person_id, won_at, created_at";

    conn.query_row(sql, params![person_id, won_at], parse_winner_row)
        .context("Failed to record win")
}

fn parse_winner_row(row: &rusqlite::Row) -> rusqlite::Result<Winner> {
    Ok(Winner {
        id: row.get(0)?,
        person_id: row.get(1)?,
        won_at: row.get(2)?,
        created_at: row.get(3)?,
    })
}

/// Most recent wins first, each with the winner's current record.
pub fn list_recent(conn: &Connection, limit: usize) -> Result<Vec<WinnerWithPerson>> {
    let sql = "
        SELECT
            w.id, w.person_id, w.won_at, w.created_at,
            p.id, p.name, p.present, p.win_count, p.last_win, p.last_win_reset,
            p.created_at, p.updated_at
        FROM winners w
        JOIN persons p ON w.person_id = p.id
        ORDER BY w.won_at DESC, w.id DESC
        LIMIT ?1
    ";

    let limit = i64::try_from(limit).unwrap_or(i64::MAX);
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![limit], |row| {
            Ok(WinnerWithPerson {
                winner: parse_winner_row(row)?,
                person: parse_person_at(row, 4)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list win history")?;

    Ok(rows)
}

pub fn count_for_person(conn: &Connection, person_id: i64) -> Result<i64> {
    conn.query_row(
        "SELECT COUNT(*) FROM winners WHERE person_id = ?1",
        params![person_id],
        |row| row.get(0),
    )
    .context("Failed to count wins for person")
}
