use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use super::models::{Person, PersonChanges};
use crate::roulette::Candidate;

const PERSON_COLUMNS: &str =
    "id, name, present, win_count, last_win, last_win_reset, created_at, updated_at";

pub fn insert_person(
    conn: &Connection,
    name: &str,
    present: bool,
    now: DateTime<Utc>,
) -> Result<Person> {
    let sql = format!(
        "INSERT INTO persons (name, present, win_count, created_at, updated_at)
         VALUES (?1, ?2, 0, ?3, ?3)
         RETURNING {PERSON_COLUMNS}"
    );

    conn.query_row(&sql, params![name, present, now], parse_person_row)
        .context("Failed to insert person")
}

pub(crate) fn parse_person_row(row: &rusqlite::Row) -> rusqlite::Result<Person> {
    parse_person_at(row, 0)
}

/// Reads a person whose columns start at `offset`, for joined queries.
pub(crate) fn parse_person_at(row: &rusqlite::Row, offset: usize) -> rusqlite::Result<Person> {
    Ok(Person {
        id: row.get(offset)?,
        name: row.get(offset + 1)?,
        present: row.get(offset + 2)?,
        win_count: row.get(offset + 3)?,
        last_win: row.get(offset + 4)?,
        last_win_reset: row.get(offset + 5)?,
        created_at: row.get(offset + 6)?,
        updated_at: row.get(offset + 7)?,
    })
}

pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Person>> {
    let sql = format!("SELECT {PERSON_COLUMNS} FROM persons WHERE id = ?1");

    conn.query_row(&sql, params![id], parse_person_row)
        .optional()
        .context("Failed to query person by id")
}

pub fn list_all(conn: &Connection) -> Result<Vec<Person>> {
    let sql = format!("SELECT {PERSON_COLUMNS} FROM persons ORDER BY id");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], parse_person_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn list_present(conn: &Connection) -> Result<Vec<Person>> {
    let sql = format!("SELECT {PERSON_COLUMNS} FROM persons WHERE present = 1 ORDER BY id");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], parse_person_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list present persons")?;

    Ok(rows)
}

pub fn count(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM persons", [], |row| row.get(0))
        .context("Failed to count persons")
}

/// Applies the given changes; returns `None` when the person does not exist.
pub fn update_person(
    conn: &Connection,
    id: i64,
    changes: &PersonChanges,
    now: DateTime<Utc>,
) -> Result<Option<Person>> {
    let sql = format!(
        "UPDATE persons
         SET name = COALESCE(?2, name),
             present = COALESCE(?3, present),
             win_count = COALESCE(?4, win_count),
             updated_at = ?5
         WHERE id = ?1
         RETURNING {PERSON_COLUMNS}"
    );

    conn.query_row(
        &sql,
        params![id, changes.name, changes.present, changes.win_count, now],
        parse_person_row,
    )
    .optional()
    .context("Failed to update person")
}

pub fn set_presence(
    conn: &Connection,
    id: i64,
    present: bool,
    now: DateTime<Utc>,
) -> Result<Option<Person>> {
    let changes = PersonChanges {
        present: Some(present),
        ..PersonChanges::default()
    };
    update_person(conn, id, &changes, now)
}

pub fn set_presence_all(conn: &Connection, present: bool, now: DateTime<Utc>) -> Result<usize> {
    conn.execute(
        "UPDATE persons SET present = ?1, updated_at = ?2",
        params![present, now],
    )
    .context("Failed to update presence for all persons")
}

/// Clears one person's counter and opens a new fairness epoch at `now`.
pub fn reset_wins(conn: &Connection, id: i64, now: DateTime<Utc>) -> Result<Option<Person>> {
    let sql = format!(
        "UPDATE persons SET win_count = 0, last_win_reset = ?2, updated_at = ?2
         WHERE id = ?1
         RETURNING {PERSON_COLUMNS}"
    );

    conn.query_row(&sql, params![id, now], parse_person_row)
        .optional()
        .context("Failed to reset win count")
}

pub fn reset_all_wins(conn: &Connection, now: DateTime<Utc>) -> Result<usize> {
    conn.execute(
        "UPDATE persons SET win_count = 0, last_win_reset = ?1, updated_at = ?1",
        params![now],
    )
    .context("Failed to reset win counts")
}

/// Persists the fairness fields of a candidate; returns false if no row matched.
pub fn write_fairness(
    conn: &Connection,
    candidate: &Candidate,
    now: DateTime<Utc>,
) -> Result<bool> {
    let updated = conn
        .execute(
            "UPDATE persons
             SET win_count = ?2, last_win = ?3, last_win_reset = ?4, updated_at = ?5
             WHERE id = ?1",
            params![
                candidate.id,
                candidate.win_count,
                candidate.last_win,
                candidate.last_win_reset,
                now
            ],
        )
        .context("Failed to update winner")?;

    Ok(updated == 1)
}

pub fn delete_person(conn: &Connection, id: i64) -> Result<bool> {
    let deleted = conn
        .execute("DELETE FROM persons WHERE id = ?1", params![id])
        .context("Failed to delete person")?;

    Ok(deleted > 0)
}
