use anyhow::{bail, Result};
use chrono::{DateTime, Utc};
use rusqlite::{Connection, TransactionBehavior};

use super::models::Person;
use super::{persons, winners};
use crate::roulette::{
    self, Candidate, CandidateId, RandomSource, RecordStore, SpinError, SpinOutcome, WinRecord,
};

/// `RecordStore` over one open SQLite connection or transaction.
pub struct SqliteStore<'c> {
    conn: &'c Connection,
    now: DateTime<Utc>,
}

impl<'c> SqliteStore<'c> {
    pub fn new(conn: &'c Connection, now: DateTime<Utc>) -> Self {
        Self { conn, now }
    }
}

impl RecordStore for SqliteStore<'_> {
    fn list_present_candidates(&mut self) -> Result<Vec<Candidate>> {
        let present = persons::list_present(self.conn)?;
        Ok(present.iter().map(|p| p.candidate()).collect())
    }

    fn read_candidate(&mut self, id: CandidateId) -> Result<Option<Candidate>> {
        Ok(persons::find_by_id(self.conn, id)?.map(|p| p.candidate()))
    }

    fn write_candidate(&mut self, candidate: &Candidate) -> Result<()> {
        if !persons::write_fairness(self.conn, candidate, self.now)? {
            bail!("Person {} not found while updating winner", candidate.id);
        }
        Ok(())
    }

    fn append_win_record(&mut self, record: &WinRecord) -> Result<()> {
        winners::insert_winner(self.conn, record.candidate_id, record.won_at)?;
        Ok(())
    }
}

/// A committed spin together with the winner's full record, read inside
/// the same transaction.
#[derive(Debug, Clone)]
pub struct RecordedSpin {
    pub outcome: SpinOutcome,
    pub winner: Person,
}

/// Runs one spin inside an immediate transaction so concurrent spins are
/// serialized on the write lock. Any failure rolls the whole spin back.
pub fn spin_in_transaction<R>(
    conn: &mut Connection,
    now: DateTime<Utc>,
    random: &mut R,
) -> Result<RecordedSpin, SpinError>
where
    R: RandomSource + ?Sized,
{
    let tx = conn
        .transaction_with_behavior(TransactionBehavior::Immediate)
        .map_err(anyhow::Error::from)?;

    let outcome = {
        let mut store = SqliteStore::new(&tx, now);
        roulette::spin(&mut store, now, random)?
    };
    let winner_id = outcome.winner.id;
    let winner = persons::find_by_id(&tx, winner_id)?
        .ok_or(SpinError::CandidateVanished(winner_id))?;

    tx.commit().map_err(anyhow::Error::from)?;
    Ok(RecordedSpin { outcome, winner })
}
