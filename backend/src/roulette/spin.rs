use anyhow::Result;
use chrono::{DateTime, Utc};
use log::{debug, info};
use thiserror::Error;

use super::outcome::record_win;
use super::selector::{probabilities, select_weighted};
use super::sources::RandomSource;
use super::types::{Candidate, CandidateId, WinRecord};
use super::weighting::calculate_weights;

/// Persistence capabilities a spin needs. Implementations are expected to
/// run one spin inside one serialized unit of work.
pub trait RecordStore {
    fn list_present_candidates(&mut self) -> Result<Vec<Candidate>>;
    fn read_candidate(&mut self, id: CandidateId) -> Result<Option<Candidate>>;
    fn write_candidate(&mut self, candidate: &Candidate) -> Result<()>;
    fn append_win_record(&mut self, record: &WinRecord) -> Result<()>;
}

#[derive(Debug, Error)]
pub enum SpinError {
    #[error("no eligible candidates")]
    NoEligibleCandidates,

    #[error("candidate {0} disappeared during the spin")]
    CandidateVanished(CandidateId),

    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpinOutcome {
    pub winner: Candidate,
    pub record: WinRecord,
    pub total_participants: usize,
    pub probability: f64,
}

/// Runs one drawing: weighs the present pool, draws a winner and records
/// the win. Nothing is written unless a winner was selected; if a write
/// fails the caller must discard the store's unit of work.
pub fn spin<S, R>(
    store: &mut S,
    now: DateTime<Utc>,
    random: &mut R,
) -> Result<SpinOutcome, SpinError>
where
    S: RecordStore + ?Sized,
    R: RandomSource + ?Sized,
{
    let candidates = store.list_present_candidates()?;
    if candidates.is_empty() {
        return Err(SpinError::NoEligibleCandidates);
    }

    let weights = calculate_weights(&candidates, now);
    let draw = random.next_draw();
    debug!("Drawing {:.6} over {} candidates, weights {:?}", draw, candidates.len(), weights);

    let index = select_index(&candidates, &weights, draw);
    let probability = probabilities(&weights)[index];
    let selected_id = candidates[index].id;

    let current = store
        .read_candidate(selected_id)?
        .ok_or(SpinError::CandidateVanished(selected_id))?;

    let (winner, record) = record_win(&current, now);
    store.write_candidate(&winner)?;
    store.append_win_record(&record)?;

    info!(
        "Candidate {} won (p = {:.3}, win count {}) among {} present",
        winner.id,
        probability,
        winner.win_count,
        candidates.len()
    );

    Ok(SpinOutcome {
        winner,
        record,
        total_participants: candidates.len(),
        probability,
    })
}

fn select_index(candidates: &[Candidate], weights: &[f64], draw: f64) -> usize {
    let indices: Vec<usize> = (0..candidates.len()).collect();
    select_weighted(&indices, weights, draw)
        .copied()
        .unwrap_or(candidates.len() - 1)
}
