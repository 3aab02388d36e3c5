use chrono::{DateTime, Utc};

pub type CandidateId = i64;

/// Fairness view of a participant: only the fields the draw reads or writes.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub id: CandidateId,
    pub win_count: u32,
    pub last_win: Option<DateTime<Utc>>,
    pub last_win_reset: Option<DateTime<Utc>>,
}

impl Candidate {
    pub fn new(id: CandidateId) -> Self {
        Self {
            id,
            win_count: 0,
            last_win: None,
            last_win_reset: None,
        }
    }
}

/// One entry of the append-only win history.
#[derive(Debug, Clone, PartialEq)]
pub struct WinRecord {
    pub candidate_id: CandidateId,
    pub won_at: DateTime<Utc>,
}
