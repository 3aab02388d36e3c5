use chrono::{DateTime, Utc};

use super::fairness;
use super::types::{Candidate, WinRecord};

/// Applies a win at `now` to `winner` and returns its new fairness state
/// together with the history entry to append.
///
/// A winner whose counter was never reset, or whose epoch is older than the
/// reset window, restarts at one win with a fresh reset timestamp.
pub fn record_win(winner: &Candidate, now: DateTime<Utc>) -> (Candidate, WinRecord) {
    let mut updated = winner.clone();
    updated.last_win = Some(now);

    if fairness::is_expired(winner.last_win_reset, now) {
        updated.win_count = 1;
        updated.last_win_reset = Some(now);
    } else {
        updated.win_count = winner.win_count.saturating_add(1);
    }

    let record = WinRecord {
        candidate_id: winner.id,
        won_at: now,
    };
    (updated, record)
}
