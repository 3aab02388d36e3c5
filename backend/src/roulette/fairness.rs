use chrono::{DateTime, Duration, Utc};

/// Each win since the last reset multiplies future odds by this factor.
pub const WIN_DECAY_FACTOR: f64 = 0.7;

/// Flat multiplier for anyone who won inside the recent-win window.
pub const RECENT_WIN_PENALTY: f64 = 0.5;

pub const RECENT_WIN_WINDOW_DAYS: i64 = 7;

/// Length of a fairness epoch: after this long without a reset the win
/// counter starts over.
pub const RESET_WINDOW_DAYS: i64 = 90;

pub fn recent_win_window() -> Duration {
    Duration::days(RECENT_WIN_WINDOW_DAYS)
}

pub fn reset_window() -> Duration {
    Duration::days(RESET_WINDOW_DAYS)
}

/// True once strictly more than the reset window has passed since `since`.
pub fn reset_window_elapsed(since: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now.signed_duration_since(since) > reset_window()
}

/// Whether a winner recorded at `now` opens a new fairness epoch.
/// A counter that was never reset counts as expired.
pub fn is_expired(last_win_reset: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    match last_win_reset {
        Some(since) => reset_window_elapsed(since, now),
        None => true,
    }
}

/// True while `now` is still inside the recent-win window of `last_win`.
pub fn won_recently(last_win: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    last_win.is_some_and(|won_at| now.signed_duration_since(won_at) < recent_win_window())
}
