use chrono::{DateTime, Utc};

use super::fairness::{self, RECENT_WIN_PENALTY, WIN_DECAY_FACTOR};
use super::types::Candidate;

/// Weights for a whole pool, index-aligned with `candidates`.
pub fn calculate_weights(candidates: &[Candidate], now: DateTime<Utc>) -> Vec<f64> {
    candidates
        .iter()
        .map(|candidate| calculate_weight(candidate, now))
        .collect()
}

/// Selection weight of a single candidate. Never mutates the candidate:
/// an expired epoch is only projected here, the counter itself is reset
/// when that candidate next wins.
pub fn calculate_weight(candidate: &Candidate, now: DateTime<Utc>) -> f64 {
    let mut weight = win_count_factor(candidate, now);

    if fairness::won_recently(candidate.last_win, now) {
        weight *= RECENT_WIN_PENALTY;
    }

    weight.max(f64::MIN_POSITIVE)
}

fn win_count_factor(candidate: &Candidate, now: DateTime<Utc>) -> f64 {
    if candidate.win_count == 0 || projected_reset(candidate, now) {
        return 1.0;
    }
    apply_exponential_decay(candidate.win_count)
}

fn projected_reset(candidate: &Candidate, now: DateTime<Utc>) -> bool {
    candidate
        .last_win_reset
        .is_some_and(|since| fairness::reset_window_elapsed(since, now))
}

fn apply_exponential_decay(win_count: u32) -> f64 {
    // weight = 0.7^wins
    WIN_DECAY_FACTOR.powf(f64::from(win_count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 1, 9, 0, 0).unwrap()
    }

    fn candidate(win_count: u32) -> Candidate {
        Candidate {
            win_count,
            last_win_reset: Some(now() - Duration::days(30)),
            ..Candidate::new(1)
        }
    }

    #[test]
    fn test_never_won_has_full_weight() {
        assert_eq!(calculate_weight(&Candidate::new(1), now()), 1.0);
    }

    #[test]
    fn test_weight_decays_with_each_win() {
        let mut previous = f64::INFINITY;
        for k in 0..12 {
            let weight = calculate_weight(&candidate(k), now());
            assert!((weight - 0.7_f64.powi(k as i32)).abs() < 1e-12, "k = {k}");
            assert!(weight < previous);
            previous = weight;
        }
    }

    #[test]
    fn test_decay_applies_without_any_reset() {
        let c = Candidate {
            win_count: 2,
            ..Candidate::new(1)
        };
        assert!((calculate_weight(&c, now()) - 0.49).abs() < 1e-12);
    }

    #[test]
    fn test_recent_win_halves_weight() {
        let quiet = candidate(3);
        let recent = Candidate {
            last_win: Some(now() - Duration::days(6)),
            ..quiet.clone()
        };

        let ratio = calculate_weight(&recent, now()) / calculate_weight(&quiet, now());
        assert!((ratio - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_week_old_win_is_not_penalized() {
        let c = Candidate {
            last_win: Some(now() - Duration::days(7)),
            ..Candidate::new(1)
        };
        assert_eq!(calculate_weight(&c, now()), 1.0);
    }

    #[test]
    fn test_expired_epoch_projects_full_weight() {
        for win_count in [1, 5, 40] {
            let c = Candidate {
                win_count,
                last_win: Some(now() - Duration::days(100)),
                last_win_reset: Some(now() - Duration::days(91)),
                ..Candidate::new(1)
            };
            assert_eq!(calculate_weight(&c, now()), 1.0);
        }
    }

    #[test]
    fn test_dormant_winner_and_newcomer_have_equal_odds() {
        let a = Candidate {
            win_count: 5,
            last_win_reset: Some(now() - Duration::days(120)),
            ..Candidate::new(1)
        };
        let b = Candidate::new(2);

        assert_eq!(calculate_weights(&[a, b], now()), vec![1.0, 1.0]);
    }

    #[test]
    fn test_recent_single_win_stacks_both_penalties() {
        let c = Candidate {
            win_count: 1,
            last_win: Some(now() - Duration::days(2)),
            last_win_reset: Some(now() - Duration::days(2)),
            ..Candidate::new(3)
        };
        assert!((calculate_weight(&c, now()) - 0.35).abs() < 1e-12);
    }

    #[test]
    fn test_weight_never_reaches_zero() {
        let c = Candidate {
            win_count: u32::MAX,
            last_win: Some(now()),
            ..Candidate::new(1)
        };
        let weight = calculate_weight(&c, now());
        assert!(weight > 0.0 && weight.is_finite());
    }
}
