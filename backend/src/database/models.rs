use chrono::{DateTime, Utc};

use crate::roulette::Candidate;

#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub present: bool,
    pub win_count: u32,
    pub last_win: Option<DateTime<Utc>>,
    pub last_win_reset: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Person {
    pub fn candidate(&self) -> Candidate {
        Candidate {
            id: self.id,
            win_count: self.win_count,
            last_win: self.last_win,
            last_win_reset: self.last_win_reset,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Winner {
    pub id: i64,
    pub person_id: i64,
    pub won_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

// DTOs for joined queries
#[derive(Debug, Clone)]
pub struct WinnerWithPerson {
    pub winner: Winner,
    pub person: Person,
}

#[derive(Debug, Clone, Default)]
pub struct PersonChanges {
    pub name: Option<String>,
    pub present: Option<bool>,
    pub win_count: Option<u32>,
}

impl PersonChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.present.is_none() && self.win_count.is_none()
    }
}
