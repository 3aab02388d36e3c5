use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::database::models::{Person, WinnerWithPerson};

#[derive(Debug, Serialize, Deserialize)]
pub struct PersonResponse {
    pub id: i64,
    pub name: String,
    pub present: bool,
    pub win_count: u32,
    pub last_win: Option<DateTime<Utc>>,
    pub last_win_reset: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Person> for PersonResponse {
    fn from(person: Person) -> Self {
        Self {
            id: person.id,
            name: person.name,
            present: person.present,
            win_count: person.win_count,
            last_win: person.last_win,
            last_win_reset: person.last_win_reset,
            created_at: person.created_at,
            updated_at: person.updated_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WinnerResponse {
    pub id: i64,
    pub person_id: i64,
    pub person: PersonResponse,
    pub won_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<WinnerWithPerson> for WinnerResponse {
    fn from(row: WinnerWithPerson) -> Self {
        Self {
            id: row.winner.id,
            person_id: row.winner.person_id,
            person: row.person.into(),
            won_at: row.winner.won_at,
            created_at: row.winner.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SpinResponse {
    pub winner: PersonResponse,
    pub total_participants: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

// Request payloads

#[derive(Debug, Deserialize)]
pub struct CreatePersonRequest {
    pub name: String,
    #[serde(default)]
    pub present: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdatePersonRequest {
    pub name: Option<String>,
    pub present: Option<bool>,
    pub win_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct PresenceRequest {
    pub present: bool,
}

#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    pub limit: Option<usize>,
}
