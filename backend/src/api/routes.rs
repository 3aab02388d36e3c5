use axum::{
    routing::{get, patch, post},
    Router,
};
use std::sync::Arc;

use crate::api::handlers::{health::health, persons, roulette, AppState};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/persons", get(persons::list_persons).post(persons::create_person))
        .route("/api/persons/presence", post(persons::update_all_presence))
        .route(
            "/api/persons/:id",
            get(persons::get_person)
                .put(persons::update_person)
                .delete(persons::delete_person),
        )
        .route("/api/persons/:id/presence", patch(persons::update_presence))
        .route("/api/persons/:id/reset-wins", post(persons::reset_person_wins))
        .route("/api/roulette/spin", post(roulette::spin))
        .route("/api/roulette/history", get(roulette::history))
        .route("/api/roulette/reset", post(roulette::reset_all))
        .with_state(state)
}
