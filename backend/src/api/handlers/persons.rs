use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use log::info;
use std::sync::Arc;

use crate::api::models::{
    CreatePersonRequest, MessageResponse, PersonResponse, PresenceRequest, UpdatePersonRequest,
};
use crate::database::{self, models::PersonChanges, persons};
use super::{parse_id, ApiError, AppState};

const PERSON_NOT_FOUND: &str = "Person not found";

pub async fn list_persons(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PersonResponse>>, ApiError> {
    let conn = database::get_connection(&state.pool)?;
    let people = persons::list_all(&conn)?;
    Ok(Json(people.into_iter().map(PersonResponse::from).collect()))
}

pub async fn get_person(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<PersonResponse>, ApiError> {
    let id = parse_id(&id)?;
    let conn = database::get_connection(&state.pool)?;

    persons::find_by_id(&conn, id)?
        .map(|p| Json(p.into()))
        .ok_or_else(|| ApiError::not_found(PERSON_NOT_FOUND))
}

pub async fn create_person(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreatePersonRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;
    let name = validated_name(&request.name)?;

    let conn = database::get_connection(&state.pool)?;
    let person = persons::insert_person(&conn, name, request.present, state.clock.now())?;
    info!("Created person {} ({})", person.id, person.name);

    Ok((StatusCode::CREATED, Json(PersonResponse::from(person))))
}

pub async fn update_person(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdatePersonRequest>, JsonRejection>,
) -> Result<Json<PersonResponse>, ApiError> {
    let id = parse_id(&id)?;
    let Json(request) = payload?;

    let changes = PersonChanges {
        name: request.name.as_deref().map(validated_name).transpose()?.map(str::to_string),
        present: request.present,
        win_count: request.win_count,
    };

    let conn = database::get_connection(&state.pool)?;
    let updated = if changes.is_empty() {
        persons::find_by_id(&conn, id)?
    } else {
        persons::update_person(&conn, id, &changes, state.clock.now())?
    };

    updated
        .map(|p| Json(p.into()))
        .ok_or_else(|| ApiError::not_found(PERSON_NOT_FOUND))
}

pub async fn delete_person(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_id(&id)?;
    let conn = database::get_connection(&state.pool)?;

    if !persons::delete_person(&conn, id)? {
        return Err(ApiError::not_found(PERSON_NOT_FOUND));
    }
    info!("Deleted person {}", id);
    Ok(Json(MessageResponse::new("Person deleted successfully")))
}

pub async fn update_presence(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<PresenceRequest>, JsonRejection>,
) -> Result<Json<PersonResponse>, ApiError> {
    let id = parse_id(&id)?;
    let Json(request) = payload?;
    let conn = database::get_connection(&state.pool)?;

    persons::set_presence(&conn, id, request.present, state.clock.now())?
        .map(|p| Json(p.into()))
        .ok_or_else(|| ApiError::not_found(PERSON_NOT_FOUND))
}

pub async fn update_all_presence(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PresenceRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(request) = payload?;
    let conn = database::get_connection(&state.pool)?;

    let updated = persons::set_presence_all(&conn, request.present, state.clock.now())?;
    info!("Set presence = {} for {} persons", request.present, updated);
    Ok(Json(MessageResponse::new("All presence updated successfully")))
}

pub async fn reset_person_wins(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<PersonResponse>, ApiError> {
    let id = parse_id(&id)?;
    let conn = database::get_connection(&state.pool)?;

    persons::reset_wins(&conn, id, state.clock.now())?
        .map(|p| Json(p.into()))
        .ok_or_else(|| ApiError::not_found(PERSON_NOT_FOUND))
}

fn validated_name(name: &str) -> Result<&str, ApiError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ApiError::bad_request("Name must not be empty"));
    }
    Ok(trimmed)
}
