use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use wb_core::{AircraftType, StationField};
use wb_engine::{EngineSnapshot, SelectAircraft, UpdateStation};

use crate::app_state::{ApiError, SharedState, lock};

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aircraft: Option<AircraftType>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationUpdateRequest {
    pub field: String,
    pub value: String,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub session: EngineSnapshot,
}

/// Open a new loading session
pub async fn create_session(
    State(app_state): State<SharedState>,
    Json(payload): Json<CreateSessionRequest>,
) -> Json<SessionResponse> {
    let mut state = lock(&app_state);
    let (session_id, engine) = state.open_session(payload.aircraft);
    Json(SessionResponse {
        session_id,
        session: engine.snapshot(),
    })
}

/// Get the stations and totals of a session
pub async fn get_session(
    State(app_state): State<SharedState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionResponse>, ApiError> {
    let state = lock(&app_state);
    let engine = state.engine(session_id)?;
    Ok(Json(SessionResponse {
        session_id,
        session: engine.snapshot(),
    }))
}

/// Switch the aircraft of a session, discarding its edits
pub async fn select_aircraft(
    State(app_state): State<SharedState>,
    Path(session_id): Path<Uuid>,
    Json(payload): Json<SelectAircraft>,
) -> Result<Json<SessionResponse>, ApiError> {
    let mut state = lock(&app_state);
    let engine = state.engine_mut(session_id)?;
    engine.select_aircraft(payload);
    Ok(Json(SessionResponse {
        session_id,
        session: engine.snapshot(),
    }))
}

/// Restore the default loading of the session's aircraft
pub async fn reset_session(
    State(app_state): State<SharedState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionResponse>, ApiError> {
    let mut state = lock(&app_state);
    let engine = state.engine_mut(session_id)?;
    engine.reset();
    Ok(Json(SessionResponse {
        session_id,
        session: engine.snapshot(),
    }))
}

/// Set the weight or arm of one station
pub async fn update_station(
    State(app_state): State<SharedState>,
    Path((session_id, station_id)): Path<(Uuid, String)>,
    Json(payload): Json<StationUpdateRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let field: StationField = payload.field.parse()?;
    let mut state = lock(&app_state);
    let engine = state.engine_mut(session_id)?;
    engine.update_station(UpdateStation {
        station_id,
        field,
        value: payload.value,
    })?;
    Ok(Json(SessionResponse {
        session_id,
        session: engine.snapshot(),
    }))
}

/// Discard a session
pub async fn close_session(
    State(app_state): State<SharedState>,
    Path(session_id): Path<Uuid>,
) -> StatusCode {
    lock(&app_state).close_session(session_id);
    StatusCode::NO_CONTENT
}
