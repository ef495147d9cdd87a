use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use wb_core::{AircraftType, SessionError};
use wb_engine::Engine;

pub type SharedState = Arc<Mutex<AppState>>;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Session {session_id} not found")]
    SessionNotFound { session_id: Uuid },
    #[error(transparent)]
    Session(#[from] SessionError),
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            ApiError::SessionNotFound { .. }
            | ApiError::Session(SessionError::StationNotFound { .. })
            | ApiError::Session(SessionError::UnknownAircraft { .. }) => StatusCode::NOT_FOUND,
            ApiError::Session(SessionError::UnknownField { .. }) => StatusCode::BAD_REQUEST,
        };
        tracing::warn!("Request failed: {}", self);
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Sessions kept open before the oldest one is evicted
pub const DEFAULT_MAX_SESSIONS: usize = 1024;

/// Open weight and balance views, one engine per session id
#[derive(Debug)]
pub struct AppState {
    default_aircraft: AircraftType,
    max_sessions: usize,
    sessions: HashMap<Uuid, Engine>,
    /// Session ids in opening order
    opened: VecDeque<Uuid>,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::new(AircraftType::default())
    }
}

impl AppState {
    pub fn new(default_aircraft: AircraftType) -> Self {
        AppState::with_max_sessions(default_aircraft, DEFAULT_MAX_SESSIONS)
    }

    pub fn with_max_sessions(default_aircraft: AircraftType, max_sessions: usize) -> Self {
        AppState {
            default_aircraft,
            max_sessions: max_sessions.max(1),
            sessions: HashMap::new(),
            opened: VecDeque::new(),
        }
    }

    pub fn into_shared(self) -> SharedState {
        Arc::new(Mutex::new(self))
    }

    pub fn default_aircraft(&self) -> AircraftType {
        self.default_aircraft
    }

    pub fn open_session(&mut self, aircraft: Option<AircraftType>) -> (Uuid, &Engine) {
        while self.sessions.len() >= self.max_sessions {
            let Some(oldest) = self.opened.pop_front() else {
                break;
            };
            if self.sessions.remove(&oldest).is_some() {
                tracing::info!(
                    "Evicting session {}, limit of {} reached",
                    oldest,
                    self.max_sessions
                );
            }
        }

        let session_id = Uuid::new_v4();
        let aircraft = aircraft.unwrap_or(self.default_aircraft);
        tracing::info!("Opening session {} for {}", session_id, aircraft);
        self.opened.push_back(session_id);
        let engine = self
            .sessions
            .entry(session_id)
            .or_insert_with(|| Engine::new(aircraft));
        (session_id, engine)
    }

    pub fn close_session(&mut self, session_id: Uuid) {
        tracing::info!("Closing session {}", session_id);
        self.sessions.remove(&session_id);
        self.opened.retain(|id| *id != session_id);
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    pub fn engine(&self, session_id: Uuid) -> Result<&Engine, ApiError> {
        self.sessions
            .get(&session_id)
            .ok_or(ApiError::SessionNotFound { session_id })
    }

    pub fn engine_mut(&mut self, session_id: Uuid) -> Result<&mut Engine, ApiError> {
        self.sessions
            .get_mut(&session_id)
            .ok_or(ApiError::SessionNotFound { session_id })
    }
}

/// Lock the shared state, recovering it if a handler panicked while holding it
pub fn lock(state: &SharedState) -> MutexGuard<'_, AppState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}
