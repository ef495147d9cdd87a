//! Weight & Balance API Library
//!
//! This library provides the HTTP API over weight and balance loading sessions.

mod aircraft;
pub mod app_state;
pub mod config;
mod session;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

pub use app_state::{AppState, SharedState};
pub use config::ServerConfig;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}

/// Create the application router with all endpoints
pub fn create_app(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/aircraft", get(aircraft::list_aircraft))
        .route(
            "/aircraft/{aircraft}/stations",
            get(aircraft::get_default_stations),
        )
        .route("/sessions", post(session::create_session))
        .route(
            "/sessions/{session_id}",
            get(session::get_session).delete(session::close_session),
        )
        .route(
            "/sessions/{session_id}/aircraft",
            post(session::select_aircraft),
        )
        .route("/sessions/{session_id}/reset", post(session::reset_session))
        .route(
            "/sessions/{session_id}/stations/{station_id}",
            post(session::update_station),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(app_state.into_shared())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;
    use wb_core::{AircraftType, SessionState};

    pub fn create_test_app() -> Router {
        Router::new().route("/health", get(health_check))
    }

    fn post_json(uri: String, body: String) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_integration_session_lifecycle() {
        let app = create_app(AppState::new(AircraftType::C172));

        // Open a session on the default aircraft
        let response = app
            .clone()
            .oneshot(post_json("/sessions".into(), "{}".into()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let session_response: session::SessionResponse = serde_json::from_slice(&body).unwrap();
        let session_id = session_response.session_id;
        assert_eq!(session_response.session.summary.total_weight, 1800.0);

        // Load the rear seats
        let response = app
            .clone()
            .oneshot(post_json(
                format!("/sessions/{}/stations/rear", session_id),
                r#"{ "field": "weight", "value": "340" }"#.into(),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        // Read it back
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri(format!("/sessions/{}", session_id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let session_response: session::SessionResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(session_response.session.state, SessionState::Edited);
        assert_eq!(session_response.session.summary.center_of_gravity, 45.0);

        // Close it
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri(format!("/sessions/{}", session_id))
                    .method("DELETE")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/sessions/{}", session_id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
