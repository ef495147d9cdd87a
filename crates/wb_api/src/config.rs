use serde::{Deserialize, Serialize};
use wb_core::AircraftType;

use crate::app_state::DEFAULT_MAX_SESSIONS;

/// Server configuration, read from an optional JSON file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Aircraft loaded by new sessions that do not name one
    pub default_aircraft: AircraftType,
    /// Open sessions kept before the oldest is evicted
    pub max_sessions: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "0.0.0.0".into(),
            port: 3000,
            default_aircraft: AircraftType::default(),
            max_sessions: DEFAULT_MAX_SESSIONS,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_deserialization() {
        let json = r#"
        {
          "host": "127.0.0.1",
          "port": 8080,
          "defaultAircraft": "P2008",
          "maxSessions": 16
        }
        "#;

        let config: ServerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.default_aircraft, AircraftType::P2008);
        assert_eq!(config.max_sessions, 16);
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: ServerConfig = serde_json::from_str(r#"{ "port": 4000 }"#).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 4000);
        assert_eq!(config.default_aircraft, AircraftType::C172);
        assert_eq!(config.max_sessions, DEFAULT_MAX_SESSIONS);
    }

    #[test]
    fn test_unknown_aircraft_is_rejected() {
        let result = serde_json::from_str::<ServerConfig>(r#"{ "defaultAircraft": "B737" }"#);
        assert!(result.is_err());

        let result = serde_json::from_str::<ServerConfig>(r#"{ "defaultAircraft": "p2008" }"#);
        assert!(result.is_err());
    }
}
