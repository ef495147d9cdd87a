//! Weight & Balance core
//!
//! Aircraft loading profiles, editable loading sessions and the
//! moment / center of gravity arithmetic built on top of them.

mod balance;
mod models;
mod profiles;

pub use crate::balance::*;
pub use crate::models::*;
pub use crate::profiles::default_stations;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Station {station_id} does not exist in the {aircraft} profile")]
    StationNotFound {
        aircraft: AircraftType,
        station_id: String,
    },
    #[error("Unknown station field {field:?}, expected \"weight\" or \"arm\"")]
    UnknownField { field: String },
    #[error("Unknown aircraft type {name:?}")]
    UnknownAircraft { name: String },
}

/// Start a loading session from the default profile of `aircraft`.
pub fn select_aircraft(aircraft: AircraftType) -> LoadingSession {
    tracing::info!("Loading default stations for {}", aircraft);
    LoadingSession {
        aircraft,
        stations: default_stations(aircraft),
        state: SessionState::Default,
    }
}

/// Discard every edit and start over from the profile of `aircraft`.
pub fn reset_session(aircraft: AircraftType) -> LoadingSession {
    tracing::info!("Resetting loading session for {}", aircraft);
    select_aircraft(aircraft)
}

/// Parse a user-entered number.
///
/// Reads the longest numeric prefix after leading whitespace, so `"12 lbs"`
/// gives `12.0` and `"1.2.3"` gives `1.2`. Empty, non-numeric and non-finite
/// input all become `0.0`, so a cleared field cannot be told apart from an
/// explicit zero.
pub fn parse_numeric(raw_value: &str) -> f64 {
    let trimmed = raw_value.trim_start();
    let prefix = &trimmed[..numeric_prefix_len(trimmed)];
    match prefix.parse::<f64>() {
        Ok(value) if value.is_finite() => {
            if prefix.len() < trimmed.trim_end().len() {
                tracing::warn!("Ignoring trailing text in {:?}", raw_value);
            }
            value
        }
        _ => {
            if !trimmed.is_empty() {
                tracing::warn!("Coercing non-numeric input {:?} to 0", raw_value);
            }
            0.0
        }
    }
}

/// Length of the leading `[+-]digits[.digits][(e|E)[+-]digits]` run.
fn numeric_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|byte| byte.is_ascii_digit())
            .count()
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let integer_digits = digits_from(end);
    end += integer_digits;

    let mut fraction_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction_digits = digits_from(end + 1);
        if integer_digits > 0 || fraction_digits > 0 {
            end += 1 + fraction_digits;
        }
    }
    if integer_digits == 0 && fraction_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let exponent_digits = digits_from(exponent);
        if exponent_digits > 0 {
            end = exponent + exponent_digits;
        }
    }
    end
}

impl LoadingSession {
    pub fn aircraft(&self) -> AircraftType {
        self.aircraft
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn station(&self, station_id: &str) -> Option<&Station> {
        self.stations.iter().find(|station| station.id == station_id)
    }

    /// Set one field of one station from raw text input.
    ///
    /// Other stations are left untouched. An unknown `station_id` leaves the
    /// whole session unchanged.
    pub fn update_station(
        &mut self,
        station_id: &str,
        field: StationField,
        raw_value: &str,
    ) -> Result<&Station, SessionError> {
        let value = parse_numeric(raw_value);
        let aircraft = self.aircraft;
        let Some(station) = self
            .stations
            .iter_mut()
            .find(|station| station.id == station_id)
        else {
            tracing::warn!("No station {} on {}", station_id, aircraft);
            return Err(SessionError::StationNotFound {
                aircraft,
                station_id: station_id.into(),
            });
        };

        tracing::debug!(
            "Setting {:?} of {} on {} to {}",
            field,
            station_id,
            aircraft,
            value
        );
        match field {
            StationField::Weight => station.weight = value,
            StationField::Arm => station.arm = value,
        }
        self.state = SessionState::Edited;
        Ok(station)
    }

    pub fn total_weight(&self) -> f64 {
        total_weight(&self.stations)
    }

    pub fn total_moment(&self) -> f64 {
        total_moment(&self.stations)
    }

    pub fn center_of_gravity(&self) -> f64 {
        center_of_gravity(&self.stations)
    }

    pub fn summary(&self) -> BalanceSummary {
        BalanceSummary::of(self)
    }
}
