use serde::{Deserialize, Serialize};
use wb_core::{
    AircraftType, BalanceSummary, LoadingSession, SessionError, SessionState, Station,
    StationField,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectAircraft {
    pub aircraft: AircraftType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStation {
    pub station_id: String,
    pub field: StationField,
    /// Raw text from the input field
    pub value: String,
}

/// A station row as displayed, with its moment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StationRow {
    pub id: String,
    pub name: String,
    pub weight: f64,
    pub arm: f64,
    pub moment: f64,
}

impl From<&Station> for StationRow {
    fn from(station: &Station) -> Self {
        StationRow {
            id: station.id().into(),
            name: station.name().into(),
            weight: station.weight(),
            arm: station.arm(),
            moment: station.moment(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EngineSnapshot {
    pub aircraft: AircraftType,
    pub state: SessionState,
    pub stations: Vec<StationRow>,
    pub summary: BalanceSummary,
    /// False when the gross weight is zero or negative
    pub cg_defined: bool,
}

/// State of one weight and balance view: the selected aircraft and the
/// loading session being edited for it.
#[derive(Debug, Clone)]
pub struct Engine {
    session: LoadingSession,
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new(AircraftType::default())
    }
}

impl Engine {
    pub fn new(aircraft: AircraftType) -> Self {
        Engine {
            session: wb_core::select_aircraft(aircraft),
        }
    }

    pub fn aircraft(&self) -> AircraftType {
        self.session.aircraft()
    }

    pub fn session(&self) -> &LoadingSession {
        &self.session
    }

    /// Switch aircraft, dropping every edit made to the previous one.
    pub fn select_aircraft(&mut self, select: SelectAircraft) -> &LoadingSession {
        self.session = wb_core::select_aircraft(select.aircraft);
        &self.session
    }

    /// Restore the defaults of the current aircraft.
    pub fn reset(&mut self) -> &LoadingSession {
        self.session = wb_core::reset_session(self.session.aircraft());
        &self.session
    }

    pub fn update_station(
        &mut self,
        update: UpdateStation,
    ) -> Result<&LoadingSession, SessionError> {
        self.session
            .update_station(&update.station_id, update.field, &update.value)?;
        Ok(&self.session)
    }

    pub fn summary(&self) -> BalanceSummary {
        self.session.summary()
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        let summary = self.summary();
        EngineSnapshot {
            aircraft: self.session.aircraft(),
            state: self.session.state(),
            stations: self.session.stations().iter().map(StationRow::from).collect(),
            cg_defined: summary.is_defined(),
            summary,
        }
    }
}
