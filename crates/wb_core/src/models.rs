use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::SessionError;

/// Aircraft types with a built-in loading profile.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AircraftType {
    #[default]
    C172,
    C152,
    P2008,
    P2006T,
    P2002JF,
}

impl AircraftType {
    /// Every aircraft type, in selector order.
    pub const ALL: [AircraftType; 5] = [
        AircraftType::C172,
        AircraftType::C152,
        AircraftType::P2008,
        AircraftType::P2006T,
        AircraftType::P2002JF,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AircraftType::C172 => "C172",
            AircraftType::C152 => "C152",
            AircraftType::P2008 => "P2008",
            AircraftType::P2006T => "P2006T",
            AircraftType::P2002JF => "P2002JF",
        }
    }

    /// Reference datum the profile arms are measured from.
    pub fn datum(&self) -> &'static str {
        match self {
            AircraftType::C172 | AircraftType::C152 => "Front face of firewall",
            AircraftType::P2008 | AircraftType::P2006T => "Propeller flange",
            AircraftType::P2002JF => "Wing leading edge",
        }
    }
}

impl fmt::Display for AircraftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AircraftType {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AircraftType::ALL
            .into_iter()
            .find(|aircraft| aircraft.as_str() == s)
            .ok_or_else(|| SessionError::UnknownAircraft { name: s.into() })
    }
}

/// Editable field of a station.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum StationField {
    Weight,
    Arm,
}

impl FromStr for StationField {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weight" => Ok(StationField::Weight),
            "arm" => Ok(StationField::Arm),
            _ => Err(SessionError::UnknownField { field: s.into() }),
        }
    }
}

/// A loading point on the aircraft.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub(crate) id: String,
    pub(crate) name: String,
    /// Weight in pounds
    pub(crate) weight: f64,
    /// Arm in inches from the datum
    pub(crate) arm: f64,
}

impl Station {
    pub(crate) fn new(id: &str, name: &str, weight: f64, arm: f64) -> Self {
        Station {
            id: id.into(),
            name: name.into(),
            weight,
            arm,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn arm(&self) -> f64 {
        self.arm
    }

    /// Weight times arm, in pound-inches.
    pub fn moment(&self) -> f64 {
        self.weight * self.arm
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SessionState {
    /// Freshly cloned from the profile
    #[default]
    Default,
    /// At least one station field was changed
    Edited,
}

/// The stations currently being edited for one aircraft.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoadingSession {
    pub(crate) aircraft: AircraftType,
    pub(crate) stations: Vec<Station>,
    pub(crate) state: SessionState,
}
