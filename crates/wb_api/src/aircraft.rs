use axum::{Json, extract::Path};
use serde::{Deserialize, Serialize};
use wb_core::AircraftType;
use wb_engine::StationRow;

use crate::app_state::ApiError;

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AircraftInfo {
    pub aircraft: AircraftType,
    pub datum: String,
}

/// List the aircraft types with a loading profile
pub async fn list_aircraft() -> Json<Vec<AircraftInfo>> {
    tracing::info!("Listing aircraft profiles");
    Json(
        AircraftType::ALL
            .into_iter()
            .map(|aircraft| AircraftInfo {
                aircraft,
                datum: aircraft.datum().into(),
            })
            .collect(),
    )
}

/// Get the default stations of an aircraft profile
pub async fn get_default_stations(
    Path(aircraft): Path<String>,
) -> Result<Json<Vec<StationRow>>, ApiError> {
    let aircraft: AircraftType = aircraft.parse()?;
    tracing::info!("Getting default stations for {}", aircraft);
    let stations = wb_core::default_stations(aircraft);
    Ok(Json(stations.iter().map(StationRow::from).collect()))
}
