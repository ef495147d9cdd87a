use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{LoadingSession, Station};

/// Return the sum of all station weights.
pub fn total_weight(stations: &[Station]) -> f64 {
    stations
        .iter()
        .fold(0.0, |total, station| total + station.weight)
}

/// Return the sum of `weight * arm` over all stations.
pub fn total_moment(stations: &[Station]) -> f64 {
    stations
        .iter()
        .fold(0.0, |total, station| total + station.moment())
}

/// Return the center of gravity, in inches from the datum.
///
/// When the total weight is zero or negative there is no meaningful CG and
/// `0.0` is returned instead. Callers must not read that value as a balanced
/// aircraft, see [`BalanceSummary::is_defined`].
pub fn center_of_gravity(stations: &[Station]) -> f64 {
    let weight = total_weight(stations);
    if weight > 0.0 {
        total_moment(stations) / weight
    } else {
        0.0
    }
}

/// Totals of a loading session, recomputed from scratch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSummary {
    pub total_weight: f64,
    pub total_moment: f64,
    pub center_of_gravity: f64,
}

impl BalanceSummary {
    pub fn of(session: &LoadingSession) -> Self {
        Self::from_stations(session.stations())
    }

    pub fn from_stations(stations: &[Station]) -> Self {
        BalanceSummary {
            total_weight: total_weight(stations),
            total_moment: total_moment(stations),
            center_of_gravity: center_of_gravity(stations),
        }
    }

    /// Whether the loading has a positive total weight.
    pub fn is_defined(&self) -> bool {
        self.total_weight > 0.0
    }
}

impl fmt::Display for BalanceSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "gross weight {} lbs, moment {}, CG {:.2}",
            self.total_weight, self.total_moment, self.center_of_gravity
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn stations() -> Vec<Station> {
        vec![
            Station::new("a", "A", 100.0, 10.0),
            Station::new("b", "B", 50.5, 20.25),
            Station::new("c", "C", 0.0, 300.0),
        ]
    }

    #[test]
    fn test_totals() {
        let stations = stations();
        assert_eq!(total_weight(&stations), 150.5);
        assert_eq!(total_moment(&stations), 100.0 * 10.0 + 50.5 * 20.25);
        assert_eq!(
            center_of_gravity(&stations),
            (100.0 * 10.0 + 50.5 * 20.25) / 150.5
        );
    }

    #[test]
    fn test_totals_ignore_station_order() {
        let stations = stations();
        let mut reversed = stations.clone();
        reversed.reverse();

        assert_eq!(total_weight(&stations), total_weight(&reversed));
        assert_eq!(total_moment(&stations), total_moment(&reversed));
    }

    #[test]
    fn test_zero_weight_cg_is_sentinel() {
        let stations = vec![
            Station::new("a", "A", 0.0, 10.0),
            Station::new("b", "B", 0.0, 20.0),
        ];
        assert_eq!(total_weight(&stations), 0.0);
        assert_eq!(center_of_gravity(&stations), 0.0);
        assert!(!BalanceSummary::from_stations(&stations).is_defined());
    }

    #[test]
    fn test_negative_weight_cg_is_sentinel() {
        let stations = vec![
            Station::new("a", "A", -200.0, 10.0),
            Station::new("b", "B", 50.0, 20.0),
        ];
        assert_eq!(total_weight(&stations), -150.0);
        assert_eq!(total_moment(&stations), -1000.0);
        assert_eq!(center_of_gravity(&stations), 0.0);
    }

    #[test]
    fn test_empty_stations() {
        let summary = BalanceSummary::from_stations(&[]);
        assert_eq!(summary.total_weight, 0.0);
        assert_eq!(summary.total_moment, 0.0);
        assert_eq!(summary.center_of_gravity, 0.0);
    }

    #[test]
    fn test_display_rounds_cg_only_for_presentation() {
        let stations = vec![
            Station::new("bew", "Basic Empty Weight", 1450.0, 39.0),
            Station::new("front", "Pilot", 170.0, 37.0),
            Station::new("fuel", "Fuel", 180.0, 48.0),
        ];
        let summary = BalanceSummary::from_stations(&stations);

        assert_eq!(
            summary.to_string(),
            "gross weight 1800 lbs, moment 71480, CG 39.71"
        );
        assert_eq!(summary.center_of_gravity, 71480.0 / 1800.0);

        let empty = BalanceSummary::from_stations(&[]);
        assert_eq!(empty.to_string(), "gross weight 0 lbs, moment 0, CG 0.00");
    }
}
