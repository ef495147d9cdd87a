use crate::{AircraftType, Station};

/// Static row of an aircraft profile.
struct StationTemplate {
    id: &'static str,
    name: &'static str,
    weight: f64,
    arm: f64,
}

const fn row(id: &'static str, name: &'static str, weight: f64, arm: f64) -> StationTemplate {
    StationTemplate {
        id,
        name,
        weight,
        arm,
    }
}

// Fuel weights assume 6 lb per US gallon.
const C172: &[StationTemplate] = &[
    row("bew", "Basic Empty Weight", 1450.0, 39.0),
    row("front", "Pilot & Front Pax", 170.0, 37.0),
    row("rear", "Rear Passengers", 0.0, 73.0),
    row("bag1", "Baggage Area 1", 0.0, 95.0),
    row("bag2", "Baggage Area 2", 0.0, 123.0),
    row("fuel", "Fuel (Standard)", 30.0 * 6.0, 48.0),
];

const C152: &[StationTemplate] = &[
    row("bew", "Basic Empty Weight", 1100.0, 30.0),
    row("front", "Pilot & Pax", 170.0, 39.0),
    row("bag1", "Baggage Area 1", 0.0, 64.0),
    row("bag2", "Baggage Area 2", 0.0, 84.0),
    row("fuel", "Fuel", 24.0 * 6.0, 42.0),
];

const P2008: &[StationTemplate] = &[
    row("bew", "Basic Empty Weight", 800.0, 10.0),
    row("front", "Pilot & Pax", 170.0, 20.6),
    row("bag", "Baggage", 0.0, 39.4),
    row("fuel", "Fuel", 25.0 * 6.0, 21.3),
];

const P2006T: &[StationTemplate] = &[
    row("bew", "Basic Empty Weight", 1800.0, 11.0),
    row("front", "Pilot & Co-Pilot", 340.0, 26.2),
    row("rear", "Rear Passengers", 0.0, 59.9),
    row("bag", "Baggage", 0.0, 82.9),
    row("fuel", "Fuel", 50.0 * 6.0, 26.2),
];

const P2002JF: &[StationTemplate] = &[
    row("bew", "Basic Empty Weight", 840.0, 15.0),
    row("front", "Pilot & Pax", 170.0, 23.6),
    row("bag", "Baggage", 0.0, 35.4),
    row("fuel", "Fuel", 26.0 * 6.0, 23.6),
];

fn profile(aircraft: AircraftType) -> &'static [StationTemplate] {
    match aircraft {
        AircraftType::C172 => C172,
        AircraftType::C152 => C152,
        AircraftType::P2008 => P2008,
        AircraftType::P2006T => P2006T,
        AircraftType::P2002JF => P2002JF,
    }
}

/// Return a fresh copy of the default stations for an aircraft.
///
/// The returned stations are owned by the caller, editing them never
/// affects the profile or any other copy.
pub fn default_stations(aircraft: AircraftType) -> Vec<Station> {
    profile(aircraft)
        .iter()
        .map(|template| Station::new(template.id, template.name, template.weight, template.arm))
        .collect()
}
