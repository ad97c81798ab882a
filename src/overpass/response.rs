use std::collections::BTreeMap;

use rayon::prelude::*;
use serde::Deserialize;

use crate::types::asset::{AssetType, RailwayAsset};

#[derive(Debug, Clone, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<Element>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Element {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: i64,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    #[serde(default)]
    pub geometry: Vec<Coordinate>,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

pub fn parse_response(response: &OverpassResponse) -> Vec<RailwayAsset> {
    response
        .elements
        .par_iter()
        .filter_map(asset_from_element)
        .collect()
}

fn asset_from_element(element: &Element) -> Option<RailwayAsset> {
    let (lat, lon) = match element.kind.as_str() {
        "node" => (element.lat?, element.lon?),
        // Ways are pinned to their first vertex.
        "way" => {
            let first = element.geometry.first()?;
            (first.lat, first.lon)
        }
        _ => return None,
    };

    let railway = element.tags.get("railway")?;
    let asset_type = classify(railway, &element.tags);
    let name = element
        .tags
        .get("name")
        .or_else(|| element.tags.get("ref"))
        .cloned();

    Some(RailwayAsset {
        id: format!("{}_{}", element.kind, element.id),
        asset_type,
        lat,
        lon,
        description: describe(&element.tags, asset_type),
        tags: element.tags.clone(),
        name,
    })
}

pub fn classify(railway: &str, tags: &BTreeMap<String, String>) -> AssetType {
    match railway {
        "signal" => AssetType::Signal,
        "switch" | "railway_crossing" => AssetType::Switch,
        "level_crossing" => AssetType::LevelCrossing,
        "milestone" | "milepost" => AssetType::Milepost,
        "station" => AssetType::Station,
        "platform" => AssetType::Platform,
        "buffer_stop" => AssetType::BufferStop,
        "derail" => AssetType::Derail,
        "crossing" => AssetType::Crossing,
        "yard" => AssetType::Yard,
        "depot" => AssetType::Depot,
        "junction" => AssetType::Junction,
        "roundhouse" => AssetType::Roundhouse,
        "turntable" => AssetType::Turntable,
        "wash" => AssetType::Washer,
        "fuel" => AssetType::FuelStation,
        "workshop" => AssetType::Workshop,
        "halt" => AssetType::Halt,
        "tram_stop" => AssetType::TramStop,
        "subway_entrance" => AssetType::SubwayEntrance,
        "water_crane" | "water_tower" => AssetType::WaterCrane,
        "ventilation_shaft" => AssetType::VentilationShaft,
        _ => {
            let tag = |key: &str| tags.get(key).map(String::as_str);
            if matches!(tag("bridge"), Some("yes" | "viaduct")) {
                AssetType::Bridge
            } else if tag("tunnel") == Some("yes") {
                AssetType::Tunnel
            } else if tag("public_transport") == Some("station") {
                AssetType::Station
            } else if tag("public_transport") == Some("platform") {
                AssetType::Platform
            } else if tag("landuse") == Some("railway") {
                AssetType::Yard
            } else {
                AssetType::Other
            }
        }
    }
}

/// Human-readable summary of the tags that matter for an asset type.
pub fn describe(tags: &BTreeMap<String, String>, asset_type: AssetType) -> String {
    let fact = |label: &str, key: &str, suffix: &str| {
        tags.get(key).map(|value| format!("{label}{value}{suffix}"))
    };

    let heading = match asset_type {
        AssetType::Bridge if tags.get("bridge").map(String::as_str) == Some("viaduct") => {
            Some("Railway viaduct")
        }
        AssetType::Bridge => Some("Railway bridge"),
        AssetType::Tunnel => Some("Railway tunnel"),
        AssetType::Yard => Some("Railway yard"),
        AssetType::Depot => Some("Railway depot"),
        AssetType::Junction => Some("Railway junction"),
        AssetType::Roundhouse => Some("Railway roundhouse"),
        AssetType::Turntable => Some("Railway turntable"),
        AssetType::Washer => Some("Train washing facility"),
        AssetType::FuelStation => Some("Railway fuel station"),
        AssetType::Workshop => Some("Railway workshop"),
        _ => None,
    };

    let facts = match asset_type {
        AssetType::Signal => vec![
            fact("Main signal: ", "railway:signal:main", ""),
            fact("Distant signal: ", "railway:signal:distant", ""),
            fact("Shunting signal: ", "railway:signal:shunting", ""),
        ],
        AssetType::Switch => vec![fact("Switch ", "ref", ""), fact("Operator: ", "operator", "")],
        AssetType::LevelCrossing => vec![
            fact("Barrier: ", "barrier", ""),
            fact("Supervision: ", "supervision", ""),
        ],
        AssetType::Milepost => vec![
            fact("Distance: ", "distance", ""),
            fact("Mile: ", "railway_mile", ""),
        ],
        AssetType::Station => vec![
            fact("Station: ", "name", ""),
            fact("Operator: ", "operator", ""),
            fact("Reference: ", "railway_ref", ""),
        ],
        AssetType::Platform => vec![fact("Platform ", "ref", ""), fact("Length: ", "length", "m")],
        AssetType::BufferStop => vec![fact("Type: ", "type", "")],
        AssetType::Crossing => vec![fact("Reference: ", "crossing_ref", "")],
        AssetType::Bridge => vec![fact("Name: ", "name", "")],
        AssetType::Tunnel => vec![fact("Name: ", "name", ""), fact("Length: ", "length", "m")],
        AssetType::Yard | AssetType::Depot | AssetType::Roundhouse | AssetType::Washer => {
            vec![fact("Name: ", "name", ""), fact("Operator: ", "operator", "")]
        }
        AssetType::Junction => vec![fact("Name: ", "name", ""), fact("Reference: ", "ref", "")],
        AssetType::Turntable => vec![
            fact("Name: ", "name", ""),
            fact("Diameter: ", "diameter", "m"),
        ],
        AssetType::FuelStation => vec![fact("Name: ", "name", ""), fact("Fuel type: ", "fuel", "")],
        AssetType::Workshop => vec![
            fact("Name: ", "name", ""),
            fact("Operator: ", "operator", ""),
            fact("Service: ", "service", ""),
        ],
        _ => Vec::new(),
    };

    let mut parts: Vec<String> = heading.map(str::to_string).into_iter().collect();
    parts.extend(facts.into_iter().flatten());

    if let Some(operator) = fact("Operator: ", "operator", "") {
        if !parts.contains(&operator) {
            parts.push(operator);
        }
    }
    parts.extend(fact("Electrified: ", "electrified", ""));

    if parts.is_empty() {
        format!("Railway {}", asset_type.as_str().replace('_', " "))
    } else {
        parts.join(" • ")
    }
}
