use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Classification of an OSM railway element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    Signal,
    Switch,
    LevelCrossing,
    Milepost,
    Station,
    Platform,
    BufferStop,
    Derail,
    Crossing,
    Bridge,
    Tunnel,
    Yard,
    Depot,
    Junction,
    Roundhouse,
    Turntable,
    Washer,
    FuelStation,
    Workshop,
    Halt,
    TramStop,
    SubwayEntrance,
    WaterCrane,
    VentilationShaft,
    Other,
}

impl AssetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Signal => "signal",
            AssetType::Switch => "switch",
            AssetType::LevelCrossing => "level_crossing",
            AssetType::Milepost => "milepost",
            AssetType::Station => "station",
            AssetType::Platform => "platform",
            AssetType::BufferStop => "buffer_stop",
            AssetType::Derail => "derail",
            AssetType::Crossing => "crossing",
            AssetType::Bridge => "bridge",
            AssetType::Tunnel => "tunnel",
            AssetType::Yard => "yard",
            AssetType::Depot => "depot",
            AssetType::Junction => "junction",
            AssetType::Roundhouse => "roundhouse",
            AssetType::Turntable => "turntable",
            AssetType::Washer => "washer",
            AssetType::FuelStation => "fuel_station",
            AssetType::Workshop => "workshop",
            AssetType::Halt => "halt",
            AssetType::TramStop => "tram_stop",
            AssetType::SubwayEntrance => "subway_entrance",
            AssetType::WaterCrane => "water_crane",
            AssetType::VentilationShaft => "ventilation_shaft",
            AssetType::Other => "other",
        }
    }

    /// The query category that selects this asset type, if any.
    pub fn category(&self) -> Option<AssetCategory> {
        let category = match self {
            AssetType::Signal => AssetCategory::Signals,
            AssetType::Switch => AssetCategory::Switches,
            AssetType::LevelCrossing => AssetCategory::LevelCrossings,
            AssetType::Milepost => AssetCategory::Mileposts,
            AssetType::Station => AssetCategory::Stations,
            AssetType::Platform => AssetCategory::Platforms,
            AssetType::BufferStop => AssetCategory::BufferStops,
            AssetType::Derail => AssetCategory::Derails,
            AssetType::Crossing => AssetCategory::Crossings,
            AssetType::Bridge => AssetCategory::Bridges,
            AssetType::Tunnel => AssetCategory::Tunnels,
            AssetType::Yard => AssetCategory::Yards,
            AssetType::Depot => AssetCategory::Depots,
            AssetType::Junction => AssetCategory::Junctions,
            AssetType::Roundhouse => AssetCategory::Roundhouses,
            AssetType::Turntable => AssetCategory::Turntables,
            AssetType::Washer => AssetCategory::Washers,
            AssetType::FuelStation => AssetCategory::FuelStations,
            AssetType::Workshop => AssetCategory::Workshops,
            AssetType::Halt => AssetCategory::Halts,
            AssetType::TramStop => AssetCategory::TramStops,
            AssetType::SubwayEntrance => AssetCategory::SubwayEntrances,
            AssetType::WaterCrane => AssetCategory::WaterCranes,
            AssetType::VentilationShaft => AssetCategory::VentilationShafts,
            AssetType::Other => return None,
        };
        Some(category)
    }
}

/// Filter groups a client can request from the asset endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssetCategory {
    Signals,
    Switches,
    LevelCrossings,
    Mileposts,
    Stations,
    Platforms,
    BufferStops,
    Derails,
    Crossings,
    Bridges,
    Tunnels,
    Yards,
    Depots,
    Junctions,
    Roundhouses,
    Turntables,
    Washers,
    FuelStations,
    Workshops,
    Halts,
    TramStops,
    SubwayEntrances,
    WaterCranes,
    VentilationShafts,
}

impl AssetCategory {
    /// Used when a request names no categories.
    pub const DEFAULT: [AssetCategory; 2] = [AssetCategory::Signals, AssetCategory::LevelCrossings];

    pub fn from_str(s: &str) -> Option<Self> {
        let category = match s.trim() {
            "signals" => AssetCategory::Signals,
            "switches" => AssetCategory::Switches,
            "levelCrossings" => AssetCategory::LevelCrossings,
            "mileposts" => AssetCategory::Mileposts,
            "stations" => AssetCategory::Stations,
            "platforms" => AssetCategory::Platforms,
            "bufferStops" => AssetCategory::BufferStops,
            "derails" => AssetCategory::Derails,
            "crossings" => AssetCategory::Crossings,
            "bridges" => AssetCategory::Bridges,
            "tunnels" => AssetCategory::Tunnels,
            "yards" => AssetCategory::Yards,
            "depots" => AssetCategory::Depots,
            "junctions" => AssetCategory::Junctions,
            "roundhouses" => AssetCategory::Roundhouses,
            "turntables" => AssetCategory::Turntables,
            "washers" => AssetCategory::Washers,
            "fuelStations" => AssetCategory::FuelStations,
            "workshops" => AssetCategory::Workshops,
            "halts" => AssetCategory::Halts,
            "tramStops" => AssetCategory::TramStops,
            "subwayEntrances" => AssetCategory::SubwayEntrances,
            "waterCranes" => AssetCategory::WaterCranes,
            "ventilationShafts" => AssetCategory::VentilationShafts,
            _ => return None,
        };
        Some(category)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetCategory::Signals => "signals",
            AssetCategory::Switches => "switches",
            AssetCategory::LevelCrossings => "levelCrossings",
            AssetCategory::Mileposts => "mileposts",
            AssetCategory::Stations => "stations",
            AssetCategory::Platforms => "platforms",
            AssetCategory::BufferStops => "bufferStops",
            AssetCategory::Derails => "derails",
            AssetCategory::Crossings => "crossings",
            AssetCategory::Bridges => "bridges",
            AssetCategory::Tunnels => "tunnels",
            AssetCategory::Yards => "yards",
            AssetCategory::Depots => "depots",
            AssetCategory::Junctions => "junctions",
            AssetCategory::Roundhouses => "roundhouses",
            AssetCategory::Turntables => "turntables",
            AssetCategory::Washers => "washers",
            AssetCategory::FuelStations => "fuelStations",
            AssetCategory::Workshops => "workshops",
            AssetCategory::Halts => "halts",
            AssetCategory::TramStops => "tramStops",
            AssetCategory::SubwayEntrances => "subwayEntrances",
            AssetCategory::WaterCranes => "waterCranes",
            AssetCategory::VentilationShafts => "ventilationShafts",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RailwayAsset {
    pub id: String,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub lat: f64,
    pub lon: f64,
    pub tags: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub description: String,
}
