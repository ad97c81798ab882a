use std::collections::BTreeSet;

use crate::types::asset::AssetCategory;
use crate::types::geo::BoundingBox;

/// Builds an Overpass QL union query for railway assets inside a bbox.
#[derive(Debug, Clone)]
pub struct OverpassQuery {
    bbox: BoundingBox,
    categories: BTreeSet<AssetCategory>,
}

impl OverpassQuery {
    pub fn new(bbox: BoundingBox) -> Self {
        Self {
            bbox,
            categories: BTreeSet::new(),
        }
    }

    pub fn with(mut self, category: AssetCategory) -> Self {
        self.categories.insert(category);
        self
    }

    pub fn with_all<I>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = AssetCategory>,
    {
        self.categories.extend(categories);
        self
    }

    pub fn categories(&self) -> impl Iterator<Item = &AssetCategory> {
        self.categories.iter()
    }

    pub fn build(&self) -> String {
        let bbox = self.bbox.to_overpass();
        let mut query = String::from("[out:json][timeout:25];\n(\n");
        for category in &self.categories {
            for selector in selectors(*category) {
                query.push_str(&format!("  {selector}({bbox});\n"));
            }
        }
        query.push_str(");\nout geom;\n");
        query
    }
}

fn selectors(category: AssetCategory) -> &'static [&'static str] {
    match category {
        AssetCategory::Signals => &[r#"node["railway"="signal"]"#, r#"way["railway"="signal"]"#],
        AssetCategory::Switches => &[
            r#"node["railway"="switch"]"#,
            r#"node["railway"="railway_crossing"]"#,
        ],
        AssetCategory::LevelCrossings => &[
            r#"node["railway"="level_crossing"]"#,
            r#"way["railway"="level_crossing"]"#,
        ],
        AssetCategory::Mileposts => &[
            r#"node["railway"="milestone"]"#,
            r#"node["railway"="milepost"]"#,
        ],
        AssetCategory::Stations => &[
            r#"node["railway"="station"]"#,
            r#"way["railway"="station"]"#,
            r#"node["public_transport"="station"]["railway"]"#,
        ],
        AssetCategory::Platforms => &[
            r#"node["railway"="platform"]"#,
            r#"way["railway"="platform"]"#,
        ],
        AssetCategory::BufferStops => &[r#"node["railway"="buffer_stop"]"#],
        AssetCategory::Derails => &[r#"node["railway"="derail"]"#],
        AssetCategory::Crossings => &[r#"node["railway"="crossing"]"#],
        AssetCategory::Bridges => &[
            r#"way["railway"]["bridge"="yes"]"#,
            r#"way["railway"]["bridge"~"^(viaduct|aqueduct|boardwalk)$"]"#,
        ],
        AssetCategory::Tunnels => &[r#"way["railway"]["tunnel"="yes"]"#],
        AssetCategory::Yards => &[
            r#"node["railway"="yard"]"#,
            r#"way["railway"="yard"]"#,
            r#"way["landuse"="railway"]"#,
        ],
        AssetCategory::Depots => &[r#"node["railway"="depot"]"#, r#"way["railway"="depot"]"#],
        AssetCategory::Junctions => &[r#"node["railway"="junction"]"#],
        AssetCategory::Roundhouses => &[
            r#"node["railway"="roundhouse"]"#,
            r#"way["railway"="roundhouse"]"#,
        ],
        AssetCategory::Turntables => &[
            r#"node["railway"="turntable"]"#,
            r#"way["railway"="turntable"]"#,
        ],
        AssetCategory::Washers => &[r#"node["railway"="wash"]"#, r#"way["railway"="wash"]"#],
        AssetCategory::FuelStations => &[r#"node["railway"="fuel"]"#, r#"way["railway"="fuel"]"#],
        AssetCategory::Workshops => &[
            r#"node["railway"="workshop"]"#,
            r#"way["railway"="workshop"]"#,
        ],
        AssetCategory::Halts => &[r#"node["railway"="halt"]"#, r#"way["railway"="halt"]"#],
        AssetCategory::TramStops => &[
            r#"node["railway"="tram_stop"]"#,
            r#"node["public_transport"="stop_position"]["tram"="yes"]"#,
        ],
        AssetCategory::SubwayEntrances => &[
            r#"node["railway"="subway_entrance"]"#,
            r#"node["railway"="subway"]["entrance"]"#,
        ],
        AssetCategory::WaterCranes => &[
            r#"node["railway"="water_crane"]"#,
            r#"node["railway"="water_tower"]"#,
        ],
        AssetCategory::VentilationShafts => &[
            r#"node["railway"="ventilation_shaft"]"#,
            r#"way["railway"="ventilation_shaft"]"#,
        ],
    }
}
