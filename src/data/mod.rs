mod fixtures;

use chrono::NaiveDateTime;

use crate::error::DataError;
use crate::pipeline::{geometry::RouteMetrics, timeline};
use crate::types::event::{Event, EventLocation, Model, UploadBatch, TIMESTAMP_FORMAT};
use crate::types::geo::GeoPoint;

/// A recorded run: the route the train followed and the events detected on it.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub id: String,
    pub name: String,
    pub video: String,
    pub waypoints: Vec<GeoPoint>,
    /// Chronologically ordered.
    pub events: Vec<Event>,
    /// Seconds between the first and last event.
    pub total_duration: f64,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    datasets: Vec<Dataset>,
    models: Vec<Model>,
    uploads: Vec<UploadBatch>,
}

impl Catalog {
    /// Builds the demo catalog. Every route is checked up front so a broken
    /// fixture fails here rather than on first request.
    pub fn load() -> Result<Self, DataError> {
        let datasets = fixtures::DATASETS
            .iter()
            .map(load_dataset)
            .collect::<Result<Vec<_>, _>>()?;

        let models = fixtures::MODELS
            .iter()
            .map(|m| Model {
                id: m.id.to_string(),
                name: m.name.to_string(),
                size: m.size.to_string(),
                map: m.map,
                enabled: m.enabled,
                description: m.description.to_string(),
            })
            .collect();

        let uploads = fixtures::UPLOADS
            .iter()
            .map(|(id, name, kind, size, status, date)| UploadBatch {
                id: id.to_string(),
                name: name.to_string(),
                kind: *kind,
                size: size.to_string(),
                status: *status,
                upload_date: date.to_string(),
            })
            .collect();

        Ok(Self {
            datasets,
            models,
            uploads,
        })
    }

    pub fn datasets(&self) -> &[Dataset] {
        &self.datasets
    }

    pub fn dataset(&self, id: &str) -> Option<&Dataset> {
        self.datasets.iter().find(|d| d.id == id || d.video == id)
    }

    /// The dataset the dashboard shows when none is selected.
    pub fn default_dataset(&self) -> Option<&Dataset> {
        self.datasets.first()
    }

    pub fn models(&self) -> &[Model] {
        &self.models
    }

    pub fn uploads(&self) -> &[UploadBatch] {
        &self.uploads
    }
}

fn load_dataset(raw: &fixtures::RawDataset) -> Result<Dataset, DataError> {
    let waypoints: Vec<GeoPoint> = raw.waypoints.iter().copied().map(GeoPoint::from).collect();

    RouteMetrics::compute(&waypoints).map_err(|source| DataError::InvalidRoute {
        dataset: raw.id.to_string(),
        source,
    })?;

    let events = raw
        .events
        .iter()
        .map(|e| {
            let timestamp = NaiveDateTime::parse_from_str(e.timestamp, TIMESTAMP_FORMAT)
                .map_err(|_| DataError::InvalidTimestamp {
                    event_id: e.id.to_string(),
                    value: e.timestamp.to_string(),
                })?;
            Ok(Event {
                id: e.id.to_string(),
                timestamp,
                frame: e.frame,
                event_type: e.event_type,
                confidence: e.confidence,
                note: e.note.to_string(),
                video_url: None,
                location: EventLocation {
                    lat: e.lat,
                    lng: e.lng,
                    milepost: e.milepost.to_string(),
                },
                time_ratio: None,
            })
        })
        .collect::<Result<Vec<_>, DataError>>()?;

    let events = timeline::assign_time_ratios(&timeline::sort_chronological(&events));
    let total_duration = timeline::span_seconds(&events);

    Ok(Dataset {
        id: raw.id.to_string(),
        name: raw.name.to_string(),
        video: raw.video.to_string(),
        waypoints,
        events,
        total_duration,
    })
}
