use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    RedSignal,
    PersonInTrack,
    Obstacle,
    SpeedLimit,
    Warning,
}

impl EventType {
    pub const ALL: [EventType; 5] = [
        EventType::RedSignal,
        EventType::PersonInTrack,
        EventType::Obstacle,
        EventType::SpeedLimit,
        EventType::Warning,
    ];

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "RED_SIGNAL" => Some(EventType::RedSignal),
            "PERSON_IN_TRACK" => Some(EventType::PersonInTrack),
            "OBSTACLE" => Some(EventType::Obstacle),
            "SPEED_LIMIT" => Some(EventType::SpeedLimit),
            "WARNING" => Some(EventType::Warning),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::RedSignal => "RED_SIGNAL",
            EventType::PersonInTrack => "PERSON_IN_TRACK",
            EventType::Obstacle => "OBSTACLE",
            EventType::SpeedLimit => "SPEED_LIMIT",
            EventType::Warning => "WARNING",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventLocation {
    pub lat: f64,
    pub lng: f64,
    pub milepost: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    #[serde(with = "timestamp")]
    pub timestamp: NaiveDateTime,
    pub frame: u32,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub confidence: f64,
    pub note: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    pub location: EventLocation,
    /// Fraction of the route's duration at which the event occurs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_ratio: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Model {
    pub id: String,
    pub name: String,
    pub size: String,
    #[serde(rename = "mAP")]
    pub map: f64,
    pub enabled: bool,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UploadKind {
    Jsonl,
    Csv,
    Mp4,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UploadStatus {
    Completed,
    Processing,
    Failed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadBatch {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: UploadKind,
    pub size: String,
    pub status: UploadStatus,
    pub upload_date: String,
}

pub mod timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}
