//! Static demo datasets: five recorded runs, each a waypoint polyline plus the
//! detections raised along it, and the model/upload catalogues.

use crate::types::event::{EventType, UploadKind, UploadStatus};

pub(super) struct RawEvent {
    pub id: &'static str,
    pub timestamp: &'static str,
    pub frame: u32,
    pub event_type: EventType,
    pub confidence: f64,
    pub note: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub milepost: &'static str,
}

impl RawEvent {
    #[allow(clippy::too_many_arguments)]
    const fn new(
        id: &'static str,
        timestamp: &'static str,
        frame: u32,
        event_type: EventType,
        confidence: f64,
        note: &'static str,
        lat: f64,
        lng: f64,
        milepost: &'static str,
    ) -> Self {
        Self {
            id,
            timestamp,
            frame,
            event_type,
            confidence,
            note,
            lat,
            lng,
            milepost,
        }
    }
}

pub(super) struct RawDataset {
    pub id: &'static str,
    pub name: &'static str,
    pub video: &'static str,
    pub waypoints: &'static [(f64, f64)],
    pub events: &'static [RawEvent],
}

pub(super) const DATASETS: &[RawDataset] = &[
    RawDataset {
        id: "line-a",
        name: "Berlin to Hamburg",
        video: "lineA_km12+400_frontcab.mp4",
        waypoints: LINE_A_ROUTE,
        events: LINE_A_EVENTS,
    },
    RawDataset {
        id: "line-b",
        name: "Munich to Berlin high-speed",
        video: "lineB_stationApproach_frontcab.mp4",
        waypoints: LINE_B_ROUTE,
        events: LINE_B_EVENTS,
    },
    RawDataset {
        id: "yard",
        name: "Rotterdam to Warsaw freight corridor",
        video: "yard_2025-09-08_0630.mp4",
        waypoints: YARD_ROUTE,
        events: YARD_EVENTS,
    },
    RawDataset {
        id: "morning-commute",
        name: "Morning commute, Berlin Hauptbahnhof",
        video: "morning_commute_berlin_hauptbahnhof.mp4",
        waypoints: MORNING_COMMUTE_ROUTE,
        events: MORNING_COMMUTE_EVENTS,
    },
    RawDataset {
        id: "night-freight",
        name: "Night freight corridor east",
        video: "night_freight_corridor_east.mp4",
        waypoints: NIGHT_FREIGHT_ROUTE,
        events: NIGHT_FREIGHT_EVENTS,
    },
];

pub(super) const LINE_A_ROUTE: &[(f64, f64)] = &[
    (52.5160, 13.4010),
    (52.5168, 13.4012),
    (52.5170, 13.4020),
    (52.5175, 13.4035),
    (52.5180, 13.4030),
    (52.5188, 13.4025),
    (52.5190, 13.4040),
    (52.5195, 13.4055),
    (52.5200, 13.4050),
    (52.5205, 13.4060),
];

pub(super) const LINE_B_ROUTE: &[(f64, f64)] = &[
    (52.5240, 13.3970),
    (52.5245, 13.3960),
    (52.5250, 13.3980),
    (52.5258, 13.3975),
    (52.5260, 13.3990),
    (52.5268, 13.4005),
    (52.5270, 13.4000),
    (52.5272, 13.4015),
    (52.5275, 13.4005),
    (52.5278, 13.4020),
    (52.5280, 13.4010),
    (52.5283, 13.4025),
    (52.5285, 13.4015),
    (52.5290, 13.4035),
];

pub(super) const YARD_ROUTE: &[(f64, f64)] = &[
    (52.5090, 13.4190),
    (52.5092, 13.4180),
    (52.5100, 13.4200),
    (52.5105, 13.4190),
    (52.5110, 13.4210),
    (52.5118, 13.4205),
    (52.5120, 13.4220),
    (52.5125, 13.4215),
    (52.5130, 13.4235),
    (52.5138, 13.4230),
    (52.5140, 13.4245),
    (52.5148, 13.4240),
    (52.5150, 13.4255),
    (52.5158, 13.4250),
    (52.5160, 13.4265),
    (52.5168, 13.4260),
    (52.5170, 13.4275),
];

pub(super) const MORNING_COMMUTE_ROUTE: &[(f64, f64)] = &[
    (52.5240, 13.3680),
    (52.5243, 13.3670),
    (52.5250, 13.3690),
    (52.5252, 13.3680),
    (52.5255, 13.3695),
    (52.5258, 13.3685),
    (52.5260, 13.3700),
    (52.5262, 13.3710),
    (52.5265, 13.3705),
    (52.5270, 13.3720),
];

pub(super) const NIGHT_FREIGHT_ROUTE: &[(f64, f64)] = &[
    (52.4790, 13.5180),
    (52.4792, 13.5160),
    (52.4800, 13.5200),
    (52.4808, 13.5190),
    (52.4810, 13.5220),
    (52.4815, 13.5210),
    (52.4820, 13.5240),
    (52.4828, 13.5230),
    (52.4830, 13.5260),
    (52.4838, 13.5250),
    (52.4840, 13.5280),
    (52.4845, 13.5270),
    (52.4850, 13.5300),
];

pub(super) const LINE_A_EVENTS: &[RawEvent] = &[
    RawEvent::new("la1", "2024-01-15 08:00:00", 100, EventType::Warning, 0.92, "Departure from Berlin Hauptbahnhof", 52.5251, 13.3694, "KM 0+000"),
    RawEvent::new("la2", "2024-01-15 08:12:15", 2240, EventType::SpeedLimit, 0.88, "City speed limit 60 km/h", 52.5800, 13.3200, "KM 15+200"),
    RawEvent::new("la3", "2024-01-15 08:25:30", 4680, EventType::PersonInTrack, 0.91, "Track worker at suburban crossing", 52.6500, 13.2400, "KM 28+600"),
    RawEvent::new("la4", "2024-01-15 08:35:45", 6420, EventType::RedSignal, 0.95, "Signal stop before Oranienburg", 52.7500, 13.2300, "KM 42+800"),
    RawEvent::new("la5", "2024-01-15 08:48:00", 8640, EventType::Obstacle, 0.87, "Fallen tree branch on track", 52.8200, 13.1800, "KM 55+400"),
    RawEvent::new("la6", "2024-01-15 09:05:20", 11280, EventType::Warning, 0.84, "Wildlife crossing zone", 52.9000, 13.0500, "KM 68+200"),
    RawEvent::new("la7", "2024-01-15 09:18:35", 13860, EventType::SpeedLimit, 0.90, "High speed section 200 km/h", 53.0200, 12.9200, "KM 82+600"),
    RawEvent::new("la8", "2024-01-15 09:28:50", 16020, EventType::PersonInTrack, 0.78, "Maintenance crew near Wittenberge", 53.0800, 12.8000, "KM 95+800"),
    RawEvent::new("la9", "2024-01-15 09:42:10", 18840, EventType::RedSignal, 0.93, "Junction signal at Ludwigslust", 53.3200, 11.4900, "KM 125+400"),
    RawEvent::new("la10", "2024-01-15 09:55:25", 21480, EventType::Warning, 0.85, "Bridge construction ahead", 53.4500, 11.1200, "KM 142+200"),
    RawEvent::new("la11", "2024-01-15 10:08:40", 24120, EventType::Obstacle, 0.89, "Freight train on parallel track", 53.5800, 10.7800, "KM 158+600"),
    RawEvent::new("la12", "2024-01-15 10:20:55", 26580, EventType::SpeedLimit, 0.86, "Approach to Schwerin - 120 km/h", 53.6300, 11.4100, "KM 172+800"),
    RawEvent::new("la13", "2024-01-15 10:35:10", 29340, EventType::PersonInTrack, 0.82, "Station platform worker", 53.6350, 11.4200, "KM 175+200"),
    RawEvent::new("la14", "2024-01-15 10:48:25", 31980, EventType::Warning, 0.88, "Weather warning - heavy rain", 53.7200, 10.9800, "KM 192+400"),
    RawEvent::new("la15", "2024-01-15 11:02:40", 34620, EventType::RedSignal, 0.91, "Signal delay at Büchen", 53.4800, 10.6200, "KM 208+600"),
    RawEvent::new("la16", "2024-01-15 11:15:55", 37260, EventType::Obstacle, 0.85, "Construction vehicle near track", 53.5500, 10.4200, "KM 222+800"),
    RawEvent::new("la17", "2024-01-15 11:28:10", 39900, EventType::SpeedLimit, 0.89, "Urban approach Hamburg 80 km/h", 53.6000, 10.2500, "KM 235+400"),
    RawEvent::new("la18", "2024-01-15 11:38:25", 42060, EventType::PersonInTrack, 0.87, "Platform preparation Hamburg-Harburg", 53.4500, 9.9800, "KM 248+200"),
    RawEvent::new("la19", "2024-01-15 11:48:40", 44220, EventType::Warning, 0.83, "Dense urban traffic crossing", 53.5200, 9.9500, "KM 258+600"),
    RawEvent::new("la20", "2024-01-15 11:58:55", 46380, EventType::RedSignal, 0.94, "Final approach Hamburg Hauptbahnhof", 53.5530, 10.0070, "KM 275+800"),
];

pub(super) const LINE_B_EVENTS: &[RawEvent] = &[
    RawEvent::new("lb1", "2024-01-16 06:00:00", 200, EventType::Warning, 0.95, "Departure Munich Hauptbahnhof", 48.1400, 11.5600, "KM 0+000"),
    RawEvent::new("lb2", "2024-01-16 06:15:30", 2850, EventType::SpeedLimit, 0.89, "Urban exit speed 160 km/h", 48.2500, 11.6200, "KM 22+400"),
    RawEvent::new("lb3", "2024-01-16 06:28:45", 5240, EventType::PersonInTrack, 0.92, "Maintenance crew near Ingolstadt", 48.7600, 11.4200, "KM 45+600"),
    RawEvent::new("lb4", "2024-01-16 06:45:10", 8210, EventType::RedSignal, 0.88, "Junction signal Ingolstadt", 48.7650, 11.4250, "KM 48+800"),
    RawEvent::new("lb5", "2024-01-16 07:02:25", 11560, EventType::Obstacle, 0.91, "Agricultural vehicle crossing", 49.0400, 11.8700, "KM 78+200"),
    RawEvent::new("lb6", "2024-01-16 07:18:40", 14720, EventType::SpeedLimit, 0.87, "High-speed section 300 km/h", 49.4500, 11.0800, "KM 115+400"),
    RawEvent::new("lb7", "2024-01-16 07:32:55", 17450, EventType::Warning, 0.85, "Weather alert - crosswinds", 49.7800, 10.9200, "KM 142+600"),
    RawEvent::new("lb8", "2024-01-16 07:48:10", 20580, EventType::PersonInTrack, 0.93, "Track inspection near Bamberg", 49.8900, 10.9000, "KM 168+800"),
    RawEvent::new("lb9", "2024-01-16 08:05:25", 24120, EventType::RedSignal, 0.90, "Station approach Bamberg", 49.8980, 10.9050, "KM 172+200"),
    RawEvent::new("lb10", "2024-01-16 08:22:40", 27840, EventType::Obstacle, 0.86, "Construction crane near track", 50.3200, 10.7800, "KM 215+400"),
    RawEvent::new("lb11", "2024-01-16 08:38:55", 31200, EventType::SpeedLimit, 0.88, "Approach Erfurt 200 km/h", 50.9800, 11.0300, "KM 258+600"),
    RawEvent::new("lb12", "2024-01-16 08:52:10", 34020, EventType::Warning, 0.84, "Tunnel approach - reduced visibility", 50.9850, 11.0350, "KM 262+800"),
    RawEvent::new("lb13", "2024-01-16 09:08:25", 37440, EventType::PersonInTrack, 0.91, "Station worker Erfurt platform", 50.9720, 11.0370, "KM 267+200"),
    RawEvent::new("lb14", "2024-01-16 09:25:40", 41160, EventType::RedSignal, 0.89, "Departure signal Erfurt", 50.9750, 11.0400, "KM 270+400"),
    RawEvent::new("lb15", "2024-01-16 09:42:55", 44880, EventType::Obstacle, 0.87, "Freight train on adjacent track", 51.3400, 11.5800, "KM 315+600"),
    RawEvent::new("lb16", "2024-01-16 09:58:10", 48240, EventType::SpeedLimit, 0.90, "High-speed corridor 280 km/h", 51.7200, 11.9600, "KM 358+800"),
    RawEvent::new("lb17", "2024-01-16 10:12:25", 51480, EventType::Warning, 0.85, "Animal crossing detection zone", 52.1300, 12.4200, "KM 402+200"),
    RawEvent::new("lb18", "2024-01-16 10:28:40", 55200, EventType::PersonInTrack, 0.88, "Signal maintenance crew", 52.2800, 12.6500, "KM 435+400"),
    RawEvent::new("lb19", "2024-01-16 10:45:55", 58920, EventType::RedSignal, 0.92, "Junction before Wittenberg", 51.8700, 12.6500, "KM 468+600"),
    RawEvent::new("lb20", "2024-01-16 11:02:10", 62640, EventType::Obstacle, 0.86, "Track maintenance equipment", 52.0200, 12.8800, "KM 501+800"),
    RawEvent::new("lb21", "2024-01-16 11:18:25", 66360, EventType::SpeedLimit, 0.89, "Berlin approach 160 km/h", 52.3500, 13.1200, "KM 535+200"),
    RawEvent::new("lb22", "2024-01-16 11:32:40", 69360, EventType::Warning, 0.87, "Urban traffic density warning", 52.4200, 13.2800, "KM 558+400"),
    RawEvent::new("lb23", "2024-01-16 11:45:55", 72240, EventType::PersonInTrack, 0.90, "Platform preparation Berlin Süd", 52.4750, 13.3400, "KM 572+600"),
    RawEvent::new("lb24", "2024-01-16 11:58:10", 75120, EventType::RedSignal, 0.94, "Final approach Berlin Hauptbahnhof", 52.5200, 13.3650, "KM 578+800"),
    RawEvent::new("lb25", "2024-01-16 12:05:25", 76800, EventType::Warning, 0.91, "Arrival Berlin Hauptbahnhof", 52.5251, 13.3694, "KM 580+000"),
];

pub(super) const YARD_EVENTS: &[RawEvent] = &[
    RawEvent::new("y1", "2025-09-08 04:00:00", 500, EventType::Warning, 0.94, "Departure Rotterdam Maasvlakte Port", 51.9500, 4.0200, "KM 0+000"),
    RawEvent::new("y2", "2025-09-08 04:18:30", 2850, EventType::Obstacle, 0.89, "Container loading crane overhead", 51.9200, 4.4800, "KM 35+200"),
    RawEvent::new("y3", "2025-09-08 04:35:45", 5640, EventType::SpeedLimit, 0.91, "Urban freight limit 80 km/h", 52.0800, 4.3100, "KM 68+400"),
    RawEvent::new("y4", "2025-09-08 04:52:20", 8420, EventType::RedSignal, 0.93, "Junction signal Utrecht", 52.0900, 5.1200, "KM 95+600"),
    RawEvent::new("y5", "2025-09-08 05:08:55", 11200, EventType::PersonInTrack, 0.85, "Track maintenance crew Amersfoort", 52.1600, 5.3900, "KM 125+800"),
    RawEvent::new("y6", "2025-09-08 05:25:10", 14040, EventType::Warning, 0.88, "Cross-border approach Netherlands-Germany", 52.2400, 6.8900, "KM 185+200"),
    RawEvent::new("y7", "2025-09-08 05:42:25", 17120, EventType::Obstacle, 0.87, "Freight train waiting on siding", 52.2200, 7.2100, "KM 215+400"),
    RawEvent::new("y8", "2025-09-08 05:58:40", 19960, EventType::SpeedLimit, 0.90, "German freight corridor 120 km/h", 52.3700, 7.9200, "KM 248+600"),
    RawEvent::new("y9", "2025-09-08 06:15:55", 23180, EventType::RedSignal, 0.92, "Osnabrück junction freight priority", 52.2700, 8.0500, "KM 275+800"),
    RawEvent::new("y10", "2025-09-08 06:32:10", 26400, EventType::PersonInTrack, 0.84, "Yard operations Hannover", 52.3700, 9.7400, "KM 342+200"),
    RawEvent::new("y11", "2025-09-08 06:48:25", 29620, EventType::Warning, 0.86, "Heavy freight load distribution check", 52.4500, 10.1800, "KM 385+400"),
    RawEvent::new("y12", "2025-09-08 07:05:40", 33120, EventType::Obstacle, 0.89, "Agricultural vehicle near Braunschweig", 52.2700, 10.5200, "KM 418+600"),
    RawEvent::new("y13", "2025-09-08 07:22:55", 36580, EventType::SpeedLimit, 0.91, "Freight speed reduction 100 km/h", 52.2400, 11.6200, "KM 485+800"),
    RawEvent::new("y14", "2025-09-08 07:38:10", 39640, EventType::RedSignal, 0.88, "Magdeburg freight classification yard", 52.1200, 11.6300, "KM 512+200"),
    RawEvent::new("y15", "2025-09-08 07:55:25", 43080, EventType::PersonInTrack, 0.85, "Locomotive change crew Berlin", 52.5200, 13.4100, "KM 595+400"),
    RawEvent::new("y16", "2025-09-08 08:12:40", 46520, EventType::Warning, 0.87, "Eastern corridor border approach", 52.3400, 14.5500, "KM 685+600"),
    RawEvent::new("y17", "2025-09-08 08:28:55", 49720, EventType::Obstacle, 0.90, "Customs inspection area Frankfurt Oder", 52.3500, 14.5500, "KM 712+800"),
    RawEvent::new("y18", "2025-09-08 08:45:10", 53160, EventType::SpeedLimit, 0.89, "Poland border freight limit 80 km/h", 52.3400, 14.6200, "KM 735+200"),
    RawEvent::new("y19", "2025-09-08 09:02:25", 56840, EventType::RedSignal, 0.93, "Polish railway system integration point", 52.2400, 15.2300, "KM 785+400"),
    RawEvent::new("y20", "2025-09-08 09:18:40", 60120, EventType::PersonInTrack, 0.86, "Track gauge compatibility check", 52.4100, 16.2200, "KM 825+600"),
    RawEvent::new("y21", "2025-09-08 09:35:55", 63720, EventType::Warning, 0.88, "Freight terminal approach Poznań", 52.4100, 16.9200, "KM 865+800"),
    RawEvent::new("y22", "2025-09-08 09:52:10", 67280, EventType::Obstacle, 0.87, "Switching locomotive on parallel track", 52.4000, 16.9300, "KM 885+200"),
    RawEvent::new("y23", "2025-09-08 10:08:25", 70840, EventType::SpeedLimit, 0.90, "Urban freight approach 60 km/h", 52.1800, 18.4500, "KM 945+400"),
    RawEvent::new("y24", "2025-09-08 10:25:40", 74640, EventType::RedSignal, 0.92, "Łódź freight bypass junction", 51.7600, 19.4600, "KM 985+600"),
    RawEvent::new("y25", "2025-09-08 10:42:55", 78440, EventType::PersonInTrack, 0.84, "Final inspection crew Warsaw approach", 52.0600, 20.6200, "KM 1045+800"),
    RawEvent::new("y26", "2025-09-08 10:58:10", 81960, EventType::Warning, 0.89, "Metropolitan freight traffic coordination", 52.1800, 20.9200, "KM 1078+200"),
    RawEvent::new("y27", "2025-09-08 11:15:25", 85760, EventType::Obstacle, 0.88, "Freight yard switching operations", 52.2200, 20.9800, "KM 1105+400"),
    RawEvent::new("y28", "2025-09-08 11:32:40", 89560, EventType::SpeedLimit, 0.91, "Final approach Warsaw Central 40 km/h", 52.2500, 21.0100, "KM 1135+600"),
    RawEvent::new("y29", "2025-09-08 11:48:55", 93120, EventType::RedSignal, 0.94, "Terminal assignment Warsaw Freight Hub", 52.2600, 21.0200, "KM 1148+800"),
    RawEvent::new("y30", "2025-09-08 12:05:10", 96720, EventType::Warning, 0.95, "Arrival Warsaw Freight Terminal", 52.2650, 21.0250, "KM 1150+000"),
];

pub(super) const MORNING_COMMUTE_EVENTS: &[RawEvent] = &[
    RawEvent::new("mc1", "2024-01-20 08:15:30", 1876, EventType::PersonInTrack, 0.97, "Commuter near platform edge during rush hour", 52.5250, 13.3690, "BERLIN-HBF+100"),
    RawEvent::new("mc2", "2024-01-20 08:17:45", 2103, EventType::RedSignal, 0.92, "Main departure signal red - platform occupied", 52.5255, 13.3695, "BERLIN-HBF+150"),
    RawEvent::new("mc3", "2024-01-20 08:19:22", 2298, EventType::SpeedLimit, 0.88, "Station speed limit 30 km/h", 52.5260, 13.3700, "BERLIN-HBF+200"),
    RawEvent::new("mc4", "2024-01-20 08:21:15", 2467, EventType::Warning, 0.85, "Dense passenger traffic warning", 52.5265, 13.3705, "BERLIN-HBF+250"),
];

pub(super) const NIGHT_FREIGHT_EVENTS: &[RawEvent] = &[
    RawEvent::new("nf1", "2024-01-21 23:45:12", 5432, EventType::Obstacle, 0.89, "Large cargo container shifted during transport", 52.4780, 13.5150, "KM 45+800"),
    RawEvent::new("nf2", "2024-01-21 23:47:38", 5678, EventType::RedSignal, 0.94, "Freight corridor signal - track ahead occupied", 52.4820, 13.5200, "KM 46+200"),
    RawEvent::new("nf3", "2024-01-21 23:49:55", 5867, EventType::SpeedLimit, 0.91, "Freight speed limit 80 km/h in curve", 52.4850, 13.5180, "KM 46+600"),
    RawEvent::new("nf4", "2024-01-21 23:52:10", 6045, EventType::PersonInTrack, 0.76, "Maintenance crew working on adjacent track", 52.4870, 13.5250, "KM 47+000"),
    RawEvent::new("nf5", "2024-01-21 23:54:33", 6234, EventType::Warning, 0.83, "Low visibility due to fog conditions", 52.4890, 13.5320, "KM 47+400"),
];

pub(super) struct RawModel {
    pub id: &'static str,
    pub name: &'static str,
    pub size: &'static str,
    pub map: f64,
    pub enabled: bool,
    pub description: &'static str,
}

pub(super) const MODELS: &[RawModel] = &[
    RawModel {
        id: "1",
        name: "SignalDetector-v2.1",
        size: "247 MB",
        map: 0.94,
        enabled: true,
        description: "Advanced signal recognition and classification",
    },
    RawModel {
        id: "2",
        name: "PersonDetection-v1.8",
        size: "156 MB",
        map: 0.89,
        enabled: true,
        description: "Human presence detection on railway tracks",
    },
    RawModel {
        id: "3",
        name: "ObstacleClassifier-v3.0",
        size: "312 MB",
        map: 0.91,
        enabled: false,
        description: "Multi-class obstacle detection and sizing",
    },
    RawModel {
        id: "4",
        name: "SpeedLimitReader-v1.2",
        size: "89 MB",
        map: 0.86,
        enabled: true,
        description: "Speed limit sign text recognition",
    },
];

pub(super) const UPLOADS: &[(&str, &str, UploadKind, &str, UploadStatus, &str)] = &[
    ("1", "lineA_km12+400_frontcab.mp4", UploadKind::Mp4, "2.3 GB", UploadStatus::Completed, "2024-01-15 14:30:00"),
    ("2", "lineB_stationApproach_frontcab.mp4", UploadKind::Mp4, "1.8 GB", UploadStatus::Completed, "2024-01-16 09:45:00"),
    ("3", "yard_2025-09-08_0630.mp4", UploadKind::Mp4, "3.1 GB", UploadStatus::Completed, "2025-09-08 07:15:00"),
    ("4", "morning_commute_berlin_hauptbahnhof.mp4", UploadKind::Mp4, "2.7 GB", UploadStatus::Completed, "2024-01-20 08:30:00"),
    ("5", "night_freight_corridor_east.mp4", UploadKind::Mp4, "4.2 GB", UploadStatus::Processing, "2024-01-21 23:45:00"),
    ("6", "annotations_batch_47.jsonl", UploadKind::Jsonl, "45.2 MB", UploadStatus::Completed, "2024-01-15 08:15:00"),
    ("7", "sensor_data_jan15.csv", UploadKind::Csv, "12.8 MB", UploadStatus::Processing, "2024-01-15 07:45:00"),
    ("8", "evening_footage.mp4", UploadKind::Mp4, "1.8 GB", UploadStatus::Failed, "2024-01-14 18:20:00"),
];
