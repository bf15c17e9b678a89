use serde::{Deserialize, Serialize};

/// Shipment progress for a tracked order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingInfo {
    pub status: Option<String>,
    #[serde(default)]
    pub events: Vec<TrackingEvent>,
    pub eta: Option<String>,
    pub carrier: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackingEvent {
    pub occurred_at: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
}
