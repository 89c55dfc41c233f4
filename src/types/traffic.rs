//! Traffic report type

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Receiver a traffic target was last heard on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum TrafficSource {
    /// 1090 MHz Extended Squitter
    Es,
    /// 978 MHz Universal Access Transceiver
    Uat,
}

impl From<TrafficSource> for u8 {
    fn from(source: TrafficSource) -> u8 {
        match source {
            TrafficSource::Es => 1,
            TrafficSource::Uat => 2,
        }
    }
}

impl TryFrom<u8> for TrafficSource {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(TrafficSource::Es),
            2 => Ok(TrafficSource::Uat),
            other => Err(format!("unknown traffic source {}", other)),
        }
    }
}

/// One aircraft as seen by the traffic receiver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficReport {
    /// 24-bit ICAO address
    #[serde(rename = "Icao_addr")]
    pub icao_addr: u32,

    #[serde(rename = "OnGround")]
    pub on_ground: bool,

    #[serde(rename = "Lat")]
    pub lat: f64,

    #[serde(rename = "Lng")]
    pub lng: f64,

    #[serde(rename = "Position_valid")]
    pub position_valid: bool,

    /// Pressure altitude in feet
    #[serde(rename = "Alt")]
    pub alt: i32,

    /// True track in degrees
    #[serde(rename = "Track")]
    pub track: u16,

    /// Ground speed in knots
    #[serde(rename = "Speed")]
    pub speed: u16,

    #[serde(rename = "Speed_valid")]
    pub speed_valid: bool,

    /// Vertical velocity in feet per minute
    #[serde(rename = "Vvel")]
    pub vvel: i16,

    #[serde(rename = "Tail")]
    pub tail: String,

    #[serde(rename = "Last_seen")]
    pub last_seen: DateTime<Utc>,

    #[serde(rename = "Last_source")]
    pub last_source: TrafficSource,
}
