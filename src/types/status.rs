//! System status report type

use serde::{Deserialize, Serialize};

/// Receiver health and message rate counters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusReport {
    #[serde(rename = "Version")]
    pub version: String,

    /// Number of attached radios
    #[serde(rename = "Devices")]
    pub devices: u32,

    #[serde(rename = "Connected_Users")]
    pub connected_users: u32,

    #[serde(rename = "UAT_messages_last_minute")]
    pub uat_messages_last_minute: u32,

    #[serde(rename = "UAT_messages_max")]
    pub uat_messages_max: u32,

    #[serde(rename = "ES_messages_last_minute")]
    pub es_messages_last_minute: u32,

    #[serde(rename = "ES_messages_max")]
    pub es_messages_max: u32,

    #[serde(rename = "GPS_satellites_locked")]
    pub gps_satellites_locked: u16,

    #[serde(rename = "GPS_connected")]
    pub gps_connected: bool,

    /// Human readable fix type, e.g. "3D GPS + SBAS"
    #[serde(rename = "GPS_solution")]
    pub gps_solution: String,

    /// Milliseconds since the server started
    #[serde(rename = "Uptime")]
    pub uptime: u64,

    /// CPU temperature in degrees Celsius
    #[serde(rename = "CPUTemp")]
    pub cpu_temp: f32,
}
