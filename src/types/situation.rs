//! GPS/AHRS situation report type

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of the ownship GPS fix and attitude
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SituationReport {
    /// Seconds since UTC midnight of the last fix
    #[serde(rename = "LastFixSinceMidnightUTC")]
    pub last_fix_since_midnight_utc: f32,

    #[serde(rename = "Lat")]
    pub lat: f32,

    #[serde(rename = "Lng")]
    pub lng: f32,

    /// 0 = no fix, 1 = GPS, 2 = DGPS/SBAS
    #[serde(rename = "Quality")]
    pub quality: u8,

    #[serde(rename = "Satellites")]
    pub satellites: u16,

    /// Horizontal accuracy in meters
    #[serde(rename = "Accuracy")]
    pub accuracy: f32,

    #[serde(rename = "NACp")]
    pub nacp: u8,

    /// Altitude in feet MSL
    #[serde(rename = "Alt")]
    pub alt: f32,

    /// Vertical accuracy in meters
    #[serde(rename = "AccuracyVert")]
    pub accuracy_vert: f32,

    /// Feet per minute
    #[serde(rename = "GPSVertVel")]
    pub gps_vert_vel: f32,

    #[serde(rename = "LastFixLocalTime")]
    pub last_fix_local_time: DateTime<Utc>,

    #[serde(rename = "TrueCourse")]
    pub true_course: f32,

    /// Knots
    #[serde(rename = "GroundSpeed")]
    pub ground_speed: u16,

    #[serde(rename = "LastGroundTrackTime")]
    pub last_ground_track_time: DateTime<Utc>,

    #[serde(rename = "GPSTime")]
    pub gps_time: DateTime<Utc>,

    #[serde(rename = "Pitch")]
    pub pitch: f64,

    #[serde(rename = "Roll")]
    pub roll: f64,

    #[serde(rename = "Gyro_heading")]
    pub gyro_heading: f64,

    #[serde(rename = "LastAttitudeTime")]
    pub last_attitude_time: DateTime<Utc>,
}
