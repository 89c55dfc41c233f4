//! Hardcoded report generators
//!
//! These stand in for real receiver hardware. Every value is constant except
//! the timestamps, which track the wall clock so clients can see the stream
//! advancing.

use std::time::Instant;

use chrono::Utc;

use super::ReportSource;
use crate::types::{SituationReport, StatusReport, TrafficReport, TrafficSource};
use crate::utils::{millis_since, seconds_since_midnight};

/// A single aircraft holding position over the bay
#[derive(Debug, Default)]
pub struct SimulatedTraffic;

impl SimulatedTraffic {
    pub fn new() -> Self {
        Self
    }
}

impl ReportSource<TrafficReport> for SimulatedTraffic {
    fn next_report(&self) -> TrafficReport {
        TrafficReport {
            icao_addr: 0xA4_5B_C2,
            on_ground: false,
            lat: 37.6188,
            lng: -122.375,
            position_valid: true,
            alt: 3500,
            track: 284,
            speed: 142,
            speed_valid: true,
            vvel: 0,
            tail: "N396CA".to_string(),
            last_seen: Utc::now(),
            last_source: TrafficSource::Es,
        }
    }
}

/// Receiver status with fixed counters and a live uptime
#[derive(Debug)]
pub struct SimulatedStatus {
    started: Instant,
}

impl SimulatedStatus {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl Default for SimulatedStatus {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportSource<StatusReport> for SimulatedStatus {
    fn next_report(&self) -> StatusReport {
        StatusReport {
            version: crate::VERSION.to_string(),
            devices: 2,
            connected_users: 1,
            uat_messages_last_minute: 312,
            uat_messages_max: 1284,
            es_messages_last_minute: 5420,
            es_messages_max: 11893,
            gps_satellites_locked: 9,
            gps_connected: true,
            gps_solution: "3D GPS + SBAS".to_string(),
            uptime: millis_since(self.started),
            cpu_temp: 47.2,
        }
    }
}

/// A steady cruise fix with level attitude
#[derive(Debug, Default)]
pub struct SimulatedSituation;

impl SimulatedSituation {
    pub fn new() -> Self {
        Self
    }
}

impl ReportSource<SituationReport> for SimulatedSituation {
    fn next_report(&self) -> SituationReport {
        let now = Utc::now();
        SituationReport {
            last_fix_since_midnight_utc: seconds_since_midnight(&now),
            lat: 37.4613,
            lng: -122.1150,
            quality: 2,
            satellites: 9,
            accuracy: 3.2,
            nacp: 10,
            alt: 4500.0,
            accuracy_vert: 5.1,
            gps_vert_vel: 0.0,
            last_fix_local_time: now,
            true_course: 312.0,
            ground_speed: 118,
            last_ground_track_time: now,
            gps_time: now,
            pitch: 2.5,
            roll: -0.8,
            gyro_heading: 309.4,
            last_attitude_time: now,
        }
    }
}
