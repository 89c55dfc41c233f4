//! Report types pushed to clients
//!
//! Every report is a flat value record: built once per tick, serialized
//! once, then dropped. Field names on the wire keep the receiver's
//! historical JSON spelling (`Icao_addr`, `GPS_solution`, ...).

mod feed;
mod situation;
mod status;
mod traffic;

pub use feed::Feed;
pub use situation::SituationReport;
pub use status::StatusReport;
pub use traffic::{TrafficReport, TrafficSource};
