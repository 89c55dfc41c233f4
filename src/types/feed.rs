//! Feed identifiers

/// One of the report streams the server offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Feed {
    /// Aircraft traffic around the receiver
    Traffic,
    /// Receiver health and counters
    Status,
    /// Ownship GPS fix and attitude
    Situation,
}

impl Feed {
    pub const ALL: [Feed; 3] = [Feed::Traffic, Feed::Status, Feed::Situation];

    /// Path of the WebSocket push endpoint
    pub fn stream_path(self) -> &'static str {
        match self {
            Feed::Traffic => "/traffic",
            Feed::Status => "/status",
            Feed::Situation => "/situation",
        }
    }

    /// Path of the one-shot JSON snapshot endpoint
    pub fn snapshot_path(self) -> &'static str {
        match self {
            Feed::Traffic => "/getTraffic",
            Feed::Status => "/getStatus",
            Feed::Situation => "/getSituation",
        }
    }
}

impl std::fmt::Display for Feed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Feed::Traffic => write!(f, "traffic"),
            Feed::Status => write!(f, "status"),
            Feed::Situation => write!(f, "situation"),
        }
    }
}
