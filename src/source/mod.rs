//! Report sources
//!
//! A [`ReportSource`] produces the next report for a feed. The push loop and
//! the snapshot endpoints only ever see this trait, so a real receiver can
//! replace the simulated generators without touching delivery.

mod simulated;

use std::sync::Arc;

pub use simulated::{SimulatedSituation, SimulatedStatus, SimulatedTraffic};

use crate::types::{SituationReport, StatusReport, TrafficReport};

/// Trait for anything that can produce reports of type `R`
///
/// Implementations must be cheap to call: the push loop calls
/// `next_report` once per tick for every connected client.
pub trait ReportSource<R>: Send + Sync {
    /// Build a fresh report describing the current instant
    fn next_report(&self) -> R;
}

impl<R, F> ReportSource<R> for F
where
    F: Fn() -> R + Send + Sync,
{
    fn next_report(&self) -> R {
        self()
    }
}

/// Shared handle to a source, cloned into every connection task
pub type SharedSource<R> = Arc<dyn ReportSource<R>>;

/// The set of sources backing the three feeds
#[derive(Clone)]
pub struct Sources {
    pub traffic: SharedSource<TrafficReport>,
    pub status: SharedSource<StatusReport>,
    pub situation: SharedSource<SituationReport>,
}

impl Sources {
    /// Sources that emit hardcoded simulated reports
    pub fn simulated() -> Self {
        Self {
            traffic: Arc::new(SimulatedTraffic::new()),
            status: Arc::new(SimulatedStatus::new()),
            situation: Arc::new(SimulatedSituation::new()),
        }
    }
}

impl Default for Sources {
    fn default() -> Self {
        Self::simulated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn test_closure_is_a_source() {
        let counter = AtomicU32::new(0);
        let source = move || counter.fetch_add(1, Ordering::SeqCst);

        assert_eq!(source.next_report(), 0);
        assert_eq!(source.next_report(), 1);
    }

    #[test]
    fn test_sources_can_be_swapped() {
        let mut sources = Sources::simulated();
        let mut fixed = SimulatedTraffic::new().next_report();
        fixed.tail = "REPLACED".to_string();
        sources.traffic = Arc::new(move || fixed.clone());

        assert_eq!(sources.traffic.next_report().tail, "REPLACED");
    }
}
