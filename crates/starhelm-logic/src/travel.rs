//! Travel-window progress — how far along a transit a player is.
//!
//! A travel window is the [departure, arrival] interval, in milliseconds
//! since the epoch, sourced from player records (which store epoch seconds).
//! Progress is recomputed from the absolute timestamps every time it is
//! asked for, so late or skipped refreshes can never drift.

use serde::{Deserialize, Serialize};

/// A [departure, arrival] transit interval in epoch milliseconds.
///
/// The window is *inactive* (not a transit at all) when either endpoint is
/// missing or the arrival does not come after the departure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelWindow {
    pub departure_ms: Option<i64>,
    pub arrival_ms: Option<i64>,
}

/// Derived transit state at a single instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TravelProgress {
    /// Departure has passed and arrival has not.
    pub is_traveling: bool,
    /// The arrival instant has passed.
    pub has_arrived: bool,
    /// Completion in percent, 0–100.
    pub progress: f32,
    /// Whole seconds until arrival, rounded up, never negative.
    pub remaining_seconds: i64,
    /// Milliseconds since departure.
    pub elapsed_ms: i64,
    /// Total window length in milliseconds.
    pub total_ms: i64,
}

impl TravelWindow {
    pub fn new(departure_ms: Option<i64>, arrival_ms: Option<i64>) -> Self {
        Self {
            departure_ms,
            arrival_ms,
        }
    }

    /// Build from epoch-second timestamps as stored in player records.
    pub fn from_epoch_seconds(departure_s: Option<i64>, arrival_s: Option<i64>) -> Self {
        Self {
            departure_ms: departure_s.map(|s| s * 1000),
            arrival_ms: arrival_s.map(|s| s * 1000),
        }
    }

    /// Whether this window describes a real transit.
    pub fn is_active(&self) -> bool {
        match (self.departure_ms, self.arrival_ms) {
            (Some(dep), Some(arr)) => arr > dep,
            _ => false,
        }
    }

    /// Compute transit state as of `now_ms`.
    ///
    /// An inactive window resolves to the all-zero "not traveling" state
    /// rather than an error.
    pub fn progress_at(&self, now_ms: i64) -> TravelProgress {
        let (departure, arrival) = match (self.departure_ms, self.arrival_ms) {
            (Some(dep), Some(arr)) if arr > dep => (dep, arr),
            _ => return TravelProgress::default(),
        };

        let total_ms = arrival - departure;
        let elapsed_ms = now_ms - departure;
        let remaining_ms = arrival - now_ms;
        let has_arrived = now_ms >= arrival;

        let progress = if has_arrived {
            100.0
        } else {
            (elapsed_ms as f32 / total_ms as f32 * 100.0).clamp(0.0, 100.0)
        };

        TravelProgress {
            is_traveling: departure <= now_ms && now_ms < arrival,
            has_arrived,
            progress,
            remaining_seconds: if remaining_ms <= 0 {
                0
            } else {
                (remaining_ms + 999) / 1000
            },
            elapsed_ms,
            total_ms,
        }
    }
}

/// Render a remaining-seconds count as `"{h}h {m}m {s}s"`, dropping leading
/// zero units. Zero or negative means the transit is over.
pub fn format_remaining(seconds: i64) -> String {
    if seconds <= 0 {
        return "Arrived".to_string();
    }
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, secs)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, secs)
    } else {
        format!("{}s", secs)
    }
}
