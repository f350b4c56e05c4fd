//! Travel tracker - live transit progress on a one-second refresh tick.
//!
//! Wraps the pure [`TravelWindow`] math with the cadence the UI wants: a
//! once-per-second recompute while a transit is underway. The tick exists
//! only while an active window is set (acquired on activation, released on
//! `clear` and on drop). Every refresh recomputes from the absolute
//! timestamps, so a late or missed tick can never accumulate drift.

use starhelm_logic::travel::{format_remaining, TravelProgress, TravelWindow};

/// Refresh cadence in milliseconds.
const TICK_INTERVAL_MS: i64 = 1000;

/// Tick state held only while a transit is being tracked.
struct Tick {
    last_refresh_ms: i64,
}

/// Live transit progress for one player.
#[derive(Default)]
pub struct TravelTracker {
    window: TravelWindow,
    tick: Option<Tick>,
    snapshot: TravelProgress,
}

impl TravelTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the transit window from player-record timestamps (epoch seconds).
    ///
    /// An active window acquires the refresh tick and computes an immediate
    /// snapshot; an inactive one releases the tick and zeroes the state.
    pub fn set_window(
        &mut self,
        departure_s: Option<i64>,
        arrival_s: Option<i64>,
        now_ms: i64,
    ) {
        self.window = TravelWindow::from_epoch_seconds(departure_s, arrival_s);
        if self.window.is_active() {
            self.snapshot = self.window.progress_at(now_ms);
            self.tick = Some(Tick {
                last_refresh_ms: now_ms,
            });
        } else {
            self.tick = None;
            self.snapshot = TravelProgress::default();
        }
    }

    /// Stop tracking: release the tick and zero the snapshot.
    pub fn clear(&mut self) {
        self.window = TravelWindow::default();
        self.tick = None;
        self.snapshot = TravelProgress::default();
    }

    /// Drive the tracker from the host loop. Recomputes at most once per
    /// second; returns the fresh snapshot when a refresh happened.
    pub fn update(&mut self, now_ms: i64) -> Option<TravelProgress> {
        let tick = self.tick.as_mut()?;
        if now_ms - tick.last_refresh_ms < TICK_INTERVAL_MS {
            return None;
        }
        tick.last_refresh_ms = now_ms;
        self.snapshot = self.window.progress_at(now_ms);
        Some(self.snapshot)
    }

    /// Whether the refresh tick is currently held.
    pub fn is_ticking(&self) -> bool {
        self.tick.is_some()
    }

    pub fn progress(&self) -> TravelProgress {
        self.snapshot
    }

    /// Human-readable remaining time for the current snapshot.
    pub fn remaining_label(&self) -> String {
        format_remaining(self.snapshot.remaining_seconds)
    }
}
