//! Pure game logic for Starhelm.
//!
//! This crate contains the flight-model math that is independent of any
//! engine, renderer, or runtime. Functions take plain data and return
//! results, making them unit-testable and portable between the headless
//! harness and the ECS engine crate.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angles`] | Heading normalization, signed deltas, bearing/direction math |
//! | [`approach`] | Autopilot planner: align, burn, brake, arrive |
//! | [`constants`] | Flight-model and camera tuning constants |
//! | [`travel`] | Travel-window progress and remaining-time formatting |
//! | [`units`] | Pixel/meter conversion at the fixed world scale |

pub mod angles;
pub mod approach;
pub mod constants;
pub mod travel;
pub mod units;
