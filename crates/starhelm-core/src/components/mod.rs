//! Component definitions for the ECS simulation.
//!
//! Components are pure data structs attached to entities.
//! They have no integration logic - that lives in systems.

mod common;
mod ship;

pub use common::*;
pub use ship::*;
