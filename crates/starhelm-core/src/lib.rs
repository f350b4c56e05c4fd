//! Starhelm Core - Star System Simulation Engine
//!
//! The real-time core of the Starhelm game: per-frame ship kinematics with
//! an approach autopilot, a camera/viewport model, and nearest-neighbour
//! entity ranking. The rendering host drives [`engine::SimulationEngine`]
//! once per frame and reads back pixel-space poses; nothing here touches a
//! scene graph, a database, or the network.
//!
//! # Architecture
//!
//! The simulation uses an Entity Component System (ECS) via `hecs`:
//! - **Entities**: ships and tracked celestial bodies
//! - **Components**: pure data (Position, Velocity, Attitude, Engine, ...)
//! - **Systems**: per-frame logic that queries and updates components
//!
//! # Example
//!
//! ```rust,no_run
//! use starhelm_core::prelude::*;
//!
//! let mut engine = SimulationEngine::new();
//! let ship = engine.spawn_ship(0.0, 0.0, 0.0);
//! engine.approach(ship, 0.0, 5000.0);
//!
//! // Host frame loop
//! loop {
//!     engine.update(1000.0 / 60.0); // delta in ms
//!     if let Some(pose) = engine.render_pose(ship) {
//!         // write pose.x / pose.y / pose.angle into the sprite
//!     }
//! }
//! ```

pub mod camera;
pub mod components;
pub mod engine;
pub mod ranking;
pub mod systems;
pub mod travel;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::camera::{CameraModel, FollowRequest, Viewport, ViewportListener};
    pub use crate::components::*;
    pub use crate::engine::SimulationEngine;
    pub use crate::ranking::{rank_by_distance, RankedEntity};
    pub use crate::travel::TravelTracker;
}
