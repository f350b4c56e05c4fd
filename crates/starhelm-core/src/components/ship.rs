//! Ship flight components: velocity, attitude, engine, autopilot waypoint.

use serde::{Deserialize, Serialize};
use starhelm_logic::angles::normalize_degrees;

use super::common::Vec2;

/// Velocity component, meters per second
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Velocity {
    pub mps: Vec2,
}

impl Velocity {
    pub fn speed(&self) -> f32 {
        self.mps.length()
    }
}

/// Facing state: current and commanded heading.
///
/// Both values are kept in [0, 360) by every write path.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Attitude {
    heading: f32,
    target_heading: f32,
}

impl Attitude {
    pub fn new(heading: f32) -> Self {
        let heading = normalize_degrees(heading);
        Self {
            heading,
            target_heading: heading,
        }
    }

    pub fn heading(&self) -> f32 {
        self.heading
    }

    pub fn target_heading(&self) -> f32 {
        self.target_heading
    }

    pub fn set_heading(&mut self, degrees: f32) {
        self.heading = normalize_degrees(degrees);
    }

    pub fn set_target_heading(&mut self, degrees: f32) {
        self.target_heading = normalize_degrees(degrees);
    }
}

impl Default for Attitude {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// Engine throttle state: smoothed output chasing a commanded level.
///
/// Both values are kept in [0, 1] by every write path.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Engine {
    current_thrust: f32,
    target_thrust: f32,
}

impl Engine {
    pub fn current_thrust(&self) -> f32 {
        self.current_thrust
    }

    pub fn target_thrust(&self) -> f32 {
        self.target_thrust
    }

    pub fn set_current_thrust(&mut self, thrust: f32) {
        self.current_thrust = thrust.clamp(0.0, 1.0);
    }

    pub fn set_target_thrust(&mut self, thrust: f32) {
        self.target_thrust = thrust.clamp(0.0, 1.0);
    }
}

/// Autopilot waypoint - present only while an approach is active
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Approach {
    /// Waypoint in meters
    pub target: Vec2,
}

impl Approach {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            target: Vec2::new(x, y),
        }
    }
}

/// Pixel-space pose emitted for the rendering host each frame.
///
/// The host copies these fields into its own sprite; the simulation never
/// holds a reference into the scene graph.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
pub struct RenderPose {
    pub x: f32,
    pub y: f32,
    /// Facing in degrees, 0 = screen-up
    pub angle: f32,
}
