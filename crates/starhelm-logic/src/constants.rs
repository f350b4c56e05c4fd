//! Flight-model and camera tuning constants.
//!
//! Plain `f32` constants with no engine dependency. Both the ECS engine and
//! the headless harness read these.

pub mod kinematics {
    /// Acceleration at full thrust, m/s².
    pub const ACCELERATION: f32 = 100.0;
    /// Speed ceiling at full thrust, m/s. Actual ceiling scales with the
    /// current thrust level.
    pub const MAX_SPEED: f32 = 500.0;
    /// Per-frame blend factor moving current thrust toward target thrust.
    /// Applied once per frame regardless of delta time.
    pub const THRUST_LERP_FACTOR: f32 = 0.1;
    /// Passive drag applied while the engine is off, fraction of velocity
    /// shed per second.
    pub const SPEED_DECAY: f32 = 0.001;
    /// Turn rate, degrees per second.
    pub const ROTATION_SPEED: f32 = 100.0;
    /// Autopilot holds thrust at zero until the remaining turn is under
    /// this many degrees.
    pub const APPROACH_MIN_ANGLE: f32 = 45.0;
    /// Autopilot cuts thrust and drops its waypoint inside this range, m.
    pub const APPROACH_STOP_DISTANCE: f32 = 10.0;
    /// Scales the braking envelope: the autopilot starts matching speed to
    /// distance within `APPROACH_STOP_DISTANCE * MAX_SPEED * this` meters.
    pub const APPROACH_BRAKE_FACTOR: f32 = 0.2;
}

pub mod camera {
    /// Zoom clamp range. 1.0 = native scale.
    pub const MIN_ZOOM: f32 = 0.25;
    pub const MAX_ZOOM: f32 = 3.0;
    /// Wheel sensitivity; the raw wheel delta is scaled by this / 1000.
    pub const ZOOM_SPEED: f32 = 0.5;
    /// Damping factors forwarded to the host when following a target.
    pub const FOLLOW_LERP_X: f32 = 0.75;
    pub const FOLLOW_LERP_Y: f32 = 0.75;
}
