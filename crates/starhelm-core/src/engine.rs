//! Simulation engine - main entry point for running the simulation

use hecs::{Entity, World};

use starhelm_logic::angles::bearing_to;

use crate::components::*;
use crate::ranking::{rank_by_distance_excluding, RankedEntity};
use crate::systems::*;

/// Main simulation engine.
///
/// One engine per scene; engines are plain values, so several can coexist
/// (and be unit-tested) independently. The host calls [`update`] once per
/// frame and reads ship poses back with [`render_pose`].
///
/// [`update`]: SimulationEngine::update
/// [`render_pose`]: SimulationEngine::render_pose
pub struct SimulationEngine {
    /// ECS world containing ships and tracked bodies
    pub world: World,
    /// Simulation time in seconds since start
    pub sim_time: f64,

    // Configuration
    time_scale: f32,
}

impl SimulationEngine {
    /// Create a new empty simulation
    pub fn new() -> Self {
        Self {
            world: World::new(),
            sim_time: 0.0,
            time_scale: 1.0,
        }
    }

    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.max(0.0);
    }

    /// Spawn a ship at a simulation-space position, in meters.
    pub fn spawn_ship(&mut self, x: f32, y: f32, heading: f32) -> Entity {
        self.world.spawn((
            Position::new(x, y),
            Velocity::default(),
            Attitude::new(heading),
            Engine::default(),
            RenderPose::default(),
        ))
    }

    /// Spawn a tracked celestial body - position only, nothing integrates it.
    pub fn spawn_celestial(&mut self, x: f32, y: f32) -> Entity {
        self.world.spawn((Position::new(x, y),))
    }

    pub fn despawn(&mut self, entity: Entity) {
        let _ = self.world.despawn(entity);
    }

    // ── Helm commands ───────────────────────────────────────────────────
    // All are synchronous and silently ignore despawned entities.

    pub fn set_target_heading(&mut self, ship: Entity, degrees: f32) {
        if let Ok(mut att) = self.world.get::<&mut Attitude>(ship) {
            att.set_target_heading(degrees);
        }
    }

    pub fn set_target_thrust(&mut self, ship: Entity, thrust: f32) {
        if let Ok(mut eng) = self.world.get::<&mut Engine>(ship) {
            eng.set_target_thrust(thrust);
        }
    }

    /// Point the nose at a world position, in meters.
    pub fn align_to(&mut self, ship: Entity, x: f32, y: f32) {
        let bearing = match self.world.get::<&Position>(ship) {
            Ok(pos) => bearing_to(pos.meters.x, pos.meters.y, x, y),
            Err(_) => return,
        };
        self.set_target_heading(ship, bearing);
    }

    /// Engage the autopilot toward a waypoint, in meters.
    pub fn approach(&mut self, ship: Entity, x: f32, y: f32) {
        let _ = self.world.insert_one(ship, Approach::new(x, y));
    }

    /// Drop the autopilot waypoint without touching the throttle.
    pub fn clear_approach(&mut self, ship: Entity) {
        let _ = self.world.remove_one::<Approach>(ship);
    }

    /// Cut the commanded thrust and drop any waypoint.
    pub fn stop(&mut self, ship: Entity) {
        self.set_target_thrust(ship, 0.0);
        self.clear_approach(ship);
    }

    // ── Frame update ────────────────────────────────────────────────────

    /// Advance the simulation by a frame delta, in milliseconds.
    pub fn update(&mut self, delta_ms: f32) {
        let delta_seconds = delta_ms / 1000.0 * self.time_scale;
        self.sim_time += delta_seconds as f64;

        // Autopilot decides, then the integrator acts on its commands
        approach_system(&mut self.world);
        ship_kinematics_system(&mut self.world, delta_seconds);
    }

    // ── Queries ─────────────────────────────────────────────────────────

    /// Pixel-space pose for the rendering host.
    pub fn render_pose(&self, ship: Entity) -> Option<RenderPose> {
        self.world.get::<&RenderPose>(ship).map(|p| *p).ok()
    }

    pub fn position(&self, entity: Entity) -> Option<Vec2> {
        self.world.get::<&Position>(entity).map(|p| p.meters).ok()
    }

    pub fn speed(&self, ship: Entity) -> Option<f32> {
        self.world.get::<&Velocity>(ship).map(|v| v.speed()).ok()
    }

    pub fn heading(&self, ship: Entity) -> Option<f32> {
        self.world.get::<&Attitude>(ship).map(|a| a.heading()).ok()
    }

    pub fn is_approaching(&self, ship: Entity) -> bool {
        self.world.get::<&Approach>(ship).is_ok()
    }

    /// Rank every other tracked entity by distance from a ship.
    pub fn rank_from(&self, ship: Entity) -> Vec<RankedEntity> {
        match self.world.get::<&Position>(ship) {
            Ok(pos) => rank_by_distance_excluding(&self.world, pos.meters, Some(ship)),
            Err(_) => Vec::new(),
        }
    }
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::new()
    }
}
