//! Kinematics system - integrates heading, thrust, velocity, and position
//! once per frame for every ship.

use hecs::World;
use starhelm_logic::angles::{heading_to_direction, signed_delta};
use starhelm_logic::constants::kinematics::{
    ACCELERATION, MAX_SPEED, ROTATION_SPEED, SPEED_DECAY, THRUST_LERP_FACTOR,
};
use starhelm_logic::units::meters_to_pixels;

use crate::components::{Attitude, Engine, Position, RenderPose, Vec2, Velocity};

/// New ship state produced by one integration step.
#[derive(Debug, Clone, Copy)]
pub struct KinematicsStep {
    pub position: Position,
    pub velocity: Velocity,
    pub attitude: Attitude,
    pub engine: Engine,
    pub pose: RenderPose,
}

/// Integrate every ship by `delta_seconds`.
pub fn ship_kinematics_system(world: &mut World, delta_seconds: f32) {
    // Collect updates (can't mutate while iterating)
    let mut updates: Vec<(hecs::Entity, KinematicsStep)> = Vec::new();

    for (entity, (pos, vel, att, eng)) in world
        .query::<(&Position, &Velocity, &Attitude, &Engine)>()
        .iter()
    {
        updates.push((entity, step_kinematics(pos, vel, att, eng, delta_seconds)));
    }

    // Apply updates
    for (entity, step) in updates {
        if let Ok(mut pos) = world.get::<&mut Position>(entity) {
            *pos = step.position;
        }
        if let Ok(mut vel) = world.get::<&mut Velocity>(entity) {
            *vel = step.velocity;
        }
        if let Ok(mut att) = world.get::<&mut Attitude>(entity) {
            *att = step.attitude;
        }
        if let Ok(mut eng) = world.get::<&mut Engine>(entity) {
            *eng = step.engine;
        }
        if let Ok(mut pose) = world.get::<&mut RenderPose>(entity) {
            *pose = step.pose;
        }
    }
}

/// Integrate a single ship, returning its new state.
///
/// Order per frame: turn toward the commanded heading, smooth thrust toward
/// the commanded level, apply thrust or drag to velocity, clamp speed to the
/// thrust-scaled ceiling, advance position.
pub fn step_kinematics(
    pos: &Position,
    vel: &Velocity,
    att: &Attitude,
    eng: &Engine,
    delta_seconds: f32,
) -> KinematicsStep {
    // Heading: shortest-path turn, rate-limited
    let mut attitude = *att;
    let turn = signed_delta(att.heading(), att.target_heading());
    let max_step = ROTATION_SPEED * delta_seconds;
    attitude.set_heading(att.heading() + turn.clamp(-max_step, max_step));

    // Thrust: fixed per-frame blend toward the commanded level, not scaled
    // by delta time
    let mut engine = *eng;
    engine.set_current_thrust(
        eng.current_thrust() + (eng.target_thrust() - eng.current_thrust()) * THRUST_LERP_FACTOR,
    );

    // Velocity: burn along the nose while commanded, drag otherwise
    let mut mps = vel.mps;
    if eng.target_thrust() > 0.0 {
        let (dir_x, dir_y) = heading_to_direction(attitude.heading());
        let accel = ACCELERATION * engine.current_thrust() * delta_seconds;
        mps = mps + Vec2::new(dir_x * accel, dir_y * accel);
    } else {
        mps = mps * (1.0 - SPEED_DECAY * delta_seconds);
    }

    // Speed ceiling scales with the smoothed thrust level
    let speed = mps.length();
    let limit = MAX_SPEED * engine.current_thrust();
    if speed > limit {
        mps = if limit > 0.0 {
            mps * (limit / speed)
        } else {
            Vec2::ZERO
        };
    }

    // Position: explicit Euler
    let meters = pos.meters + mps * delta_seconds;

    KinematicsStep {
        position: Position { meters },
        velocity: Velocity { mps },
        attitude,
        engine,
        pose: RenderPose {
            x: meters_to_pixels(meters.x),
            y: meters_to_pixels(meters.y),
            angle: attitude.heading(),
        },
    }
}
