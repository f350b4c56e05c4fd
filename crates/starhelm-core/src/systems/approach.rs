//! Approach system - runs the autopilot planner for every ship with an
//! active waypoint, ahead of the kinematics step each frame.

use hecs::World;
use log::debug;
use starhelm_logic::approach::{plan_approach, ApproachDecision, ApproachInput};

use crate::components::{Approach, Attitude, Engine, Position, Velocity};

/// Plan and apply one autopilot frame for every approaching ship.
///
/// Arrival cuts the commanded thrust and removes the `Approach` component;
/// otherwise the planner's heading and thrust commands are written so the
/// kinematics step can act on them in the same frame.
pub fn approach_system(world: &mut World) {
    // Collect decisions (can't mutate while iterating)
    let mut decisions: Vec<(hecs::Entity, ApproachDecision)> = Vec::new();

    for (entity, (pos, vel, att, approach)) in world
        .query::<(&Position, &Velocity, &Attitude, &Approach)>()
        .iter()
    {
        let decision = plan_approach(&ApproachInput {
            x: pos.meters.x,
            y: pos.meters.y,
            heading: att.heading(),
            speed: vel.speed(),
            target_x: approach.target.x,
            target_y: approach.target.y,
        });
        decisions.push((entity, decision));
    }

    // Apply decisions
    for (entity, decision) in decisions {
        match decision {
            ApproachDecision::Arrive => {
                if let Ok(mut eng) = world.get::<&mut Engine>(entity) {
                    eng.set_target_thrust(0.0);
                }
                let _ = world.remove_one::<Approach>(entity);
                debug!("ship {:?} reached approach waypoint", entity);
            }
            ApproachDecision::Steer {
                target_heading,
                target_thrust,
            } => {
                if let Ok(mut att) = world.get::<&mut Attitude>(entity) {
                    att.set_target_heading(target_heading);
                }
                if let Ok(mut eng) = world.get::<&mut Engine>(entity) {
                    eng.set_target_thrust(target_thrust);
                }
            }
        }
    }
}
