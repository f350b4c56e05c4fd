//! Pure autopilot planner — align, burn, brake, arrive.
//!
//! Each frame the planner looks at the ship's position, heading, and speed
//! and decides what the helm should do about an active waypoint. It never
//! integrates anything; the engine applies the decision and runs the
//! kinematics step afterwards.

use crate::angles::{bearing_to, signed_delta};
use crate::constants::kinematics::{
    APPROACH_BRAKE_FACTOR, APPROACH_MIN_ANGLE, APPROACH_STOP_DISTANCE, MAX_SPEED,
};

/// Snapshot of the ship state the planner needs.
#[derive(Debug, Clone, Copy)]
pub struct ApproachInput {
    /// Ship position in meters.
    pub x: f32,
    pub y: f32,
    /// Current heading in degrees.
    pub heading: f32,
    /// Current speed magnitude in m/s.
    pub speed: f32,
    /// Waypoint in meters.
    pub target_x: f32,
    pub target_y: f32,
}

/// What the helm should do this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ApproachDecision {
    /// Within stop range: cut thrust and drop the waypoint.
    Arrive,
    /// Keep flying: steer to `target_heading` at `target_thrust`.
    Steer {
        target_heading: f32,
        target_thrust: f32,
    },
}

/// Plan one frame of the approach.
///
/// Thrust stays at zero until the remaining turn is under
/// `APPROACH_MIN_ANGLE`; inside the braking envelope the commanded thrust
/// tapers so speed matches remaining distance.
pub fn plan_approach(input: &ApproachInput) -> ApproachDecision {
    let dx = input.target_x - input.x;
    let dy = input.target_y - input.y;
    let distance = (dx * dx + dy * dy).sqrt();

    if distance <= APPROACH_STOP_DISTANCE {
        return ApproachDecision::Arrive;
    }

    let target_heading = bearing_to(input.x, input.y, input.target_x, input.target_y);
    let angle_diff = signed_delta(input.heading, target_heading).abs();

    let target_thrust = if angle_diff >= APPROACH_MIN_ANGLE {
        0.0
    } else {
        let throttle_distance = APPROACH_STOP_DISTANCE * MAX_SPEED * APPROACH_BRAKE_FACTOR;
        if distance > throttle_distance {
            1.0
        } else {
            let target_speed = (distance / throttle_distance * MAX_SPEED).clamp(0.0, MAX_SPEED);
            ((target_speed - input.speed) / MAX_SPEED).clamp(0.0, 1.0)
        }
    };

    ApproachDecision::Steer {
        target_heading,
        target_thrust,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(x: f32, y: f32, heading: f32, speed: f32, tx: f32, ty: f32) -> ApproachInput {
        ApproachInput {
            x,
            y,
            heading,
            speed,
            target_x: tx,
            target_y: ty,
        }
    }

    #[test]
    fn test_arrive_inside_stop_distance() {
        let d = plan_approach(&input(0.0, 0.0, 0.0, 50.0, 6.0, 6.0));
        assert_eq!(d, ApproachDecision::Arrive);
    }

    #[test]
    fn test_no_thrust_while_misaligned() {
        // Target due screen-down (heading 180), ship pointing up.
        let d = plan_approach(&input(0.0, 0.0, 0.0, 0.0, 0.0, 5000.0));
        match d {
            ApproachDecision::Steer {
                target_heading,
                target_thrust,
            } => {
                assert!((target_heading - 180.0).abs() < 1e-3);
                assert_eq!(target_thrust, 0.0);
            }
            other => panic!("expected Steer, got {:?}", other),
        }
    }

    #[test]
    fn test_full_burn_when_aligned_and_far() {
        let d = plan_approach(&input(0.0, 0.0, 180.0, 0.0, 0.0, 5000.0));
        match d {
            ApproachDecision::Steer { target_thrust, .. } => assert_eq!(target_thrust, 1.0),
            other => panic!("expected Steer, got {:?}", other),
        }
    }

    #[test]
    fn test_brakes_inside_throttle_envelope() {
        // 500 m out of a 1000 m envelope: target speed 250, already at 400.
        let d = plan_approach(&input(0.0, 0.0, 180.0, 400.0, 0.0, 500.0));
        match d {
            ApproachDecision::Steer { target_thrust, .. } => {
                assert_eq!(target_thrust, 0.0);
            }
            other => panic!("expected Steer, got {:?}", other),
        }
        // Same point while slow: commands a partial burn.
        let d = plan_approach(&input(0.0, 0.0, 180.0, 0.0, 0.0, 500.0));
        match d {
            ApproachDecision::Steer { target_thrust, .. } => {
                assert!((target_thrust - 0.5).abs() < 1e-4);
            }
            other => panic!("expected Steer, got {:?}", other),
        }
    }

    #[test]
    fn test_alignment_gate_is_exclusive() {
        // Just under the 45° gate thrusts; at/over it does not.
        let d = plan_approach(&input(0.0, 0.0, 136.0, 0.0, 0.0, 5000.0));
        match d {
            ApproachDecision::Steer { target_thrust, .. } => assert!(target_thrust > 0.0),
            other => panic!("expected Steer, got {:?}", other),
        }
        let d = plan_approach(&input(0.0, 0.0, 135.0, 0.0, 0.0, 5000.0));
        match d {
            ApproachDecision::Steer { target_thrust, .. } => assert_eq!(target_thrust, 0.0),
            other => panic!("expected Steer, got {:?}", other),
        }
    }
}
