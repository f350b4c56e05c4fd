//! Starhelm Headless Simulation Harness
//!
//! Validates the flight model, camera math, and travel progress without a
//! renderer. Runs entirely in-process — no network, no database, no scene
//! graph.
//!
//! Usage:
//!   cargo run -p starhelm-simtest
//!   cargo run -p starhelm-simtest -- --verbose

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;
use starhelm_core::prelude::*;
use starhelm_logic::angles::{normalize_degrees, signed_delta};
use starhelm_logic::constants::camera::{MAX_ZOOM, MIN_ZOOM};
use starhelm_logic::constants::kinematics::{APPROACH_STOP_DISTANCE, MAX_SPEED};
use starhelm_logic::travel::{format_remaining, TravelWindow};
use starhelm_logic::units::{meters_to_pixels, pixels_to_meters};

const FRAME_MS: f32 = 1000.0 / 60.0;

// ── Flight scenarios (shipped alongside the binary) ─────────────────────
const SCENARIOS_JSON: &str = include_str!("../data/scenarios.json");

#[derive(Debug, Deserialize)]
struct FlightScenario {
    name: String,
    start: [f32; 2],
    heading: f32,
    target: [f32; 2],
    max_seconds: f32,
}

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() {
    env_logger::init();
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== Starhelm Simulation Harness ===\n");

    let mut results = Vec::new();

    // 1. Unit conversion round trips
    results.extend(validate_units(verbose));

    // 2. Angle math sweep
    results.extend(validate_angles(verbose));

    // 3. Kinematics invariants under random commands
    results.extend(validate_kinematics(verbose));

    // 4. Autopilot flight scenarios
    results.extend(validate_flight_scenarios(verbose));

    // 5. Entity ranking order
    results.extend(validate_ranking(verbose));

    // 6. Camera zoom clamp
    results.extend(validate_camera(verbose));

    // 7. Travel progress vectors
    results.extend(validate_travel(verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Unit conversion ──────────────────────────────────────────────────

fn validate_units(_verbose: bool) -> Vec<TestResult> {
    println!("--- Unit Conversion ---");
    let mut results = Vec::new();

    let mut rng = StdRng::seed_from_u64(7);
    let mut worst: f32 = 0.0;
    for _ in 0..10_000 {
        let m = rng.gen_range(-1.0e6..1.0e6);
        let back = pixels_to_meters(meters_to_pixels(m));
        let err = if m == 0.0 {
            back.abs()
        } else {
            ((back - m) / m).abs()
        };
        worst = worst.max(err);
    }
    results.push(TestResult {
        name: "units_round_trip".into(),
        passed: worst < 1e-5,
        detail: format!("worst relative error {:.2e}", worst),
    });

    results
}

// ── 2. Angle math ───────────────────────────────────────────────────────

fn validate_angles(_verbose: bool) -> Vec<TestResult> {
    println!("--- Angle Math ---");
    let mut results = Vec::new();

    let mut rng = StdRng::seed_from_u64(11);
    let mut all_in_range = true;
    let mut deltas_shortest = true;
    for _ in 0..10_000 {
        let raw = rng.gen_range(-5000.0..5000.0);
        let n = normalize_degrees(raw);
        if !(0.0..360.0).contains(&n) {
            all_in_range = false;
        }

        let from = rng.gen_range(0.0..360.0);
        let to = rng.gen_range(0.0..360.0);
        let delta = signed_delta(from, to);
        if delta.abs() > 180.0 {
            deltas_shortest = false;
        }
        // Applying the delta must land on the target heading
        if signed_delta(normalize_degrees(from + delta), to).abs() > 1e-2 {
            deltas_shortest = false;
        }
    }
    results.push(TestResult {
        name: "normalize_range".into(),
        passed: all_in_range,
        detail: "10k random angles wrap into [0, 360)".into(),
    });
    results.push(TestResult {
        name: "signed_delta_shortest".into(),
        passed: deltas_shortest,
        detail: "10k random pairs stay within ±180 and land on target".into(),
    });

    results
}

// ── 3. Kinematics invariants ────────────────────────────────────────────

fn validate_kinematics(_verbose: bool) -> Vec<TestResult> {
    println!("--- Kinematics Invariants ---");
    let mut results = Vec::new();

    let mut rng = StdRng::seed_from_u64(23);
    let mut engine = SimulationEngine::new();
    let ship = engine.spawn_ship(0.0, 0.0, 0.0);

    let mut speed_ok = true;
    let mut heading_ok = true;
    for frame in 0..20_000 {
        // Issue a random helm command every half second
        if frame % 30 == 0 {
            engine.set_target_heading(ship, rng.gen_range(-720.0..720.0));
            engine.set_target_thrust(ship, rng.gen_range(-0.5..1.5));
        }
        engine.update(FRAME_MS);

        if let Some(speed) = engine.speed(ship) {
            if speed > MAX_SPEED + 1e-3 {
                speed_ok = false;
            }
        }
        if let Some(heading) = engine.heading(ship) {
            if !(0.0..360.0).contains(&heading) {
                heading_ok = false;
            }
        }
    }
    results.push(TestResult {
        name: "speed_ceiling".into(),
        passed: speed_ok,
        detail: format!("20k frames of random commands stay under {} m/s", MAX_SPEED),
    });
    results.push(TestResult {
        name: "heading_normalized".into(),
        passed: heading_ok,
        detail: "heading stays in [0, 360) across random commands".into(),
    });

    results
}

// ── 4. Autopilot flight scenarios ───────────────────────────────────────

fn validate_flight_scenarios(verbose: bool) -> Vec<TestResult> {
    println!("--- Flight Scenarios ---");
    let mut results = Vec::new();

    let scenarios: Vec<FlightScenario> = match serde_json::from_str(SCENARIOS_JSON) {
        Ok(s) => s,
        Err(e) => {
            results.push(TestResult {
                name: "scenarios_parse".into(),
                passed: false,
                detail: format!("JSON parse error: {}", e),
            });
            return results;
        }
    };

    for scenario in &scenarios {
        let mut engine = SimulationEngine::new();
        let ship = engine.spawn_ship(scenario.start[0], scenario.start[1], scenario.heading);
        engine.approach(ship, scenario.target[0], scenario.target[1]);

        let max_frames = (scenario.max_seconds * 60.0) as u32;
        let mut frames = 0;
        while engine.is_approaching(ship) && frames < max_frames {
            engine.update(FRAME_MS);
            frames += 1;
        }

        let arrived = !engine.is_approaching(ship);
        let final_distance = engine
            .position(ship)
            .map(|p| p.distance(&Vec2::new(scenario.target[0], scenario.target[1])))
            .unwrap_or(f32::MAX);

        let passed = arrived && final_distance <= APPROACH_STOP_DISTANCE + 1.0;
        if verbose {
            println!(
                "  {}: {} frames, final distance {:.1} m",
                scenario.name, frames, final_distance
            );
        }
        results.push(TestResult {
            name: format!("flight_{}", scenario.name),
            passed,
            detail: if arrived {
                format!("arrived in {:.1} s at {:.1} m", frames as f32 / 60.0, final_distance)
            } else {
                format!("still {:.1} m out after {} s", final_distance, scenario.max_seconds)
            },
        });
    }

    results
}

// ── 5. Entity ranking ───────────────────────────────────────────────────

fn validate_ranking(_verbose: bool) -> Vec<TestResult> {
    println!("--- Entity Ranking ---");
    let mut results = Vec::new();

    let mut rng = StdRng::seed_from_u64(31);
    let mut engine = SimulationEngine::new();
    for _ in 0..200 {
        engine.spawn_celestial(rng.gen_range(-50_000.0..50_000.0), rng.gen_range(-50_000.0..50_000.0));
    }

    let observer = Vec2::new(rng.gen_range(-1000.0..1000.0), rng.gen_range(-1000.0..1000.0));
    let ranked = rank_by_distance(&engine.world, observer);

    let sorted = ranked.windows(2).all(|w| w[0].distance_m <= w[1].distance_m);
    results.push(TestResult {
        name: "ranking_sorted".into(),
        passed: sorted && ranked.len() == 200,
        detail: format!("{} entities in ascending distance order", ranked.len()),
    });

    let empty = rank_by_distance(&SimulationEngine::new().world, Vec2::ZERO);
    results.push(TestResult {
        name: "ranking_empty".into(),
        passed: empty.is_empty(),
        detail: "empty world ranks to an empty list".into(),
    });

    results
}

// ── 6. Camera ───────────────────────────────────────────────────────────

fn validate_camera(_verbose: bool) -> Vec<TestResult> {
    println!("--- Camera ---");
    let mut results = Vec::new();

    let mut rng = StdRng::seed_from_u64(43);
    let mut camera = CameraModel::new(1920.0, 1080.0);
    let mut clamped = true;
    for _ in 0..10_000 {
        camera.on_zoom_delta(rng.gen_range(-1.0e6..1.0e6));
        if !(MIN_ZOOM..=MAX_ZOOM).contains(&camera.zoom()) {
            clamped = false;
        }
        let viewport = camera.viewport();
        if viewport.width < 1920.0 / MAX_ZOOM - 1.0 || viewport.width > 1920.0 / MIN_ZOOM + 1.0 {
            clamped = false;
        }
    }
    results.push(TestResult {
        name: "zoom_clamped".into(),
        passed: clamped,
        detail: format!("10k extreme wheel deltas stay in [{}, {}]", MIN_ZOOM, MAX_ZOOM),
    });

    let mut engine = SimulationEngine::new();
    let ship = engine.spawn_ship(0.0, 0.0, 0.0);
    camera.follow(ship);
    let request = camera.take_follow_request();
    results.push(TestResult {
        name: "follow_handoff".into(),
        passed: request.map(|r| r.target == ship && r.lerp_x == 0.75).unwrap_or(false)
            && camera.take_follow_request().is_none(),
        detail: "follow request handed to the host exactly once".into(),
    });

    results
}

// ── 7. Travel progress ──────────────────────────────────────────────────

fn validate_travel(_verbose: bool) -> Vec<TestResult> {
    println!("--- Travel Progress ---");
    let mut results = Vec::new();

    let window = TravelWindow::new(Some(1000), Some(5000));
    let mid = window.progress_at(3000);
    let after = window.progress_at(6000);
    let inactive = TravelWindow::new(Some(1000), None).progress_at(3000);

    results.push(TestResult {
        name: "travel_midway".into(),
        passed: mid.is_traveling && mid.progress == 50.0 && mid.remaining_seconds == 2,
        detail: format!("progress {}%, {} s remaining", mid.progress, mid.remaining_seconds),
    });
    results.push(TestResult {
        name: "travel_arrived".into(),
        passed: after.has_arrived && after.progress == 100.0,
        detail: format!("progress {}% after arrival", after.progress),
    });
    results.push(TestResult {
        name: "travel_inactive".into(),
        passed: !inactive.is_traveling && inactive.progress == 0.0,
        detail: "missing arrival reads as not traveling".into(),
    });

    let formats_ok = format_remaining(0) == "Arrived"
        && format_remaining(45) == "45s"
        && format_remaining(125) == "2m 5s"
        && format_remaining(3725) == "1h 2m 5s";
    results.push(TestResult {
        name: "travel_format".into(),
        passed: formats_ok,
        detail: "remaining-time labels drop leading zero units".into(),
    });

    // Tracker: one-second cadence, release on clear
    let mut tracker = TravelTracker::new();
    tracker.set_window(Some(0), Some(10), 0);
    let throttled = tracker.update(400).is_none();
    let refreshed = tracker
        .update(7000)
        .map(|p| (p.progress - 70.0).abs() < 1e-3)
        .unwrap_or(false);
    tracker.clear();
    results.push(TestResult {
        name: "travel_tracker_tick".into(),
        passed: throttled && refreshed && !tracker.is_ticking(),
        detail: "refresh holds for 1 s, recomputes from absolute time, releases on clear".into(),
    });

    results
}
