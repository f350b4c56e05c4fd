//! Heading math shared by every site that touches angles.
//!
//! Headings are degrees in [0, 360) with 0 pointing screen-up (-y) and 90
//! pointing +x, i.e. rotated 90° from the `atan2` frame. All wrap and
//! shortest-path logic lives here so callers never do their own modulo.

/// Wrap an arbitrary angle into [0, 360).
pub fn normalize_degrees(degrees: f32) -> f32 {
    degrees.rem_euclid(360.0)
}

/// Shortest signed difference from `from` to `to`, in (-180, 180].
///
/// Positive means a clockwise turn (toward increasing heading).
pub fn signed_delta(from: f32, to: f32) -> f32 {
    let delta = (to - from).rem_euclid(360.0);
    if delta > 180.0 {
        delta - 360.0
    } else {
        delta
    }
}

/// Resolve a heading into a unit direction vector.
///
/// Heading 0 is screen-up, so the angle is shifted -90° into the `atan2`
/// frame before taking cos/sin.
pub fn heading_to_direction(heading: f32) -> (f32, f32) {
    let rad = (heading - 90.0).to_radians();
    (rad.cos(), rad.sin())
}

/// Heading from one point toward another, in [0, 360).
///
/// `atan2` yields 0° at +x; the +90° shift moves it into the screen-up
/// heading frame.
pub fn bearing_to(from_x: f32, from_y: f32, to_x: f32, to_y: f32) -> f32 {
    let raw = (to_y - from_y).atan2(to_x - from_x).to_degrees();
    normalize_degrees(raw + 90.0)
}
