//! Pixel/meter conversion at the fixed world scale.
//!
//! The renderer works in pixels, the simulation in meters. One pixel spans
//! 100 m of world space, so `PIXELS_PER_METER` is 0.01. The two functions
//! are exact inverses up to f32 rounding.

/// Rendering pixels per simulation meter.
pub const PIXELS_PER_METER: f32 = 0.01;

/// Convert a simulation-space length to rendering pixels.
pub fn meters_to_pixels(meters: f32) -> f32 {
    meters * PIXELS_PER_METER
}

/// Convert a rendering-space length to simulation meters.
pub fn pixels_to_meters(pixels: f32) -> f32 {
    pixels / PIXELS_PER_METER
}
