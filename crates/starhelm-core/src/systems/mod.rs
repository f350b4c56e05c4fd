//! Systems - per-frame logic that operates on components

mod approach;
mod kinematics;

pub use approach::*;
pub use kinematics::*;
