//! Locomotion domain: system implementations.

pub(crate) mod grounded;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use grounded::detect_ground;
pub(crate) use input::sample_input;
pub(crate) use movement::{apply_jump, apply_velocity, update_character};
