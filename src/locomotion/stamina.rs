//! Locomotion domain: stamina accounting and sprint gating.
//!
//! Pure functions, kept free of ECS types so the drive system stays a
//! thin wrapper and the boundary cases are directly testable.

/// Advance the stamina pool by one frame. Drain and regen share the
/// same rate, `max_stamina / sprint_duration` per second. Stamina only
/// drains while actually moving; sprinting in place costs nothing.
pub fn advance(
    current: f32,
    is_sprinting: bool,
    is_moving: bool,
    dt: f32,
    max_stamina: f32,
    sprint_duration: f32,
) -> f32 {
    let rate = max_stamina / sprint_duration;
    if is_sprinting && is_moving {
        (current - dt * rate).max(0.0)
    } else {
        (current + dt * rate).min(max_stamina)
    }
}

/// Decide the sprint flag for this frame. Sprint is edge triggered: it
/// engages only on the key-press edge, and only with stamina strictly
/// above the floor. It disengages on release or when stamina runs out.
/// Holding the key through regen never re-engages; the key has to be
/// released and pressed again.
pub fn evaluate_sprint(
    previous: bool,
    sprint_pressed: bool,
    sprint_released: bool,
    stamina: f32,
    sprint_min_stamina: f32,
) -> bool {
    if sprint_pressed && stamina > sprint_min_stamina {
        return true;
    }
    if sprint_released || stamina <= 0.0 {
        return false;
    }
    previous
}
