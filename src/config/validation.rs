//! Config domain: construction-time guards for controller tunables.
//!
//! Everything here runs once at startup; per-frame code assumes these
//! hold and never re-checks.

use super::data::ControllerDef;

/// A rejected configuration value.
#[derive(Debug)]
pub struct ConfigError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid `{}`: {}", self.field, self.message)
    }
}

/// Validate tunables that would otherwise corrupt per-frame math.
/// Returns all violations, empty if the definition is acceptable.
pub fn validate(def: &ControllerDef) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    let mut reject = |field: &'static str, message: String| {
        errors.push(ConfigError { field, message });
    };

    if def.sprint_duration <= 0.0 {
        reject(
            "sprint_duration",
            format!("must be positive, got {} (the drain rate divides by it)", def.sprint_duration),
        );
    }
    if def.max_stamina <= 0.0 {
        reject("max_stamina", format!("must be positive, got {}", def.max_stamina));
    }
    if def.sprint_min_stamina < 0.0 || def.sprint_min_stamina > def.max_stamina {
        reject(
            "sprint_min_stamina",
            format!(
                "must be within [0, max_stamina={}], got {}",
                def.max_stamina, def.sprint_min_stamina
            ),
        );
    }
    if def.move_speed <= 0.0 {
        reject(
            "move_speed",
            format!("must be positive, got {} (head bob scaling divides by it)", def.move_speed),
        );
    }
    if def.max_health <= 0 {
        reject("max_health", format!("must be positive, got {}", def.max_health));
    }
    if def.camera_max_angle <= 0.0 || def.camera_max_angle >= 180.0 {
        reject(
            "camera_max_angle",
            format!("must be within (0, 180), got {}", def.camera_max_angle),
        );
    }

    errors
}
