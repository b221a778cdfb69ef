//! Loader and validation for the movement tuning file.

use ron::Options;
use std::fs;
use std::path::Path;

use super::resources::MovementConfig;

/// Error type for tuning file loading failures.
#[derive(Debug)]
pub struct ConfigLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// A tuning value that is out of its accepted range.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigError {
    pub field: &'static str,
    pub value: f32,
    pub expected: &'static str,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "movement config field '{}' is {} but must be {}",
            self.field, self.value, self.expected
        )
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

pub fn parse_movement_config(contents: &str) -> Result<MovementConfig, ron::error::SpannedError> {
    ron_options().from_str(contents)
}

/// Load a MovementConfig from a RON file. Missing fields take their defaults.
pub fn load_movement_config(path: &Path) -> Result<MovementConfig, ConfigLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ConfigLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_movement_config(&contents).map_err(|e| ConfigLoadError {
        file: file_name,
        message: format!("Parse error: {}", e),
    })
}

macro_rules! check_range {
    ($errors:expr, $config:expr, $field:ident, $ok:expr, $expected:expr) => {
        let value = $config.$field;
        if !value.is_finite() || !($ok)(value) {
            $errors.push(ConfigError {
                field: stringify!($field),
                value,
                expected: $expected,
            });
        }
    };
}

impl MovementConfig {
    /// Returns every out-of-range field, empty if the config is usable.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let positive = |v: f32| v > 0.0;
        let non_negative = |v: f32| v >= 0.0;
        let unit = |v: f32| (0.0..=1.0).contains(&v);

        check_range!(errors, self, max_speed, positive, "> 0");
        check_range!(errors, self, acceleration, positive, "> 0");
        check_range!(errors, self, deceleration, positive, "> 0");
        check_range!(errors, self, friction_amount, non_negative, ">= 0");
        check_range!(errors, self, jump_force, positive, "> 0");
        check_range!(errors, self, jump_cut_multiplier, unit, "within [0, 1]");
        check_range!(errors, self, fall_multiplier, non_negative, ">= 0");
        check_range!(errors, self, jump_buffer_time, non_negative, ">= 0");
        check_range!(errors, self, coyote_time, non_negative, ">= 0");
        check_range!(errors, self, glide_gravity_scale, non_negative, ">= 0");
        check_range!(errors, self, base_gravity_scale, non_negative, ">= 0");
        check_range!(errors, self, wall_check_distance, positive, "> 0");
        check_range!(errors, self, check_radius, positive, "> 0");

        errors
    }
}
