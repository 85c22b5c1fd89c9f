//! Scene configuration, validated once at setup.

use crate::constants;
use glam::Vec3;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("rest position must have non-zero length")]
    ZeroRestPosition,
    #[error("spring constant must be negative, got {0}")]
    SpringConstantNotNegative(f32),
    #[error("spring damping must be negative, got {0}")]
    SpringDampingNotNegative(f32),
    #[error("skew clamp must satisfy 0 < min < max < 180 degrees, got {min}..{max}")]
    InvalidSkewClamp { min: f32, max: f32 },
    #[error("camera distance must satisfy 0 < min < max, got {min}..{max}")]
    InvalidCameraDistance { min: f32, max: f32 },
}

/// Everything fixed at initialization: spring tuning, floor offset, skew
/// clamp, and camera zoom bounds.
#[derive(Clone, Debug)]
pub struct TowerConfig {
    /// Eye idle position, world space. Spring equilibrium and the skew
    /// solver's zero-displacement reference; must not be the origin.
    pub rest_position: Vec3,
    /// Lowest allowed eye height, as an offset below `rest_position.y`.
    /// Negative values let the eye dip below rest.
    pub floor_height: f32,
    pub spring_constant: f32,
    pub spring_damping: f32,
    /// Skew angle clamp in degrees, kept strictly inside (0, 180) so the
    /// shear scale formula stays finite.
    pub skew_clamp_degrees: (f32, f32),
    pub camera_distance_min: f32,
    pub camera_distance_max: f32,
    /// Ray-sphere radius used to decide whether a click grabs the eye.
    pub pick_radius: f32,
}

impl Default for TowerConfig {
    fn default() -> Self {
        Self {
            rest_position: Vec3::from(constants::REST_POSITION),
            floor_height: constants::FLOOR_HEIGHT,
            spring_constant: constants::SPRING_CONSTANT,
            spring_damping: constants::SPRING_DAMPING,
            skew_clamp_degrees: (
                constants::SKEW_CLAMP_MIN_DEGREES,
                constants::SKEW_CLAMP_MAX_DEGREES,
            ),
            camera_distance_min: constants::CAMERA_DISTANCE_MIN,
            camera_distance_max: constants::CAMERA_DISTANCE_MAX,
            pick_radius: constants::PICK_SPHERE_RADIUS,
        }
    }
}

impl TowerConfig {
    /// Reject configurations the runtime is not required to survive. After
    /// this passes, no component faults at runtime; degenerate geometry
    /// degrades to per-frame no-ops instead.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rest_position.length_squared() < f32::EPSILON {
            return Err(ConfigError::ZeroRestPosition);
        }
        if self.spring_constant >= 0.0 {
            return Err(ConfigError::SpringConstantNotNegative(self.spring_constant));
        }
        if self.spring_damping >= 0.0 {
            return Err(ConfigError::SpringDampingNotNegative(self.spring_damping));
        }
        let (min, max) = self.skew_clamp_degrees;
        if !(0.0 < min && min < max && max < 180.0) {
            return Err(ConfigError::InvalidSkewClamp { min, max });
        }
        if !(0.0 < self.camera_distance_min && self.camera_distance_min < self.camera_distance_max)
        {
            return Err(ConfigError::InvalidCameraDistance {
                min: self.camera_distance_min,
                max: self.camera_distance_max,
            });
        }
        Ok(())
    }
}
