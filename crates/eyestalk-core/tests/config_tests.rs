// Configuration validation: every invalid setup is rejected before the
// frame loop ever runs.

use eyestalk_core::{ConfigError, TowerConfig};
use glam::Vec3;

#[test]
fn default_config_is_valid() {
    assert_eq!(TowerConfig::default().validate(), Ok(()));
}

#[test]
fn zero_length_rest_position_is_rejected() {
    let config = TowerConfig {
        rest_position: Vec3::ZERO,
        ..Default::default()
    };
    assert_eq!(config.validate(), Err(ConfigError::ZeroRestPosition));
}

#[test]
fn non_negative_spring_parameters_are_rejected() {
    let config = TowerConfig {
        spring_constant: 10.0,
        ..Default::default()
    };
    assert_eq!(
        config.validate(),
        Err(ConfigError::SpringConstantNotNegative(10.0))
    );

    let config = TowerConfig {
        spring_damping: 0.0,
        ..Default::default()
    };
    assert_eq!(
        config.validate(),
        Err(ConfigError::SpringDampingNotNegative(0.0))
    );
}

#[test]
fn skew_clamp_must_stay_inside_the_open_interval() {
    for clamp in [(0.0, 170.0), (10.0, 180.0), (120.0, 60.0)] {
        let config = TowerConfig {
            skew_clamp_degrees: clamp,
            ..Default::default()
        };
        assert!(
            matches!(config.validate(), Err(ConfigError::InvalidSkewClamp { .. })),
            "clamp {:?} should be rejected",
            clamp
        );
    }
}

#[test]
fn camera_distance_bounds_must_be_ordered_and_positive() {
    for (min, max) in [(0.0, 8.0), (8.0, 2.0), (-1.0, 3.0)] {
        let config = TowerConfig {
            camera_distance_min: min,
            camera_distance_max: max,
            ..Default::default()
        };
        assert!(
            matches!(
                config.validate(),
                Err(ConfigError::InvalidCameraDistance { .. })
            ),
            "bounds {}..{} should be rejected",
            min,
            max
        );
    }
}
