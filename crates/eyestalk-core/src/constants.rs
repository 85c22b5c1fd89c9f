// Shared scene tuning constants used by the default configuration and the
// native driver.

// Scene layout
pub const REST_POSITION: [f32; 3] = [0.0, 1.5, 0.0]; // eye rest point, world space
pub const FLOOR_HEIGHT: f32 = -0.5; // lowest eye offset below rest, world units

// Springs (both negative: restoring constant, dissipative damping)
pub const SPRING_CONSTANT: f32 = -30.0;
pub const SPRING_DAMPING: f32 = -4.0;

// Interaction
pub const PICK_SPHERE_RADIUS: f32 = 0.35; // ray-sphere radius for grabbing the eye

// Skew solver: keep the shear formula away from its 0/180 degree poles
pub const SKEW_CLAMP_MIN_DEGREES: f32 = 10.0;
pub const SKEW_CLAMP_MAX_DEGREES: f32 = 170.0;

// Orbit camera
pub const CAMERA_DISTANCE_MIN: f32 = 2.0;
pub const CAMERA_DISTANCE_MAX: f32 = 8.0;
pub const SCROLL_ZOOM_FACTOR: f32 = -0.1; // scroll delta to distance parameter
pub const ORBIT_DRAG_SENSITIVITY: f32 = 2.0; // full-screen drag in orbit parameter units
pub const ORBIT_PITCH_RANGE_DEGREES: f32 = 80.0; // elevation parameter sweep
pub const ORBIT_PITCH_BASE_DEGREES: f32 = 5.0; // keeps the camera just above the floor
