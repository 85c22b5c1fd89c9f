//! Camera collaborator interface and the orbit controller behind it.

use crate::constants::{
    ORBIT_DRAG_SENSITIVITY, ORBIT_PITCH_BASE_DEGREES, ORBIT_PITCH_RANGE_DEGREES,
    SCROLL_ZOOM_FACTOR,
};
use crate::input::InputFrame;
use crate::math::Ray;
use glam::{EulerRot, Mat4, Quat, Vec2, Vec3, Vec4};

/// What the drag controller needs from a camera, and the one flag it pushes
/// back: suppress camera rotation while the eye itself is being dragged.
pub trait CameraRig {
    fn forward(&self) -> Vec3;
    fn position(&self) -> Vec3;
    fn screen_point_to_ray(&self, point: Vec2) -> Ray;
    fn set_ignore_input(&mut self, ignore: bool);
}

/// Orbits a fixed center point from pointer drag, zooms from scroll.
///
/// Angle, elevation, and distance are stored as normalized 0..1 parameters;
/// elevation and distance clamp so the camera can neither dive through the
/// floor nor flip over the top, and the angle wraps.
pub struct OrbitCamera {
    center: Vec3,
    angle: f32,
    elevation: f32,
    distance_param: f32,
    distance_min: f32,
    distance_max: f32,
    screen_size: Vec2,
    ignore_input: bool,
    orbiting: bool,
    last_pointer: Vec2,
}

impl OrbitCamera {
    pub fn new(center: Vec3, distance_min: f32, distance_max: f32, screen_size: Vec2) -> Self {
        Self {
            center,
            angle: 0.0,
            elevation: 0.2,
            distance_param: 0.5,
            distance_min,
            distance_max,
            screen_size,
            ignore_input: false,
            orbiting: false,
            last_pointer: Vec2::ZERO,
        }
    }

    /// Apply one frame of orbit input. Scroll always zooms; pointer drag
    /// rotates only while the ignore-input flag is clear.
    pub fn update(&mut self, input: &InputFrame) {
        self.distance_param =
            (self.distance_param + input.scroll_delta * SCROLL_ZOOM_FACTOR).clamp(0.0, 1.0);

        // The player is orbiting whenever the button is down and the eye has
        // not claimed the pointer for itself.
        let orbiting = input.primary_down && !self.ignore_input;
        if orbiting && !self.orbiting {
            // Drag just started; the stored pointer is stale, so snap it and
            // apply no movement on this first frame.
            self.last_pointer = input.pointer;
        }
        self.orbiting = orbiting;

        if self.orbiting {
            let movement = input.pointer - self.last_pointer;
            self.last_pointer = input.pointer;
            self.angle += movement.x / self.screen_size.x * ORBIT_DRAG_SENSITIVITY;
            self.elevation -= movement.y / self.screen_size.y * ORBIT_DRAG_SENSITIVITY;
        }

        self.elevation = self.elevation.clamp(0.0, 1.0);
        self.angle -= self.angle.floor();
    }

    #[inline]
    pub fn distance(&self) -> f32 {
        self.distance_min + (self.distance_max - self.distance_min) * self.distance_param
    }

    #[inline]
    pub fn angle_param(&self) -> f32 {
        self.angle
    }

    #[inline]
    pub fn elevation_param(&self) -> f32 {
        self.elevation
    }

    fn rotation(&self) -> Quat {
        let yaw = (self.angle * 360.0).to_radians();
        let pitch =
            (self.elevation * ORBIT_PITCH_RANGE_DEGREES + ORBIT_PITCH_BASE_DEGREES).to_radians();
        // Negative pitch tilts the view down toward the center, so positive
        // elevation lifts the camera above it.
        Quat::from_euler(EulerRot::YXZ, yaw, -pitch, 0.0)
    }

    fn view_projection(&self) -> Mat4 {
        let aspect = self.screen_size.x / self.screen_size.y.max(1.0);
        let proj = Mat4::perspective_rh(std::f32::consts::FRAC_PI_4, aspect, 0.1, 100.0);
        let view = Mat4::look_at_rh(self.position(), self.center, Vec3::Y);
        proj * view
    }

    /// Project a world point to pixel coordinates. Used by hosts to aim
    /// picking rays and overlays at scene objects.
    pub fn world_to_screen(&self, world: Vec3) -> Vec2 {
        let clip = self.view_projection() * world.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.screen_size.x,
            (1.0 - ndc.y) * 0.5 * self.screen_size.y,
        )
    }
}

impl CameraRig for OrbitCamera {
    fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::NEG_Z
    }

    fn position(&self) -> Vec3 {
        // Always looking at the center: start there and pull backwards.
        self.center - self.forward() * self.distance()
    }

    fn screen_point_to_ray(&self, point: Vec2) -> Ray {
        let ndc_x = (2.0 * point.x / self.screen_size.x) - 1.0;
        let ndc_y = 1.0 - (2.0 * point.y / self.screen_size.y);
        let inv = self.view_projection().inverse();
        let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        let origin = self.position();
        Ray::new(origin, (p1 - origin).normalize())
    }

    fn set_ignore_input(&mut self, ignore: bool) {
        self.ignore_input = ignore;
    }
}
