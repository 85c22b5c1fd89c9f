//! Per-frame driver: wires the components once and steps them in order.

use crate::camera::{CameraRig, OrbitCamera};
use crate::config::{ConfigError, TowerConfig};
use crate::drag::DragController;
use crate::input::{ray_sphere, InputFrame};
use crate::skew::{SkewChain, TowerShape};
use glam::{Vec2, Vec3};
use std::cell::RefCell;
use std::rc::Rc;

/// Owns the camera, drag controller, and skew chain, and evaluates them once
/// per frame in dependency order: camera orbit, pointer edges, drag/springs,
/// then the skew solve.
pub struct SceneRig {
    camera: Rc<RefCell<OrbitCamera>>,
    drag: DragController,
    skew: SkewChain,
    shape: TowerShape,
    pick_radius: f32,
    prev_primary_down: bool,
}

impl SceneRig {
    /// Validate the configuration and wire the components. Collaborator
    /// references are shared here, once; nothing reaches for globals later.
    pub fn new(config: TowerConfig, screen_size: Vec2) -> Result<Self, ConfigError> {
        config.validate()?;

        let camera = Rc::new(RefCell::new(OrbitCamera::new(
            Vec3::ZERO,
            config.camera_distance_min,
            config.camera_distance_max,
            screen_size,
        )));
        let shared: Rc<RefCell<dyn CameraRig>> = camera.clone();
        let drag = DragController::new(
            config.rest_position,
            config.floor_height,
            config.spring_constant,
            config.spring_damping,
            shared,
        );
        let shape = TowerShape::solve(config.rest_position, config.rest_position);
        let mut skew = SkewChain::new(config.skew_clamp_degrees);
        skew.apply(&shape);

        Ok(Self {
            camera,
            drag,
            skew,
            shape,
            pick_radius: config.pick_radius,
            prev_primary_down: false,
        })
    }

    /// Advance the whole scene by one frame from a single input snapshot.
    pub fn step(&mut self, input: &InputFrame, dt: f32) {
        self.camera.borrow_mut().update(input);

        // Turn the sampled button state into discrete down/up edges for the
        // drag state machine.
        let pressed = input.primary_down && !self.prev_primary_down;
        let released = !input.primary_down && self.prev_primary_down;
        self.prev_primary_down = input.primary_down;

        if pressed && !self.drag.is_dragging() {
            let ray = self.camera.borrow().screen_point_to_ray(input.pointer);
            if ray_sphere(&ray, self.drag.position(), self.pick_radius).is_some() {
                self.drag.on_pointer_down();
            }
        }
        if released {
            self.drag.on_pointer_up();
        }

        self.drag.step(input.pointer, dt);

        // The eye position is final for this frame; now shape the tower to
        // reach it.
        self.shape = TowerShape::solve(self.drag.position(), self.drag.rest_position());
        self.skew.apply(&self.shape);
    }

    #[inline]
    pub fn eye_position(&self) -> Vec3 {
        self.drag.position()
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    #[inline]
    pub fn tower_shape(&self) -> &TowerShape {
        &self.shape
    }

    #[inline]
    pub fn tower_nodes(&self) -> &SkewChain {
        &self.skew
    }

    #[inline]
    pub fn camera(&self) -> Rc<RefCell<OrbitCamera>> {
        self.camera.clone()
    }
}
