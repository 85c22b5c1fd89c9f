//! Pointer-drag state machine for the eye.
//!
//! While idle, the eye's position is the rest position plus the three spring
//! values. While dragging, it follows the intersection of the pointer ray
//! with a plane fixed at drag start (camera-facing, through the eye). On
//! release the displacement is handed to the springs, which pull it home.

use crate::camera::CameraRig;
use crate::math::Plane;
use crate::spring::Spring;
use glam::{Vec2, Vec3};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Copy)]
enum Phase {
    Idle,
    // The plane is only meaningful while a drag is in progress, so it lives
    // in the variant rather than beside it.
    Dragging { plane: Plane },
}

pub struct DragController {
    rest_position: Vec3,
    position: Vec3,
    floor_height: f32,
    phase: Phase,
    spring_x: Spring,
    spring_y: Spring,
    spring_z: Spring,
    camera: Rc<RefCell<dyn CameraRig>>,
}

impl DragController {
    pub fn new(
        rest_position: Vec3,
        floor_height: f32,
        spring_constant: f32,
        spring_damping: f32,
        camera: Rc<RefCell<dyn CameraRig>>,
    ) -> Self {
        Self {
            rest_position,
            position: rest_position,
            floor_height,
            phase: Phase::Idle,
            spring_x: Spring::new(spring_constant, spring_damping),
            spring_y: Spring::new(spring_constant, spring_damping),
            spring_z: Spring::new(spring_constant, spring_damping),
            camera,
        }
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    pub fn rest_position(&self) -> Vec3 {
        self.rest_position
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    /// The pointer just went down over the eye. Fix the tracking plane
    /// through the current position, facing the camera, and claim the
    /// pointer so the camera stops orbiting.
    pub fn on_pointer_down(&mut self) {
        if self.is_dragging() {
            return;
        }
        let forward = self.camera.borrow().forward();
        self.phase = Phase::Dragging {
            plane: Plane::new(forward, self.position),
        };
        self.camera.borrow_mut().set_ignore_input(true);
        log::info!("[drag] grabbed eye at {:?}", self.position);
    }

    /// The pointer was released. Seed each spring with the displacement from
    /// rest and give the pointer back to the camera.
    ///
    /// Spring speed is reset to zero: drag velocity is deliberately not
    /// carried over. Tracking per-frame pointer movement would give the eye
    /// momentum on release, but the toy reads better without it.
    pub fn on_pointer_up(&mut self) {
        if !self.is_dragging() {
            return;
        }
        self.phase = Phase::Idle;
        self.camera.borrow_mut().set_ignore_input(false);

        let offset = self.position - self.rest_position;
        self.spring_x.value = offset.x;
        self.spring_y.value = offset.y;
        self.spring_z.value = offset.z;
        self.spring_x.speed = 0.0;
        self.spring_y.speed = 0.0;
        self.spring_z.speed = 0.0;
        log::info!("[drag] released eye, offset {:?}", offset);
    }

    /// Advance one frame. Exactly one of the two position modes runs:
    /// drag-follow while the pointer holds the eye, spring blend otherwise.
    pub fn step(&mut self, pointer: Vec2, dt: f32) {
        match self.phase {
            Phase::Dragging { plane } => {
                let ray = self.camera.borrow().screen_point_to_ray(pointer);
                // A parallel ray has no intersection; hold last position for
                // this frame rather than fault.
                if let Some(t) = plane.raycast(&ray) {
                    let mut new_pos = ray.point_at(t);
                    new_pos.y = new_pos.y.max(self.rest_position.y + self.floor_height);
                    self.position = new_pos;
                }
            }
            Phase::Idle => {
                // The y spring isn't allowed to drop the eye below the
                // floor: clamp it and bounce the speed upward so penetration
                // never persists.
                if self.spring_y.value < self.floor_height {
                    self.spring_y.value = self.floor_height;
                    self.spring_y.speed = self.spring_y.speed.abs();
                }

                self.spring_x.advance(dt);
                self.spring_y.advance(dt);
                self.spring_z.advance(dt);

                self.position = self.rest_position
                    + Vec3::new(self.spring_x.value, self.spring_y.value, self.spring_z.value);
            }
        }
    }
}
