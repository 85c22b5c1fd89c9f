//! Core simulation for the eyestalk toy.
//!
//! A draggable "eye" hangs above a base, tied to it by a flexible tower that
//! stretches and shears to reach wherever the eye currently sits. Grab the
//! eye with the pointer and drag it around a camera-facing plane; release it
//! and three independent damped springs pull it back to rest.
//!
//! The crate is pure logic: it has no windowing, GPU, or input dependencies.
//! Hosts feed an [`InputFrame`] snapshot once per frame and read transform
//! nodes back out. [`SceneRig`] wires the pieces together and steps them in
//! dependency order.

pub mod camera;
pub mod config;
pub mod constants;
pub mod drag;
pub mod frame;
pub mod input;
pub mod math;
pub mod skew;
pub mod spring;

pub use camera::{CameraRig, OrbitCamera};
pub use config::{ConfigError, TowerConfig};
pub use drag::DragController;
pub use frame::SceneRig;
pub use input::InputFrame;
pub use math::{Node, Plane, Ray};
pub use skew::{SkewChain, TowerShape};
pub use spring::Spring;
