//! Headless driver: runs the simulation with a scripted pointer and logs the
//! eye position and tower shape each frame. Useful for eyeballing spring
//! tuning without a renderer attached.

use anyhow::Result;
use eyestalk_core::{InputFrame, SceneRig, TowerConfig};
use glam::Vec2;

const SCREEN: Vec2 = Vec2::new(1280.0, 720.0);
const DT: f32 = 1.0 / 60.0;
const TOTAL_FRAMES: u32 = 360; // six simulated seconds

fn main() -> Result<()> {
    env_logger::init();

    let config = TowerConfig::default();
    let mut rig = SceneRig::new(config, SCREEN)?;

    let mut input = InputFrame {
        pointer: SCREEN * 0.5,
        ..Default::default()
    };

    for frame in 0..TOTAL_FRAMES {
        script_pointer(&rig, &mut input, frame);
        rig.step(&input, DT);

        if frame % 10 == 0 {
            let shape = rig.tower_shape();
            log::info!(
                "[frame {:3}] eye {:?} dragging={} facing={:6.1} skew={:6.1} stretch={:.3}",
                frame,
                rig.eye_position(),
                rig.is_dragging(),
                shape.facing_angle,
                shape.skew_angle,
                shape.stretch_scale,
            );
        }
    }

    Ok(())
}

/// One second idle, grab the eye, pull it sideways and down for a second,
/// let go, and watch the springs settle for the rest of the run.
fn script_pointer(rig: &SceneRig, input: &mut InputFrame, frame: u32) {
    match frame {
        60 => {
            // Press exactly on the eye so the pick test succeeds.
            input.pointer = rig.camera().borrow().world_to_screen(rig.eye_position());
            input.primary_down = true;
        }
        61..=120 => {
            input.pointer += Vec2::new(4.0, 2.5);
        }
        121 => {
            input.primary_down = false;
        }
        _ => {}
    }
}
