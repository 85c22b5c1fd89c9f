//! Scalar damped-spring integrator.
//!
//! One spring per axis. Turning up the constant makes it vibrate faster,
//! turning up the damping makes it settle sooner. Both values must be
//! NEGATIVE for the spring to return to the origin instead of flying off.

/// One axis of damped oscillation around zero.
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    pub value: f32,
    pub speed: f32,
    pub constant: f32,
    pub damping: f32,
}

impl Spring {
    pub fn new(constant: f32, damping: f32) -> Self {
        Self {
            value: 0.0,
            speed: 0.0,
            constant,
            damping,
        }
    }

    /// Semi-implicit Euler step: acceleration into speed, friction into
    /// speed, speed into value. Deterministic, never faults; callers enforce
    /// any domain constraints (the drag controller owns the floor clamp).
    pub fn advance(&mut self, dt: f32) {
        let accel = self.constant * self.value;
        self.speed += accel * dt;
        self.speed += self.damping * self.speed * dt;
        self.value += self.speed * dt;
    }
}
