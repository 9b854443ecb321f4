//! Gameplay time scale

/// Scales gameplay time; 0.0 freezes the simulation, 1.0 is normal speed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clock {
    time_scale: f32,
}

impl Default for Clock {
    fn default() -> Self {
        Self { time_scale: 1.0 }
    }
}

impl Clock {
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.max(0.0);
    }

    pub fn is_frozen(&self) -> bool {
        self.time_scale == 0.0
    }

    /// Gameplay delta for a real frame delta
    pub fn scaled(&self, dt: f32) -> f32 {
        dt * self.time_scale
    }
}
