use crate::models::Rotation;

/// Accumulates the field's rotation one frame at a time.
///
/// Each call to [`advance`](RotationClock::advance) subtracts
/// `delta / divisor` from each axis; nothing wraps.
#[derive(Debug, Clone)]
pub struct RotationClock {
    rotation: Rotation,
    x_divisor: f64,
    y_divisor: f64,
}

impl RotationClock {
    pub fn new(x_divisor: f64, y_divisor: f64) -> Self {
        Self {
            rotation: Rotation::default(),
            x_divisor,
            y_divisor,
        }
    }

    /// `delta_secs` is the time since the previous frame.
    pub fn advance(&mut self, delta_secs: f64) -> Rotation {
        self.rotation.x -= delta_secs / self.x_divisor;
        self.rotation.y -= delta_secs / self.y_divisor;
        self.rotation
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }
}

impl Default for RotationClock {
    fn default() -> Self {
        Self::new(20.0, 25.0)
    }
}
