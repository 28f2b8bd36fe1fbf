//! Damped spring integrator for smoothing animated values.

/// Largest frame delta integrated in one call. Longer gaps (background tab,
/// debugger pause) are treated as this long.
const MAX_FRAME_MS: f64 = 64.0;

/// Integration substep.
const SUBSTEP_MS: f64 = 1.0;

/// Physical parameters of a [`Spring`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Distance from target below which the spring may settle.
    pub rest_delta: f64,
    /// Speed (units/s) below which the spring may settle.
    pub rest_speed: f64,
}

impl SpringConfig {
    pub const fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
            rest_delta: 0.01,
            rest_speed: 0.01,
        }
    }

    pub const fn with_rest_delta(mut self, rest_delta: f64) -> Self {
        self.rest_delta = rest_delta;
        self
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::new(100.0, 10.0)
    }
}

/// A value pulled toward a target by a damped spring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    /// A spring at rest at `initial`.
    pub fn new(config: SpringConfig, initial: f64) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn set_target(&mut self, target: f64) {
        if target.is_finite() {
            self.target = target;
        }
    }

    /// Move value and target to `value` immediately, killing momentum.
    pub fn jump(&mut self, value: f64) {
        if value.is_finite() {
            self.value = value;
            self.target = value;
            self.velocity = 0.0;
        }
    }

    pub fn is_at_rest(&self) -> bool {
        self.velocity.abs() <= self.config.rest_speed
            && (self.value - self.target).abs() <= self.config.rest_delta
    }

    /// Advance by `dt_ms` milliseconds and return the new value.
    ///
    /// Once within the rest thresholds the value snaps onto the target.
    pub fn step(&mut self, dt_ms: f64) -> f64 {
        if !(dt_ms > 0.0) {
            return self.value;
        }

        let mut remaining = dt_ms.min(MAX_FRAME_MS);
        let SpringConfig {
            stiffness,
            damping,
            mass,
            ..
        } = self.config;

        while remaining > 0.0 {
            if self.is_at_rest() {
                break;
            }
            let h = remaining.min(SUBSTEP_MS) / 1000.0;
            let displacement = self.value - self.target;
            let acceleration = (-stiffness * displacement - damping * self.velocity) / mass;
            // Semi-implicit Euler
            self.velocity += acceleration * h;
            self.value += self.velocity * h;
            remaining -= SUBSTEP_MS;
        }

        if self.is_at_rest() {
            self.value = self.target;
            self.velocity = 0.0;
        }

        self.value
    }
}
