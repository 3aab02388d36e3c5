use chrono::{DateTime, Utc};
use rand::Rng;
use rand::rngs::{StdRng, ThreadRng};

/// Source of the reference time for a spin.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Uniform samples in `[0, 1)`.
pub trait RandomSource {
    fn next_draw(&mut self) -> f64;
}

impl RandomSource for ThreadRng {
    fn next_draw(&mut self) -> f64 {
        self.r#gen::<f64>()
    }
}

impl RandomSource for StdRng {
    fn next_draw(&mut self) -> f64 {
        self.r#gen::<f64>()
    }
}

/// Always yields the same draw, clamped into `[0, 1)`.
#[derive(Debug, Clone, Copy)]
pub struct FixedDraw(pub f64);

impl RandomSource for FixedDraw {
    fn next_draw(&mut self) -> f64 {
        if self.0.is_nan() {
            return 0.0;
        }
        self.0.clamp(0.0, 1.0 - f64::EPSILON)
    }
}
