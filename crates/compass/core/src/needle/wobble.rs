use crate::state::Tick;

use super::bearing::{wrap_degrees, wrap_signed_degrees};

/// Normalised needle position in `[0, 1)` (angle / 360).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct NeedleReading(f32);

impl NeedleReading {
    pub fn from_degrees(angle: f64) -> Self {
        let fraction = (wrap_degrees(angle) / 360.0) as f32;
        // f32 rounding can land exactly on 1.0 for angles just below 360.
        Self(if fraction >= 1.0 { 0.0 } else { fraction })
    }

    pub fn fraction(self) -> f32 {
        self.0
    }

    pub fn degrees(self) -> f64 {
        f64::from(self.0) * 360.0
    }
}

/// Ephemeral oscillator state of one needle.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct WobbleState {
    pub current_angle: f64,
    pub angular_velocity: f64,
    pub last_update_tick: Option<Tick>,
}

/// Turns a raw bearing into smooth needle motion for one tool instance.
///
/// Hosts keep exactly one animator per tool instance; sharing one between
/// tools makes their needles drag each other around.
#[derive(Clone, Debug, Default)]
pub struct NeedleAnimator {
    state: WobbleState,
}

impl NeedleAnimator {
    /// Spring pull per degree of error per tick.
    pub const FORCE: f64 = 0.05;
    /// Velocity retained per tick.
    pub const DAMPING: f64 = 0.9;
    /// Idle spin speed while nothing is tracked.
    pub const IDLE_SPIN_DEGREES_PER_TICK: u64 = 3;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &WobbleState {
        &self.state
    }

    /// Advances at most once per distinct tick and returns the needle.
    ///
    /// `bearing` is the target bearing relative to the holder's facing, or
    /// `None` when the tool has no target. Repeated calls within one tick
    /// return the cached value.
    pub fn sample(&mut self, tick: Tick, bearing: Option<f64>) -> NeedleReading {
        match bearing {
            Some(bearing) => self.track(tick, bearing),
            None => self.spin(tick),
        }
    }

    fn track(&mut self, tick: Tick, bearing: f64) -> NeedleReading {
        if self.state.last_update_tick != Some(tick) {
            let diff = wrap_signed_degrees(bearing - self.state.current_angle);
            self.state.angular_velocity += diff * Self::FORCE;
            self.state.angular_velocity *= Self::DAMPING;
            self.state.current_angle =
                wrap_degrees(self.state.current_angle + self.state.angular_velocity);
            self.state.last_update_tick = Some(tick);
        }
        NeedleReading::from_degrees(self.state.current_angle)
    }

    fn spin(&mut self, tick: Tick) -> NeedleReading {
        let angle = Self::idle_angle(tick);
        // Re-acquisition starts from where the needle visibly is.
        self.state = WobbleState {
            current_angle: angle,
            angular_velocity: 0.0,
            last_update_tick: Some(tick),
        };
        NeedleReading::from_degrees(angle)
    }

    /// Idle spin angle, a pure function of world time.
    pub fn idle_angle(tick: Tick) -> f64 {
        (tick.0.wrapping_mul(Self::IDLE_SPIN_DEGREES_PER_TICK) % 360) as f64
    }
}
