use crate::config::CompassConfig;
use crate::state::Tick;

/// Fixed cadence of automatic scans.
///
/// A tick is due when it is a multiple of the interval, so with the default
/// of 20 the scans fall on ticks 0, 20, 40, ... Forced updates bypass the
/// schedule entirely.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UpdateSchedule {
    interval: u32,
}

impl UpdateSchedule {
    pub const fn new(interval: u32) -> Self {
        Self { interval }
    }

    pub const fn from_config(config: &CompassConfig) -> Self {
        Self::new(config.update_interval)
    }

    pub const fn interval(&self) -> u32 {
        self.interval
    }

    /// A zero interval never fires; validated configs cannot produce one.
    pub fn is_due(&self, tick: Tick) -> bool {
        self.interval != 0 && tick.0 % u64::from(self.interval) == 0
    }

    /// First due tick strictly after `tick`.
    pub fn next_after(&self, tick: Tick) -> Option<Tick> {
        if self.interval == 0 {
            return None;
        }
        let interval = u64::from(self.interval);
        Some(Tick((tick.0 / interval + 1) * interval))
    }
}

impl Default for UpdateSchedule {
    fn default() -> Self {
        Self::new(CompassConfig::DEFAULT_UPDATE_INTERVAL)
    }
}
