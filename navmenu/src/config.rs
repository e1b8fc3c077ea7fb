use embassy_time::{Duration, Instant};

/// Host-tunable engine settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Minimum time between redraws that happen without any button press, so
    /// live values (clocks, counters) stay current. Zero turns periodic
    /// redraws off entirely.
    pub refresh_period: Duration,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            refresh_period: Duration::from_ticks(0),
        }
    }

    #[must_use]
    pub const fn with_refresh_period(mut self, period: Duration) -> Self {
        self.refresh_period = period;
        self
    }

    pub(crate) const fn refresh_enabled(&self) -> bool {
        self.refresh_period.as_ticks() != 0
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// Monotonic time source supplied by the host.
pub trait Clock {
    fn now(&mut self) -> Instant;
}

impl<C: Clock + ?Sized> Clock for &mut C {
    fn now(&mut self) -> Instant {
        (**self).now()
    }
}

/// Clock for menus that only redraw on input.
///
/// Always reports the same instant, so it never lets a refresh period elapse.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoClock;

impl Clock for NoClock {
    fn now(&mut self) -> Instant {
        Instant::from_ticks(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refresh_disabled_by_default() {
        assert!(!Config::default().refresh_enabled());
        assert_eq!(Config::default(), Config::new());
    }

    #[test]
    fn refresh_period() {
        let config = Config::new().with_refresh_period(Duration::from_millis(500));
        assert!(config.refresh_enabled());
        assert_eq!(config.refresh_period, Duration::from_millis(500));
    }
}
