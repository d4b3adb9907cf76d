use nix::errno::Errno;
use nix::sys::time::TimeSpec;
use nix::time::{clock_gettime, clock_nanosleep, ClockId, ClockNanosleepFlags};
use std::time::Duration;

/// A single wall-clock reading, kept as whole seconds plus nanoseconds so
/// that differences keep their sub-second part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub secs: i64,
    pub nanos: i64,
}

impl Sample {
    pub fn new(secs: i64, nanos: i64) -> Self {
        Sample { secs, nanos }
    }

    /// Seconds elapsed between `earlier` and `self`, as one floating-point
    /// difference.
    pub fn seconds_since(&self, earlier: Sample) -> f64 {
        (self.secs - earlier.secs) as f64 + (self.nanos - earlier.nanos) as f64 / 1_000_000_000.0
    }
}

impl From<TimeSpec> for Sample {
    fn from(ts: TimeSpec) -> Self {
        Sample::new(i64::from(ts.tv_sec()), i64::from(ts.tv_nsec()))
    }
}

/// The two primitives the countdown needs from its environment.
pub trait Clock {
    /// Reads the current time.
    fn now(&mut self) -> nix::Result<Sample>;
    /// Suspends the caller for `secs` seconds. Callers never pass a negative value.
    fn sleep(&mut self, secs: f64) -> nix::Result<()>;
}

/// The realtime system clock.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&mut self) -> nix::Result<Sample> {
        clock_gettime(ClockId::CLOCK_REALTIME).map(Sample::from)
    }

    fn sleep(&mut self, secs: f64) -> nix::Result<()> {
        let duration = Duration::try_from_secs_f64(secs).map_err(|_| Errno::EINVAL)?;
        let request = TimeSpec::from_duration(duration);
        // Relative sleep, no signal handlers are installed so the remainder is unused.
        clock_nanosleep(ClockId::CLOCK_REALTIME, ClockNanosleepFlags::empty(), &request)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seconds_since_keeps_fraction() {
        let earlier = Sample::new(10, 900_000_000);
        let later = Sample::new(12, 100_000_000);
        assert!((later.seconds_since(earlier) - 1.2).abs() < 1e-9);
        assert_eq!(earlier.seconds_since(earlier), 0.0);
    }

    #[test]
    fn test_system_clock_advances() {
        let mut clock = SystemClock;
        let start = clock.now().unwrap();
        clock.sleep(0.01).unwrap();
        let end = clock.now().unwrap();
        assert!(end.seconds_since(start) >= 0.005);
    }

    #[test]
    fn test_zero_sleep() {
        let mut clock = SystemClock;
        assert!(clock.sleep(0.0).is_ok());
    }

    #[test]
    fn test_negative_sleep_is_rejected() {
        let mut clock = SystemClock;
        assert_eq!(clock.sleep(-0.5), Err(Errno::EINVAL));
    }
}
