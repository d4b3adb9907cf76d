use crate::clock::{Clock, Sample};
use crate::display::{format_hms, remaining_secs};
use crate::error::TimerError;
use log::{debug, trace};
use std::io::Write;

/// Message printed once the target duration has elapsed.
pub static DONE_MESSAGE: &str = "Timer is done";

/// What the loop should do after one measured iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Elapsed time reached the target.
    Done,
    /// Sleep for this many seconds, then redraw.
    Sleep(f64),
    /// No safe sleep exists; redraw and measure again right away.
    Poll,
}

/// Totals reported once the countdown finishes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub iterations: u64,
    pub sleeps: u64,
    pub elapsed: f64,
    pub max_interval: f64,
}

/// A single-shot countdown that re-measures the clock on every iteration and
/// sizes each sleep from what was actually measured.
///
/// While more than a second remains, sleeps are aimed at whole-second
/// checkpoints counted from the start sample, so oversleeping on one
/// iteration is taken back on the next. In the last second, the sleep is
/// shrunk by the largest interval seen so far (falling back to the last one),
/// and when neither leaves a non-negative wait the loop polls instead.
pub struct Countdown<C: Clock, W: Write> {
    clock: C,
    out: W,
    target: f64,
    elapsed: f64,
    last_interval: f64,
    max_interval: f64,
    checkpoint: f64,
    prev: Sample,
    iterations: u64,
    sleeps: u64,
}

impl<C: Clock, W: Write> Countdown<C, W> {
    /// Creates a countdown of `target` seconds measured from `start`.
    pub fn new(clock: C, out: W, target: f64, start: Sample) -> Self {
        Countdown {
            clock,
            out,
            target,
            elapsed: 0.0,
            last_interval: 0.0,
            max_interval: 0.0,
            checkpoint: 0.0,
            prev: start,
            iterations: 0,
            sleeps: 0,
        }
    }

    #[cfg(test)]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    #[cfg(test)]
    pub fn last_interval(&self) -> f64 {
        self.last_interval
    }

    #[cfg(test)]
    pub fn max_interval(&self) -> f64 {
        self.max_interval
    }

    /// Redraws the readout, measures the interval since the previous sample
    /// and decides the next step. Elapsed time is only advanced when the
    /// countdown is not finished.
    pub fn tick(&mut self) -> Result<Step, TimerError> {
        let line = format_hms(remaining_secs(self.target, self.elapsed));
        write!(self.out, "{}\r", line)
            .and_then(|_| self.out.flush())
            .map_err(|source| TimerError::Output {
                context: "write failed",
                source,
            })?;

        let cur = self.clock.now().map_err(|source| TimerError::Clock {
            context: "gettime 2 failed",
            source,
        })?;
        // A realtime clock can step backwards; that counts as no time passing.
        self.last_interval = cur.seconds_since(self.prev).max(0.0);
        self.prev = self.clock.now().map_err(|source| TimerError::Clock {
            context: "gettime 3 failed",
            source,
        })?;
        self.iterations += 1;

        if self.elapsed + self.last_interval >= self.target {
            return Ok(Step::Done);
        }
        self.elapsed += self.last_interval;
        self.max_interval = self.max_interval.max(self.last_interval);

        let remaining = self.target - self.elapsed;
        let wait = if remaining > 1.0 {
            self.checkpoint += 1.0;
            self.checkpoint - self.elapsed
        } else {
            let wait = remaining - self.max_interval;
            if wait < 0.0 {
                remaining - self.last_interval
            } else {
                wait
            }
        };
        debug!(
            "interval={:.6}s elapsed={:.6}s remaining={:.6}s wait={:.6}s",
            self.last_interval, self.elapsed, remaining, wait
        );

        if wait < 0.0 {
            Ok(Step::Poll)
        } else {
            Ok(Step::Sleep(wait))
        }
    }

    /// Runs the countdown to completion and prints the completion message.
    pub fn run(mut self) -> Result<Summary, TimerError> {
        loop {
            match self.tick()? {
                Step::Done => break,
                Step::Poll => trace!("polling, elapsed={:.6}s", self.elapsed),
                Step::Sleep(secs) => {
                    self.clock.sleep(secs).map_err(|source| TimerError::Sleep {
                        context: "nanosleep failed",
                        source,
                    })?;
                    self.sleeps += 1;
                }
            }
        }

        writeln!(self.out, "\n{}", DONE_MESSAGE)
            .and_then(|_| self.out.flush())
            .map_err(|source| TimerError::Output {
                context: "write failed",
                source,
            })?;

        Ok(Summary {
            iterations: self.iterations,
            sleeps: self.sleeps,
            elapsed: self.elapsed + self.last_interval,
            max_interval: self.max_interval,
        })
    }
}
