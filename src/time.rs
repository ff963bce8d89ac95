use std::time::Instant;

/// One scheduler step: absolute simulation time and the delta since the
/// previous step, both in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub time: f32,
    pub delta: f32,
}

/// Supplies simulation time to the run loop. Implementations guarantee
/// that `time` never decreases and `delta` is never negative, whatever
/// the underlying clock reports.
pub trait TimeSource {
    fn next_tick(&mut self) -> Tick;
}

/// Wall-clock time, measured from construction.
pub struct SystemTimeSource {
    start: Instant,
    last_time: f32,
}

impl SystemTimeSource {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            last_time: 0.0,
        }
    }
}

impl Default for SystemTimeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for SystemTimeSource {
    fn next_tick(&mut self) -> Tick {
        // Instant is monotonic; the clamp guards the f32 conversion.
        let time = self.start.elapsed().as_secs_f32().max(self.last_time);
        let delta = time - self.last_time;
        self.last_time = time;
        Tick { time, delta }
    }
}

/// Deterministic fixed-delta stepping for headless runs and tests.
/// The first tick lands on time zero with a zero delta.
#[allow(dead_code)]
pub struct FixedStepTimeSource {
    time: f32,
    step: f32,
    started: bool,
}

impl FixedStepTimeSource {
    #[allow(dead_code)]
    pub fn new(step: f32) -> Self {
        Self {
            time: 0.0,
            step: step.max(0.0),
            started: false,
        }
    }
}

impl TimeSource for FixedStepTimeSource {
    fn next_tick(&mut self) -> Tick {
        if !self.started {
            self.started = true;
            return Tick {
                time: 0.0,
                delta: 0.0,
            };
        }
        self.time += self.step;
        Tick {
            time: self.time,
            delta: self.step,
        }
    }
}
