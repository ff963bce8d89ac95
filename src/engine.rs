use std::time::Duration;

use log::trace;

use crate::director::Director;
use crate::time::{Tick, TimeSource};

/// Pacing for the run loop.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Sleep between steps; zero runs the loop as fast as it can.
    pub frame: Duration,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            // ~60 steps per second
            frame: Duration::from_millis(16),
        }
    }
}

/// Feeds ticks to the director until simulation time passes `until`
/// seconds. Returns the last delivered time so callers can chain
/// activations onto it.
pub fn run(
    director: &mut Director,
    ticks: &mut dyn TimeSource,
    config: &RunConfig,
    until: f32,
) -> f32 {
    let mut last_time = 0.0;
    loop {
        let Tick { time, delta } = ticks.next_tick();
        if time > until {
            return last_time;
        }
        trace!("step t={time} dt={delta}");
        director.step(time, delta);
        last_time = time;

        if !config.frame.is_zero() {
            std::thread::sleep(config.frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{Host, HeadlessHost};
    use crate::scene::{Scene, SceneError};
    use crate::time::FixedStepTimeSource;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct CountingScene {
        count: Rc<RefCell<u32>>,
    }

    impl Scene for CountingScene {
        fn name(&self) -> &str {
            "counting"
        }

        fn initialize(&mut self, _host: &mut dyn Host, _time: f32) -> Result<(), SceneError> {
            Ok(())
        }

        fn update(&mut self, _time: f32, _delta: f32) -> Result<(), SceneError> {
            *self.count.borrow_mut() += 1;
            Ok(())
        }
    }

    #[test]
    fn run_steps_until_the_deadline() {
        let count = Rc::new(RefCell::new(0));
        let mut host = HeadlessHost::new();
        let mut director = Director::new();
        director
            .register_scene(Box::new(CountingScene {
                count: count.clone(),
            }))
            .unwrap();
        director.activate("counting", &mut host, 0.0).unwrap();

        let config = RunConfig {
            frame: Duration::ZERO,
        };
        let mut ticks = FixedStepTimeSource::new(0.25);
        let last = run(&mut director, &mut ticks, &config, 1.0);

        // Ticks at 0, 0.25, 0.5, 0.75 and 1.0 are delivered; 1.25 is not.
        assert_eq!(*count.borrow(), 5);
        assert_eq!(last, 1.0);
    }

    #[test]
    fn run_without_active_scene_still_terminates() {
        let mut director = Director::new();
        let config = RunConfig {
            frame: Duration::ZERO,
        };
        let mut ticks = FixedStepTimeSource::new(0.5);
        let last = run(&mut director, &mut ticks, &config, 2.0);
        assert_eq!(last, 2.0);
    }
}
