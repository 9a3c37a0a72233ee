use std::thread;
use std::time::Duration;

use macroquad::time::get_time;

/// Holds the loop to a fixed tick rate. Overruns are not made up.
pub struct TickClock {
    interval: f64,
    last_tick: Option<f64>,
}

impl TickClock {
    pub fn new(interval: f64) -> Self {
        Self {
            interval,
            last_tick: None,
        }
    }

    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// Seconds still to wait at `now` before the next tick is due.
    pub fn remaining(&self, now: f64) -> f64 {
        match self.last_tick {
            Some(last) => (last + self.interval - now).max(0.0),
            None => 0.0,
        }
    }

    /// Records a tick at `now` and returns how long to sleep first.
    pub fn tick_at(&mut self, now: f64) -> f64 {
        let wait = self.remaining(now);
        self.last_tick = Some(now + wait);
        wait
    }

    /// Sleeps inside the frame rather than gating the update on `get_time`,
    /// so input is sampled exactly once per tick and presses made during the
    /// sleep are delivered by macroquad on the following frame.
    pub fn wait(&mut self) {
        let wait = self.tick_at(get_time());
        if wait > 0.0 {
            thread::sleep(Duration::from_secs_f64(wait));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_is_immediate() {
        let mut clock = TickClock::new(0.1);
        assert_eq!(clock.tick_at(5.0), 0.0);
    }

    #[test]
    fn waits_out_the_interval() {
        let mut clock = TickClock::new(0.1);
        clock.tick_at(1.0);
        assert!((clock.remaining(1.03) - 0.07).abs() < 1e-9);
        assert!((clock.tick_at(1.03) - 0.07).abs() < 1e-9);
        // Next deadline counts from when the sleep ends.
        assert!((clock.remaining(1.1) - 0.1).abs() < 1e-9);
    }

    #[test]
    fn overrun_does_not_catch_up() {
        let mut clock = TickClock::new(0.1);
        clock.tick_at(1.0);
        assert_eq!(clock.tick_at(1.35), 0.0);
        assert!((clock.remaining(1.4) - 0.05).abs() < 1e-9);
    }
}
