use std::time::Duration;

/// Fixed-period timer advanced explicitly by the frame loop.
#[derive(Clone, Debug)]
pub struct Ticker {
    period: Duration,
    elapsed: Duration,
    max_catch_up: u32,
}

impl Ticker {
    pub fn new(period: Duration, max_catch_up: u32) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            elapsed: Duration::ZERO,
            max_catch_up: max_catch_up.max(1),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Add `dt` and return how many periods completed. Fires beyond
    /// `max_catch_up` are dropped along with their accumulated time.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        self.elapsed += dt;
        let mut fired = 0;
        while self.elapsed >= self.period {
            self.elapsed -= self.period;
            fired += 1;
            if fired == self.max_catch_up {
                self.elapsed = Duration::from_nanos(
                    (self.elapsed.as_nanos() % self.period.as_nanos()) as u64,
                );
                break;
            }
        }
        fired
    }
}
