/// Frame divider: fires once every `period` ticks.
#[derive(Clone, Debug)]
pub struct Ticker {
    period: u64,
    ticks: u64,
}

impl Ticker {
    /// # Panics
    ///
    /// If `period` is zero.
    pub fn new(period: u64) -> Self {
        assert!(period > 0, "ticker period must be positive");
        Self { period, ticks: 0 }
    }

    /// Counts one frame; returns `true` on every `period`-th call.
    pub fn tick(&mut self) -> bool {
        self.ticks += 1;
        self.ticks % self.period == 0
    }

    pub fn period(&self) -> u64 {
        self.period
    }

    /// Total number of `tick` calls so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
