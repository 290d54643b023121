use crate::{life, Grid, GridBuffer, LifeConfig, Seeding, Ticker};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Requests coming from the host loop, polled once per frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// Stop stepping; the host is expected to close.
    Quit,
    TogglePause,
    /// Pause and compute exactly one generation.
    Step,
    /// Throw away the field and seed a fresh one.
    Reseed,
}

/// Everything the main loop mutates: the field, the frame divider and the
/// run state.
pub struct Simulation {
    buffer: GridBuffer,
    ticker: Ticker,
    seeding: Seeding,
    rng: ChaCha8Rng,
    running: bool,
    is_paused: bool,
    do_one_step: bool,
    generation: u64,
}

impl Simulation {
    /// # Panics
    ///
    /// If `config` does not pass [`LifeConfig::validate`].
    pub fn new(config: &LifeConfig) -> Self {
        let mut rng = match config.seeding.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let buffer = GridBuffer::random(config.side, &config.seeding, &mut rng);
        let ticker = Ticker::new(config.tick_period);
        log::info!(
            "seeded {0}x{0} field with {1} live cells, stepping every {2} frames",
            config.side,
            buffer.front().population(),
            ticker.period(),
        );
        Self {
            buffer,
            ticker,
            seeding: config.seeding.clone(),
            rng,
            running: true,
            is_paused: false,
            do_one_step: false,
            generation: 0,
        }
    }

    /// Starts from a given field instead of a random one.
    pub fn from_grid(grid: Grid, tick_period: u64) -> Self {
        Self {
            buffer: GridBuffer::from_grid(grid),
            ticker: Ticker::new(tick_period),
            seeding: LifeConfig::default().seeding,
            rng: ChaCha8Rng::from_entropy(),
            running: true,
            is_paused: false,
            do_one_step: false,
            generation: 0,
        }
    }

    pub fn handle(&mut self, event: Event) {
        log::debug!("event: {event:?}");
        match event {
            Event::Quit => self.running = false,
            Event::TogglePause => {
                self.is_paused = !self.is_paused;
                self.do_one_step = false;
            }
            Event::Step => {
                self.is_paused = true;
                self.do_one_step = true;
            }
            Event::Reseed => {
                self.buffer.seed(&self.seeding, &mut self.rng);
                self.generation = 0;
                log::info!(
                    "reseeded field with {} live cells",
                    self.buffer.front().population()
                );
            }
        }
    }

    /// Called once per presented frame. Returns whether a generation was
    /// computed.
    pub fn advance_frame(&mut self) -> bool {
        if !self.running {
            return false;
        }
        let fire = if self.is_paused {
            std::mem::take(&mut self.do_one_step)
        } else {
            self.ticker.tick()
        };
        if fire {
            life::step(&mut self.buffer);
            self.generation += 1;
            log::trace!("generation {}", self.generation);
        }
        fire
    }

    /// The current generation, as the renderer should show it.
    pub fn front(&self) -> &Grid {
        self.buffer.front()
    }

    pub fn side(&self) -> usize {
        self.buffer.side()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.buffer.front().population()
    }
}
