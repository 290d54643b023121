use crate::Error;
use std::str::FromStr;

/// Where the initial live cells may be placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedRegion {
    /// Only cells strictly inside the border; the border starts dead.
    Interior,
    /// Rows and columns `0..side - 1`: the top and left border may be
    /// seeded, the bottom and right border never. Border cells seeded alive
    /// stay alive, since generations never write them.
    TopLeft,
}

/// How the field is presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderMode {
    /// One filled quad per cell.
    Quads,
    /// The interior of the grid uploaded as a single RGB texture.
    Texture,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Seeding {
    /// Number of random picks as a fraction of all cells (`side * side`).
    /// Picks may repeat, so the resulting population is at most this.
    pub fill_ratio: f64,
    pub region: SeedRegion,
    /// `None` seeds the generator from entropy.
    pub seed: Option<u64>,
}

impl Seeding {
    pub fn target_count(&self, side: usize) -> usize {
        ((side * side) as f64 * self.fill_ratio) as usize
    }
}

/// Named presets selectable from the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    Quads,
    Texture,
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "quads" => Ok(Self::Quads),
            "texture" => Ok(Self::Texture),
            _ => Err(Error::UnknownVariant(s.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LifeConfig {
    pub side: usize,
    pub seeding: Seeding,
    /// A generation is computed once every `tick_period` frames.
    pub tick_period: u64,
    pub render_mode: RenderMode,
    pub title: String,
    pub window_size: [f32; 2],
}

impl LifeConfig {
    pub const TITLE: &'static str = "Cellular Automata";
    pub const WINDOW_SIZE: [f32; 2] = [480., 480.];
    pub const TICK_PERIOD: u64 = 3;

    /// Small field drawn cell by cell, half of the cells picked for seeding.
    pub fn quads() -> Self {
        Self {
            side: 50,
            seeding: Seeding {
                fill_ratio: 0.5,
                region: SeedRegion::TopLeft,
                seed: None,
            },
            tick_period: Self::TICK_PERIOD,
            render_mode: RenderMode::Quads,
            title: Self::TITLE.to_string(),
            window_size: Self::WINDOW_SIZE,
        }
    }

    /// Larger field blitted as one texture, a quarter of the cells picked for seeding.
    pub fn texture() -> Self {
        Self {
            side: 240,
            seeding: Seeding {
                fill_ratio: 0.25,
                region: SeedRegion::Interior,
                seed: None,
            },
            tick_period: Self::TICK_PERIOD,
            render_mode: RenderMode::Texture,
            title: Self::TITLE.to_string(),
            window_size: Self::WINDOW_SIZE,
        }
    }

    pub fn from_variant(variant: Variant) -> Self {
        match variant {
            Variant::Quads => Self::quads(),
            Variant::Texture => Self::texture(),
        }
    }

    /// Builds the configuration from `[variant] [seed]` command line arguments.
    pub fn from_args<I>(args: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let variant = match args.next() {
            Some(name) => name.parse()?,
            None => Variant::Quads,
        };
        let mut config = Self::from_variant(variant);
        if let Some(seed) = args.next() {
            let seed = seed.parse().map_err(|_| Error::InvalidSeed(seed))?;
            config.seeding.seed = Some(seed);
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.side < 3 {
            return Err(Error::SideTooSmall(self.side));
        }
        if !(0.0..=1.0).contains(&self.seeding.fill_ratio) {
            return Err(Error::InvalidFillRatio(self.seeding.fill_ratio));
        }
        if self.tick_period == 0 {
            return Err(Error::ZeroTickPeriod);
        }
        Ok(())
    }
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self::quads()
    }
}
