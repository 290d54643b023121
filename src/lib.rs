mod error;
mod gui;
mod life;
mod simulation;
mod utils;

pub use error::Error;
pub use gui::{run, App, Config};
pub use life::{next_state, step, Grid, GridBuffer, Ticker};
pub use simulation::{Event, Simulation};
pub use utils::{FpsLimiter, LifeConfig, NiceInt, RenderMode, SeedRegion, Seeding, Variant};
