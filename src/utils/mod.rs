mod config;
mod format_int;
mod fps_limit;

pub use config::{LifeConfig, RenderMode, SeedRegion, Seeding, Variant};
pub use format_int::NiceInt;
pub use fps_limit::FpsLimiter;
