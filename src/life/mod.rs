mod grid;
mod grid_buffer;
mod step;
mod tests;
mod ticker;

pub use grid::Grid;
pub use grid_buffer::GridBuffer;
pub use step::{next_state, step};
pub use ticker::Ticker;
