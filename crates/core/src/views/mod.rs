pub mod board;
pub mod grid;
pub mod time_axis;

pub use board::render_board;
pub use grid::{BoardGrid, GridMetrics};
pub use time_axis::render_time_axis;
