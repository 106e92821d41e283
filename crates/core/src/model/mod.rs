pub mod block;
pub mod board;
pub mod column;
pub mod error;
pub mod view;

pub use block::TimeBlock;
pub use board::Board;
pub use column::{Column, Technician};
pub use error::ModelError;
pub use view::ViewWindow;
