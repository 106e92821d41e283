//! Layout core for the technician work-order calendar.
//!
//! A [`model::Board`] holds one [`model::Column`] per technician. Each column
//! is laid out on its own: [`merge`] clusters overlapping work orders,
//! [`layout`] turns clusters into percentage geometry, and [`availability`]
//! answers click-to-inspect queries against the same blocks.

pub mod availability;
pub mod clock;
pub mod config;
pub mod html;
pub mod layout;
pub mod merge;
pub mod model;
pub mod parsers;
pub mod views;

pub use availability::query_availability;
pub use config::LayoutConfig;
pub use layout::{BoardLayout, layout_board, layout_column};
pub use merge::{Interval, MergePolicy, merge};
