pub mod availability;
pub mod commands;
pub mod geometry;
pub mod schedule;
pub mod shared_str;
pub mod theme;
pub mod types;

pub use availability::Availability;
pub use commands::{RenderCommand, TextAlign};
pub use geometry::{BlockGeometry, ColumnPlacements, Placement};
pub use schedule::{ScheduleDocument, TechnicianData, TimeOfDay, WorkOrderData};
pub use shared_str::SharedStr;
pub use theme::ThemeToken;
pub use types::{Point, Rect, Viewport};
