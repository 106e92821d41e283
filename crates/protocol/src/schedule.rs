use serde::{Deserialize, Serialize};

/// The schedule document a server hands to the calendar.
///
/// This is the single interchange format between whatever owns the
/// technicians and work orders (a database, a fixture file) and the layout
/// core:
///
/// ```text
///   store ──▶ ScheduleDocument ──▶ Board ──▶ layout ──▶ RenderCommand[] / HTML
///               (this, JSON)      (validated)
/// ```
///
/// Times are seconds since midnight, or `"HH:MM"` strings for hand-written
/// fixtures. A missing view window falls back to the default workday.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_start: Option<TimeOfDay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_end: Option<TimeOfDay>,
    #[serde(default)]
    pub technicians: Vec<TechnicianData>,
}

/// One technician and the work orders assigned to them for the day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechnicianData {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub work_orders: Vec<WorkOrderData>,
}

/// A scheduled work order. Exactly one of `end_time` and
/// `duration_minutes` must be present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkOrderData {
    pub id: u64,
    pub start_time: TimeOfDay,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<TimeOfDay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// A time of day as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeOfDay {
    /// Seconds since midnight.
    Seconds(u32),
    /// Wall-clock text, `H:MM`, `HH:MM` or `HH:MM:SS`.
    Clock(String),
}

impl From<u32> for TimeOfDay {
    fn from(seconds: u32) -> Self {
        Self::Seconds(seconds)
    }
}

impl From<&str> for TimeOfDay {
    fn from(text: &str) -> Self {
        Self::Clock(text.to_string())
    }
}
