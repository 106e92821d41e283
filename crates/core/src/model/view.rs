use super::ModelError;

/// 05:00, the first hour shown on the calendar by default.
pub const DEFAULT_VIEW_START: u32 = 5 * 3600;
/// 20:00, the last hour shown on the calendar by default.
pub const DEFAULT_VIEW_END: u32 = 20 * 3600;

/// The visible time span of a column, mapped onto 0-100% of its height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewWindow {
    start: u32,
    end: u32,
}

impl ViewWindow {
    pub fn new(start: u32, end: u32) -> Result<Self, ModelError> {
        if start >= end {
            return Err(ModelError::InvalidViewWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// The default 05:00-20:00 window.
    pub fn workday() -> Self {
        Self {
            start: DEFAULT_VIEW_START,
            end: DEFAULT_VIEW_END,
        }
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    /// Length of the window in seconds, never zero.
    pub fn duration(&self) -> u32 {
        self.end - self.start
    }

    /// Vertical offset of `time` from the top of the column, in percent.
    pub fn top_percent(&self, time: u32) -> f64 {
        100.0 * (f64::from(time) - f64::from(self.start)) / f64::from(self.duration())
    }

    /// Height of a span of `duration` seconds, in percent.
    pub fn height_percent(&self, duration: u32) -> f64 {
        100.0 * f64::from(duration) / f64::from(self.duration())
    }

    /// Inverse of [`top_percent`](Self::top_percent) for a ratio in `[0, 1]`.
    /// Ratios outside that range are clamped to the window edges.
    pub fn time_at_ratio(&self, ratio: f64) -> f64 {
        let ratio = if ratio.is_nan() {
            0.0
        } else {
            ratio.clamp(0.0, 1.0)
        };
        f64::from(self.start) + ratio * f64::from(self.duration())
    }

    /// Map a pointer's vertical position to a time of day, given where the
    /// column body starts and how tall it is (same units as `pixel_y`).
    pub fn time_at_pixel(&self, pixel_y: f64, column_top: f64, column_height: f64) -> f64 {
        if column_height <= 0.0 {
            return f64::from(self.start);
        }
        self.time_at_ratio((pixel_y - column_top) / column_height)
    }

    /// Whether `[start, end]` lies entirely inside the window.
    pub fn contains_range(&self, start: u32, end: u32) -> bool {
        start >= self.start && end <= self.end
    }
}

impl Default for ViewWindow {
    fn default() -> Self {
        Self::workday()
    }
}
