use techcal_protocol::SharedStr;

use super::ModelError;

/// A scheduled work order occupying `[start, end]` on one technician's day.
///
/// Times are seconds since midnight. `start < end` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeBlock {
    id: u64,
    start: u32,
    end: u32,
    owner: u64,
    label: Option<SharedStr>,
}

impl TimeBlock {
    pub fn new(id: u64, start: u32, end: u32, owner: u64) -> Result<Self, ModelError> {
        if start >= end {
            return Err(ModelError::InvalidBlock { id, start, end });
        }
        Ok(Self {
            id,
            start,
            end,
            owner,
            label: None,
        })
    }

    pub fn with_label(mut self, label: impl Into<SharedStr>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    /// Technician the work order is assigned to.
    pub fn owner(&self) -> u64 {
        self.owner
    }

    pub fn label(&self) -> Option<&SharedStr> {
        self.label.as_ref()
    }

    pub fn duration(&self) -> u32 {
        self.end - self.start
    }

    /// Inclusive at both ends.
    pub fn contains(&self, time: f64) -> bool {
        f64::from(self.start) <= time && time <= f64::from(self.end)
    }
}
