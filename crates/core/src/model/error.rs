use thiserror::Error;

/// Invalid schedule data. These are data errors, reported when a model value
/// is constructed; a value that exists is always valid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("view window must start before it ends (start {start}s, end {end}s)")]
    InvalidViewWindow { start: u32, end: u32 },
    #[error("work order {id} must start before it ends (start {start}s, end {end}s)")]
    InvalidBlock { id: u64, start: u32, end: u32 },
    #[error("work order {block_id} belongs to technician {owner}, not {technician_id}")]
    ForeignBlock {
        block_id: u64,
        owner: u64,
        technician_id: u64,
    },
    #[error("work order {block_id} appears twice for technician {technician_id}")]
    DuplicateBlock { block_id: u64, technician_id: u64 },
    #[error("technician {0} already has a column")]
    DuplicateTechnician(u64),
}
