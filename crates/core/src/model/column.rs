use std::collections::HashSet;

use techcal_protocol::SharedStr;

use super::{ModelError, TimeBlock, ViewWindow};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Technician {
    pub id: u64,
    pub name: SharedStr,
}

impl Technician {
    pub fn new(id: u64, name: impl Into<SharedStr>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// One technician's day: a view window plus the work orders assigned to
/// them, in the order they were supplied.
///
/// Columns never share state; each one is laid out and queried on its own.
#[derive(Debug, Clone)]
pub struct Column {
    technician: Technician,
    view: ViewWindow,
    blocks: Vec<TimeBlock>,
}

impl Column {
    /// Every block must be owned by `technician` and have a unique id.
    pub fn new(
        technician: Technician,
        view: ViewWindow,
        blocks: Vec<TimeBlock>,
    ) -> Result<Self, ModelError> {
        let mut seen = HashSet::with_capacity(blocks.len());
        for block in &blocks {
            if block.owner() != technician.id {
                return Err(ModelError::ForeignBlock {
                    block_id: block.id(),
                    owner: block.owner(),
                    technician_id: technician.id,
                });
            }
            if !seen.insert(block.id()) {
                return Err(ModelError::DuplicateBlock {
                    block_id: block.id(),
                    technician_id: technician.id,
                });
            }
        }
        Ok(Self {
            technician,
            view,
            blocks,
        })
    }

    pub fn technician(&self) -> &Technician {
        &self.technician
    }

    pub fn view(&self) -> ViewWindow {
        self.view
    }

    pub fn blocks(&self) -> &[TimeBlock] {
        &self.blocks
    }

    pub fn block(&self, id: u64) -> Option<&TimeBlock> {
        self.blocks.iter().find(|b| b.id() == id)
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
