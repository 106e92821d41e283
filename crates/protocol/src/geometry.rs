use serde::{Deserialize, Serialize};

/// Position of a work-order block inside its column, in percent of the
/// column's width and height.
///
/// `top`/`height` come from the block's time of day; `left`/`width` from
/// the horizontal slot it was given among the blocks it overlaps. Values are
/// not clamped: a block reaching outside the view window yields a `top`
/// below 0 or a `top + height` above 100 and the rendering surface clips it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockGeometry {
    pub top: f64,
    pub height: f64,
    pub left: f64,
    pub width: f64,
}

impl BlockGeometry {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

/// The laid-out geometry of one block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub block_id: u64,
    pub geometry: BlockGeometry,
    /// Horizontal slot index within the block's overlap cluster.
    pub slot: usize,
    /// Number of slots in that cluster.
    pub slots: usize,
    /// Blocks stay hidden until their geometry is final, so nothing is drawn
    /// at its unpacked position first.
    pub visible: bool,
}

/// All placements of one technician column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnPlacements {
    pub technician_id: u64,
    pub placements: Vec<Placement>,
}

impl ColumnPlacements {
    /// Look up the placement of a block by id.
    pub fn get(&self, block_id: u64) -> Option<&Placement> {
        self.placements.iter().find(|p| p.block_id == block_id)
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}
