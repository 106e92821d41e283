use techcal_protocol::{BlockGeometry, ColumnPlacements, Placement};
use tracing::{debug, warn};

use crate::config::LayoutConfig;
use crate::merge::merge;
use crate::model::{Board, Column, ViewWindow};

/// Geometry for every column of a board, in board column order.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardLayout {
    pub view: ViewWindow,
    pub columns: Vec<ColumnPlacements>,
}

impl BoardLayout {
    pub fn column(&self, index: usize) -> Option<&ColumnPlacements> {
        self.columns.get(index)
    }
}

/// Lay out one technician column.
///
/// Each block gets `top`/`height` from its time of day. Blocks that overlap
/// (transitively) are split evenly across the column width in ascending
/// start order. Placements come out in that same order, cluster by cluster.
/// Pure: equal input always yields equal output.
pub fn layout_column(column: &Column, config: &LayoutConfig) -> ColumnPlacements {
    let view = column.view();
    let intervals = merge(column.blocks(), config.merge_policy);

    let mut placements = Vec::with_capacity(column.blocks().len());
    for interval in &intervals {
        let slots = interval.len();
        let slot_width = 100.0 / slots as f64;

        for (slot, block) in interval.members.iter().enumerate() {
            if !view.contains_range(block.start(), block.end()) {
                warn!(
                    technician = column.technician().id,
                    block = block.id(),
                    start = block.start(),
                    end = block.end(),
                    "work order reaches outside the view window"
                );
            }

            placements.push(Placement {
                block_id: block.id(),
                geometry: BlockGeometry {
                    top: view.top_percent(block.start()),
                    height: view.height_percent(block.duration()),
                    left: slot_width * slot as f64,
                    width: slot_width,
                },
                slot,
                slots,
                visible: true,
            });
        }
    }

    debug!(
        technician = column.technician().id,
        blocks = placements.len(),
        clusters = intervals.len(),
        "laid out column"
    );

    ColumnPlacements {
        technician_id: column.technician().id,
        placements,
    }
}

/// Lay out every column of `board`. Columns are independent of each other.
pub fn layout_board(board: &Board, config: &LayoutConfig) -> BoardLayout {
    BoardLayout {
        view: board.view(),
        columns: board
            .columns()
            .iter()
            .map(|column| layout_column(column, config))
            .collect(),
    }
}
