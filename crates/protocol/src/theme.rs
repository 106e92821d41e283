use serde::{Deserialize, Serialize};

/// Semantic color tokens resolved by the renderer's active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeToken {
    // Work-order blocks, alternating by horizontal slot
    WorkOrder,
    WorkOrderAlt,
    WorkOrderBorder,

    ColumnBackground,
    ColumnBorder,
    ColumnHeaderBackground,
    ColumnHeaderText,

    // Time axis
    AxisBackground,
    GridLine,
    GridLineMajor,

    TextPrimary,
    TextMuted,

    Background,
    SelectionHighlight,

    // Availability popup
    ModalBackground,
    ModalBorder,
    ModalText,
}
