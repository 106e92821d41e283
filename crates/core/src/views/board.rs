use techcal_protocol::{Point, Rect, RenderCommand, SharedStr, TextAlign, ThemeToken};

use crate::clock::ClockFormat;
use crate::layout::BoardLayout;
use crate::model::{Board, TimeBlock};

use super::grid::BoardGrid;

/// Render the technician columns and their work orders.
///
/// One group per column: header with the technician's name, the column
/// body, and one rect per placed block clipped to the body (blocks reaching
/// outside the view window are cut at the column edge). Hidden placements
/// are skipped.
pub fn render_board(
    board: &Board,
    layout: &BoardLayout,
    grid: &BoardGrid,
    clock: ClockFormat,
) -> Vec<RenderCommand> {
    let vp = grid.viewport();
    let mut commands = Vec::with_capacity(board.block_count() + board.len() * 7 + 1);

    commands.push(RenderCommand::DrawRect {
        rect: Rect::new(vp.x, vp.y, vp.width, vp.height),
        color: ThemeToken::Background,
        border_color: None,
        label: None,
        block_id: None,
    });

    for (index, column) in board.columns().iter().enumerate() {
        let (Some(header), Some(body)) = (grid.header_rect(index), grid.column_rect(index)) else {
            continue;
        };
        let technician = column.technician();

        commands.push(RenderCommand::BeginGroup {
            id: SharedStr::from(format!("technician-{}", technician.id)),
            label: Some(technician.name.clone()),
        });

        commands.push(RenderCommand::DrawRect {
            rect: header,
            color: ThemeToken::ColumnHeaderBackground,
            border_color: Some(ThemeToken::ColumnBorder),
            label: None,
            block_id: None,
        });
        commands.push(RenderCommand::DrawText {
            position: Point::new(header.x + header.w / 2.0, header.y + header.h / 2.0),
            text: technician.name.clone(),
            color: ThemeToken::ColumnHeaderText,
            font_size: grid.metrics().font_size,
            align: TextAlign::Center,
        });
        commands.push(RenderCommand::DrawRect {
            rect: body,
            color: ThemeToken::ColumnBackground,
            border_color: Some(ThemeToken::ColumnBorder),
            label: None,
            block_id: None,
        });

        commands.push(RenderCommand::SetClip { rect: body });
        if let Some(placements) = layout.column(index) {
            for placement in placements.placements.iter().filter(|p| p.visible) {
                let Some(block) = column.block(placement.block_id) else {
                    continue;
                };
                let Some(rect) = grid.block_rect(index, &placement.geometry) else {
                    continue;
                };
                commands.push(RenderCommand::DrawRect {
                    rect,
                    color: color_for_slot(placement.slot),
                    border_color: Some(ThemeToken::WorkOrderBorder),
                    label: Some(block_label(block, clock)),
                    block_id: Some(block.id()),
                });
            }
        }
        commands.push(RenderCommand::ClearClip);
        commands.push(RenderCommand::EndGroup);
    }

    commands
}

/// `HH:MM-HH:MM label`.
pub fn block_label(block: &TimeBlock, clock: ClockFormat) -> SharedStr {
    let range = clock.format_range(block.start(), block.end());
    match block.label() {
        Some(label) => SharedStr::from(format!("{range} {label}")),
        None => SharedStr::from(range),
    }
}

fn color_for_slot(slot: usize) -> ThemeToken {
    if slot % 2 == 0 {
        ThemeToken::WorkOrder
    } else {
        ThemeToken::WorkOrderAlt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::layout::layout_board;
    use crate::model::{Technician, ViewWindow};
    use crate::views::grid::GridMetrics;
    use techcal_protocol::Viewport;

    fn board() -> Board {
        let view = ViewWindow::new(18_000, 61_200).unwrap();
        let mut board = Board::new(view);
        let blocks: Vec<TimeBlock> = [(1, 32_400, 36_000), (2, 36_000, 39_600)]
            .into_iter()
            .map(|(id, s, e)| TimeBlock::new(id, s, e, 7).unwrap())
            .map(|b| b.with_label("Pump"))
            .collect();
        board.add_column(Technician::new(7, "Gil"), blocks).unwrap();
        board.add_column(Technician::new(8, "Ada"), Vec::new()).unwrap();
        board
    }

    fn block_rects(cmds: &[RenderCommand]) -> Vec<(Rect, u64, String)> {
        cmds.iter()
            .filter_map(|c| match c {
                RenderCommand::DrawRect {
                    rect,
                    block_id: Some(id),
                    label,
                    ..
                } => Some((*rect, *id, label.as_deref().unwrap_or("").to_string())),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn draws_one_rect_per_block() {
        let board = board();
        let layout = layout_board(&board, &LayoutConfig::default());
        let grid = BoardGrid::new(Viewport::new(848.0, 456.0), 2, GridMetrics::pixels(1.0));
        let cmds = render_board(&board, &layout, &grid, ClockFormat::default());

        let rects = block_rects(&cmds);
        assert_eq!(rects.len(), 2);
        assert_eq!(rects[0].2, "09:00-10:00 Pump");
        // Touching blocks share the first column side by side.
        assert_eq!(rects[0].0.x, 48.0);
        assert_eq!(rects[1].0.x, 248.0);
        assert_eq!(rects[1].0.w, 200.0 - 16.0);
    }

    #[test]
    fn one_group_per_column() {
        let board = board();
        let layout = layout_board(&board, &LayoutConfig::default());
        let grid = BoardGrid::new(Viewport::new(848.0, 456.0), 2, GridMetrics::pixels(1.0));
        let cmds = render_board(&board, &layout, &grid, ClockFormat::default());

        let groups: Vec<_> = cmds
            .iter()
            .filter_map(|c| match c {
                RenderCommand::BeginGroup { id, .. } => Some(id.to_string()),
                _ => None,
            })
            .collect();
        assert_eq!(groups, vec!["technician-7", "technician-8"]);
        let clips = cmds
            .iter()
            .filter(|c| matches!(c, RenderCommand::SetClip { .. }))
            .count();
        assert_eq!(clips, 2);
    }

    #[test]
    fn hidden_placements_are_skipped() {
        let board = board();
        let mut layout = layout_board(&board, &LayoutConfig::default());
        for column in &mut layout.columns {
            for p in &mut column.placements {
                p.visible = false;
            }
        }
        let grid = BoardGrid::new(Viewport::new(848.0, 456.0), 2, GridMetrics::pixels(1.0));
        let cmds = render_board(&board, &layout, &grid, ClockFormat::default());
        assert!(block_rects(&cmds).is_empty());
    }

    #[test]
    fn legacy_clock_labels() {
        let board = board();
        let layout = layout_board(&board, &LayoutConfig::default());
        let grid = BoardGrid::new(Viewport::new(848.0, 456.0), 2, GridMetrics::pixels(1.0));
        let cmds = render_board(&board, &layout, &grid, ClockFormat::legacy());
        assert_eq!(block_rects(&cmds)[0].2, "15:00-16:00 Pump");
    }
}
