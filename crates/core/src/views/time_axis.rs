use techcal_protocol::{Point, RenderCommand, SharedStr, TextAlign, ThemeToken};

use crate::clock::ClockFormat;
use crate::model::ViewWindow;

use super::grid::BoardGrid;

/// Candidate label steps in seconds: 15 min up to 6 h.
const STEPS: &[u32] = &[900, 1_800, 3_600, 7_200, 10_800, 21_600];

/// Render the time-of-day ruler left of the columns, with a horizontal
/// gridline across the body at every labelled time.
pub fn render_time_axis(grid: &BoardGrid, view: ViewWindow, clock: ClockFormat) -> Vec<RenderCommand> {
    let axis = grid.axis();
    let body = grid.body();
    if axis.h <= 0.0 {
        return Vec::new();
    }

    let mut commands = Vec::with_capacity(64);
    commands.push(RenderCommand::BeginGroup {
        id: SharedStr::from("time-axis"),
        label: None,
    });
    commands.push(RenderCommand::DrawRect {
        rect: axis,
        color: ThemeToken::AxisBackground,
        border_color: Some(ThemeToken::ColumnBorder),
        label: None,
        block_id: None,
    });

    let step = label_step(view.duration(), axis.h, grid.metrics().min_label_spacing);
    let Some(mut t) = view.start().div_ceil(step).checked_mul(step) else {
        commands.push(RenderCommand::EndGroup);
        return commands;
    };
    while t <= view.end() {
        let y = body.y + view.top_percent(t) / 100.0 * body.h;
        let on_hour = t % 3_600 == 0;

        commands.push(RenderCommand::DrawLine {
            from: Point::new(body.x, y),
            to: Point::new(body.right(), y),
            color: if on_hour {
                ThemeToken::GridLineMajor
            } else {
                ThemeToken::GridLine
            },
            width: if on_hour { 1.0 } else { 0.5 },
        });
        commands.push(RenderCommand::DrawText {
            position: Point::new(axis.right() - 4.0_f64.min(axis.w / 8.0), y),
            text: SharedStr::from(clock.format(t)),
            color: ThemeToken::TextMuted,
            font_size: grid.metrics().font_size,
            align: TextAlign::Right,
        });

        t = match t.checked_add(step) {
            Some(next) => next,
            None => break,
        };
    }

    commands.push(RenderCommand::EndGroup);
    commands
}

/// Smallest step whose labels land at least `min_spacing` apart.
fn label_step(duration: u32, height: f64, min_spacing: f64) -> u32 {
    STEPS
        .iter()
        .copied()
        .find(|&step| f64::from(step) * height / f64::from(duration) >= min_spacing)
        .unwrap_or(STEPS[STEPS.len() - 1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::grid::GridMetrics;
    use techcal_protocol::Viewport;

    fn labels(cmds: &[RenderCommand]) -> Vec<String> {
        cmds.iter()
            .filter_map(|c| match c {
                RenderCommand::DrawText { text, .. } => Some(text.to_string()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn picks_step_from_available_height() {
        // 15 h over 600 px is 40 px per hour.
        assert_eq!(label_step(54_000, 600.0, 40.0), 3_600);
        assert_eq!(label_step(54_000, 2_400.0, 40.0), 900);
        assert_eq!(label_step(54_000, 100.0, 40.0), 21_600);
    }

    #[test]
    fn hourly_labels_for_workday() {
        let grid = BoardGrid::new(Viewport::new(848.0, 624.0), 3, GridMetrics::pixels(1.0));
        let cmds = render_time_axis(&grid, ViewWindow::workday(), ClockFormat::default());
        let labels = labels(&cmds);
        assert_eq!(labels.first().map(String::as_str), Some("05:00"));
        assert_eq!(labels.last().map(String::as_str), Some("20:00"));
        assert_eq!(labels.len(), 16);

        let lines = cmds
            .iter()
            .filter(|c| matches!(c, RenderCommand::DrawLine { .. }))
            .count();
        assert_eq!(lines, 16);
    }

    #[test]
    fn first_tick_aligns_to_step() {
        // 05:10-07:00 over 440 px: 4 px per minute, so 15-minute labels fit.
        let view = ViewWindow::new(18_600, 25_200).unwrap();
        let grid = BoardGrid::new(Viewport::new(848.0, 464.0), 1, GridMetrics::pixels(1.0));
        let labels = labels(&render_time_axis(&grid, view, ClockFormat::default()));
        assert_eq!(labels.first().map(String::as_str), Some("05:15"));
    }

    #[test]
    fn window_ending_at_u32_max_terminates() {
        // Last tick is the largest multiple of 6 h below u32::MAX.
        let view = ViewWindow::new(u32::MAX - 40_000, u32::MAX).unwrap();
        let grid = BoardGrid::new(Viewport::new(848.0, 64.0), 1, GridMetrics::pixels(1.0));
        let cmds = render_time_axis(&grid, view, ClockFormat::default());
        let lines = cmds
            .iter()
            .filter(|c| matches!(c, RenderCommand::DrawLine { .. }))
            .count();
        assert!((1..=2).contains(&lines), "{lines} gridlines");
        assert!(matches!(cmds.last(), Some(RenderCommand::EndGroup)));
    }

    #[test]
    fn no_room_no_axis() {
        let grid = BoardGrid::new(Viewport::new(848.0, 10.0), 3, GridMetrics::pixels(1.0));
        assert!(render_time_axis(&grid, ViewWindow::workday(), ClockFormat::default()).is_empty());
    }
}
