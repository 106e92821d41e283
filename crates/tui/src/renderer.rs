use std::io::{Stdout, stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Clear, Paragraph, Wrap},
};
use techcal_core::layout::BoardLayout;
use techcal_core::model::Board;
use techcal_core::views::{BoardGrid, GridMetrics, render_board, render_time_axis};
use techcal_core::{LayoutConfig, layout_board, query_availability};
use techcal_protocol::{Availability, Point, RenderCommand, TextAlign, ThemeToken, Viewport};
use tracing::debug;

fn theme_to_color(token: ThemeToken) -> Color {
    match token {
        ThemeToken::WorkOrder => Color::Rgb(70, 130, 180),
        ThemeToken::WorkOrderAlt => Color::Rgb(95, 158, 160),
        ThemeToken::WorkOrderBorder => Color::Rgb(40, 80, 120),
        ThemeToken::ColumnBackground => Color::Black,
        ThemeToken::ColumnBorder => Color::DarkGray,
        ThemeToken::ColumnHeaderBackground => Color::DarkGray,
        ThemeToken::ColumnHeaderText => Color::White,
        ThemeToken::AxisBackground => Color::Black,
        ThemeToken::GridLine => Color::Rgb(40, 40, 40),
        ThemeToken::GridLineMajor => Color::Rgb(70, 70, 70),
        ThemeToken::TextPrimary => Color::White,
        ThemeToken::TextMuted => Color::Gray,
        ThemeToken::Background => Color::Black,
        ThemeToken::SelectionHighlight => Color::Green,
        ThemeToken::ModalBackground => Color::Rgb(30, 30, 30),
        ThemeToken::ModalBorder => Color::Gray,
        ThemeToken::ModalText => Color::White,
    }
}

/// Result of the last click, shown as a popup until dismissed.
struct Popup {
    column: usize,
    time: u32,
    availability: Availability,
}

struct App<'a> {
    board: &'a Board,
    layout: BoardLayout,
    config: &'a LayoutConfig,
    popup: Option<Popup>,
}

impl App<'_> {
    /// The board fills everything but the status row.
    fn grid(&self, area: Rect) -> BoardGrid {
        let viewport = Viewport::new(
            f64::from(area.width),
            f64::from(area.height.saturating_sub(1)),
        );
        BoardGrid::new(viewport, self.board.len(), GridMetrics::cells())
    }

    fn click(&mut self, area: Rect, column: u16, row: u16) {
        let grid = self.grid(area);
        let point = Point::new(f64::from(column) + 0.5, f64::from(row) + 0.5);
        let Some(index) = grid.hit(point) else {
            return;
        };
        let Some(col) = self.board.column(index) else {
            return;
        };
        let body = grid.body();
        let time = col.view().time_at_pixel(point.y, body.y, body.h);
        let availability = query_availability(col, time);
        debug!(column = index, time, ?availability, "availability query");
        self.popup = Some(Popup {
            column: index,
            time: time as u32,
            availability,
        });
    }
}

/// Run the interactive calendar until the user quits. The terminal is
/// restored even when the event loop fails.
pub fn run_tui(board: &Board, config: &LayoutConfig) -> Result<()> {
    enable_raw_mode()?;
    let mut out = stdout();
    execute!(out, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(out);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App {
        board,
        layout: layout_board(board, config),
        config,
        popup: None,
    };
    let result = event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App<'_>) -> Result<()> {
    loop {
        let size = terminal.size()?;
        let area = Rect::new(0, 0, size.width, size.height);
        let grid = app.grid(area);
        let mut commands = render_board(app.board, &app.layout, &grid, app.config.clock);
        commands.extend(render_time_axis(&grid, app.board.view(), app.config.clock));

        terminal.draw(|frame| {
            let area = frame.area();
            let board_area = Rect::new(area.x, area.y, area.width, area.height.saturating_sub(1));
            let highlight = app
                .popup
                .as_ref()
                .and_then(|p| match p.availability {
                    Availability::Occupied { block_id } => Some(block_id),
                    _ => None,
                });
            paint(frame.buffer_mut(), board_area, &commands, highlight);

            let status_area = Rect::new(area.x, area.bottom().saturating_sub(1), area.width, 1);
            let status = Paragraph::new(format!(
                " techcal | {} technicians | {} work orders | click a column to check a time | q quit ",
                app.board.len(),
                app.board.block_count()
            ))
            .style(Style::default().fg(Color::White).bg(Color::DarkGray));
            frame.render_widget(status, status_area);

            if let Some(popup) = &app.popup {
                let name = app
                    .board
                    .column(popup.column)
                    .map(|c| c.technician().name.to_string())
                    .unwrap_or_default();
                let text = format!(
                    "{}\n\n{} at {}\n\nEnter/Esc to close",
                    popup.availability.message(),
                    name,
                    app.config.clock.format(popup.time),
                );
                let rect = centered(area, 44, 7);
                let block = Block::bordered()
                    .title(format!(" {} ", popup.availability.title()))
                    .border_style(Style::default().fg(theme_to_color(ThemeToken::ModalBorder)));
                let paragraph = Paragraph::new(text)
                    .block(block)
                    .wrap(Wrap { trim: true })
                    .style(
                        Style::default()
                            .fg(theme_to_color(ThemeToken::ModalText))
                            .bg(theme_to_color(ThemeToken::ModalBackground)),
                    );
                frame.render_widget(Clear, rect);
                frame.render_widget(paragraph, rect);
            }
        })?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') => break,
                KeyCode::Esc | KeyCode::Enter if app.popup.is_some() => app.popup = None,
                KeyCode::Esc => break,
                _ => {}
            },
            Event::Mouse(mouse) => {
                if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                    if app.popup.is_some() {
                        app.popup = None;
                    } else {
                        app.click(area, mouse.column, mouse.row);
                    }
                }
            }
            _ => {}
        }
    }
    Ok(())
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}

/// Half-open cell range covering `[start, start + len)`, at least one cell
/// when `len` is positive.
fn cell_span(start: f64, len: f64) -> (i32, i32) {
    let a = start.round();
    let mut b = (start + len).round();
    if len > 0.0 && b <= a {
        b = a + 1.0;
    }
    (a as i32, b as i32)
}

#[derive(Clone, Copy)]
struct Clip {
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
}

impl Clip {
    fn of(area: Rect) -> Self {
        Self {
            x0: i32::from(area.x),
            y0: i32::from(area.y),
            x1: i32::from(area.right()),
            y1: i32::from(area.bottom()),
        }
    }

    fn intersect(self, other: Self) -> Self {
        Self {
            x0: self.x0.max(other.x0),
            y0: self.y0.max(other.y0),
            x1: self.x1.min(other.x1),
            y1: self.y1.min(other.y1),
        }
    }

    fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x0 && x < self.x1 && y >= self.y0 && y < self.y1
    }
}

/// Paint render commands into `buf`, one viewport unit per cell, with the
/// viewport origin at the top-left of `area`. `highlight` marks one block.
fn paint(buf: &mut Buffer, area: Rect, commands: &[RenderCommand], highlight: Option<u64>) {
    let bounds = Clip::of(area);
    let mut clip = bounds;
    let ox = i32::from(area.x);
    let oy = i32::from(area.y);

    for cmd in commands {
        match cmd {
            RenderCommand::DrawRect {
                rect,
                color,
                label,
                block_id,
                ..
            } => {
                let (x0, x1) = cell_span(rect.x, rect.w);
                let (y0, y1) = cell_span(rect.y, rect.h);
                let selected = block_id.is_some() && *block_id == highlight;
                let bg = if selected {
                    theme_to_color(ThemeToken::SelectionHighlight)
                } else {
                    theme_to_color(*color)
                };
                let label: Vec<char> = label.as_deref().unwrap_or("").chars().collect();
                for y in y0..y1 {
                    for x in x0..x1 {
                        let (cx, cy) = (x + ox, y + oy);
                        if !clip.contains(cx, cy) {
                            continue;
                        }
                        let ch = if y == y0 {
                            usize::try_from(x - x0)
                                .ok()
                                .and_then(|i| label.get(i).copied())
                                .unwrap_or(' ')
                        } else {
                            ' '
                        };
                        set_cell(buf, cx, cy, ch, Color::Black, bg);
                    }
                }
            }
            RenderCommand::DrawText {
                position,
                text,
                color,
                align,
                ..
            } => {
                let chars: Vec<char> = text.chars().collect();
                let len = i32::try_from(chars.len()).unwrap_or(i32::MAX);
                let x = position.x.floor() as i32;
                let start = match align {
                    TextAlign::Left => x,
                    TextAlign::Center => x - len / 2,
                    TextAlign::Right => x - len,
                };
                let cy = position.y.floor() as i32 + oy;
                for (i, ch) in chars.into_iter().enumerate() {
                    let cx = start + i as i32 + ox;
                    if clip.contains(cx, cy) {
                        set_fg(buf, cx, cy, ch, theme_to_color(*color));
                    }
                }
            }
            RenderCommand::DrawLine { from, to, color, .. } => {
                // Gridlines are horizontal and only cross empty background.
                let cy = from.y.floor() as i32 + oy;
                let (x0, x1) = cell_span(from.x.min(to.x), (to.x - from.x).abs());
                for x in x0..x1 {
                    let cx = x + ox;
                    if clip.contains(cx, cy) && cell_is_blank(buf, cx, cy) {
                        set_fg(buf, cx, cy, '─', theme_to_color(*color));
                    }
                }
            }
            RenderCommand::SetClip { rect } => {
                let (x0, x1) = cell_span(rect.x, rect.w);
                let (y0, y1) = cell_span(rect.y, rect.h);
                clip = bounds.intersect(Clip {
                    x0: x0 + ox,
                    y0: y0 + oy,
                    x1: x1 + ox,
                    y1: y1 + oy,
                });
            }
            RenderCommand::ClearClip => clip = bounds,
            RenderCommand::BeginGroup { .. } | RenderCommand::EndGroup => {}
        }
    }
}

fn position(x: i32, y: i32) -> Option<(u16, u16)> {
    Some((u16::try_from(x).ok()?, u16::try_from(y).ok()?))
}

fn set_cell(buf: &mut Buffer, x: i32, y: i32, ch: char, fg: Color, bg: Color) {
    if let Some(cell) = position(x, y).and_then(|p| buf.cell_mut(p)) {
        cell.set_char(ch).set_fg(fg).set_bg(bg);
    }
}

fn set_fg(buf: &mut Buffer, x: i32, y: i32, ch: char, fg: Color) {
    if let Some(cell) = position(x, y).and_then(|p| buf.cell_mut(p)) {
        cell.set_char(ch).set_fg(fg);
    }
}

fn cell_is_blank(buf: &Buffer, x: i32, y: i32) -> bool {
    position(x, y)
        .and_then(|p| buf.cell(p))
        .is_some_and(|cell| {
            cell.symbol() == " " && cell.bg == theme_to_color(ThemeToken::ColumnBackground)
        })
}
