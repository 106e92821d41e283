use std::collections::BTreeMap;
use std::sync::Mutex;

use serde::Serialize;
use techcal_core::clock::ClockFormat;
use techcal_core::html::render_board_html;
use techcal_core::layout::BoardLayout;
use techcal_core::model::Board;
use techcal_core::parsers::{ParseError, parse_schedule};
use techcal_core::views::{BoardGrid, GridMetrics, render_board, render_time_axis};
use techcal_core::{LayoutConfig, layout_board};
use techcal_protocol::Viewport;
use thiserror::Error;
use wasm_bindgen::prelude::*;

/// A loaded board with the config it was laid out with.
struct Schedule {
    board: Board,
    config: LayoutConfig,
    layout: BoardLayout,
}

/// Loaded schedules by handle. Handles are never reused.
struct Store {
    next: usize,
    schedules: BTreeMap<usize, Schedule>,
}

static SCHEDULES: Mutex<Store> = Mutex::new(Store {
    next: 0,
    schedules: BTreeMap::new(),
});

#[derive(Debug, Error)]
enum BridgeError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("invalid layout config: {0}")]
    Config(serde_json::Error),
    #[error("failed to encode result: {0}")]
    Encode(serde_json::Error),
    #[error("invalid schedule handle {0}")]
    Handle(usize),
    #[error("invalid column index {0}")]
    Column(usize),
    #[error("schedule store poisoned")]
    Poisoned,
}

fn store(data: &[u8], config: LayoutConfig) -> Result<usize, BridgeError> {
    let board = parse_schedule(data)?;
    let layout = layout_board(&board, &config);
    let schedule = Schedule {
        board,
        config,
        layout,
    };
    let mut loaded = SCHEDULES.lock().map_err(|_| BridgeError::Poisoned)?;
    let handle = loaded.next;
    loaded.next += 1;
    loaded.schedules.insert(handle, schedule);
    Ok(handle)
}

fn release(handle: usize) -> Result<(), BridgeError> {
    let mut loaded = SCHEDULES.lock().map_err(|_| BridgeError::Poisoned)?;
    loaded
        .schedules
        .remove(&handle)
        .map(drop)
        .ok_or(BridgeError::Handle(handle))
}

fn with_schedule<T>(
    handle: usize,
    f: impl FnOnce(&Schedule) -> Result<T, BridgeError>,
) -> Result<T, BridgeError> {
    let loaded = SCHEDULES.lock().map_err(|_| BridgeError::Poisoned)?;
    let schedule = loaded
        .schedules
        .get(&handle)
        .ok_or(BridgeError::Handle(handle))?;
    f(schedule)
}

fn to_json<T: Serialize>(value: &T) -> Result<String, BridgeError> {
    serde_json::to_string(value).map_err(BridgeError::Encode)
}

fn column_placements(handle: usize, column: usize) -> Result<String, BridgeError> {
    with_schedule(handle, |s| {
        let placements = s.layout.column(column).ok_or(BridgeError::Column(column))?;
        to_json(placements)
    })
}

fn availability(
    handle: usize,
    column: usize,
    pixel_y: f64,
    column_top: f64,
    column_height: f64,
) -> Result<String, BridgeError> {
    with_schedule(handle, |s| {
        let col = s.board.column(column).ok_or(BridgeError::Column(column))?;
        to_json(&techcal_core::availability::query_at_pixel(
            col,
            pixel_y,
            column_top,
            column_height,
        ))
    })
}

fn board_commands(handle: usize, viewport: Viewport) -> Result<String, BridgeError> {
    with_schedule(handle, |s| {
        let grid = BoardGrid::new(
            viewport,
            s.board.len(),
            GridMetrics::pixels(s.config.gutter_rem),
        );
        let mut commands = render_board(&s.board, &s.layout, &grid, s.config.clock);
        commands.extend(render_time_axis(&grid, s.board.view(), s.config.clock));
        to_json(&commands)
    })
}

/// Parse a schedule document (JSON bytes) with the default layout config.
/// Returns a handle for the other calls.
#[wasm_bindgen]
pub fn load_schedule(data: &[u8]) -> Result<usize, JsError> {
    Ok(store(data, LayoutConfig::default())?)
}

/// Like [`load_schedule`], with a JSON `LayoutConfig`
/// (`{"merge_policy": "strict", "gutter_rem": 0.5}`; missing keys default).
#[wasm_bindgen]
pub fn load_schedule_with_config(data: &[u8], config: &str) -> Result<usize, JsError> {
    let config: LayoutConfig = serde_json::from_str(config).map_err(BridgeError::Config)?;
    Ok(store(data, config)?)
}

/// Drop a loaded schedule. Its handle is invalid from then on.
#[wasm_bindgen]
pub fn unload_schedule(handle: usize) -> Result<(), JsError> {
    Ok(release(handle)?)
}

/// Placements for one technician column, as JSON.
#[wasm_bindgen]
pub fn layout_column(handle: usize, column: usize) -> Result<String, JsError> {
    Ok(column_placements(handle, column)?)
}

/// Availability at a pointer position over a column body, as JSON.
#[wasm_bindgen]
pub fn query_availability(
    handle: usize,
    column: usize,
    pixel_y: f64,
    column_top: f64,
    column_height: f64,
) -> Result<String, JsError> {
    Ok(availability(handle, column, pixel_y, column_top, column_height)?)
}

/// Render commands for the whole board in a `width` x `height` viewport.
#[wasm_bindgen]
pub fn render_view(handle: usize, width: f64, height: f64, dpr: f64) -> Result<String, JsError> {
    let viewport = Viewport {
        dpr,
        ..Viewport::new(width, height)
    };
    Ok(board_commands(handle, viewport)?)
}

/// Server-side markup for the board, already laid out.
#[wasm_bindgen]
pub fn render_html(handle: usize) -> Result<String, JsError> {
    Ok(with_schedule(handle, |s| {
        Ok(render_board_html(&s.board, Some(&s.layout), &s.config))
    })?)
}

/// `HH:MM` for seconds since midnight. `legacy` applies the six-hour shift
/// older clients expect.
#[wasm_bindgen]
pub fn format_time(seconds: u32, legacy: bool) -> String {
    let clock = if legacy {
        ClockFormat::legacy()
    } else {
        ClockFormat::default()
    };
    clock.format(seconds)
}
