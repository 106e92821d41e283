//! HTML renderer: server-side markup for a board.
//!
//! Each block carries its times as `data-*` attributes so a browser-side
//! controller can re-run layout and availability queries, plus the inline
//! positional style computed here.

use techcal_protocol::{BlockGeometry, ColumnPlacements};

use crate::config::LayoutConfig;
use crate::layout::BoardLayout;
use crate::model::{Board, Column, TimeBlock, ViewWindow};

/// Render `board` as HTML.
///
/// With a `layout`, blocks get their full geometry and are visible. Without
/// one, blocks only get their vertical position and stay hidden until a
/// client lays them out.
pub fn render_board_html(board: &Board, layout: Option<&BoardLayout>, config: &LayoutConfig) -> String {
    let view = board.view();
    let mut html = String::with_capacity(256 + board.block_count() * 320);
    html.push_str(&format!(
        r#"<div class="schedule" data-view-start-time="{}" data-view-end-time="{}">"#,
        view.start(),
        view.end(),
    ));

    for (index, column) in board.columns().iter().enumerate() {
        let placements = layout.and_then(|l| l.column(index));
        render_column(&mut html, column, placements, config);
    }

    html.push_str("</div>");
    html
}

fn render_column(
    html: &mut String,
    column: &Column,
    placements: Option<&ColumnPlacements>,
    config: &LayoutConfig,
) {
    let view = column.view();
    let technician = column.technician();
    html.push_str(&format!(
        r#"<div class="column" data-technician-id="{}" data-view-start-time="{}" data-view-end-time="{}"><div class="column-header">{}</div><div class="blocks">"#,
        technician.id,
        view.start(),
        view.end(),
        escape_html(&technician.name),
    ));

    for block in column.blocks() {
        let placement = placements.and_then(|p| p.get(block.id()));
        let style = match placement {
            Some(p) => block_style(&p.geometry, config.gutter_rem, p.visible),
            None => pending_style(view, block),
        };
        html.push_str(&format!(
            r#"<div class="block" data-block-id="{}" data-start-time="{}" data-end-time="{}" style="{style}"><span class="block-time">{}</span>"#,
            block.id(),
            block.start(),
            block.end(),
            config.clock.format_range(block.start(), block.end()),
        ));
        if let Some(label) = block.label() {
            html.push_str(&format!(
                r#" <span class="block-label">{}</span>"#,
                escape_html(label)
            ));
        }
        html.push_str("</div>");
    }

    html.push_str("</div></div>");
}

/// Inline CSS for a laid-out block. The gutter is subtracted from the width
/// so neighbouring blocks in a cluster keep a visible gap.
pub fn block_style(geometry: &BlockGeometry, gutter_rem: f64, visible: bool) -> String {
    let width = if gutter_rem > 0.0 {
        format!("calc({}% - {}rem)", percent(geometry.width), percent(gutter_rem))
    } else {
        format!("{}%", percent(geometry.width))
    };
    format!(
        "top: {}%; height: {}%; left: {}%; width: {width}; visibility: {};",
        percent(geometry.top),
        percent(geometry.height),
        percent(geometry.left),
        if visible { "visible" } else { "hidden" },
    )
}

fn pending_style(view: ViewWindow, block: &TimeBlock) -> String {
    format!(
        "top: {}%; height: {}%; visibility: hidden;",
        percent(view.top_percent(block.start())),
        percent(view.height_percent(block.duration())),
    )
}

/// Three decimals, trailing zeros dropped: `50`, `33.333`, `-4.5`.
fn percent(value: f64) -> String {
    let text = format!("{value:.3}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    match text {
        "-0" | "" => "0".to_string(),
        _ => text.to_string(),
    }
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
