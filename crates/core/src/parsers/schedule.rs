use techcal_protocol::{ScheduleDocument, TimeOfDay, WorkOrderData};
use tracing::debug;

use super::ParseError;
use crate::clock::parse_clock;
use crate::model::view::{DEFAULT_VIEW_END, DEFAULT_VIEW_START};
use crate::model::{Board, Technician, TimeBlock, ViewWindow};

const SECONDS_PER_DAY: u32 = 24 * 3600;

/// Parse a JSON schedule document into a validated board.
///
/// A document without `view_start`/`view_end` gets the 05:00-20:00 window.
pub fn parse_schedule(data: &[u8]) -> Result<Board, ParseError> {
    parse_schedule_with_view(data, None)
}

/// Like [`parse_schedule`], but `view` (when given) replaces the document's
/// own window.
pub fn parse_schedule_with_view(
    data: &[u8],
    view: Option<ViewWindow>,
) -> Result<Board, ParseError> {
    let document: ScheduleDocument = serde_json::from_slice(data)?;
    board_from_document(&document, view)
}

/// Validate a decoded document and build its board.
pub fn board_from_document(
    document: &ScheduleDocument,
    view: Option<ViewWindow>,
) -> Result<Board, ParseError> {
    let view = match view {
        Some(view) => view,
        None => {
            let start = optional_time("view_start", document.view_start.as_ref())?
                .unwrap_or(DEFAULT_VIEW_START);
            let end = optional_time("view_end", document.view_end.as_ref())?
                .unwrap_or(DEFAULT_VIEW_END);
            ViewWindow::new(start, end)?
        }
    };

    let mut board = Board::new(view);
    for tech in &document.technicians {
        let blocks = tech
            .work_orders
            .iter()
            .map(|order| block_from_order(order, tech.id))
            .collect::<Result<Vec<_>, _>>()?;
        board.add_column(Technician::new(tech.id, tech.name.as_str()), blocks)?;
    }

    debug!(
        technicians = board.len(),
        work_orders = board.block_count(),
        view_start = view.start(),
        view_end = view.end(),
        "loaded schedule"
    );
    Ok(board)
}

fn block_from_order(order: &WorkOrderData, owner: u64) -> Result<TimeBlock, ParseError> {
    let start = time("start_time", &order.start_time)?;
    let end = match (&order.end_time, order.duration_minutes) {
        (Some(end), None) => time("end_time", end)?,
        (None, Some(minutes)) => start
            .checked_add(minutes.saturating_mul(60))
            .filter(|end| *end <= SECONDS_PER_DAY)
            .ok_or(ParseError::PastMidnight(order.id))?,
        (None, None) => return Err(ParseError::MissingEnd(order.id)),
        (Some(_), Some(_)) => return Err(ParseError::ConflictingEnd(order.id)),
    };

    let block = TimeBlock::new(order.id, start, end, owner)?;
    Ok(match &order.label {
        Some(label) => block.with_label(label.as_str()),
        None => block,
    })
}

fn time(field: &str, value: &TimeOfDay) -> Result<u32, ParseError> {
    match value {
        TimeOfDay::Seconds(s) if *s <= SECONDS_PER_DAY => Ok(*s),
        TimeOfDay::Seconds(_) => Err(ParseError::OutOfDay {
            field: field.to_string(),
        }),
        TimeOfDay::Clock(text) => parse_clock(text).map_err(|source| ParseError::Clock {
            field: field.to_string(),
            source,
        }),
    }
}

fn optional_time(field: &str, value: Option<&TimeOfDay>) -> Result<Option<u32>, ParseError> {
    value.map(|v| time(field, v)).transpose()
}
