use techcal_protocol::Availability;

use crate::model::{Column, TimeBlock};

/// What is booked around `time` (seconds since midnight) in `column`.
///
/// A time inside any work order, edges included, is occupied. Otherwise the
/// nearest work order ending before `time` and the nearest one starting
/// after it bound the gap; if either side is missing the slot is reported
/// as open with no length.
pub fn query_availability(column: &Column, time: f64) -> Availability {
    let blocks = column.blocks();

    if let Some(block) = blocks.iter().find(|b| b.contains(time)) {
        return Availability::Occupied {
            block_id: block.id(),
        };
    }

    // On equal times the later block wins for `before`, the earlier for `after`.
    let before = blocks
        .iter()
        .filter(|b| f64::from(b.end()) < time)
        .fold(None, |best: Option<&TimeBlock>, b| match best {
            Some(cur) if cur.end() > b.end() => Some(cur),
            _ => Some(b),
        });
    let after = blocks
        .iter()
        .filter(|b| f64::from(b.start()) > time)
        .fold(None, |best: Option<&TimeBlock>, b| match best {
            Some(cur) if cur.start() <= b.start() => Some(cur),
            _ => Some(b),
        });

    match (before, after) {
        (Some(before), Some(after)) => Availability::Gap {
            before_block_id: before.id(),
            after_block_id: after.id(),
            minutes: after.start().saturating_sub(before.end()) / 60,
        },
        (before, after) => Availability::Open {
            before_block_id: before.map(TimeBlock::id),
            after_block_id: after.map(TimeBlock::id),
        },
    }
}

/// [`query_availability`] for a pointer at `pixel_y` over a column body that
/// starts at `column_top` and is `column_height` tall.
pub fn query_at_pixel(
    column: &Column,
    pixel_y: f64,
    column_top: f64,
    column_height: f64,
) -> Availability {
    let time = column
        .view()
        .time_at_pixel(pixel_y, column_top, column_height);
    query_availability(column, time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Technician, ViewWindow};

    fn column(ranges: &[(u64, u32, u32)]) -> Column {
        let blocks = ranges
            .iter()
            .map(|&(id, start, end)| TimeBlock::new(id, start, end, 1).unwrap())
            .collect();
        Column::new(Technician::new(1, "Rui"), ViewWindow::workday(), blocks).unwrap()
    }

    #[test]
    fn empty_column_is_open() {
        assert_eq!(
            query_availability(&column(&[]), 40_000.0),
            Availability::Open {
                before_block_id: None,
                after_block_id: None
            }
        );
    }

    #[test]
    fn inside_or_on_edge_is_occupied() {
        let col = column(&[(1, 32_400, 36_000)]);
        for t in [32_400.0, 34_000.0, 36_000.0] {
            assert_eq!(
                query_availability(&col, t),
                Availability::Occupied { block_id: 1 }
            );
        }
    }

    #[test]
    fn gap_between_neighbours_in_whole_minutes() {
        let col = column(&[(1, 32_400, 36_000), (2, 39_600, 43_200)]);
        assert_eq!(
            query_availability(&col, 37_800.0),
            Availability::Gap {
                before_block_id: 1,
                after_block_id: 2,
                minutes: 60
            }
        );
    }

    #[test]
    fn gap_minutes_round_down() {
        // 10:00 to 10:45:59.
        let col = column(&[(1, 32_400, 36_000), (2, 38_759, 40_000)]);
        assert!(matches!(
            query_availability(&col, 37_000.0),
            Availability::Gap { minutes: 45, .. }
        ));
    }

    #[test]
    fn nearest_neighbours_win() {
        let col = column(&[
            (1, 28_800, 30_000),
            (2, 32_400, 36_000),
            (3, 50_000, 52_000),
            (4, 39_600, 43_200),
        ]);
        assert_eq!(
            query_availability(&col, 37_800.0),
            Availability::Gap {
                before_block_id: 2,
                after_block_id: 4,
                minutes: 60
            }
        );
    }

    #[test]
    fn before_first_block_is_open() {
        let col = column(&[(1, 36_000, 39_600)]);
        assert_eq!(
            query_availability(&col, 34_200.0),
            Availability::Open {
                before_block_id: None,
                after_block_id: Some(1)
            }
        );
    }

    #[test]
    fn after_last_block_is_open() {
        let col = column(&[(1, 36_000, 39_600)]);
        assert_eq!(
            query_availability(&col, 50_000.0),
            Availability::Open {
                before_block_id: Some(1),
                after_block_id: None
            }
        );
    }

    #[test]
    fn pixel_query_maps_through_view() {
        // Workday view is 05:00-20:00 (54000 s) over 540 px: 100 s per px.
        // y = 200 is 190 px down: 05:00 + 19000 s = 37000 s, inside the 10:00-11:00 gap.
        let col = column(&[(1, 32_400, 36_000), (2, 39_600, 43_200)]);
        assert!(matches!(
            query_at_pixel(&col, 200.0, 10.0, 540.0),
            Availability::Gap { minutes: 60, .. }
        ));
        // y = 164 is 154 px down: 05:00 + 15400 s = 33400 s, inside the first block.
        assert!(query_at_pixel(&col, 164.0, 10.0, 540.0).is_occupied());
        // Above the column clamps to 05:00, before any work order.
        assert!(matches!(
            query_at_pixel(&col, -50.0, 10.0, 540.0),
            Availability::Open { before_block_id: None, .. }
        ));
    }

    #[test]
    fn does_not_mutate_column() {
        let col = column(&[(1, 32_400, 36_000), (2, 39_600, 43_200)]);
        let before: Vec<_> = col.blocks().to_vec();
        let _ = query_availability(&col, 37_800.0);
        assert_eq!(col.blocks(), before.as_slice());
    }
}
