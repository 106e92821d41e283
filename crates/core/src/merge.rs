use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::model::TimeBlock;

/// How the merge treats two blocks where one ends exactly when the next
/// begins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergePolicy {
    /// `next.start <= end`: back-to-back blocks share a cluster and are drawn
    /// side by side.
    #[default]
    Touching,
    /// `next.start < end`: back-to-back blocks form separate clusters and
    /// each keeps the full column width.
    Strict,
}

impl MergePolicy {
    fn joins(self, running_end: u32, next_start: u32) -> bool {
        match self {
            Self::Touching => next_start <= running_end,
            Self::Strict => next_start < running_end,
        }
    }
}

/// A maximal run of transitively overlapping blocks.
///
/// Lives only for one layout pass and borrows its members from the column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval<'a> {
    pub start: u32,
    pub end: u32,
    /// Members in ascending start order; ties keep input order.
    pub members: Vec<&'a TimeBlock>,
}

impl<'a> Interval<'a> {
    fn seed(block: &'a TimeBlock) -> Self {
        Self {
            start: block.start(),
            end: block.end(),
            members: vec![block],
        }
    }

    fn absorb(&mut self, block: &'a TimeBlock) {
        self.end = self.end.max(block.end());
        self.members.push(block);
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Group `blocks` into clusters of overlapping ranges.
///
/// Returns intervals in ascending start order. Every block lands in exactly
/// one interval and is contained in its `[start, end]` span.
pub fn merge(blocks: &[TimeBlock], policy: MergePolicy) -> Vec<Interval<'_>> {
    let mut sorted: Vec<&TimeBlock> = blocks.iter().collect();
    // `sort_by_key` is stable, so equal starts keep their input order.
    sorted.sort_by_key(|b| b.start());

    let mut intervals: Vec<Interval<'_>> = Vec::new();
    for block in sorted {
        if let Some(current) = intervals.last_mut()
            && policy.joins(current.end, block.start())
        {
            current.absorb(block);
            continue;
        }
        intervals.push(Interval::seed(block));
    }

    trace!(
        blocks = blocks.len(),
        intervals = intervals.len(),
        ?policy,
        "merged overlapping work orders"
    );
    intervals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(id: u64, start: u32, end: u32) -> TimeBlock {
        TimeBlock::new(id, start, end, 1).unwrap()
    }

    fn ids(interval: &Interval<'_>) -> Vec<u64> {
        interval.members.iter().map(|b| b.id()).collect()
    }

    #[test]
    fn empty_input() {
        assert!(merge(&[], MergePolicy::Touching).is_empty());
    }

    #[test]
    fn single_block() {
        let blocks = [block(1, 36_000, 39_600)];
        let merged = merge(&blocks, MergePolicy::Touching);
        assert_eq!(merged.len(), 1);
        assert_eq!((merged[0].start, merged[0].end), (36_000, 39_600));
    }

    #[test]
    fn touching_blocks_merge_by_default() {
        let blocks = [block(1, 32_400, 36_000), block(2, 36_000, 39_600)];
        let merged = merge(&blocks, MergePolicy::default());
        assert_eq!(merged.len(), 1);
        assert_eq!(ids(&merged[0]), vec![1, 2]);
        assert_eq!((merged[0].start, merged[0].end), (32_400, 39_600));
    }

    #[test]
    fn strict_policy_keeps_touching_blocks_apart() {
        let blocks = [block(1, 32_400, 36_000), block(2, 36_000, 39_600)];
        let merged = merge(&blocks, MergePolicy::Strict);
        assert_eq!(merged.len(), 2);
        assert_eq!(ids(&merged[0]), vec![1]);
        assert_eq!(ids(&merged[1]), vec![2]);
    }

    #[test]
    fn strict_policy_still_merges_real_overlap() {
        let blocks = [block(1, 32_400, 36_000), block(2, 35_999, 39_600)];
        assert_eq!(merge(&blocks, MergePolicy::Strict).len(), 1);
    }

    #[test]
    fn unsorted_input_is_sorted_by_start() {
        let blocks = [
            block(3, 50_000, 52_000),
            block(1, 32_400, 36_000),
            block(2, 34_000, 35_000),
        ];
        let merged = merge(&blocks, MergePolicy::Touching);
        assert_eq!(merged.len(), 2);
        assert_eq!(ids(&merged[0]), vec![1, 2]);
        assert_eq!(ids(&merged[1]), vec![3]);
    }

    #[test]
    fn contained_block_does_not_shrink_interval() {
        // A long block swallowing a short one, followed by one that only
        // overlaps the long block.
        let blocks = [
            block(1, 30_000, 40_000),
            block(2, 31_000, 32_000),
            block(3, 38_000, 42_000),
        ];
        let merged = merge(&blocks, MergePolicy::Touching);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].end, 42_000);
        assert_eq!(ids(&merged[0]), vec![1, 2, 3]);
    }

    #[test]
    fn equal_starts_keep_input_order() {
        let blocks = [
            block(9, 36_000, 37_000),
            block(4, 36_000, 39_000),
            block(7, 36_000, 36_500),
        ];
        let merged = merge(&blocks, MergePolicy::Touching);
        assert_eq!(ids(&merged[0]), vec![9, 4, 7]);
    }

    #[test]
    fn does_not_mutate_input() {
        let blocks = vec![block(2, 40_000, 41_000), block(1, 30_000, 31_000)];
        let before = blocks.clone();
        let _ = merge(&blocks, MergePolicy::Touching);
        assert_eq!(blocks, before);
    }
}
