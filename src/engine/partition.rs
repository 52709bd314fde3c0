// Chunk Planner
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// How leftover elements are spread when `len` is not a multiple of the
/// worker count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChunkStrategy {
    /// Every chunk holds `ceil(len / workers)` elements except possibly the
    /// last; chunks that would start past the end are dropped.
    #[default]
    Ceil,
    /// Every chunk holds `floor(len / workers)` elements and the last one
    /// absorbs the remainder.
    Floor,
}

impl fmt::Display for ChunkStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChunkStrategy::Ceil => f.write_str("ceil"),
            ChunkStrategy::Floor => f.write_str("floor"),
        }
    }
}

impl FromStr for ChunkStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ceil" => Ok(ChunkStrategy::Ceil),
            "floor" => Ok(ChunkStrategy::Floor),
            other => Err(format!("unknown chunk strategy '{other}' (expected ceil or floor)")),
        }
    }
}

/// Contiguous, non-overlapping index ranges covering `[0, len)`, one per
/// dispatched worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkPlan {
    ranges: Vec<Range<usize>>,
}

impl ChunkPlan {
    /// Plans chunks for `len` elements over at most `workers` workers.
    /// A worker count of zero is treated as one.
    pub fn new(len: usize, workers: usize, strategy: ChunkStrategy) -> Self {
        let workers = workers.max(1);
        if len == 0 {
            return Self { ranges: Vec::new() };
        }

        let ranges = match strategy {
            ChunkStrategy::Ceil => {
                let size = len.div_ceil(workers);
                (0..workers)
                    .map(|i| i * size)
                    .take_while(|&from| from < len)
                    .map(|from| from..(from + size).min(len))
                    .collect()
            }
            ChunkStrategy::Floor => {
                let size = len / workers;
                if size == 0 {
                    // Fewer elements than workers: one element each.
                    (0..len).map(|i| i..i + 1).collect()
                } else {
                    (0..workers)
                        .map(|i| {
                            let from = i * size;
                            let to = if i + 1 == workers { len } else { from + size };
                            from..to
                        })
                        .collect()
                }
            }
        };
        Self { ranges }
    }

    pub fn ranges(&self) -> &[Range<usize>] {
        &self.ranges
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Borrows each planned chunk out of `items`.
    ///
    /// `items` must be the sequence the plan was built for.
    pub fn slices<'a, T>(&'a self, items: &'a [T]) -> impl Iterator<Item = &'a [T]> + 'a {
        self.ranges.iter().map(move |r| &items[r.clone()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_exact_cover(plan: &ChunkPlan, len: usize) {
        let mut next = 0;
        for r in plan.ranges() {
            assert_eq!(r.start, next, "gap or overlap at {r:?}");
            assert!(r.start < r.end, "empty chunk {r:?} dispatched");
            next = r.end;
        }
        assert_eq!(next, len);
    }

    #[test]
    fn ceil_spreads_evenly() {
        let plan = ChunkPlan::new(10, 4, ChunkStrategy::Ceil);
        assert_eq!(plan.ranges(), &[0..3, 3..6, 6..9, 9..10]);
    }

    #[test]
    fn ceil_drops_chunks_past_the_end() {
        // size 3 -> starts 0, 3, 6; the fourth worker would start at 9 == len.
        let plan = ChunkPlan::new(9, 4, ChunkStrategy::Ceil);
        assert_eq!(plan.ranges(), &[0..3, 3..6, 6..9]);

        // size 2 -> five chunks; the last three workers get nothing.
        let plan = ChunkPlan::new(10, 8, ChunkStrategy::Ceil);
        assert_eq!(plan.ranges(), &[0..2, 2..4, 4..6, 6..8, 8..10]);
    }

    #[test]
    fn floor_last_chunk_takes_remainder() {
        let plan = ChunkPlan::new(10, 4, ChunkStrategy::Floor);
        assert_eq!(plan.ranges(), &[0..2, 2..4, 4..6, 6..10]);
    }

    #[test]
    fn more_workers_than_elements() {
        for strategy in [ChunkStrategy::Ceil, ChunkStrategy::Floor] {
            let plan = ChunkPlan::new(8, 16, strategy);
            assert_eq!(plan.len(), 8);
            assert_exact_cover(&plan, 8);
        }
    }

    #[test]
    fn empty_input_has_no_chunks() {
        assert!(ChunkPlan::new(0, 8, ChunkStrategy::Ceil).is_empty());
        assert!(ChunkPlan::new(0, 8, ChunkStrategy::Floor).is_empty());
    }

    #[test]
    fn zero_workers_means_one() {
        let plan = ChunkPlan::new(5, 0, ChunkStrategy::Ceil);
        assert_eq!(plan.ranges(), &[0..5]);
    }

    #[test]
    fn strategy_parses_from_cli_text() {
        assert_eq!("CEIL".parse::<ChunkStrategy>(), Ok(ChunkStrategy::Ceil));
        assert_eq!("floor".parse::<ChunkStrategy>(), Ok(ChunkStrategy::Floor));
        assert!("round".parse::<ChunkStrategy>().is_err());
    }

    proptest! {
        #[test]
        fn plan_covers_every_index_once(len in 0usize..2_000, workers in 1usize..=64, floor in any::<bool>()) {
            let strategy = if floor { ChunkStrategy::Floor } else { ChunkStrategy::Ceil };
            let plan = ChunkPlan::new(len, workers, strategy);
            prop_assert!(plan.len() <= workers);
            prop_assert!(plan.len() <= len);
            assert_exact_cover(&plan, len);
        }

        #[test]
        fn ceil_plan_has_exact_chunk_count(len in 1usize..2_000, workers in 1usize..=64) {
            let plan = ChunkPlan::new(len, workers, ChunkStrategy::Ceil);
            let expected = workers.min(len.div_ceil(len.div_ceil(workers)));
            prop_assert_eq!(plan.len(), expected);
        }
    }

    #[test]
    fn ceil_chunk_count_small_grid() {
        for len in 1usize..500 {
            for workers in 1usize..=64 {
                let plan = ChunkPlan::new(len, workers, ChunkStrategy::Ceil);
                let expected = workers.min(len.div_ceil(len.div_ceil(workers)));
                assert_eq!(plan.len(), expected, "len={len} workers={workers}");
            }
        }
    }
}
