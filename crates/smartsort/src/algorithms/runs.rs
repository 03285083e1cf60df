use std::ops::Range;

use log::trace;

use crate::error::check_range;
use crate::{Comparator, SortError};

use super::SortCtx;

/// A maximal ascending stretch `[start, end)` of the input.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Run {
    pub start: usize,
    pub end: usize,
}

impl Run {
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// True when `range` lies entirely inside this run.
    #[inline]
    pub fn contains(&self, range: &Range<usize>) -> bool {
        self.start <= range.start && range.end <= self.end
    }
}

impl From<(usize, usize)> for Run {
    fn from((start, end): (usize, usize)) -> Self {
        Self { start, end }
    }
}

/// Ascending runs found by one pass over a slice, ordered by `start`.
///
/// Runs are disjoint and each is at least as long as the threshold it was
/// detected with. Stretches shorter than that are simply absent.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SortedRuns {
    runs: Vec<Run>,
    /// Length of the sequence the runs were found in.
    seq_len: usize,
}

impl SortedRuns {
    /// Builds a run list from already known runs over a sequence of `seq_len`
    /// elements.
    ///
    /// Returns `None` unless the runs are non-empty, disjoint, sorted by start
    /// and end within `seq_len`.
    pub fn from_runs(runs: Vec<Run>, seq_len: usize) -> Option<Self> {
        let ordered = runs.iter().all(|run| run.start < run.end)
            && runs.windows(2).all(|pair| pair[0].end <= pair[1].start)
            && runs.last().is_none_or(|run| run.end <= seq_len);
        ordered.then_some(Self { runs, seq_len })
    }

    pub fn seq_len(&self) -> usize {
        self.seq_len
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    pub fn as_slice(&self) -> &[Run] {
        &self.runs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Run> {
        self.runs.iter()
    }

    /// Idempotent lookup: does one run contain all of `range`?
    ///
    /// Same answer a fresh [`RunCursor`] gives for its first query, without
    /// any ordering requirement across calls. A range that is inverted or ends
    /// past [`seq_len`](Self::seq_len) is rejected with
    /// [`SortError::InvalidRange`].
    pub fn covers(&self, range: Range<usize>) -> Result<bool, SortError> {
        check_range(range.start, range.end, self.seq_len)?;
        let idx = self.runs.partition_point(|run| run.end <= range.start);
        Ok(self.runs.get(idx).is_some_and(|run| run.contains(&range)))
    }

    pub fn cursor(&self) -> RunCursor<'_> {
        RunCursor::new(self)
    }
}

impl<'a> IntoIterator for &'a SortedRuns {
    type Item = &'a Run;
    type IntoIter = std::slice::Iter<'a, Run>;

    fn into_iter(self) -> Self::IntoIter {
        self.runs.iter()
    }
}

/// One left-to-right pass over `data` collecting maximal ascending runs of at
/// least `ctx.config.sorted_run_threshold()` elements.
pub(crate) fn detect<T, C>(
    data: &[T],
    ctx: &mut SortCtx<'_, C>,
) -> Result<SortedRuns, C::Error>
where
    C: Comparator<T>,
{
    let min_len = ctx.config.sorted_run_threshold();
    let n = data.len();
    let mut runs = Vec::new();

    let mut start = 0usize;
    while start < n {
        let mut end = start + 1;
        while end < n && ctx.le(&data[end - 1], &data[end])? {
            end += 1;
        }

        if end - start >= min_len {
            trace!("sorted run {}..{}", start, end);
            runs.push(Run { start, end });
        }
        start = end;
    }

    ctx.stats.runs_detected += runs.len();
    Ok(SortedRuns { runs, seq_len: n })
}

/// Forward-only reader over a [`SortedRuns`].
///
/// Queries must arrive with non-decreasing range starts: a query skips every
/// run ending at or before its start, and those runs are never looked at
/// again by this cursor. A query that moves left is rejected with
/// [`SortError::OutOfOrderQuery`] rather than answered from a cursor that
/// has already passed the runs it would need.
#[derive(Clone, Debug)]
pub struct RunCursor<'a> {
    runs: &'a [Run],
    seq_len: usize,
    next: usize,
    last_start: Option<usize>,
}

impl<'a> RunCursor<'a> {
    pub fn new(runs: &'a SortedRuns) -> Self {
        Self {
            runs: &runs.runs,
            seq_len: runs.seq_len,
            next: 0,
            last_start: None,
        }
    }

    /// The front run, if any remain.
    #[inline]
    pub fn peek(&self) -> Option<Run> {
        self.runs.get(self.next).copied()
    }

    /// Steps past the front run and returns it.
    pub fn advance(&mut self) -> Option<Run> {
        let run = self.peek()?;
        self.next += 1;
        Some(run)
    }

    /// Is `range` fully contained in a known run?
    ///
    /// Rejected queries leave the cursor where it was.
    pub fn covers(&mut self, range: Range<usize>) -> Result<bool, SortError> {
        check_range(range.start, range.end, self.seq_len)?;
        if let Some(previous) = self.last_start {
            if range.start < previous {
                return Err(SortError::OutOfOrderQuery {
                    start: range.start,
                    previous,
                });
            }
        }
        Ok(self.skip_to(range))
    }

    /// [`covers`](Self::covers) for callers that already guarantee a valid
    /// range with a start no smaller than the previous one.
    pub(crate) fn skip_to(&mut self, range: Range<usize>) -> bool {
        debug_assert!(range.start <= range.end && range.end <= self.seq_len);
        debug_assert!(self.last_start.is_none_or(|previous| previous <= range.start));
        self.last_start = Some(range.start);

        while self.peek().is_some_and(|run| run.end <= range.start) {
            self.next += 1;
        }
        self.peek().is_some_and(|run| run.contains(&range))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runs(pairs: &[(usize, usize)], seq_len: usize) -> SortedRuns {
        SortedRuns::from_runs(pairs.iter().copied().map(Run::from).collect(), seq_len).unwrap()
    }

    #[test]
    fn single_run_queries() {
        let collection = runs(&[(3, 10)], 10);

        let mut cursor = collection.cursor();
        assert_eq!(cursor.covers(3..10), Ok(true));

        let mut fresh = collection.cursor();
        assert_eq!(fresh.covers(2..10), Ok(false));
    }

    #[test]
    fn cursor_discards_runs_behind_the_query() {
        let collection = runs(&[(0, 4), (6, 12), (12, 20)], 20);
        let mut cursor = collection.cursor();

        assert_eq!(cursor.covers(1..3), Ok(true));
        assert_eq!(cursor.peek(), Some(Run { start: 0, end: 4 }));

        assert_eq!(cursor.covers(4..8), Ok(false));
        assert_eq!(cursor.peek(), Some(Run { start: 6, end: 12 }));

        assert_eq!(cursor.covers(12..20), Ok(true));
        assert_eq!(cursor.peek(), Some(Run { start: 12, end: 20 }));

        assert_eq!(cursor.covers(20..20), Ok(false));
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn cursor_rejects_queries_that_move_left() {
        let collection = runs(&[(0, 4), (6, 12)], 12);
        let mut cursor = collection.cursor();

        assert_eq!(cursor.covers(7..9), Ok(true));
        assert_eq!(
            cursor.covers(1..3),
            Err(SortError::OutOfOrderQuery {
                start: 1,
                previous: 7
            })
        );
        // Same start again is allowed.
        assert_eq!(cursor.covers(7..12), Ok(true));
    }

    #[test]
    fn advance_walks_front_to_back() {
        let collection = runs(&[(0, 2), (5, 9)], 9);
        let mut cursor = collection.cursor();
        assert_eq!(cursor.advance(), Some(Run { start: 0, end: 2 }));
        assert_eq!(cursor.peek(), Some(Run { start: 5, end: 9 }));
        assert_eq!(cursor.advance(), Some(Run { start: 5, end: 9 }));
        assert_eq!(cursor.advance(), None);
    }

    #[test]
    fn covers_matches_a_fresh_cursor() {
        let collection = runs(&[(0, 4), (6, 12), (12, 20), (25, 40)], 42);
        for start in 0..=42 {
            for end in start..=42 {
                let mut cursor = collection.cursor();
                assert_eq!(
                    collection.covers(start..end),
                    cursor.covers(start..end),
                    "range={}..{}",
                    start,
                    end
                );
            }
        }
    }

    #[test]
    fn from_runs_rejects_overlap_and_disorder() {
        assert!(SortedRuns::from_runs(vec![], 0).is_some());
        assert!(SortedRuns::from_runs(vec![Run::from((0, 5)), Run::from((4, 8))], 8).is_none());
        assert!(SortedRuns::from_runs(vec![Run::from((6, 8)), Run::from((0, 5))], 8).is_none());
        assert!(SortedRuns::from_runs(vec![Run::from((3, 3))], 8).is_none());
        assert!(SortedRuns::from_runs(vec![Run::from((0, 9))], 8).is_none());
    }

    #[test]
    fn inverted_or_overlong_ranges_are_rejected() {
        let collection = runs(&[(0, 10)], 10);
        let inverted = Err(SortError::InvalidRange {
            start: 7,
            end: 3,
            len: 10,
        });
        let overlong = Err(SortError::InvalidRange {
            start: 4,
            end: 11,
            len: 10,
        });

        assert_eq!(collection.covers(7..3), inverted);
        assert_eq!(collection.covers(4..11), overlong);

        let mut cursor = collection.cursor();
        assert_eq!(cursor.covers(7..3), inverted);
        assert_eq!(cursor.covers(4..11), overlong);
        // Neither rejection moved the cursor: an earlier start is still fine.
        assert_eq!(cursor.covers(2..5), Ok(true));
        assert_eq!(cursor.peek(), Some(Run { start: 0, end: 10 }));

        assert_eq!(SortedRuns::default().covers(0..0), Ok(false));
        assert!(SortedRuns::default().cursor().covers(0..1).is_err());
    }
}
