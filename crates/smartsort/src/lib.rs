//! Four-way merge sort with an insertion sort base case, plus a run-aware
//! variant that skips ranges already known to be sorted.
//!
//! Both strategies sort in place, are stable, and take their comparator and
//! thresholds from a [`Sorter`] value rather than from shared state:
//!
//! - [`Strategy::Plain`]: recursive quad merge sort over the whole slice.
//! - [`Strategy::Smart`]: one pass first records ascending runs of at least
//!   [`SortConfig::sorted_run_threshold`] elements; the recursion then
//!   returns early from every range lying inside one of them.

mod algorithms;
mod compare;
mod config;
mod error;

use std::convert::Infallible;
use std::ops::Range;

use log::debug;

use algorithms::{SortCtx, common, quad_merge_sort, run_aware, runs};

pub use algorithms::runs::{Run, RunCursor, SortedRuns};
pub use compare::{ByLe, Comparator, Natural, TryByLe};
pub use config::{
    ConfigError, DEFAULT_CONFIG, DEFAULT_INSERT_SORT_THRESHOLD, DEFAULT_SORTED_RUN_THRESHOLD,
    SortConfig, TUNED_CONFIG,
};
pub use error::SortError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Strategy {
    Plain,
    Smart,
}

pub const ALL_STRATEGIES: [Strategy; 2] = [Strategy::Plain, Strategy::Smart];

pub fn all_strategies() -> &'static [Strategy] {
    &ALL_STRATEGIES
}

pub fn strategy_name(strategy: Strategy) -> &'static str {
    match strategy {
        Strategy::Plain => "quad_merge_sort",
        Strategy::Smart => "run_aware_quad_merge_sort",
    }
}

/// Work done by one sort call.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SortStats {
    /// Comparator invocations, run detection included.
    pub comparisons: usize,
    /// Elements written by merges, into either buffer.
    pub merge_writes: usize,
    /// Ranges handed to the insertion sort base case.
    pub insert_sorts: usize,
    /// Ranges returned early because a detected run covered them.
    pub skipped_ranges: usize,
    /// Runs recorded by the detection pass.
    pub runs_detected: usize,
}

/// A comparator bound to a [`SortConfig`].
///
/// Changing the configuration needs `&mut self`, so it can only happen
/// between calls.
#[derive(Clone, Debug, Default)]
pub struct Sorter<C = Natural> {
    config: SortConfig,
    comparator: C,
}

impl Sorter<Natural> {
    pub fn natural() -> Self {
        Self::new(Natural)
    }
}

impl<F> Sorter<ByLe<F>> {
    pub fn by_le<T>(le: F) -> Self
    where
        F: FnMut(&T, &T) -> bool,
    {
        Self::new(ByLe(le))
    }
}

impl<F> Sorter<TryByLe<F>> {
    pub fn try_by_le<T, E>(le: F) -> Self
    where
        F: FnMut(&T, &T) -> Result<bool, E>,
    {
        Self::new(TryByLe(le))
    }
}

impl<C> Sorter<C> {
    pub fn new(comparator: C) -> Self {
        Self {
            config: SortConfig::default(),
            comparator,
        }
    }

    pub fn with_config(mut self, config: SortConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_comparator<D>(self, comparator: D) -> Sorter<D> {
        Sorter {
            config: self.config,
            comparator,
        }
    }

    pub fn config(&self) -> SortConfig {
        self.config
    }

    pub fn set_config(&mut self, config: SortConfig) {
        self.config = config;
    }

    pub fn set_insert_sort_threshold(&mut self, threshold: usize) -> Result<(), ConfigError> {
        self.config = self.config.with_insert_sort_threshold(threshold)?;
        Ok(())
    }

    pub fn set_sorted_run_threshold(&mut self, threshold: usize) -> Result<(), ConfigError> {
        self.config = self.config.with_sorted_run_threshold(threshold)?;
        Ok(())
    }

    pub fn sort_plain<T: Clone>(
        &mut self,
        data: &mut [T],
    ) -> Result<SortStats, SortError<C::Error>>
    where
        C: Comparator<T>,
    {
        self.sort(Strategy::Plain, data)
    }

    pub fn sort_smart<T: Clone>(
        &mut self,
        data: &mut [T],
    ) -> Result<SortStats, SortError<C::Error>>
    where
        C: Comparator<T>,
    {
        self.sort(Strategy::Smart, data)
    }

    /// Sorts `data` in place.
    ///
    /// On a comparator error the order of `data` is unspecified and some
    /// elements may appear twice while others are lost; every slot still
    /// holds a clone of some input element.
    pub fn sort<T: Clone>(
        &mut self,
        strategy: Strategy,
        data: &mut [T],
    ) -> Result<SortStats, SortError<C::Error>>
    where
        C: Comparator<T>,
    {
        self.sort_whole(strategy, data).map_err(SortError::Comparator)
    }

    /// [`sort`](Self::sort) over the whole slice, where the comparator is the
    /// only thing that can fail.
    fn sort_whole<T: Clone>(
        &mut self,
        strategy: Strategy,
        data: &mut [T],
    ) -> Result<SortStats, C::Error>
    where
        C: Comparator<T>,
    {
        let config = self.config;
        let len = data.len();
        let mut ctx = SortCtx::new(config, &mut self.comparator);

        if len >= 2 {
            let mut scratch = data.to_vec();
            match strategy {
                Strategy::Plain => {
                    quad_merge_sort::sort_range(data, &mut scratch, 0, len, &mut ctx)?;
                }
                Strategy::Smart => {
                    let detected = runs::detect(data, &mut ctx)?;
                    let mut cursor = detected.cursor();
                    run_aware::sort_range(data, &mut scratch, &mut cursor, 0, len, &mut ctx)?;
                }
            }
        }

        debug!(
            "{}: len={} insert_sort_threshold={} sorted_run_threshold={} stats={:?}",
            strategy_name(strategy),
            len,
            config.insert_sort_threshold(),
            config.sorted_run_threshold(),
            ctx.stats
        );
        Ok(ctx.stats)
    }

    /// Sorts `data[range]` in place, leaving the rest of `data` alone.
    pub fn sort_range<T: Clone>(
        &mut self,
        strategy: Strategy,
        data: &mut [T],
        range: Range<usize>,
    ) -> Result<SortStats, SortError<C::Error>>
    where
        C: Comparator<T>,
    {
        error::check_range(range.start, range.end, data.len()).map_err(SortError::widen)?;
        self.sort(strategy, &mut data[range])
    }
}

/// Sorts `data` ascending with the straight quad merge sort and default thresholds.
pub fn sort_plain<T: PartialOrd + Clone>(data: &mut [T]) {
    infallible(Sorter::natural().sort_whole(Strategy::Plain, data));
}

/// Same result as [`sort_plain`], skipping ranges inside detected runs.
pub fn sort_smart<T: PartialOrd + Clone>(data: &mut [T]) {
    infallible(Sorter::natural().sort_whole(Strategy::Smart, data));
}

pub fn sort_plain_by<T: Clone, F: FnMut(&T, &T) -> bool>(data: &mut [T], le: F) {
    infallible(Sorter::by_le(le).sort_whole(Strategy::Plain, data));
}

pub fn sort_smart_by<T: Clone, F: FnMut(&T, &T) -> bool>(data: &mut [T], le: F) {
    infallible(Sorter::by_le(le).sort_whole(Strategy::Smart, data));
}

fn infallible(result: Result<SortStats, Infallible>) {
    match result {
        Ok(_) => {}
        Err(never) => match never {},
    }
}

/// Stable insertion sort of `data[range]`.
pub fn insert_sort<T, C: Comparator<T>>(
    data: &mut [T],
    range: Range<usize>,
    comparator: &mut C,
) -> Result<(), SortError<C::Error>> {
    error::check_range(range.start, range.end, data.len()).map_err(SortError::widen)?;
    let mut ctx = SortCtx::new(DEFAULT_CONFIG, comparator);
    common::insert_sort(data, range.start, range.end, &mut ctx).map_err(SortError::Comparator)
}

/// Merges the ascending runs `src[m..p]` and `src[p..n]` into `dst[m..n]`,
/// taking the left element on ties.
///
/// Both runs must already be ascending under `comparator`; that is not checked.
pub fn merge<T: Clone, C: Comparator<T>>(
    src: &[T],
    dst: &mut [T],
    m: usize,
    p: usize,
    n: usize,
    comparator: &mut C,
) -> Result<(), SortError<C::Error>> {
    check_merge_bounds(src.len(), dst.len(), m, p, n)?;
    let mut ctx = SortCtx::new(DEFAULT_CONFIG, comparator);
    common::merge(src, dst, m, p, n, &mut ctx).map_err(SortError::Comparator)
}

/// [`merge`] over slots where `None` marks an absent element.
///
/// Absent slots are skipped without being compared or copied. Output is
/// packed from `dst[m]`; the return value is the end of what was written.
pub fn merge_with_gaps<T: Clone, C: Comparator<T>>(
    src: &[Option<T>],
    dst: &mut [Option<T>],
    m: usize,
    p: usize,
    n: usize,
    comparator: &mut C,
) -> Result<usize, SortError<C::Error>> {
    check_merge_bounds(src.len(), dst.len(), m, p, n)?;
    common::merge_with_gaps(src, dst, m, p, n, comparator).map_err(SortError::Comparator)
}

fn check_merge_bounds<E>(
    src_len: usize,
    dst_len: usize,
    m: usize,
    p: usize,
    n: usize,
) -> Result<(), SortError<E>> {
    error::check_range(m, p, src_len)
        .and_then(|()| error::check_range(p, n, src_len))
        .and_then(|()| error::check_range(m, n, dst_len))
        .map_err(SortError::widen)
}

/// Maximal ascending runs of `data` at least `config.sorted_run_threshold()` long.
pub fn detect_runs<T, C: Comparator<T>>(
    data: &[T],
    config: SortConfig,
    comparator: &mut C,
) -> Result<SortedRuns, SortError<C::Error>> {
    let mut ctx = SortCtx::new(config, comparator);
    runs::detect(data, &mut ctx).map_err(SortError::Comparator)
}
