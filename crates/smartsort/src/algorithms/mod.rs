pub(crate) mod common;
pub(crate) mod quad_merge_sort;
pub(crate) mod run_aware;
pub(crate) mod runs;

use crate::{Comparator, SortConfig, SortStats};

/// Everything a single sort call threads through its recursion.
pub(crate) struct SortCtx<'a, C> {
    pub(crate) config: SortConfig,
    pub(crate) comparator: &'a mut C,
    pub(crate) stats: SortStats,
}

impl<'a, C> SortCtx<'a, C> {
    pub(crate) fn new(config: SortConfig, comparator: &'a mut C) -> Self {
        Self {
            config,
            comparator,
            stats: SortStats::default(),
        }
    }

    #[inline]
    pub(crate) fn le<T: ?Sized>(&mut self, a: &T, b: &T) -> Result<bool, C::Error>
    where
        C: Comparator<T>,
    {
        self.stats.comparisons += 1;
        self.comparator.le(a, b)
    }
}
