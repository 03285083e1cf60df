use std::ops::Range;

use crate::Comparator;

use super::{SortCtx, common};

/// Splits `[m, n)` into the four ranges `[m, q1) [q1, q2) [q2, q3) [q3, n)`
/// with `q1 = m + len/4`, `q2 = m + len/2`, `q3 = m + 3*len/4` (floored).
///
/// The ranges are adjacent and together cover exactly `[m, n)`.
#[inline]
pub(crate) fn quartiles(m: usize, n: usize) -> [Range<usize>; 4] {
    debug_assert!(m <= n);
    let len = n - m;
    let q1 = m + len / 4;
    let q2 = m + len / 2;
    // floor(3 * len / 4) without forming 3 * len.
    let q3 = m + (len / 4) * 3 + ((len % 4) * 3) / 4;
    [m..q1, q1..q2, q2..q3, q3..n]
}

/// Sorts `a[m..n]` using `b[m..n]` as scratch.
///
/// On return `a[m..n]` is ascending and `b[m..n]` holds leftovers. Every
/// quarter is sorted in `a`, paired into `b`, then merged back into `a`, so
/// the result never has to be looked up in the other buffer.
pub(crate) fn sort_range<T, C>(
    a: &mut [T],
    b: &mut [T],
    m: usize,
    n: usize,
    ctx: &mut SortCtx<'_, C>,
) -> Result<(), C::Error>
where
    T: Clone,
    C: Comparator<T>,
{
    if n - m <= ctx.config.insert_sort_threshold() {
        return common::insert_sort(a, m, n, ctx);
    }

    for quarter in quartiles(m, n) {
        sort_range(a, b, quarter.start, quarter.end, ctx)?;
    }
    merge_quarters(a, b, m, n, ctx)
}

/// Merges the four sorted quarters of `a[m..n]` into one ascending range in `a`.
pub(crate) fn merge_quarters<T, C>(
    a: &mut [T],
    b: &mut [T],
    m: usize,
    n: usize,
    ctx: &mut SortCtx<'_, C>,
) -> Result<(), C::Error>
where
    T: Clone,
    C: Comparator<T>,
{
    let [first, second, third, _] = quartiles(m, n);
    let (q1, q2, q3) = (first.end, second.end, third.end);

    common::merge(a, b, m, q1, q2, ctx)?;
    common::merge(a, b, q2, q3, n, ctx)?;
    common::merge(b, a, m, q2, n, ctx)
}
