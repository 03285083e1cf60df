use log::trace;

use crate::Comparator;

use super::runs::RunCursor;
use super::{SortCtx, common, quad_merge_sort};

/// [`quad_merge_sort::sort_range`] that first asks `cursor` whether `a[m..n]`
/// is already known to be sorted.
///
/// A covered range is returned untouched, with `b` untouched as well. The
/// recursion visits ranges depth first and left to right, which is exactly
/// the non-decreasing start order the cursor requires.
pub(crate) fn sort_range<T, C>(
    a: &mut [T],
    b: &mut [T],
    cursor: &mut RunCursor<'_>,
    m: usize,
    n: usize,
    ctx: &mut SortCtx<'_, C>,
) -> Result<(), C::Error>
where
    T: Clone,
    C: Comparator<T>,
{
    if cursor.skip_to(m..n) {
        trace!("skipping {}..{}: inside a sorted run", m, n);
        ctx.stats.skipped_ranges += 1;
        return Ok(());
    }

    if n - m <= ctx.config.insert_sort_threshold() {
        return common::insert_sort(a, m, n, ctx);
    }

    for quarter in quad_merge_sort::quartiles(m, n) {
        sort_range(a, b, cursor, quarter.start, quarter.end, ctx)?;
    }
    quad_merge_sort::merge_quarters(a, b, m, n, ctx)
}

#[cfg(test)]
mod tests {
    use super::super::runs;
    use super::*;
    use crate::{Natural, SortConfig};

    const UNTOUCHED: u32 = u32::MAX;

    #[test]
    fn covered_input_never_reaches_the_scratch_buffer() {
        let mut natural = Natural;
        let mut ctx = SortCtx::new(SortConfig::new(4, 8).unwrap(), &mut natural);
        let mut a: Vec<u32> = (0..64).collect();
        let mut b = vec![UNTOUCHED; a.len()];

        let detected = runs::detect(&a, &mut ctx).unwrap();
        let mut cursor = detected.cursor();
        sort_range(&mut a, &mut b, &mut cursor, 0, 64, &mut ctx).unwrap();

        assert_eq!(a, (0..64).collect::<Vec<_>>());
        assert!(b.iter().all(|&x| x == UNTOUCHED));
        assert_eq!(ctx.stats.skipped_ranges, 1);
        assert_eq!(ctx.stats.merge_writes, 0);
        assert_eq!(ctx.stats.insert_sorts, 0);
    }

    #[test]
    fn skipped_quarters_leave_their_scratch_slots_alone() {
        // One run over 0..33, the tail is descending.
        let mut natural = Natural;
        let mut ctx = SortCtx::new(SortConfig::new(4, 8).unwrap(), &mut natural);
        let mut a: Vec<u32> = (0..32).chain((35..=50).rev()).collect();
        let mut b = vec![UNTOUCHED; a.len()];

        let detected = runs::detect(&a, &mut ctx).unwrap();
        assert_eq!(detected.as_slice(), &[runs::Run { start: 0, end: 33 }]);
        let mut cursor = detected.cursor();

        sort_range(&mut a, &mut b, &mut cursor, 0, 24, &mut ctx).unwrap();
        assert_eq!(ctx.stats.skipped_ranges, 1);
        sort_range(&mut a, &mut b, &mut cursor, 24, 48, &mut ctx).unwrap();

        assert!(b[..24].iter().all(|&x| x == UNTOUCHED), "b={:?}", b);
        assert_eq!(&a[..24], (0..24).collect::<Vec<_>>().as_slice());
        let mut tail: Vec<u32> = (24..32).chain(35..=50).collect();
        tail.sort();
        assert_eq!(&a[24..], tail.as_slice());
        assert!(ctx.stats.skipped_ranges > 1);
    }
}
