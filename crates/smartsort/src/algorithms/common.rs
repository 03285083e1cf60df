use crate::Comparator;

use super::SortCtx;

/// Stable shift-insert sort of `data[m..n]`. No-op when `n <= m`.
pub(crate) fn insert_sort<T, C>(
    data: &mut [T],
    m: usize,
    n: usize,
    ctx: &mut SortCtx<'_, C>,
) -> Result<(), C::Error>
where
    C: Comparator<T>,
{
    ctx.stats.insert_sorts += 1;
    if n <= m + 1 {
        return Ok(());
    }

    for i in (m + 1)..n {
        // The key stays at `i` until its slot is known, so no clone is needed.
        let mut j = i;
        while j > m && !ctx.le(&data[j - 1], &data[i])? {
            j -= 1;
        }
        if j < i {
            data[j..=i].rotate_right(1);
        }
    }
    Ok(())
}

/// Merges the ascending runs `src[m..p]` and `src[p..n]` into `dst[m..n]`.
///
/// On a tie the left element goes first.
pub(crate) fn merge<T, C>(
    src: &[T],
    dst: &mut [T],
    m: usize,
    p: usize,
    n: usize,
    ctx: &mut SortCtx<'_, C>,
) -> Result<(), C::Error>
where
    T: Clone,
    C: Comparator<T>,
{
    debug_assert!(m <= p && p <= n && n <= src.len() && n <= dst.len());

    let mut i = m;
    let mut j = p;
    let mut k = m;

    while i < p && j < n {
        if ctx.le(&src[i], &src[j])? {
            dst[k].clone_from(&src[i]);
            i += 1;
        } else {
            dst[k].clone_from(&src[j]);
            j += 1;
        }
        k += 1;
    }

    if i < p {
        dst[k..n].clone_from_slice(&src[i..p]);
    } else if j < n {
        dst[k..n].clone_from_slice(&src[j..n]);
    }

    ctx.stats.merge_writes += n - m;
    Ok(())
}

/// [`merge`] over slots that may be empty.
///
/// `None` slots are stepped over on either side: never compared, never
/// written. Output is packed from `dst[m]` onward and the exclusive end of
/// the written prefix is returned; `dst` past that index is left as it was.
pub(crate) fn merge_with_gaps<T, C>(
    src: &[Option<T>],
    dst: &mut [Option<T>],
    m: usize,
    p: usize,
    n: usize,
    comparator: &mut C,
) -> Result<usize, C::Error>
where
    T: Clone,
    C: Comparator<T>,
{
    let mut i = m;
    let mut j = p;
    let mut k = m;

    loop {
        while i < p && src[i].is_none() {
            i += 1;
        }
        while j < n && src[j].is_none() {
            j += 1;
        }

        let left = if i < p { src[i].as_ref() } else { None };
        let right = if j < n { src[j].as_ref() } else { None };
        let take_left = match (left, right) {
            (Some(a), Some(b)) => comparator.le(a, b)?,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };

        if take_left {
            dst[k].clone_from(&src[i]);
            i += 1;
        } else {
            dst[k].clone_from(&src[j]);
            j += 1;
        }
        k += 1;
    }

    Ok(k)
}
