use super::error::{check_range, RangeError};

/// Linear scan over `source[l..=r]`, kept deliberately naive so it can
/// serve as the reference answer when checking a tree.
pub fn brute_force_max<V: Copy + Ord>(
    source: &[V],
    l: usize,
    r: usize,
) -> Result<V, RangeError> {
    check_range(source.len(), l, r)?;
    let mut max = source[l];
    for i in l + 1..=r {
        if source[i] > max {
            max = source[i];
        }
    }
    Ok(max)
}
