mod max_query;

use super::{
    error::RangeError,
    query_tree::{Query, QueryTree},
    NegativeInfinity,
};
pub use max_query::MaxQuery;
use std::fmt;

/// Answers range-maximum queries over a fixed array.
///
/// Construction copies the array and takes O(n); every query takes
/// O(log n) and leaves the tree untouched.
///
/// ```
/// use range_max_tree::RangeMaxTree;
///
/// let tree = RangeMaxTree::build(&[2, 5, 1, 4, 9, 3]).unwrap();
/// assert_eq!(tree.query_max(1, 3), Ok(5));
/// assert!(tree.query_max(2, 1).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct RangeMaxTree<V: Copy + NegativeInfinity + Ord> {
    source: Vec<V>,
    tree: QueryTree<V, MaxQuery>,
}

impl<V: Copy + NegativeInfinity + Ord> RangeMaxTree<V> {
    pub fn build(source: &[V]) -> Result<Self, RangeError> {
        let tree = QueryTree::build(source)?;
        log::debug!("range max tree built over {} values", source.len());
        Ok(Self {
            source: source.to_vec(),
            tree,
        })
    }

    /// Maximum of `source[l..=r]`.
    pub fn query_max(&self, l: usize, r: usize) -> Result<V, RangeError> {
        self.tree.query(l, r)
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn source(&self) -> &[V] {
        &self.source
    }

    /// Maximum of the whole array, read from the root.
    pub fn max(&self) -> V {
        self.tree.total()
    }
}

impl<V: Copy + NegativeInfinity + Ord + fmt::Display> fmt::Display for RangeMaxTree<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.tree.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brute_force_max;

    const SOURCE: [i32; 6] = [2, 5, 1, 4, 9, 3];

    #[test]
    fn answers_the_worked_example() {
        let tree = RangeMaxTree::build(&SOURCE).unwrap();
        assert_eq!(tree.query_max(0, 5), Ok(9));
        assert_eq!(tree.query_max(1, 3), Ok(5));
        assert_eq!(tree.query_max(2, 2), Ok(1));
        assert_eq!(tree.query_max(4, 5), Ok(9));
    }

    #[test]
    fn single_element_array() {
        let tree = RangeMaxTree::build(&[7]).unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.query_max(0, 0), Ok(7));
        assert_eq!(
            tree.query_max(0, 1),
            Err(RangeError::InvalidRange { l: 0, r: 1, len: 1 })
        );
    }

    #[test]
    fn inverted_range_is_rejected() {
        let tree = RangeMaxTree::build(&SOURCE).unwrap();
        assert_eq!(
            tree.query_max(2, 1),
            Err(RangeError::InvalidRange { l: 2, r: 1, len: 6 })
        );
    }

    #[test]
    fn empty_input_is_rejected() {
        let result = RangeMaxTree::<i32>::build(&[]);
        assert_eq!(result.err(), Some(RangeError::EmptyInput));
    }

    #[test]
    fn handles_values_at_the_identity() {
        let tree = RangeMaxTree::build(&[i64::MIN, i64::MIN, -3]).unwrap();
        assert_eq!(tree.query_max(0, 1), Ok(i64::MIN));
        assert_eq!(tree.query_max(0, 2), Ok(-3));
    }

    #[test]
    fn every_range_of_unsigned_extremes_matches_the_scan() {
        let source = [0u8, u8::MAX, 0, 7, u8::MAX, 1];
        let tree = RangeMaxTree::build(&source).unwrap();
        for l in 0..source.len() {
            assert_eq!(tree.query_max(l, l), Ok(source[l]));
            for r in l..source.len() {
                assert_eq!(tree.query_max(l, r), brute_force_max(&source, l, r));
            }
        }
    }

    #[test]
    fn keeps_a_copy_of_the_source() {
        let tree = RangeMaxTree::build(&SOURCE).unwrap();
        assert_eq!(tree.source(), &SOURCE);
        assert_eq!(tree.max(), 9);
        assert!(!tree.is_empty());
    }

    #[test]
    fn displays_the_segment_layout() {
        let tree = RangeMaxTree::build(&[3, 8, 1]).unwrap();
        assert_eq!(
            tree.to_string(),
            "[0,2]: 8\n  [0,1]: 8\n    [0,0]: 3\n    [1,1]: 8\n  [2,2]: 1\n"
        );
    }
}
