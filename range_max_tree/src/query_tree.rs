use super::error::{check_range, RangeError};
use super::tree::{split, Tree};
use std::fmt;

pub trait Query<V> {
    /// Value that loses every `combine`, used for segments outside the query.
    fn identity() -> V;
    fn combine(left: V, right: V) -> V;
}

/// Static segment tree aggregating `V` with `Q`.
///
/// Built once from a finished array and never mutated afterwards, so a
/// shared reference can be queried from several threads at once.
#[derive(Debug, Clone)]
pub struct QueryTree<V, Q: Query<V>> {
    tree: Tree<V>,
    _marker: std::marker::PhantomData<Q>,
}

impl<V: Copy, Q: Query<V>> QueryTree<V, Q> {
    pub fn build(source: &[V]) -> Result<Self, RangeError> {
        if source.is_empty() {
            return Err(RangeError::EmptyInput);
        }
        let mut tree = Tree::new(Q::identity(), source.len());
        let root = tree.root();
        Self::build_node(&mut tree, source, root, 0, source.len() - 1);
        log::trace!(
            "built query tree over {} leaves in {} slots",
            source.len(),
            tree.capacity()
        );
        Ok(Self {
            tree,
            _marker: std::marker::PhantomData,
        })
    }

    fn build_node(tree: &mut Tree<V>, source: &[V], node: usize, start: usize, end: usize) -> V {
        let value = if start == end {
            source[start]
        } else {
            let mid = split(start, end);
            let (left, right) = tree.children(node);
            let left_value = Self::build_node(tree, source, left, start, mid);
            let right_value = Self::build_node(tree, source, right, mid + 1, end);
            Q::combine(left_value, right_value)
        };
        tree.set_value(node, value);
        value
    }

    pub fn len(&self) -> usize {
        self.tree.leaf_count()
    }

    // always false, construction rejects empty input
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn total(&self) -> V {
        self.tree.value(self.tree.root())
    }

    pub fn query(&self, l: usize, r: usize) -> Result<V, RangeError> {
        check_range(self.len(), l, r)?;
        Ok(self.query_node(self.tree.root(), 0, self.len() - 1, l, r))
    }

    fn query_node(&self, node: usize, start: usize, end: usize, l: usize, r: usize) -> V {
        if end < l || start > r {
            return Q::identity();
        }
        if l <= start && end <= r {
            return self.tree.value(node);
        }
        let mid = split(start, end);
        let (left, right) = self.tree.children(node);
        Q::combine(
            self.query_node(left, start, mid, l, r),
            self.query_node(right, mid + 1, end, l, r),
        )
    }

    /// Visits every node in pre-order as `(depth, start, end, value)`.
    pub fn for_each_segment<F>(&self, mut f: F)
    where
        F: FnMut(usize, usize, usize, V),
    {
        self.visit(self.tree.root(), 0, self.len() - 1, 0, &mut f);
    }

    fn visit<F>(&self, node: usize, start: usize, end: usize, depth: usize, f: &mut F)
    where
        F: FnMut(usize, usize, usize, V),
    {
        f(depth, start, end, self.tree.value(node));
        if start == end {
            return;
        }
        let mid = split(start, end);
        let (left, right) = self.tree.children(node);
        self.visit(left, start, mid, depth + 1, f);
        self.visit(right, mid + 1, end, depth + 1, f);
    }
}

impl<V: Copy + fmt::Display, Q: Query<V>> fmt::Display for QueryTree<V, Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut result = Ok(());
        self.for_each_segment(|depth, start, end, value| {
            if result.is_ok() {
                let indent = 2 * depth;
                result = writeln!(f, "{:indent$}[{start},{end}]: {value}", "");
            }
        });
        result
    }
}
