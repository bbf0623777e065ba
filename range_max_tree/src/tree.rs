enum TreeDir {
    Left,
    Right,
}

/// Array-backed binary tree with 1-based node ids.
///
/// The root is node `1` and the children of node `i` are `2i` and `2i + 1`.
/// Slot `0` is never used. The arena holds `4 * leaf_count` slots, which is
/// enough for the recursive midpoint split of any `leaf_count`.
#[derive(Debug, Clone)]
pub struct Tree<V> {
    nodes: Vec<V>,
    leaf_count: usize,
}

impl<V: Clone + Copy> Tree<V> {
    pub fn new(value: V, leaf_count: usize) -> Self {
        Self {
            nodes: vec![value; 4 * leaf_count],
            leaf_count,
        }
    }

    fn child(&self, node: usize, dir: TreeDir) -> usize {
        match dir {
            TreeDir::Left => 2 * node,
            TreeDir::Right => 2 * node + 1,
        }
    }

    pub fn children(&self, node: usize) -> (usize, usize) {
        (
            self.child(node, TreeDir::Left),
            self.child(node, TreeDir::Right),
        )
    }

    pub fn root(&self) -> usize {
        1
    }

    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    pub fn capacity(&self) -> usize {
        self.nodes.len()
    }

    pub fn value(&self, node: usize) -> V {
        self.nodes[node]
    }

    pub fn set_value(&mut self, node: usize, value: V) {
        self.nodes[node] = value;
    }
}

/// Splits the inclusive segment `[start, end]` at its midpoint.
///
/// The left half is `[start, mid]`, the right half `[mid + 1, end]`.
pub fn split(start: usize, end: usize) -> usize {
    start + (end - start) / 2
}
