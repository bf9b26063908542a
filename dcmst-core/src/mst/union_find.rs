//! Disjoint-set forest backing Kruskal's and Borůvka's cycle checks.
//!
//! Each forest is owned by a single algorithm run, so no state survives
//! between calls. `find` flattens every visited node onto the root and
//! `union` links by rank.

/// Disjoint-set (union-find) forest over `[0, len)`.
///
/// # Examples
/// ```
/// use dcmst_core::DisjointSet;
///
/// let mut sets = DisjointSet::new(4);
/// assert!(sets.union(0, 1));
/// assert!(!sets.union(1, 0));
/// assert_eq!(sets.find(1), sets.find(0));
/// assert_eq!(sets.components(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parents: Vec<usize>,
    ranks: Vec<usize>,
    components: usize,
}

impl DisjointSet {
    /// Creates `len` singleton components, each of rank zero.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parents: (0..len).collect(),
            ranks: vec![0; len],
            components: len,
        }
    }

    /// Returns the number of elements tracked by the forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.parents.len() }

    /// Returns `true` when the forest tracks no elements.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.parents.is_empty() }

    /// Returns the number of disjoint components.
    #[must_use]
    #[rustfmt::skip]
    pub fn components(&self) -> usize { self.components }

    /// Returns the rank of `node`, an upper bound on its subtree height.
    ///
    /// # Panics
    /// Panics when `node >= self.len()`.
    #[must_use]
    pub fn rank(&self, node: usize) -> usize {
        self.ranks[node]
    }

    /// Returns the representative of the component holding `node`.
    ///
    /// Every node on the walked path is re-parented directly onto the root.
    ///
    /// # Panics
    /// Panics when `node >= self.len()`.
    pub fn find(&mut self, node: usize) -> usize {
        let mut root = node;
        while self.parents[root] != root {
            root = self.parents[root];
        }

        let mut current = node;
        while current != root {
            let next = self.parents[current];
            self.parents[current] = root;
            current = next;
        }
        root
    }

    /// Returns `true` when `left` and `right` share a component.
    ///
    /// # Panics
    /// Panics when either node is out of range.
    pub fn same(&mut self, left: usize, right: usize) -> bool {
        self.find(left) == self.find(right)
    }

    /// Merges the components holding `left` and `right`.
    ///
    /// Returns `false` without touching the forest when they already share a
    /// component. Otherwise the lower-rank root goes under the higher-rank
    /// root; on equal ranks `right`'s root goes under `left`'s root, whose
    /// rank is then incremented.
    ///
    /// # Panics
    /// Panics when either node is out of range.
    pub fn union(&mut self, left: usize, right: usize) -> bool {
        let left_root = self.find(left);
        let right_root = self.find(right);

        if left_root == right_root {
            return false;
        }

        let (parent, child) = choose_parent_child(
            left_root,
            right_root,
            self.ranks[left_root],
            self.ranks[right_root],
        );
        self.parents[child] = parent;
        if self.ranks[parent] == self.ranks[child] {
            self.ranks[parent] += 1;
        }

        self.components -= 1;
        true
    }
}

fn choose_parent_child(
    left_root: usize,
    right_root: usize,
    left_rank: usize,
    right_rank: usize,
) -> (usize, usize) {
    if right_rank > left_rank {
        (right_root, left_root)
    } else {
        (left_root, right_root)
    }
}
