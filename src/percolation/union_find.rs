//! Weighted quick-union over a fixed universe `0..n`.
//!
//! Smaller trees are attached under larger ones (union by size) and `union`
//! halves the paths it walks, so every operation is amortized near-constant.

#[derive(Debug, Clone)]
pub struct WeightedQuickUnion {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl WeightedQuickUnion {
    /// Creates `n` singleton sets `{0}, {1}, ..., {n-1}`.
    pub fn new(n: usize) -> Self {
        WeightedQuickUnion {
            parent: (0..n).collect(),
            size: vec![1; n],
            components: n,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Returns the root of the set containing `x` without touching the forest.
    ///
    /// Union by size keeps every tree at most `lg n` deep, so read-only
    /// queries stay logarithmic.
    ///
    /// # Panics
    /// Panics if `x >= len()`.
    pub fn find(&self, mut x: usize) -> usize {
        while self.parent[x] != x {
            x = self.parent[x];
        }
        x
    }

    /// Like [`find`](Self::find), but halves the path on the way up.
    pub fn find_compress(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            let grandparent = self.parent[self.parent[x]];
            self.parent[x] = grandparent;
            x = grandparent;
        }
        x
    }

    /// Merges the sets containing `x` and `y`.
    ///
    /// Returns `false` if they already shared a root.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find_compress(x);
        let root_y = self.find_compress(y);
        if root_x == root_y {
            return false;
        }

        let (winner, loser) = if self.size[root_x] < self.size[root_y] {
            (root_y, root_x)
        } else {
            (root_x, root_y)
        };
        self.parent[loser] = winner;
        self.size[winner] += self.size[loser];
        self.components -= 1;
        true
    }

    pub fn connected(&self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Number of elements in the set containing `x`.
    pub fn component_size(&self, x: usize) -> usize {
        let root = self.find(x);
        self.size[root]
    }
}
