use crate::error::PercolationError;
use crate::percolation::union_find::WeightedQuickUnion;
use arrayvec::ArrayVec;
use bitvec::vec::BitVec;
use std::fmt;

/// An `n`-by-`n` grid of sites that open one at a time.
///
/// Coordinates are 1-indexed `(row, col)` pairs in `[1, n]`. Internally the site
/// at 0-indexed `(r, c)` has id `r * n + c`; the two virtual sites sit just past
/// the grid at ids `n * n` (top) and `n * n + 1` (bottom).
#[derive(Debug, Clone)]
pub struct Percolation {
    n: usize,
    open: BitVec,
    open_count: usize,
    connectivity: WeightedQuickUnion,
    virtual_top: usize,
    virtual_bottom: usize,
}

impl Percolation {
    pub fn new(n: usize) -> Result<Self, PercolationError> {
        if n == 0 {
            return Err(PercolationError::InvalidGridSize(n));
        }

        let (sites, universe) = n
            .checked_mul(n)
            .and_then(|sites| Some((sites, sites.checked_add(2)?)))
            .ok_or(PercolationError::InvalidGridSize(n))?;
        Ok(Percolation {
            n,
            open: BitVec::repeat(false, sites),
            open_count: 0,
            connectivity: WeightedQuickUnion::new(universe),
            virtual_top: sites,
            virtual_bottom: sites + 1,
        })
    }

    pub fn grid_size(&self) -> usize {
        self.n
    }

    /// Opens the site at `(row, col)` and joins it to its open neighbours.
    ///
    /// Opening an already open site does nothing.
    pub fn open(&mut self, row: usize, col: usize) -> Result<(), PercolationError> {
        let site = self.site_id(row, col)?;
        if self.open[site] {
            return Ok(());
        }

        let tracing = log::log_enabled!(log::Level::Trace) && !self.percolates();
        self.open.set(site, true);
        self.open_count += 1;

        if row == 1 {
            self.connectivity.union(site, self.virtual_top);
        }
        if row == self.n {
            self.connectivity.union(site, self.virtual_bottom);
        }
        for neighbour in self.neighbours(row - 1, col - 1) {
            if self.open[neighbour] {
                self.connectivity.union(site, neighbour);
            }
        }

        if tracing && self.percolates() {
            log::trace!(
                "n = {}: ({row}, {col}) opened with {} open sites, grid percolates",
                self.n,
                self.open_count
            );
        }
        Ok(())
    }

    pub fn is_open(&self, row: usize, col: usize) -> Result<bool, PercolationError> {
        let site = self.site_id(row, col)?;
        Ok(self.open[site])
    }

    /// A site is full when it is open and joined to the top row through open sites.
    pub fn is_full(&self, row: usize, col: usize) -> Result<bool, PercolationError> {
        let site = self.site_id(row, col)?;
        Ok(self.open[site] && self.connectivity.connected(site, self.virtual_top))
    }

    pub fn number_of_open_sites(&self) -> usize {
        self.open_count
    }

    pub fn percolates(&self) -> bool {
        self.connectivity.connected(self.virtual_top, self.virtual_bottom)
    }

    /// Fraction of the `n * n` sites that are open.
    pub fn open_fraction(&self) -> f64 {
        self.open_count as f64 / (self.n * self.n) as f64
    }

    fn site_id(&self, row: usize, col: usize) -> Result<usize, PercolationError> {
        self.validate(row, col)?;
        Ok((row - 1) * self.n + (col - 1))
    }

    fn validate(&self, row: usize, col: usize) -> Result<(), PercolationError> {
        let n = self.n;
        if row == 0 || row > n {
            return Err(PercolationError::RowOutOfBounds { row, col, n });
        }
        if col == 0 || col > n {
            return Err(PercolationError::ColOutOfBounds { row, col, n });
        }
        Ok(())
    }

    /// Ids of the up to four grid-adjacent sites of 0-indexed `(r, c)`.
    fn neighbours(&self, r: usize, c: usize) -> ArrayVec<usize, 4> {
        let n = self.n;
        let mut out = ArrayVec::new();
        if r > 0 {
            out.push((r - 1) * n + c);
        }
        if r + 1 < n {
            out.push((r + 1) * n + c);
        }
        if c > 0 {
            out.push(r * n + c - 1);
        }
        if c + 1 < n {
            out.push(r * n + c + 1);
        }
        out
    }
}

/// Renders closed sites as `#`, open sites as `.` and full sites as `~`.
impl fmt::Display for Percolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.n {
            for c in 0..self.n {
                let site = r * self.n + c;
                let glyph = if !self.open[site] {
                    '#'
                } else if self.connectivity.connected(site, self.virtual_top) {
                    '~'
                } else {
                    '.'
                };
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
