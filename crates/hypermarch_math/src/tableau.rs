//! Gauss-Jordan tableau for small square linear systems
//!
//! A [`Tableau`] holds `L` equations in `L` unknowns, each with `R`
//! right-hand columns. Solving reduces the left-hand block to the identity,
//! leaving the solution(s) in the right-hand block.
//!
//! Before elimination the rows are put in an order where every diagonal
//! coefficient is structurally nonzero (see [`Tableau::from_rows`]). This is a
//! cheap pre-check that rejects systems which can never be solved. It does not
//! guarantee numerical conditioning, so elimination additionally pivots on the
//! largest remaining coefficient and reports [`SolveError::NumericSingularity`]
//! instead of dividing by (almost) zero. "Almost zero" is measured against the
//! column's own scale, so uniformly scaling an unknown never changes the
//! outcome.

use std::fmt;

/// Pivots smaller than this fraction of their column's largest original
/// coefficient are treated as zero
pub const PIVOT_EPSILON: f32 = 1e-6;

/// Error solving a linear system
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolveError {
    /// No row ordering puts a nonzero coefficient on every diagonal position
    StructuralSingularity,
    /// Elimination met a zero (or non-finite) pivot in the given column
    NumericSingularity {
        /// Column being eliminated when the pivot vanished
        column: usize,
        /// The offending pivot value
        pivot: f32,
    },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::StructuralSingularity => {
                write!(f, "Unsolvable system: no row order gives a nonzero diagonal")
            }
            SolveError::NumericSingularity { column, pivot } => {
                write!(f, "Singular system: pivot {} in column {}", pivot, column)
            }
        }
    }
}

impl std::error::Error for SolveError {}

/// One equation of a linear system
///
/// `lhs` holds the coefficients of the unknowns, `rhs` the right-hand values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Row<const L: usize, const R: usize> {
    pub lhs: [f32; L],
    pub rhs: [f32; R],
}

impl<const L: usize, const R: usize> Row<L, R> {
    /// Create a new row
    #[inline]
    pub fn new(lhs: [f32; L], rhs: [f32; R]) -> Self {
        Self { lhs, rhs }
    }

    /// Indices where the left-hand coefficient is nonzero
    pub fn valid_indices(&self) -> Vec<usize> {
        (0..L).filter(|&i| self.has_pivot(i)).collect()
    }

    /// True when this row can serve as the pivot row for `column`
    #[inline]
    pub fn has_pivot(&self, column: usize) -> bool {
        self.lhs[column] != 0.0
    }

    /// `self -= other * multiple`, across both sides
    #[inline]
    pub fn subtract_multiple(&mut self, other: &Self, multiple: f32) {
        for (a, b) in self.lhs.iter_mut().zip(other.lhs.iter()) {
            *a -= b * multiple;
        }
        for (a, b) in self.rhs.iter_mut().zip(other.rhs.iter()) {
            *a -= b * multiple;
        }
    }

    /// `self /= divisor`, across both sides
    #[inline]
    pub fn divide_by(&mut self, divisor: f32) {
        for a in self.lhs.iter_mut() {
            *a /= divisor;
        }
        for a in self.rhs.iter_mut() {
            *a /= divisor;
        }
    }
}

/// Square linear system awaiting Gauss-Jordan elimination
///
/// A tableau is built once, solved once and then dropped; [`Tableau::solve`]
/// consumes it.
#[derive(Clone, Debug)]
pub struct Tableau<const L: usize, const R: usize> {
    rows: [Row<L, R>; L],
}

impl<const L: usize, const R: usize> Tableau<L, R> {
    /// Build a tableau from its rows, reordering them for pivot safety
    ///
    /// Fails with [`SolveError::StructuralSingularity`] when no ordering of the
    /// rows has a nonzero coefficient on every diagonal position.
    pub fn from_rows(rows: [Row<L, R>; L]) -> Result<Self, SolveError> {
        let mut tableau = Self { rows };
        tableau.order_rows()?;
        Ok(tableau)
    }

    /// Build a tableau from `(lhs, rhs)` pairs
    pub fn from_arrays(input: [([f32; L], [f32; R]); L]) -> Result<Self, SolveError> {
        Self::from_rows(input.map(|(lhs, rhs)| Row::new(lhs, rhs)))
    }

    /// The rows in their current order
    pub fn rows(&self) -> &[Row<L, R>; L] {
        &self.rows
    }

    /// Run Gauss-Jordan elimination and return the solution
    pub fn solve(mut self) -> Result<Solution<L, R>, SolveError> {
        let scales = self.column_scales();
        self.gauss(&scales)?;
        self.jordan();

        Ok(Solution {
            rhs: self.rows.map(|row| row.rhs),
        })
    }

    /// Largest original coefficient magnitude in each column
    fn column_scales(&self) -> [f32; L] {
        std::array::from_fn(|i| self.rows.iter().map(|row| row.lhs[i].abs()).fold(0.0, f32::max))
    }

    /// Forward elimination: unit pivots, zeros below the diagonal
    ///
    /// Row operations keep every column in its own units, so comparing a
    /// pivot with its column's original scale is independent of that scale.
    fn gauss(&mut self, scales: &[f32; L]) -> Result<(), SolveError> {
        for i in 0..L {
            // Partial pivoting: strictly larger magnitudes win, so the
            // structural order is kept on ties
            let mut best = i;
            for r in (i + 1)..L {
                if self.rows[r].lhs[i].abs() > self.rows[best].lhs[i].abs() {
                    best = r;
                }
            }

            let pivot = self.rows[best].lhs[i];
            if pivot == 0.0 || !pivot.is_finite() || !(pivot.abs() >= PIVOT_EPSILON * scales[i]) {
                log::trace!("Numeric singularity in column {}:\n{}", i, self);
                return Err(SolveError::NumericSingularity { column: i, pivot });
            }

            self.rows.swap(i, best);
            self.rows[i].divide_by(pivot);

            let pivot_row = self.rows[i];
            for j in ((i + 1)..L).rev() {
                let multiple = self.rows[j].lhs[i];
                self.rows[j].subtract_multiple(&pivot_row, multiple);
            }
        }

        Ok(())
    }

    /// Back substitution: zeros above the diagonal
    fn jordan(&mut self) {
        for i in (0..L).rev() {
            let pivot_row = self.rows[i];
            for j in 0..i {
                let multiple = self.rows[j].lhs[i];
                self.rows[j].subtract_multiple(&pivot_row, multiple);
            }
        }
    }

    /// Reorder rows so that row `i` has a nonzero coefficient in column `i`
    ///
    /// Permutations are enumerated with Heap's algorithm starting from the
    /// identity, and the first admissible one is kept. Factorial in `L`, which
    /// is fine for the 4x4 systems this is used on.
    fn order_rows(&mut self) -> Result<(), SolveError> {
        let admits = |perm: &[usize; L]| (0..L).all(|i| self.rows[perm[i]].has_pivot(i));

        let mut perm: [usize; L] = std::array::from_fn(|i| i);
        let mut found = admits(&perm);

        let mut counters = [0usize; L];
        let mut i = 1;
        while !found && i < L {
            if counters[i] < i {
                let k = if i % 2 == 1 { counters[i] } else { 0 };
                perm.swap(i, k);
                counters[i] += 1;
                i = 1;
                found = admits(&perm);
            } else {
                counters[i] = 0;
                i += 1;
            }
        }

        if !found {
            log::debug!("No pivot-safe row order for tableau:\n{}", self);
            return Err(SolveError::StructuralSingularity);
        }

        let rows = self.rows;
        self.rows = std::array::from_fn(|i| rows[perm[i]]);
        Ok(())
    }
}

impl<const L: usize, const R: usize> fmt::Display for Tableau<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{:?} | {:?}", row.lhs, row.rhs)?;
        }
        Ok(())
    }
}

/// Right-hand block of a solved tableau
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Solution<const L: usize, const R: usize> {
    rhs: [[f32; R]; L],
}

impl<const L: usize, const R: usize> Solution<L, R> {
    /// Value of every unknown, taken from the first right-hand column
    ///
    /// A system without right-hand columns yields zeros.
    pub fn firsts(&self) -> [f32; L] {
        self.rhs.map(|row| row.first().copied().unwrap_or(0.0))
    }

    /// The full right-hand block, one row per unknown
    pub fn rhs(&self) -> &[[f32; R]; L] {
        &self.rhs
    }
}
