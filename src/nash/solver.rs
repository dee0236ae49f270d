use super::equilibrium::Equilibrium;
use super::support::Supports;
use crate::gameplay::matrix::Matrix;
use crate::Probability;
use crate::SUPPORT_TOLERANCE;
use nalgebra::DMatrix;
use nalgebra::DVector;

/// Support enumeration over the bimatrix. For every candidate support
/// pair it solves the indifference conditions, keeps weight vectors
/// that are valid distributions obeying their support, and keeps pairs
/// that are mutual best responses. Exponential in support size, which
/// is fine at the fixed handful of strategies a slot domain yields.
///
/// `rows` holds player 1's payoffs and `cols` player 2's transposed, so
/// both sides solve against a grid whose rows are the opponent-facing
/// strategies.
pub struct Enumerator<'a> {
    matrix: &'a Matrix,
    rows: DMatrix<Probability>,
    cols: DMatrix<Probability>,
}

impl<'a> From<&'a Matrix> for Enumerator<'a> {
    fn from(matrix: &'a Matrix) -> Self {
        let n = matrix.n();
        let rows = DMatrix::from_fn(n, n, |i, j| matrix.at(i, j).0 as Probability);
        let cols = DMatrix::from_fn(n, n, |i, j| matrix.at(i, j).1 as Probability).transpose();
        Self { matrix, rows, cols }
    }
}

impl Enumerator<'_> {
    /// every equilibrium, in support-enumeration order: player 1
    /// supports outermost, sizes ascending, lexicographic within size.
    pub fn solve(&self) -> Vec<Equilibrium> {
        let n = self.matrix.n();
        let mut count = 0;
        let mut found = Vec::new();
        for support1 in Supports::from(n) {
            for support2 in Supports::from(n) {
                if let Some((x, y)) = self.indifferent(&support1, &support2) {
                    if self.responsive(&x, &y, &support1, &support2) {
                        count += 1;
                        match self.locate(&x, &y) {
                            Some(equilibrium) => found.push(equilibrium),
                            None => log::warn!("dropping equilibrium with unresolved weights"),
                        }
                    }
                }
            }
        }
        if count > 0 && count % 2 == 0 {
            log::warn!("{} equilibria found, an even count suggests a degenerate game", count);
        }
        found
    }

    /// weight vectors satisfying indifference on the given supports, or
    /// None when either system is unsolvable or either vector strays
    /// from its support.
    fn indifferent(
        &self,
        support1: &[usize],
        support2: &[usize],
    ) -> Option<(DVector<Probability>, DVector<Probability>)> {
        let x = Self::indifference(&self.cols, support2, support1)?;
        let y = Self::indifference(&self.rows, support1, support2)?;
        if Self::obeys(&x, support1) && Self::obeys(&y, support2) {
            Some((x, y))
        } else {
            None
        }
    }

    /// solve for weights over `grid`'s columns equalizing the payoffs
    /// of the `rows` support: consecutive row differences are pinned to
    /// zero, excluded columns to zero weight, and the total to one.
    /// Unequal support sizes make the system non-square and, like any
    /// singular system, yield no candidate.
    fn indifference(
        grid: &DMatrix<Probability>,
        rows: &[usize],
        columns: &[usize],
    ) -> Option<DVector<Probability>> {
        let n = grid.ncols();
        let excluded = (0..n).filter(|j| !columns.contains(j)).collect::<Vec<usize>>();
        let m = rows.len() - 1 + excluded.len() + 1;
        if m != n {
            return None;
        }
        let mut system = DMatrix::<Probability>::zeros(m, n);
        let mut row = 0;
        for pair in rows.windows(2) {
            for j in 0..n {
                system[(row, j)] = grid[(pair[1], j)] - grid[(pair[0], j)];
            }
            row += 1;
        }
        for &j in &excluded {
            system[(row, j)] = 1.0;
            row += 1;
        }
        for j in 0..n {
            system[(row, j)] = 1.0;
        }
        let mut b = DVector::<Probability>::zeros(m);
        b[m - 1] = 1.0;
        let weights = system.lu().solve(&b)?;
        if weights.iter().all(|&weight| weight >= 0.) {
            Some(weights)
        } else {
            None
        }
    }

    /// in-support weights must clear the tolerance, out-of-support
    /// weights must not.
    fn obeys(weights: &DVector<Probability>, support: &[usize]) -> bool {
        weights.iter().enumerate().all(|(i, &weight)| {
            if support.contains(&i) {
                weight > SUPPORT_TOLERANCE
            } else {
                weight <= SUPPORT_TOLERANCE
            }
        })
    }

    /// mutual best response: against the opponent's weights, the best
    /// pure payoff inside the support must equal the best overall.
    fn responsive(
        &self,
        x: &DVector<Probability>,
        y: &DVector<Probability>,
        support1: &[usize],
        support2: &[usize],
    ) -> bool {
        let row_payoffs = &self.rows * y;
        let col_payoffs = &self.cols * x;
        let row_best = Self::maximum(row_payoffs.iter().copied());
        let col_best = Self::maximum(col_payoffs.iter().copied());
        let row_supported = Self::maximum(support1.iter().map(|&i| row_payoffs[i]));
        let col_supported = Self::maximum(support2.iter().map(|&j| col_payoffs[j]));
        row_best == row_supported && col_best == col_supported
    }

    /// map weight vectors back to the pure cell at their first maximal
    /// indices. A vector with no resolvable maximum loses its cell and
    /// the candidate is dropped upstream.
    fn locate(&self, x: &DVector<Probability>, y: &DVector<Probability>) -> Option<Equilibrium> {
        let i = Self::argmax(x)?;
        let j = Self::argmax(y)?;
        Some(Equilibrium::from((
            self.matrix.at(i, j),
            (
                self.matrix.strategies()[i].clone(),
                self.matrix.strategies()[j].clone(),
            ),
            (
                x.iter().copied().collect::<Vec<Probability>>(),
                y.iter().copied().collect::<Vec<Probability>>(),
            ),
        )))
    }

    fn maximum(payoffs: impl Iterator<Item = Probability>) -> Probability {
        payoffs.fold(Probability::NEG_INFINITY, Probability::max)
    }

    /// first index attaining the maximum, None when nothing does
    fn argmax(weights: &DVector<Probability>) -> Option<usize> {
        let best = Self::maximum(weights.iter().copied());
        weights.iter().position(|&weight| weight == best)
    }
}
