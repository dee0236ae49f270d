use super::sharing::Sharing;
use super::sharing::Side;
use crate::slots::ledger::Ledger;
use crate::slots::strategy::Strategy;
use crate::Utility;

/// The one-shot game for a round: a square grid of payoff pairs indexed
/// by (player 1 strategy, player 2 strategy), labeled by the strategies
/// themselves, rebuilt from the live ledgers every round. Cells are row
/// major and always finite.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    strategies: Vec<Strategy>,
    cells: Vec<(Utility, Utility)>,
}

impl Matrix {
    /// base payoff is each side's own stake on its own strategy; every
    /// contested slot then deducts the paying side's own cost there.
    pub fn build(
        strategies: &[Strategy],
        ledger1: &Ledger,
        ledger2: &Ledger,
        sharing: &mut Sharing,
    ) -> Self {
        let mut cells = Vec::with_capacity(strategies.len() * strategies.len());
        for s1 in strategies {
            for s2 in strategies {
                cells.push(Self::payoff(s1, s2, ledger1, ledger2, sharing));
            }
        }
        assert!(cells.iter().all(|(u1, u2)| u1.is_finite() && u2.is_finite()));
        Self {
            strategies: strategies.to_vec(),
            cells,
        }
    }

    fn payoff(
        s1: &Strategy,
        s2: &Strategy,
        ledger1: &Ledger,
        ledger2: &Ledger,
        sharing: &mut Sharing,
    ) -> (Utility, Utility) {
        let mut u1 = ledger1.stake(s1);
        let mut u2 = ledger2.stake(s2);
        for slot in s1.overlap(s2) {
            let c1 = ledger1.cost(slot);
            let c2 = ledger2.cost(slot);
            match sharing.payer(c1, c2) {
                Side::P1 => u1 -= c1,
                Side::P2 => u2 -= c2,
            }
        }
        (u1, u2)
    }

    pub fn n(&self) -> usize {
        self.strategies.len()
    }

    pub fn at(&self, i: usize, j: usize) -> (Utility, Utility) {
        self.cells[i * self.n() + j]
    }

    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    /// every cell flattened row major, for reporting and Pareto filtering
    pub fn outcomes(&self) -> Vec<(Utility, Utility)> {
        self.cells.clone()
    }
}

/// assemble from explicit row-major cells
impl From<(Vec<Strategy>, Vec<(Utility, Utility)>)> for Matrix {
    fn from((strategies, cells): (Vec<Strategy>, Vec<(Utility, Utility)>)) -> Self {
        assert!(cells.len() == strategies.len() * strategies.len());
        Self { strategies, cells }
    }
}

impl std::fmt::Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let n = self.n();
        let labels = self
            .strategies
            .iter()
            .map(|strategy| strategy.to_string())
            .collect::<Vec<String>>();
        let cells = self
            .cells
            .iter()
            .map(|(u1, u2)| format!("({}, {})", u1, u2))
            .collect::<Vec<String>>();
        let left = labels.iter().map(|label| label.len()).max().unwrap_or(1);
        let wide = (0..n)
            .map(|j| {
                (0..n)
                    .map(|i| cells[i * n + j].len())
                    .chain(std::iter::once(labels[j].len()))
                    .max()
                    .unwrap_or(1)
            })
            .collect::<Vec<usize>>();
        write!(f, "┌{}", "─".repeat(left + 2))?;
        for w in wide.iter() {
            write!(f, "┬{}", "─".repeat(w + 2))?;
        }
        writeln!(f, "┐")?;
        write!(f, "│ {:<left$} ", "")?;
        for (j, w) in wide.iter().enumerate() {
            write!(f, "│ {:^w$} ", labels[j], w = *w)?;
        }
        writeln!(f, "│")?;
        write!(f, "├{}", "─".repeat(left + 2))?;
        for w in wide.iter() {
            write!(f, "┼{}", "─".repeat(w + 2))?;
        }
        writeln!(f, "┤")?;
        for (i, label) in labels.iter().enumerate() {
            write!(f, "│ {:<left$} ", label)?;
            for (j, w) in wide.iter().enumerate() {
                write!(f, "│ {:>w$} ", cells[i * n + j], w = *w)?;
            }
            writeln!(f, "│")?;
        }
        write!(f, "└{}", "─".repeat(left + 2))?;
        for w in wide.iter() {
            write!(f, "┴{}", "─".repeat(w + 2))?;
        }
        writeln!(f, "┘")
    }
}

impl crate::Arbitrary for Matrix {
    fn random() -> Self {
        let ledger1 = Ledger::random();
        let ledger2 = Ledger::random();
        Self::build(
            &ledger1.strategies(),
            &ledger1,
            &ledger2,
            &mut Sharing::default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    fn ledgers() -> (Ledger, Ledger) {
        (
            Ledger::from([("T1", 1.), ("T2", 2.), ("T3", 3.)]),
            Ledger::from([("T1", 2.), ("T2", 3.), ("T3", 1.)]),
        )
    }

    #[test]
    fn cells_follow_the_sharing_rule() {
        let (ledger1, ledger2) = ledgers();
        let matrix = Matrix::build(
            &ledger1.strategies(),
            &ledger1,
            &ledger2,
            &mut Sharing::default(),
        );
        let p1 = [[0., 2., 1.], [3., 3., 4.], [3., 5., 3.]];
        let p2 = [[5., 3., 4.], [5., 2., 3.], [5., 2., 3.]];
        for i in 0..3 {
            for j in 0..3 {
                assert!(matrix.at(i, j) == (p1[i][j], p2[i][j]));
            }
        }
    }

    #[test]
    fn square_and_finite() {
        for _ in 0..32 {
            let matrix = Matrix::random();
            assert!(matrix.outcomes().len() == matrix.n() * matrix.n());
            assert!(matrix
                .outcomes()
                .iter()
                .all(|(u1, u2)| u1.is_finite() && u2.is_finite()));
        }
    }

    #[test]
    fn outcomes_are_row_major() {
        let (ledger1, ledger2) = ledgers();
        let matrix = Matrix::build(
            &ledger1.strategies(),
            &ledger1,
            &ledger2,
            &mut Sharing::default(),
        );
        let outcomes = matrix.outcomes();
        for i in 0..3 {
            for j in 0..3 {
                assert!(outcomes[i * 3 + j] == matrix.at(i, j));
            }
        }
    }

    #[test]
    fn weighted_builds_agree_for_a_seed() {
        let (ledger1, ledger2) = ledgers();
        let strategies = ledger1.strategies();
        let a = Matrix::build(&strategies, &ledger1, &ledger2, &mut Sharing::weighted(42));
        let b = Matrix::build(&strategies, &ledger1, &ledger2, &mut Sharing::weighted(42));
        assert!(a == b);
    }

    #[test]
    fn zero_costs_build_cleanly() {
        let ledger1 = Ledger::from([("T1", 0.), ("T2", 0.), ("T3", 0.)]);
        let ledger2 = ledger1.clone();
        let matrix = Matrix::build(
            &ledger1.strategies(),
            &ledger1,
            &ledger2,
            &mut Sharing::weighted(7),
        );
        assert!(matrix.outcomes().iter().all(|cell| *cell == (0., 0.)));
    }
}
