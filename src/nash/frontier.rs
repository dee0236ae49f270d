use crate::Utility;

/// The Pareto-optimal subset of a round's raw outcomes: everything not
/// weakly dominated in both coordinates and strictly in at least one.
/// Input order and duplicates are preserved. Computed on demand for
/// reporting; never on the per-round path.
#[derive(Debug, Clone, PartialEq)]
pub struct Frontier(Vec<(Utility, Utility)>);

impl From<&[(Utility, Utility)]> for Frontier {
    fn from(outcomes: &[(Utility, Utility)]) -> Self {
        Self(
            outcomes
                .iter()
                .filter(|a| !outcomes.iter().any(|b| Self::dominates(b, a)))
                .copied()
                .collect(),
        )
    }
}

impl Frontier {
    fn dominates(b: &(Utility, Utility), a: &(Utility, Utility)) -> bool {
        b.0 >= a.0 && b.1 >= a.1 && (b.0 > a.0 || b.1 > a.1)
    }

    pub fn outcomes(&self) -> &[(Utility, Utility)] {
        &self.0
    }

    pub fn contains(&self, outcome: &(Utility, Utility)) -> bool {
        self.0.contains(outcome)
    }

    pub fn n(&self) -> usize {
        self.0.len()
    }
}
