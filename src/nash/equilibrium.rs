use crate::slots::strategy::Strategy;
use crate::Probability;
use crate::Utility;

/// One enumerated equilibrium: the mixed weights that survived the
/// indifference and best-response checks, and the pure cell they map
/// back to (the first maximal index of each weight vector). Immutable
/// once built; the selected one is consumed by the settlement and then
/// discarded with the round.
#[derive(Debug, Clone, PartialEq)]
pub struct Equilibrium {
    payoff: (Utility, Utility),
    choices: (Strategy, Strategy),
    weights: (Vec<Probability>, Vec<Probability>),
}

impl Equilibrium {
    pub fn payoff(&self) -> (Utility, Utility) {
        self.payoff
    }

    pub fn choices(&self) -> (&Strategy, &Strategy) {
        (&self.choices.0, &self.choices.1)
    }

    pub fn weights(&self) -> (&[Probability], &[Probability]) {
        (&self.weights.0, &self.weights.1)
    }

    /// the pair sum the canonical selection policy maximizes
    pub fn welfare(&self) -> Utility {
        self.payoff.0 + self.payoff.1
    }
}

type Parts = (
    (Utility, Utility),
    (Strategy, Strategy),
    (Vec<Probability>, Vec<Probability>),
);

impl From<Parts> for Equilibrium {
    fn from((payoff, choices, weights): Parts) -> Self {
        Self {
            payoff,
            choices,
            weights,
        }
    }
}

impl std::fmt::Display for Equilibrium {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} vs {} pays ({}, {})",
            self.choices.0, self.choices.1, self.payoff.0, self.payoff.1
        )
    }
}
