use crate::slots::ledger::Ledger;
use crate::Utility;

/// One side of the duel: a name, a cost ledger, and the running payoff
/// total. Owned by the driver and mutated in place across rounds; the
/// ledger is written only by the settlement and read only by the matrix
/// builder, which is why the mutators are crate-internal.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    ledger: Ledger,
    winnings: Utility,
}

impl Player {
    pub fn new(name: &str, ledger: Ledger) -> Self {
        Self {
            name: name.to_string(),
            ledger,
            winnings: 0.,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn winnings(&self) -> Utility {
        self.winnings
    }

    pub(crate) fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }

    pub(crate) fn earn(&mut self, payoff: Utility) {
        self.winnings += payoff;
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<10} {:>8}  {}", self.name, self.winnings, self.ledger)
    }
}
