use crate::gameplay::matrix::Matrix;
use crate::slots::ledger::Ledger;
use crate::slots::slot::Slot;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can abort a duel. Configuration errors are rejected
/// before the first round; a degenerate round aborts the play loop but
/// leaves the history accumulated so far readable.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("slot {slot} missing from {player}'s ledger")]
    MissingSlot { slot: Slot, player: String },

    #[error("need at least two slots to form a strategy, got {count}")]
    FewSlots { count: usize },

    #[error("cannot play zero rounds")]
    NoRounds,

    #[error("no equilibrium found in round {round}")]
    Degenerate {
        round: usize,
        matrix: Matrix,
        p1: Ledger,
        p2: Ledger,
    },
}

impl Error {
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::Degenerate { .. })
    }

    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::MissingSlot { .. } | Self::FewSlots { .. } | Self::NoRounds
        )
    }
}
