use super::history::History;
use super::settlement::Settlement;
use crate::error::Error;
use crate::error::Result;
use crate::gameplay::matrix::Matrix;
use crate::gameplay::player::Player;
use crate::gameplay::sharing::Sharing;
use crate::nash::equilibrium::Equilibrium;
use crate::nash::frontier::Frontier;
use crate::nash::selector::Selector;
use crate::nash::selector::Welfare;
use crate::nash::solver::Enumerator;
use crate::slots::strategy::Strategy;
use crate::Utility;

/// The round loop. Each iteration rebuilds the payoff matrix from the
/// live ledgers, enumerates equilibria, selects one under the injected
/// policy, settles the ledgers, and appends the cumulative payoffs to
/// the history. All duel state lives here; nothing is shared between
/// duels.
///
/// Configuration problems surface from [Self::new] before any round
/// runs. A degenerate round aborts with [Error::Degenerate] carrying
/// the offending matrix and ledgers, and the rounds completed before it
/// stay readable through [Self::history].
pub struct Duel {
    p1: Player,
    p2: Player,
    strategies: Vec<Strategy>,
    sharing: Sharing,
    selector: Box<dyn Selector>,
    matrix: Matrix,
    history: History,
    round: usize,
}

impl Duel {
    /// both ledgers must cover the same slot domain, large enough to
    /// form at least one strategy. starts under the cheaper-pays rule
    /// and the welfare selection policy.
    pub fn new(p1: Player, p2: Player) -> Result<Self> {
        for slot in p1.ledger().slots() {
            if p2.ledger().get(slot).is_none() {
                return Err(Error::MissingSlot {
                    slot: slot.clone(),
                    player: p2.name().to_string(),
                });
            }
        }
        for slot in p2.ledger().slots() {
            if p1.ledger().get(slot).is_none() {
                return Err(Error::MissingSlot {
                    slot: slot.clone(),
                    player: p1.name().to_string(),
                });
            }
        }
        let count = p1.ledger().n();
        if count < 2 {
            return Err(Error::FewSlots { count });
        }
        let strategies = p1.ledger().strategies();
        let mut sharing = Sharing::default();
        let matrix = Matrix::build(&strategies, p1.ledger(), p2.ledger(), &mut sharing);
        Ok(Self {
            p1,
            p2,
            strategies,
            sharing,
            selector: Box::new(Welfare),
            matrix,
            history: History::default(),
            round: 0,
        })
    }

    /// swap the selection policy
    pub fn selector(mut self, selector: Box<dyn Selector>) -> Self {
        self.selector = selector;
        self
    }

    /// swap the cost-sharing rule and rebuild the current matrix under
    /// it, so the pre-play display shows the rule actually in force
    pub fn sharing(mut self, sharing: Sharing) -> Self {
        self.sharing = sharing;
        self.matrix = Matrix::build(
            &self.strategies,
            self.p1.ledger(),
            self.p2.ledger(),
            &mut self.sharing,
        );
        self
    }

    /// one full round. returns the cumulative payoffs after settlement.
    pub fn iterate(&mut self) -> Result<(Utility, Utility)> {
        self.round += 1;
        self.matrix = Matrix::build(
            &self.strategies,
            self.p1.ledger(),
            self.p2.ledger(),
            &mut self.sharing,
        );
        let equilibria = Enumerator::from(&self.matrix).solve();
        if equilibria.is_empty() {
            return Err(Error::Degenerate {
                round: self.round,
                matrix: self.matrix.clone(),
                p1: self.p1.ledger().clone(),
                p2: self.p2.ledger().clone(),
            });
        }
        let chosen = self.selector.select(&equilibria);
        log::debug!("round {} selected {}", self.round, chosen);
        let (u1, u2) = chosen.payoff();
        Settlement::from((self.p1.ledger_mut(), self.p2.ledger_mut(), chosen)).apply();
        self.p1.earn(u1);
        self.p2.earn(u2);
        let cumulative = (self.p1.winnings(), self.p2.winnings());
        self.history.push(cumulative);
        Ok(cumulative)
    }

    /// the bounded loop. rounds must be positive.
    pub fn play(&mut self, rounds: usize) -> Result<&History> {
        if rounds == 0 {
            return Err(Error::NoRounds);
        }
        log::info!("{:<32}{:<32}", "playing rounds", rounds);
        for _ in 0..rounds {
            self.iterate()?;
        }
        Ok(&self.history)
    }

    pub fn p1(&self) -> &Player {
        &self.p1
    }

    pub fn p2(&self) -> &Player {
        &self.p2
    }

    pub fn round(&self) -> usize {
        self.round
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// fresh enumeration of the current matrix
    pub fn equilibria(&self) -> Vec<Equilibrium> {
        Enumerator::from(&self.matrix).solve()
    }

    pub fn outcomes(&self) -> Vec<(Utility, Utility)> {
        self.matrix.outcomes()
    }

    pub fn frontier(&self) -> Frontier {
        Frontier::from(self.matrix.outcomes().as_slice())
    }

    /// player 1's best stake, the axis bound plots scale against
    pub fn ceiling(&self) -> Utility {
        self.p1.ledger().ceiling()
    }
}
