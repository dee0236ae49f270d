use super::duel::Duel;
use crate::Utility;
use serde::Deserialize;
use serde::Serialize;

/// Read-only snapshot of a duel for plotting and export: the cumulative
/// trajectory, every cell of the current matrix, its Pareto frontier,
/// the payoffs of the current equilibria, and the axis bound. Taking
/// one never mutates the duel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub history: Vec<(Utility, Utility)>,
    pub all_outcomes: Vec<(Utility, Utility)>,
    pub pareto_outcomes: Vec<(Utility, Utility)>,
    pub nash_outcomes: Vec<(Utility, Utility)>,
    pub max_payoff: Utility,
}

impl From<&Duel> for Report {
    fn from(duel: &Duel) -> Self {
        Self {
            history: duel.history().series().to_vec(),
            all_outcomes: duel.outcomes(),
            pareto_outcomes: duel.frontier().outcomes().to_vec(),
            nash_outcomes: duel.equilibria().iter().map(|e| e.payoff()).collect(),
            max_payoff: duel.ceiling(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::player::Player;
    use crate::slots::ledger::Ledger;

    fn demo() -> Duel {
        let p1 = Player::new("alice", Ledger::from([("T1", 1.), ("T2", 2.), ("T3", 3.)]));
        let p2 = Player::new("bob", Ledger::from([("T1", 2.), ("T2", 3.), ("T3", 1.)]));
        Duel::new(p1, p2).unwrap()
    }

    #[test]
    fn snapshots_the_current_game() {
        let report = Report::from(&demo());
        assert!(report.history.is_empty());
        assert!(report.all_outcomes.len() == 9);
        assert!(report.pareto_outcomes == [(3., 5.), (4., 3.), (3., 5.), (5., 2.)]);
        assert!(report.nash_outcomes == [(3., 5.), (3., 5.)]);
        assert!(report.max_payoff == 5.);
    }

    #[test]
    fn survives_serialization() {
        let mut duel = demo();
        duel.play(3).unwrap();
        let report = Report::from(&duel);
        let json = serde_json::to_string(&report).unwrap();
        let back: Report = serde_json::from_str(&json).unwrap();
        assert!(back == report);
    }
}
