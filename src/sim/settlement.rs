use crate::nash::equilibrium::Equilibrium;
use crate::slots::ledger::Ledger;
use crate::slots::strategy::Strategy;
use crate::CONTEST_SHIFT;
use crate::UNCONTESTED_DECAY;

/// The post-round ledger rewrite, and the only writer of ledgers once
/// play begins. Contested slots shift one unit of cost from the cheaper
/// side to the costlier side; ties move nothing. Slots only one side
/// chose decay by one unit. Every decrement floors at zero.
pub struct Settlement<'a> {
    ledger1: &'a mut Ledger,
    ledger2: &'a mut Ledger,
    s1: Strategy,
    s2: Strategy,
}

impl<'a> From<(&'a mut Ledger, &'a mut Ledger, &Equilibrium)> for Settlement<'a> {
    fn from((ledger1, ledger2, equilibrium): (&'a mut Ledger, &'a mut Ledger, &Equilibrium)) -> Self {
        let (s1, s2) = equilibrium.choices();
        Self {
            ledger1,
            ledger2,
            s1: s1.clone(),
            s2: s2.clone(),
        }
    }
}

impl Settlement<'_> {
    pub fn apply(mut self) {
        self.contested();
        self.uncontested();
    }

    /// the strictly costlier side gains leverage at a contested slot
    fn contested(&mut self) {
        for slot in self.s1.overlap(&self.s2) {
            let c1 = self.ledger1.cost(slot);
            let c2 = self.ledger2.cost(slot);
            if c1 > c2 {
                self.ledger1.raise(slot, CONTEST_SHIFT);
                self.ledger2.lower(slot, CONTEST_SHIFT);
            } else if c2 > c1 {
                self.ledger2.raise(slot, CONTEST_SHIFT);
                self.ledger1.lower(slot, CONTEST_SHIFT);
            }
        }
    }

    fn uncontested(&mut self) {
        for slot in self.s1.solo(&self.s2) {
            self.ledger1.lower(slot, UNCONTESTED_DECAY);
        }
        for slot in self.s2.solo(&self.s1) {
            self.ledger2.lower(slot, UNCONTESTED_DECAY);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn equilibrium(s1: &str, s2: &str) -> Equilibrium {
        Equilibrium::from((
            (0., 0.),
            (
                Strategy::try_from(s1).unwrap(),
                Strategy::try_from(s2).unwrap(),
            ),
            (vec![], vec![]),
        ))
    }

    #[test]
    fn contested_slots_shift_toward_the_costlier_side() {
        let mut ledger1 = Ledger::from([("T1", 1.), ("T2", 2.), ("T3", 3.)]);
        let mut ledger2 = Ledger::from([("T1", 2.), ("T2", 3.), ("T3", 1.)]);
        let chosen = equilibrium("T1/T3", "T1/T2");
        Settlement::from((&mut ledger1, &mut ledger2, &chosen)).apply();
        assert!(ledger1 == Ledger::from([("T1", 0.), ("T2", 2.), ("T3", 2.)]));
        assert!(ledger2 == Ledger::from([("T1", 3.), ("T2", 2.), ("T3", 1.)]));
    }

    #[test]
    fn ties_move_nothing() {
        let mut ledger1 = Ledger::from([("T1", 2.), ("T2", 5.), ("T3", 0.)]);
        let mut ledger2 = Ledger::from([("T1", 2.), ("T2", 1.), ("T3", 4.)]);
        let chosen = equilibrium("T1/T2", "T1/T2");
        Settlement::from((&mut ledger1, &mut ledger2, &chosen)).apply();
        assert!(ledger1.cost(&"T1".into()) == 2.);
        assert!(ledger2.cost(&"T1".into()) == 2.);
        assert!(ledger1.cost(&"T2".into()) == 6.);
        assert!(ledger2.cost(&"T2".into()) == 0.);
    }

    #[test]
    fn decay_floors_at_zero() {
        let mut ledger1 = Ledger::from([("T1", 1.), ("T2", 0.), ("T3", 0.)]);
        let mut ledger2 = Ledger::from([("T1", 1.), ("T2", 0.), ("T3", 0.)]);
        let chosen = equilibrium("T1/T2", "T1/T3");
        Settlement::from((&mut ledger1, &mut ledger2, &chosen)).apply();
        assert!(ledger1.cost(&"T2".into()) == 0.);
        assert!(ledger2.cost(&"T3".into()) == 0.);
    }

    #[test]
    fn untouched_slots_keep_their_costs() {
        let mut ledger1 = Ledger::from([("T1", 1.), ("T2", 2.), ("T3", 3.)]);
        let mut ledger2 = Ledger::from([("T1", 4.), ("T2", 5.), ("T3", 6.)]);
        let chosen = equilibrium("T1/T2", "T1/T2");
        Settlement::from((&mut ledger1, &mut ledger2, &chosen)).apply();
        assert!(ledger1.cost(&"T3".into()) == 3.);
        assert!(ledger2.cost(&"T3".into()) == 6.);
    }
}
