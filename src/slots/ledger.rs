use super::slot::Slot;
use super::strategy::Strategy;
use crate::Cost;
use std::collections::BTreeMap;

/// A player's per-slot cost table. Costs start wherever the setup puts
/// them and evolve each round under the redistribution rule, which is
/// the only writer once play begins; every write floors at zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger(BTreeMap<Slot, Cost>);

impl Ledger {
    pub fn get(&self, slot: &Slot) -> Option<Cost> {
        self.0.get(slot).copied()
    }

    /// cost lookup where absence is a wiring bug, not a recoverable state
    pub fn cost(&self, slot: &Slot) -> Cost {
        match self.0.get(slot) {
            Some(cost) => *cost,
            None => panic!("no cost for slot {}", slot),
        }
    }

    /// the player's own spend across a strategy's two slots
    pub fn stake(&self, strategy: &Strategy) -> Cost {
        strategy.slots().iter().map(|slot| self.cost(slot)).sum()
    }

    pub fn raise(&mut self, slot: &Slot, by: Cost) {
        match self.0.get_mut(slot) {
            Some(cost) => *cost += by,
            None => panic!("no cost for slot {}", slot),
        }
    }

    /// lower, floored at zero
    pub fn lower(&mut self, slot: &Slot, by: Cost) {
        match self.0.get_mut(slot) {
            Some(cost) => *cost = Cost::max(0., *cost - by),
            None => panic!("no cost for slot {}", slot),
        }
    }

    pub fn slots(&self) -> impl Iterator<Item = &Slot> {
        self.0.keys()
    }

    pub fn n(&self) -> usize {
        self.0.len()
    }

    /// every unordered slot pair, in lexicographic order. this is the
    /// fixed strategy set of a run built over this ledger's domain.
    pub fn strategies(&self) -> Vec<Strategy> {
        let slots = self.0.keys().collect::<Vec<_>>();
        let mut strategies = Vec::new();
        for i in 0..slots.len() {
            for j in (i + 1)..slots.len() {
                strategies.push(Strategy::from((slots[i].clone(), slots[j].clone())));
            }
        }
        strategies
    }

    /// the best stake any single strategy can claim. plotting axes are
    /// scaled against this bound.
    pub fn ceiling(&self) -> Cost {
        self.strategies()
            .iter()
            .map(|strategy| self.stake(strategy))
            .fold(0., Cost::max)
    }
}

impl<'a, const N: usize> From<[(&'a str, Cost); N]> for Ledger {
    fn from(costs: [(&'a str, Cost); N]) -> Self {
        costs
            .into_iter()
            .map(|(slot, cost)| (Slot::from(slot), cost))
            .collect()
    }
}

impl FromIterator<(Slot, Cost)> for Ledger {
    fn from_iter<T: IntoIterator<Item = (Slot, Cost)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl std::fmt::Display for Ledger {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .iter()
                .map(|(slot, cost)| format!("{} {}", slot, cost))
                .collect::<Vec<String>>()
                .join("  ")
        )
    }
}

impl crate::Arbitrary for Ledger {
    fn random() -> Self {
        use rand::Rng;
        let mut rng = rand::rng();
        ["T1", "T2", "T3"]
            .into_iter()
            .map(|slot| (Slot::from(slot), rng.random_range(0..=5) as Cost))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    fn ledger() -> Ledger {
        Ledger::from([("T1", 1.), ("T2", 2.), ("T3", 3.)])
    }

    #[test]
    fn stakes_sum_own_costs() {
        let ledger = ledger();
        assert!(ledger.stake(&Strategy::try_from("T1/T2").unwrap()) == 3.);
        assert!(ledger.stake(&Strategy::try_from("T1/T3").unwrap()) == 4.);
        assert!(ledger.stake(&Strategy::try_from("T2/T3").unwrap()) == 5.);
    }

    #[test]
    fn strategies_are_lexicographic() {
        let strategies = ledger().strategies();
        assert!(strategies.len() == 3);
        assert!(strategies[0] == Strategy::try_from("T1/T2").unwrap());
        assert!(strategies[1] == Strategy::try_from("T1/T3").unwrap());
        assert!(strategies[2] == Strategy::try_from("T2/T3").unwrap());
    }

    #[test]
    fn lower_floors_at_zero() {
        let mut ledger = ledger();
        let slot = Slot::from("T1");
        ledger.lower(&slot, 5.);
        assert!(ledger.cost(&slot) == 0.);
    }

    #[test]
    fn raise_is_unbounded() {
        let mut ledger = ledger();
        let slot = Slot::from("T3");
        ledger.raise(&slot, 2.);
        assert!(ledger.cost(&slot) == 5.);
    }

    #[test]
    fn ceiling_is_best_stake() {
        assert!(ledger().ceiling() == 5.);
    }

    #[test]
    fn lower_never_goes_negative() {
        for _ in 0..100 {
            let mut ledger = Ledger::random();
            let slots = ledger.slots().cloned().collect::<Vec<_>>();
            for slot in &slots {
                ledger.lower(slot, 1.);
            }
            assert!(slots.iter().all(|slot| ledger.cost(slot) >= 0.));
        }
    }

    #[test]
    #[should_panic]
    fn missing_slot_is_fatal() {
        ledger().cost(&Slot::from("T9"));
    }
}
