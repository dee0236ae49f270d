use super::equilibrium::Equilibrium;

/// Picks one equilibrium out of a non-empty enumeration. Injected into
/// the driver so tie-break rules swap without touching the round loop.
/// Policies are total and deterministic over a fixed input sequence;
/// calling one with an empty slice is a contract violation, and the
/// driver checks the enumerator's output before selecting.
pub trait Selector {
    fn select<'a>(&self, equilibria: &'a [Equilibrium]) -> &'a Equilibrium;
}

/// the earliest equilibrium in enumeration order
#[derive(Debug, Default, Clone, Copy)]
pub struct First;

/// the latest equilibrium in enumeration order
#[derive(Debug, Default, Clone, Copy)]
pub struct Last;

/// the maximal payoff sum, remaining ties breaking toward enumeration
/// order. this is the canonical policy.
#[derive(Debug, Default, Clone, Copy)]
pub struct Welfare;

impl Selector for First {
    fn select<'a>(&self, equilibria: &'a [Equilibrium]) -> &'a Equilibrium {
        assert!(!equilibria.is_empty());
        &equilibria[0]
    }
}

impl Selector for Last {
    fn select<'a>(&self, equilibria: &'a [Equilibrium]) -> &'a Equilibrium {
        assert!(!equilibria.is_empty());
        &equilibria[equilibria.len() - 1]
    }
}

impl Selector for Welfare {
    fn select<'a>(&self, equilibria: &'a [Equilibrium]) -> &'a Equilibrium {
        assert!(!equilibria.is_empty());
        equilibria.iter().skip(1).fold(&equilibria[0], |best, next| {
            if next.welfare() > best.welfare() {
                next
            } else {
                best
            }
        })
    }
}

/// cli spelling isomorphism
impl TryFrom<&str> for Box<dyn Selector> {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "first" => Ok(Box::new(First)),
            "last" => Ok(Box::new(Last)),
            "welfare" => Ok(Box::new(Welfare)),
            policy => Err(anyhow::anyhow!("unknown selection policy: {}", policy)),
        }
    }
}
