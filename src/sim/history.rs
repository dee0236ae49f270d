use crate::Utility;

/// Append-only record of cumulative payoffs, one entry per completed
/// round. Rounds that fail before settlement append nothing, so the
/// record always reflects exactly the rounds that finished.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History(Vec<(Utility, Utility)>);

impl History {
    pub(crate) fn push(&mut self, cumulative: (Utility, Utility)) {
        self.0.push(cumulative);
    }

    pub fn last(&self) -> Option<(Utility, Utility)> {
        self.0.last().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn series(&self) -> &[(Utility, Utility)] {
        &self.0
    }
}

impl std::fmt::Display for History {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (round, (u1, u2)) in self.0.iter().enumerate() {
            writeln!(f, "{:>4} {:>10} {:>10}", round + 1, u1, u2)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_in_order() {
        let mut history = History::default();
        assert!(history.is_empty());
        assert!(history.last().is_none());
        history.push((3., 5.));
        history.push((5., 10.));
        assert!(history.len() == 2);
        assert!(history.last() == Some((5., 10.)));
        assert!(history.series() == [(3., 5.), (5., 10.)]);
    }
}
