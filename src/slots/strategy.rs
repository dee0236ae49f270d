use super::slot::Slot;

/// An unordered pair of two distinct slots, stored in sorted order so
/// that "A/B" and "B/A" are the same strategy. The strategy set of a run
/// is every such pair over the shared slot domain and never changes,
/// even as costs do.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Strategy(Slot, Slot);

impl Strategy {
    pub fn slots(&self) -> [&Slot; 2] {
        [&self.0, &self.1]
    }

    pub fn contains(&self, slot: &Slot) -> bool {
        self.0 == *slot || self.1 == *slot
    }

    /// slots chosen by both strategies
    pub fn overlap<'a>(&'a self, other: &Strategy) -> Vec<&'a Slot> {
        self.slots()
            .into_iter()
            .filter(|slot| other.contains(slot))
            .collect()
    }

    /// slots chosen by self but not by other
    pub fn solo<'a>(&'a self, other: &Strategy) -> Vec<&'a Slot> {
        self.slots()
            .into_iter()
            .filter(|slot| !other.contains(slot))
            .collect()
    }
}

impl From<(Slot, Slot)> for Strategy {
    fn from((a, b): (Slot, Slot)) -> Self {
        assert!(a != b);
        if a < b { Self(a, b) } else { Self(b, a) }
    }
}

/// "A/B" isomorphism
impl TryFrom<&str> for Strategy {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let (a, b) = s
            .split_once('/')
            .ok_or_else(|| anyhow::anyhow!("no / in strategy: {}", s))?;
        let a = Slot::from(a.trim());
        let b = Slot::from(b.trim());
        anyhow::ensure!(a != b, "strategy slots must be distinct: {}", s);
        Ok(Self::from((a, b)))
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.0, self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unordered() {
        let ab = Strategy::from((Slot::from("T1"), Slot::from("T2")));
        let ba = Strategy::from((Slot::from("T2"), Slot::from("T1")));
        assert!(ab == ba);
        assert!(ab.to_string() == "T1/T2");
    }

    #[test]
    fn bijective_str() {
        let strategy = Strategy::try_from("T2/T1").unwrap();
        assert!(strategy == Strategy::try_from(strategy.to_string().as_str()).unwrap());
    }

    #[test]
    fn rejects_missing_delimiter() {
        assert!(Strategy::try_from("T1T2").is_err());
    }

    #[test]
    fn rejects_duplicate_slots() {
        assert!(Strategy::try_from("T1/T1").is_err());
    }

    #[test]
    fn set_operations() {
        let s1 = Strategy::try_from("T1/T2").unwrap();
        let s2 = Strategy::try_from("T1/T3").unwrap();
        assert!(s1.contains(&Slot::from("T2")));
        assert!(!s1.contains(&Slot::from("T3")));
        assert!(s1.overlap(&s2) == vec![&Slot::from("T1")]);
        assert!(s1.solo(&s2) == vec![&Slot::from("T2")]);
        assert!(s2.solo(&s1) == vec![&Slot::from("T3")]);
        assert!(s1.overlap(&s1).len() == 2);
        assert!(s1.solo(&s1).is_empty());
    }
}
