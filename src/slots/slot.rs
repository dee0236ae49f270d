/// An atomic slot a player can allocate effort to. The slot domain is
/// fixed at setup and shared by both ledgers; ordering is lexicographic
/// on the name and decides the canonical form of a Strategy.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Slot(String);

impl Slot {
    pub fn name(&self) -> &str {
        &self.0
    }
}

/// str isomorphism
impl From<&str> for Slot {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}
impl From<String> for Slot {
    fn from(name: String) -> Self {
        Self(name)
    }
}
impl From<Slot> for String {
    fn from(slot: Slot) -> Self {
        slot.0
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_str() {
        let slot = Slot::from("T2");
        assert!(slot == Slot::from(String::from(slot.clone())));
    }

    #[test]
    fn lexicographic_order() {
        assert!(Slot::from("T1") < Slot::from("T2"));
        assert!(Slot::from("T2") < Slot::from("T3"));
    }
}
