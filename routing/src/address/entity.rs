use crate::address::{member::AddressMember, wildcard::Wildcard};

/// Identifies a simulated entity inside a realm.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct EntityId(u64);

impl EntityId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl Wildcard for EntityId {
    fn null() -> Self {
        Self(0)
    }

    fn any() -> Self {
        Self(u64::MAX)
    }
}

impl AddressMember for EntityId {}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if *self == Self::any() {
            write!(f, "*")
        } else {
            write!(f, "{}", self.0)
        }
    }
}
