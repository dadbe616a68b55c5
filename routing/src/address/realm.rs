use crate::address::wildcard::Wildcard;

/// Identifies an independently simulated universe instance. Addresses are
/// scoped to a realm; member identifiers have no meaning across realms.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct RealmId(u64);

impl RealmId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl Wildcard for RealmId {
    fn null() -> Self {
        Self(0)
    }

    fn any() -> Self {
        Self(u64::MAX)
    }
}

impl std::fmt::Display for RealmId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if *self == Self::any() {
            write!(f, "*")
        } else {
            write!(f, "{}", self.0)
        }
    }
}
