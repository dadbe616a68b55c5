use crate::address::{member::AddressMember, wildcard::Wildcard};

/// Identifies a simulation-hosting process inside a realm, distinct from the
/// entities it hosts.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct HostNodeId(u64);

impl HostNodeId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl Wildcard for HostNodeId {
    fn null() -> Self {
        Self(0)
    }

    fn any() -> Self {
        Self(u64::MAX)
    }
}

impl AddressMember for HostNodeId {}

impl std::fmt::Display for HostNodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if *self == Self::any() {
            write!(f, "*")
        } else {
            write!(f, "{}", self.0)
        }
    }
}
