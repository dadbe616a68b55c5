use crate::address::{
    member::AddressMember, port_id::PortId, realm::RealmId, wildcard::Wildcard,
};

/// The non-port portion of an endpoint: which participant of which realm.
/// This is the key a routing table is indexed by, since a bound port is
/// never itself wildcarded.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct Address<M: AddressMember> {
    realm: RealmId,
    member: M,
}

impl<M: AddressMember> Address<M> {
    pub fn new(realm: RealmId, member: M) -> Self {
        Self { realm, member }
    }

    pub fn realm(&self) -> RealmId {
        self.realm
    }

    pub fn member(&self) -> M {
        self.member
    }

    pub fn with_port(&self, port: PortId) -> Endpoint<M> {
        Endpoint::new(self.realm, self.member, port)
    }
}

impl<M: AddressMember> Wildcard for Address<M> {
    fn null() -> Self {
        Self::new(RealmId::null(), M::null())
    }

    fn any() -> Self {
        Self::new(RealmId::any(), M::any())
    }

    fn matches(&self, other: &Self) -> bool {
        self.realm.matches(&other.realm) && self.member.matches(&other.member)
    }
}

impl<M: AddressMember> std::fmt::Display for Address<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.realm, self.member)
    }
}

/// One communication endpoint: an immutable (realm, member, port) triple.
///
/// Endpoints are totally ordered (lexicographic on realm, then member, then
/// port) so they can key both ordered and hashed containers.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct Endpoint<M: AddressMember> {
    realm: RealmId,
    member: M,
    port: PortId,
}

impl<M: AddressMember> Endpoint<M> {
    pub fn new(realm: RealmId, member: M, port: PortId) -> Self {
        Self {
            realm,
            member,
            port,
        }
    }

    pub fn realm(&self) -> RealmId {
        self.realm
    }

    pub fn member(&self) -> M {
        self.member
    }

    pub fn port(&self) -> PortId {
        self.port
    }

    pub fn address(&self) -> Address<M> {
        Address::new(self.realm, self.member)
    }
}

impl<M: AddressMember> Wildcard for Endpoint<M> {
    fn null() -> Self {
        Self::new(RealmId::null(), M::null(), PortId::null())
    }

    fn any() -> Self {
        Self::new(RealmId::any(), M::any(), PortId::any())
    }

    /// Componentwise: all three components must individually match.
    fn matches(&self, other: &Self) -> bool {
        self.realm.matches(&other.realm)
            && self.member.matches(&other.member)
            && self.port.matches(&other.port)
    }
}

impl<M: AddressMember> std::fmt::Display for Endpoint<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.realm, self.member, self.port)
    }
}
