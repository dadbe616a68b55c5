use std::{fmt::Debug, fmt::Display, hash::Hash};

use crate::address::wildcard::Wildcard;

/// Capability set required of the member slot of an address: the identifier
/// of an addressable participant within a realm.
///
/// Both [`EntityId`](crate::EntityId) and [`HostNodeId`](crate::HostNodeId)
/// satisfy this, so the endpoint, dispatch, and routing-table machinery is
/// written once and instantiated for each namespace.
pub trait AddressMember: Wildcard + Copy + Eq + Ord + Hash + Debug + Display + 'static {}
