//! The generic addressing machinery instantiated once per namespace:
//! entity-to-entity traffic keyed by (realm, entity), host-to-host traffic
//! keyed by (realm, host node). The two share algorithms but no entries —
//! independent tables, port spaces, and default handlers.

use crate::{
    address::{Address, Endpoint, EntityId, HostNodeId},
    table::{PortRef, RoutingTable},
};

pub type EntityAddress = Address<EntityId>;
pub type EntityEndpoint = Endpoint<EntityId>;
pub type EntityRoutingTable = RoutingTable<EntityId>;
pub type EntityPortRef = PortRef<EntityId>;

pub type HostAddress = Address<HostNodeId>;
pub type HostEndpoint = Endpoint<HostNodeId>;
pub type HostRoutingTable = RoutingTable<HostNodeId>;
pub type HostPortRef = PortRef<HostNodeId>;
