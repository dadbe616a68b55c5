//! # Meridian Routing
//! The addressing and message-dispatch layer shared between meridian's entity
//! and host-node namespaces. Every participant is addressed by a
//! (realm, member, port) endpoint; a routing table binds ports within an
//! address and dispatches inbound messages to the most specific
//! source-filtered handler registered on the bound port.
//!
//! This layer does not guarantee delivery, ordering, or retransmission, and
//! performs no network I/O itself — on-wire transmission is delegated to a
//! send backend injected at port construction.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod address;
mod dispatch_port;
mod namespaces;
mod port;
mod table;

pub use address::{
    Address, AddressMember, Endpoint, EntityId, HostNodeId, PortId, PortRange, RealmId, Wildcard,
    PORT_RESERVED_MAX, PORT_SYSTEM_MAX,
};
pub use dispatch_port::DispatchPort;
pub use namespaces::{
    EntityAddress, EntityEndpoint, EntityPortRef, EntityRoutingTable, HostAddress, HostEndpoint,
    HostPortRef, HostRoutingTable,
};
pub use port::{MessageHandler, Port, SendBackend};
pub use table::{BindError, PortFactory, PortRef, RoutingTable};
