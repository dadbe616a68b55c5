mod endpoint;
mod entity;
mod host_node;
mod member;
mod port_id;
mod realm;
mod wildcard;

pub use endpoint::{Address, Endpoint};
pub use entity::EntityId;
pub use host_node::HostNodeId;
pub use member::AddressMember;
pub use port_id::{PortId, PortRange, PORT_RESERVED_MAX, PORT_SYSTEM_MAX};
pub use realm::RealmId;
pub use wildcard::Wildcard;
