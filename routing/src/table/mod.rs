use std::{
    cell::RefCell,
    collections::BTreeMap,
    rc::{Rc, Weak},
};

use log::{error, trace};

use crate::{
    address::{Address, AddressMember, Endpoint, PortId, PortRange, Wildcard},
    dispatch_port::DispatchPort,
    port::MessageHandler,
};

pub mod error;
pub use error::BindError;

/// Shared handle to a bound port. The routing table returns this from `bind`
/// and keeps only a weak tracking reference itself — the caller owns the
/// port's lifetime.
pub type PortRef<M> = Rc<RefCell<DispatchPort<M>>>;

/// Injected at table construction; invoked by `bind` to produce the port for
/// a requested (address, port) slot. Returning `None` declines the bind, in
/// which case the table records nothing — a factory must never partially
/// register a port.
pub type PortFactory<M> = Box<dyn Fn(&RoutingTable<M>, &Address<M>, PortId) -> Option<PortRef<M>>>;

type EngineMap<M> = BTreeMap<Address<M>, BTreeMap<PortId, Weak<RefCell<DispatchPort<M>>>>>;

/// Table state shared between the table handle and its ports. Ports hold a
/// weak reference back here so deregistration still works no matter which
/// side is torn down first.
pub(crate) struct TableCore<M: AddressMember> {
    ports: RefCell<EngineMap<M>>,
    default_handler: RefCell<Option<MessageHandler<M>>>,
    range: PortRange,
}

impl<M: AddressMember> TableCore<M> {
    /// Removes the (address, port) entry for `endpoint`; removes the
    /// address's map once it holds no ports. No-op if the entry is already
    /// gone — this may run after the table has been partially torn down.
    pub(crate) fn deallocate(&self, endpoint: &Endpoint<M>) {
        let mut ports = self.ports.borrow_mut();
        let Some(port_map) = ports.get_mut(&endpoint.address()) else {
            return;
        };
        port_map.remove(&endpoint.port());
        if port_map.is_empty() {
            ports.remove(&endpoint.address());
        }
    }
}

/// One namespace's routing table: binds and allocates ports per address,
/// routes inbound messages to the bound port's dispatch registry, and
/// invalidates every still-live port when dropped.
///
/// A table assumes a single logical thread of control. No operation locks,
/// blocks, or suspends; callers on other threads must marshal their calls
/// onto the table's owning executor. Re-entering a table from inside one of
/// its own handlers is unsupported.
pub struct RoutingTable<M: AddressMember> {
    core: Rc<TableCore<M>>,
    factory: PortFactory<M>,
}

impl<M: AddressMember> RoutingTable<M> {
    /// Creates a table with the default allocatable port range.
    pub fn new(factory: PortFactory<M>) -> Self {
        Self::with_range(PortRange::default(), factory)
    }

    pub fn with_range(range: PortRange, factory: PortFactory<M>) -> Self {
        Self {
            core: Rc::new(TableCore {
                ports: RefCell::new(BTreeMap::new()),
                default_handler: RefCell::new(None),
                range,
            }),
            factory,
        }
    }

    pub(crate) fn core_weak(&self) -> Weak<TableCore<M>> {
        Rc::downgrade(&self.core)
    }

    pub fn range(&self) -> PortRange {
        self.core.range
    }

    /// Binds the specific port within `address` (fallible version).
    pub fn try_bind(&self, address: &Address<M>, port: PortId) -> Result<PortRef<M>, BindError> {
        {
            let ports = self.core.ports.borrow();
            if let Some(port_map) = ports.get(address) {
                if port_map.contains_key(&port) {
                    return Err(BindError::PortInUse {
                        endpoint: address.with_port(port).to_string(),
                    });
                }
            }
        }

        // the factory runs with no borrow held; it may construct the port
        // via DispatchPort::new but must not re-enter this table
        let Some(engine) = (self.factory)(self, address, port) else {
            return Err(BindError::FactoryDeclined {
                endpoint: address.with_port(port).to_string(),
            });
        };

        let mut ports = self.core.ports.borrow_mut();
        ports
            .entry(*address)
            .or_default()
            .insert(port, Rc::downgrade(&engine));

        trace!("bound port {}", address.with_port(port));
        Ok(engine)
    }

    /// Binds the specific port within `address`. Returns `None` on
    /// collision or factory decline — an ordinary, retryable outcome.
    pub fn bind(&self, address: &Address<M>, port: PortId) -> Option<PortRef<M>> {
        self.try_bind(address, port).ok()
    }

    /// Allocates an unused port within `address` and binds it (fallible
    /// version).
    pub fn try_bind_any(&self, address: &Address<M>) -> Result<PortRef<M>, BindError> {
        let port = self.unused_port(address);
        if port == PortId::null() {
            return Err(BindError::PortSpaceExhausted {
                address: address.to_string(),
            });
        }
        self.try_bind(address, port)
    }

    /// Allocates an unused port within `address` and binds it. Returns
    /// `None` if the address's port space is exhausted.
    pub fn bind_any(&self, address: &Address<M>) -> Option<PortRef<M>> {
        self.try_bind_any(address).ok()
    }

    /// Picks an unused port for `address`: a uniformly random starting point
    /// inside the allocatable range, then a forward scan with wraparound.
    /// Returns [`PortId::null`] if the whole range is occupied.
    pub fn unused_port(&self, address: &Address<M>) -> PortId {
        let range = self.core.range;
        let start = range.random_port();

        let ports = self.core.ports.borrow();
        let Some(port_map) = ports.get(address) else {
            // nothing bound under this address, nothing can collide
            return start;
        };

        let mut candidate = start;
        loop {
            if !port_map.contains_key(&candidate) {
                return candidate;
            }
            candidate = candidate.next_in(&range);
            if candidate == start {
                error!("port space exhausted for address {}", address);
                return PortId::null();
            }
        }
    }

    /// Replaces the table-wide fallback invoked when no bound port handles a
    /// message.
    pub fn register_default_handler(&self, handler: MessageHandler<M>) {
        *self.core.default_handler.borrow_mut() = Some(handler);
    }

    pub fn clear_default_handler(&self) {
        *self.core.default_handler.borrow_mut() = None;
    }

    /// Routes an inbound message to the port bound at `dst`. Falls through
    /// to the default handler when the destination has no bound port, or the
    /// bound port has no handler for `src`. Returns whether anything
    /// handled the message; the demux layer is expected to drop on false.
    pub fn deliver(&self, src: &Endpoint<M>, dst: &Endpoint<M>, payload: &[u8]) -> bool {
        let engine = {
            let ports = self.core.ports.borrow();
            ports
                .get(&dst.address())
                .and_then(|port_map| port_map.get(&dst.port()))
                .and_then(|weak| weak.upgrade())
        };

        if let Some(engine) = engine {
            if engine.borrow_mut().deliver(src, dst, payload) {
                return true;
            }
        }

        let mut default_handler = self.core.default_handler.borrow_mut();
        match default_handler.as_mut() {
            Some(handler) => {
                handler(src, dst, payload);
                true
            }
            None => {
                trace!("dropping unroutable message {} -> {}", src, dst);
                false
            }
        }
    }

    /// Removes the tracking entry for `endpoint`. Ports deregister
    /// themselves on invalidation and on drop; calling this for an endpoint
    /// that is already gone is a no-op.
    pub fn deallocate(&self, endpoint: &Endpoint<M>) {
        self.core.deallocate(endpoint);
    }

    /// Number of ports currently bound under `address`.
    pub fn bound_port_count(&self, address: &Address<M>) -> usize {
        self.core
            .ports
            .borrow()
            .get(address)
            .map_or(0, |port_map| port_map.len())
    }
}

impl<M: AddressMember> Drop for RoutingTable<M> {
    /// Invalidates every still-live port. Invalidation re-enters
    /// `deallocate` and mutates the very map being walked, so each pass
    /// re-fetches the first remaining entry instead of holding an iterator
    /// across the call.
    fn drop(&mut self) {
        loop {
            let mut stale: Option<(Address<M>, Option<PortId>)> = None;
            let engine = {
                let ports = self.core.ports.borrow();
                let Some((address, port_map)) = ports.iter().next() else {
                    break;
                };
                match port_map.iter().next() {
                    Some((port, weak)) => match weak.upgrade() {
                        Some(engine) => Some(engine),
                        None => {
                            stale = Some((*address, Some(*port)));
                            None
                        }
                    },
                    None => {
                        stale = Some((*address, None));
                        None
                    }
                }
            };

            match engine {
                Some(engine) => engine.borrow_mut().invalidate(),
                None => {
                    // defensive: entries are normally removed the moment
                    // their port deregisters, but never spin on one
                    if let Some((address, port)) = stale {
                        match port {
                            Some(port) => self.core.deallocate(&address.with_port(port)),
                            None => {
                                self.core.ports.borrow_mut().remove(&address);
                            }
                        }
                    }
                }
            }
        }
    }
}
