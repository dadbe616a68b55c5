use std::{
    cell::RefCell,
    collections::HashMap,
    rc::{Rc, Weak},
};

use log::trace;

use crate::{
    address::{AddressMember, Endpoint, PortId, RealmId, Wildcard},
    port::{MessageHandler, Port, SendBackend},
    table::{RoutingTable, TableCore},
};

/// The concrete [`Port`] implementation a routing table hands out: a
/// registry of source-filtered handlers plus the resolver that picks the
/// most specific one for each inbound message.
///
/// The table and the caller jointly observe a dispatch port, but only the
/// caller owns its lifetime — the table keeps a weak tracking reference used
/// for delivery and for invalidation during teardown.
pub struct DispatchPort<M: AddressMember> {
    endpoint: Endpoint<M>,
    table: Weak<TableCore<M>>,
    backend: SendBackend<M>,
    handlers: HashMap<Endpoint<M>, MessageHandler<M>>,
    invalidated: bool,
}

impl<M: AddressMember> DispatchPort<M> {
    /// Creates a dispatch port bound to `endpoint`, delegating transmission
    /// to `backend`. Normally called from the port factory a routing table
    /// was constructed with.
    pub fn new(
        table: &RoutingTable<M>,
        endpoint: Endpoint<M>,
        backend: SendBackend<M>,
    ) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            endpoint,
            table: table.core_weak(),
            backend,
            handlers: HashMap::new(),
            invalidated: false,
        }))
    }

    /// Resolves the most specific handler registered for `src` and invokes
    /// it. Returns whether any handler fired.
    ///
    /// Probe order: port is the primary discriminator, realm secondary,
    /// member weakest. A wildcard realm combined with a concrete member is
    /// never probed — a member identifier has no meaning across realms.
    pub fn deliver(&mut self, src: &Endpoint<M>, dst: &Endpoint<M>, payload: &[u8]) -> bool {
        let probes = [
            *src,
            Endpoint::new(src.realm(), M::any(), src.port()),
            Endpoint::new(RealmId::any(), M::any(), src.port()),
            Endpoint::new(src.realm(), src.member(), PortId::any()),
            Endpoint::new(src.realm(), M::any(), PortId::any()),
            Endpoint::any(),
        ];

        for probe in &probes {
            if let Some(handler) = self.handlers.get_mut(probe) {
                handler(src, dst, payload);
                return true;
            }
        }

        trace!("no handler on port {} for source {}", self.endpoint, src);
        false
    }

    /// Cuts the port off from its table. After the first call, `send`
    /// returns false forever and the table no longer routes to this port;
    /// `endpoint()` keeps answering. Subsequent calls are no-ops.
    pub fn invalidate(&mut self) {
        if self.invalidated {
            return;
        }
        self.invalidated = true;
        if let Some(core) = self.table.upgrade() {
            core.deallocate(&self.endpoint);
        }
    }

    pub fn is_invalidated(&self) -> bool {
        self.invalidated
    }
}

impl<M: AddressMember> Port<M> for DispatchPort<M> {
    fn endpoint(&self) -> Endpoint<M> {
        self.endpoint
    }

    fn send(&mut self, to: &Endpoint<M>, payload: &[u8]) -> bool {
        if self.invalidated {
            return false;
        }
        (self.backend)(to, payload)
    }

    fn receive_from(&mut self, from: Endpoint<M>, handler: MessageHandler<M>) {
        self.handlers.insert(from, handler);
    }
}

impl<M: AddressMember> Drop for DispatchPort<M> {
    /// Deregisters from the table, unless invalidation already did.
    /// Exactly one deregistration ever occurs per port.
    fn drop(&mut self) {
        if !self.invalidated {
            if let Some(core) = self.table.upgrade() {
                core.deallocate(&self.endpoint);
            }
        }
    }
}
