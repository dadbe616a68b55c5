use crate::address::{AddressMember, Endpoint, Wildcard};

/// Handler for an inbound message. Always invoked with the original,
/// non-wildcarded source and destination endpoints, never with the pattern
/// that was used to find it.
pub type MessageHandler<M> = Box<dyn FnMut(&Endpoint<M>, &Endpoint<M>, &[u8])>;

/// The transmission backend a port delegates to when sending. Supplied by
/// whatever owns the concrete transport; the port never inspects payload
/// contents. Returns whether the backend accepted the payload.
pub type SendBackend<M> = Box<dyn FnMut(&Endpoint<M>, &[u8]) -> bool>;

/// The capability callers hold after binding a port on a routing table.
///
/// A port is bound to exactly one fully-specified endpoint, which never
/// changes after construction — even after the port has been invalidated by
/// its table tearing down.
pub trait Port<M: AddressMember> {
    /// The port's own bound endpoint.
    fn endpoint(&self) -> Endpoint<M>;

    /// Sends a payload to the destination endpoint via the injected backend.
    /// Returns false unconditionally once the port has been invalidated;
    /// there is no side effect on failure.
    fn send(&mut self, to: &Endpoint<M>, payload: &[u8]) -> bool;

    /// Installs a handler for messages whose source matches `from`,
    /// overwriting any handler previously installed for the same pattern.
    fn receive_from(&mut self, from: Endpoint<M>, handler: MessageHandler<M>);

    /// Installs a handler for messages from any source.
    fn receive(&mut self, handler: MessageHandler<M>) {
        self.receive_from(Endpoint::any(), handler);
    }
}
