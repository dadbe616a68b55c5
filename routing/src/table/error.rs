use thiserror::Error;

/// Errors that can occur when binding a port on a routing table.
///
/// These all describe routine, recoverable outcomes — the plain `bind` /
/// `bind_any` surface collapses them to `None`, and high-frequency callers
/// are expected to treat them that way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    /// The requested (address, port) slot already has a live port
    #[error("Port {endpoint} is already bound. Pick another port or retry with bind_any()")]
    PortInUse {
        endpoint: String,
    },

    /// The injected port factory declined to create a port
    #[error("Port factory declined to create a port for {endpoint}")]
    FactoryDeclined {
        endpoint: String,
    },

    /// Every port in the allocatable range is occupied for this address
    #[error("No unused port remains in the allocatable range for address {address}")]
    PortSpaceExhausted {
        address: String,
    },
}
