use crate::address::wildcard::Wildcard;

/// Ports at or below this value are reserved for system protocols and are
/// never chosen by automatic allocation. They may still be bound explicitly.
pub const PORT_RESERVED_MAX: u32 = 1024;

/// Upper bound of the automatically allocatable port range. Kept strictly
/// below [`PortId::any`] so the wildcard can never be allocated.
pub const PORT_SYSTEM_MAX: u32 = 0x00FF_FFFF;

/// Identifies a sub-channel within an address, used to multiplex independent
/// services over the same participant address.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct PortId(u32);

impl PortId {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// The next candidate port when probing for a free slot, wrapping from
    /// the top of the allocatable range back to its bottom.
    pub fn next_in(&self, range: &PortRange) -> PortId {
        if self.0 >= range.system_max() {
            PortId(range.reserved_max() + 1)
        } else {
            PortId(self.0 + 1)
        }
    }
}

impl Wildcard for PortId {
    fn null() -> Self {
        Self(0)
    }

    fn any() -> Self {
        Self(u32::MAX)
    }
}

impl std::fmt::Display for PortId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if *self == Self::any() {
            write!(f, "*")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// The automatically allocatable port range of one routing table:
/// `(reserved_max, system_max]`. Each namespace instantiation owns its own
/// independent range.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct PortRange {
    reserved_max: u32,
    system_max: u32,
}

impl PortRange {
    /// # Panics
    ///
    /// Panics if the range is empty or reaches the wildcard value. This is a
    /// construction-time configuration error, not a runtime condition.
    pub fn new(reserved_max: u32, system_max: u32) -> Self {
        if system_max <= reserved_max {
            panic!("PortRange must contain at least one allocatable port");
        }
        if system_max >= PortId::any().value() {
            panic!("PortRange must stay below the wildcard port");
        }
        Self {
            reserved_max,
            system_max,
        }
    }

    pub fn reserved_max(&self) -> u32 {
        self.reserved_max
    }

    pub fn system_max(&self) -> u32 {
        self.system_max
    }

    /// Number of ports eligible for automatic allocation.
    pub fn allocatable_len(&self) -> u32 {
        self.system_max - self.reserved_max
    }

    pub fn contains(&self, port: &PortId) -> bool {
        port.value() > self.reserved_max && port.value() <= self.system_max
    }

    /// A uniformly random port inside the allocatable range, used as the
    /// starting point of the free-port scan.
    pub fn random_port(&self) -> PortId {
        PortId(fastrand::u32((self.reserved_max + 1)..=self.system_max))
    }
}

impl Default for PortRange {
    fn default() -> Self {
        Self::new(PORT_RESERVED_MAX, PORT_SYSTEM_MAX)
    }
}
