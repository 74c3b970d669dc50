use soroban_sdk::contracterror;

/// Error codes for the event factory contract
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    /// Caller is not the platform owner
    Unauthorized = 3,
    /// New creation is paused
    FactoryPaused = 4,
    /// No directory entry under the given event id
    EventNotFound = 5,
    EmptyName = 6,
    EmptySymbol = 7,
    /// Supply is zero or above the platform bound
    InvalidSupply = 8,
    /// Face value below the platform minimum
    PriceBelowMinimum = 9,
    /// Metadata URI exceeds the registry bound
    UriTooLong = 10,
    /// Resale cap above the global ceiling
    ResaleCapTooHigh = 11,
    /// Organizer fee above the platform maximum
    OrganizerFeeTooHigh = 12,
    /// Policy value outside the platform bounds
    InvalidCeiling = 13,
    /// Payment does not match the required creation fee exactly
    FeeMismatch = 14,
    EmptyBatch = 15,
    /// Batch exceeds the fixed maximum size
    BatchTooLarge = 16,
    /// Organizer reached the per-organizer event limit
    OrganizerEventLimit = 17,
    /// Fee arithmetic overflowed
    AmountOverflow = 18,
}
