use soroban_sdk::contracterror;

/// Error codes for the ticket registry contract.
/// Codes start at 100 to stay distinguishable from factory codes.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 100,
    NotInitialized = 101,
    /// Caller lacks the required role for this registry
    Unauthorized = 102,
    /// Registry creation is reserved for the factory
    CallerNotFactory = 103,
    /// No registry exists under the given handle
    RegistryNotFound = 104,
    /// No ticket exists under the given id
    TicketNotFound = 105,
    /// Supply exhausted
    SoldOut = 106,
    /// Payment does not match the required amount exactly
    PaymentMismatch = 107,
    /// Ticket is not in the Sold state
    TicketNotActive = 108,
    /// Current holder cannot buy their own ticket
    SelfResale = 109,
    /// Offered price exceeds the resale ceiling
    ResaleCapExceeded = 110,
    /// Operation is blocked because the event was cancelled
    EventCancelled = 111,
    /// Operation requires the event to be cancelled
    EventNotCancelled = 112,
    /// Cancellation is one-way and already happened
    AlreadyCancelled = 113,
    /// Direct ownership transfer is deliberately unsupported
    TransfersRestricted = 114,
    /// Metadata URI exceeds the stored-prefix bound
    UriTooLong = 115,
    /// Percentage or proceeds arithmetic overflowed
    AmountOverflow = 116,
    /// Creation parameters violate registry invariants
    InvalidParams = 117,
}
