use soroban_sdk::{contracttype, Address, String};

/// Base for percentage arithmetic. Percentages are expressed as percent of
/// face value (110 = 110%); division truncates toward zero.
pub const PERCENT_BASE: i128 = 100;

/// Upper bound on the stored metadata URI prefix.
pub const MAX_URI_LENGTH: u32 = 200;

/// Storage keys for the ticket registry contract
#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    /// Factory address authorized to create registries
    Factory,
    /// Platform payment token
    PaymentToken,
    /// Initialization flag
    Initialized,
    /// Last assigned registry handle
    RegistryCounter,
    /// Immutable event configuration by registry handle
    Config(u64),
    /// Mutable runtime state by registry handle
    State(u64),
    /// Metadata URI prefix by registry handle
    BaseUri(u64),
    /// Ticket by (registry handle, ticket id)
    Ticket(TicketKey),
}

/// Composite key addressing one ticket within one registry.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TicketKey {
    pub registry_id: u64,
    pub ticket_id: u32,
}

/// Lifecycle state of a minted ticket. Transitions are forward-only:
/// Sold -> CheckedIn and Sold -> Refunded are both terminal. Tickets that
/// have not been minted do not exist as entities.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum TicketState {
    Sold = 0,
    CheckedIn = 1,
    Refunded = 2,
}

/// Immutable per-event configuration, written once at registry creation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EventConfig {
    /// Event name
    pub name: String,
    /// Ticket symbol
    pub symbol: String,
    /// Maximum number of tickets that can ever be minted
    pub max_supply: u32,
    /// Face value of every ticket, in payment token units
    pub ticket_price: i128,
    /// Organizer with check-in and cancellation authority
    pub organizer: Address,
    /// Resale price ceiling as percent of face value
    pub max_resale_percent: u32,
    /// Organizer's cut of each resale, in percent
    pub organizer_fee_percent: u32,
    /// Creation timestamp
    pub created_at: u64,
}

impl EventConfig {
    /// Highest price at which a ticket with the given face value may resell.
    pub fn max_resale_price(&self, original_price: i128) -> Option<i128> {
        original_price
            .checked_mul(self.max_resale_percent as i128)?
            .checked_div(PERCENT_BASE)
    }

    /// Organizer's cut of a resale at the given price.
    pub fn resale_fee(&self, price: i128) -> Option<i128> {
        price
            .checked_mul(self.organizer_fee_percent as i128)?
            .checked_div(PERCENT_BASE)
    }
}

/// Mutable runtime state of one registry.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistryState {
    /// Monotonic mint counter; also the highest assigned ticket id
    pub total_minted: u32,
    /// Tickets currently held (minted minus refunded)
    pub outstanding: u32,
    /// Tickets consumed at the venue
    pub checked_in: u32,
    /// One-way cancellation latch
    pub cancelled: bool,
    /// Face value of checked-in tickets not yet withdrawn by the organizer
    pub unclaimed_proceeds: i128,
    /// Reason supplied at cancellation, advisory only
    pub cancel_reason: Option<String>,
}

/// One minted ticket.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Ticket {
    /// Sequential id, 1-based, unique within the registry
    pub id: u32,
    /// Current holder; cleared when the ticket is refunded
    pub owner: Option<Address>,
    /// Face value paid at mint; fixed refund amount
    pub original_price: i128,
    /// Price paid in the most recent sale or resale
    pub last_price_paid: i128,
    /// Lifecycle state
    pub state: TicketState,
    /// Mint timestamp
    pub minted_at: u64,
}

/// Anti-scalping parameters of one registry.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResaleRules {
    pub max_resale_percent: u32,
    pub organizer_fee_percent: u32,
    /// Ceiling for a resale of a face-value ticket
    pub max_resale_price: i128,
}
