use soroban_sdk::{contracttype, Address, String};

// Platform-wide limits every registry creation is validated against.

/// Hard bound on the mutable global resale ceiling, percent of face value
pub const MAX_RESALE_PERCENT_CEILING: u32 = 300;

/// Bound on per-event organizer fee percent
pub const MAX_ORGANIZER_FEE_PERCENT: u32 = 50;

/// Platform minimum face value, in payment token units
pub const MIN_TICKET_PRICE: i128 = 100;

/// Bound on per-event supply
pub const MAX_TICKETS_PER_EVENT: u32 = 100_000;

/// Bound on the per-organizer directory index
pub const MAX_EVENTS_PER_ORGANIZER: u32 = 50;

/// Bound on batch creation
pub const MAX_BATCH_SIZE: u32 = 10;

/// Bound on the metadata URI prefix accepted by the registry
pub const MAX_URI_LENGTH: u32 = 200;

/// Storage keys for the factory contract
#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    Initialized,
    Config,
    EventCounter,
    FeesCollected,
    /// Directory entry by event id
    Entry(u64),
    /// Event ids by organizer
    OrganizerEvents(Address),
}

/// Advisory directory status. Never gates registry behavior; the registry
/// tracks its own cancellation and supply state.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum EventStatus {
    Active = 0,
    SoldOut = 1,
    Cancelled = 2,
    Completed = 3,
}

/// Factory configuration
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FactoryConfig {
    /// Platform owner with policy and fee authority
    pub owner: Address,
    /// Ticket registry contract receiving creation calls
    pub registry: Address,
    /// Platform payment token
    pub payment_token: Address,
    /// Ceiling every new event's resale cap must respect
    pub global_max_resale_percent: u32,
    /// Fee percent applied when a candidate does not name one
    pub default_organizer_fee_percent: u32,
    /// Amount charged per created event
    pub event_creation_fee: i128,
    /// Blocks new creation only; existing registries are unaffected
    pub paused: bool,
    /// Timestamp of last configuration update
    pub updated_at: u64,
}

/// Creation parameters for one event
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EventParams {
    pub name: String,
    pub symbol: String,
    pub max_supply: u32,
    pub ticket_price: i128,
    pub organizer: Address,
    pub base_uri: String,
    pub max_resale_percent: u32,
    /// 0 selects the platform default
    pub organizer_fee_percent: u32,
}

/// Directory record for one created registry
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DirectoryEntry {
    pub event_id: u64,
    /// Handle of the registry inside the ticket registry contract
    pub registry_id: u64,
    pub organizer: Address,
    pub name: String,
    pub ticket_price: i128,
    pub max_supply: u32,
    pub status: EventStatus,
    pub created_at: u64,
    pub updated_at: u64,
}
