use soroban_sdk::{Address, Env, String};

use crate::types::{EventConfig, RegistryState, StorageKey, Ticket, TicketKey};

// TTL constants
const DAY_IN_LEDGERS: u32 = 17280;
const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

// ========== Initialization ==========

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&StorageKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&StorageKey::Initialized, &true);
}

// ========== Factory ==========

pub fn get_factory(env: &Env) -> Address {
    env.storage().instance().get(&StorageKey::Factory).unwrap()
}

pub fn set_factory(env: &Env, factory: &Address) {
    env.storage().instance().set(&StorageKey::Factory, factory);
}

// ========== Payment token ==========

pub fn get_payment_token(env: &Env) -> Address {
    env.storage().instance().get(&StorageKey::PaymentToken).unwrap()
}

pub fn set_payment_token(env: &Env, token: &Address) {
    env.storage().instance().set(&StorageKey::PaymentToken, token);
}

// ========== Registry counter ==========

pub fn get_registry_counter(env: &Env) -> u64 {
    env.storage().instance().get(&StorageKey::RegistryCounter).unwrap_or(0)
}

pub fn increment_registry_counter(env: &Env) -> u64 {
    let counter = get_registry_counter(env) + 1;
    env.storage().instance().set(&StorageKey::RegistryCounter, &counter);
    counter
}

// ========== Event config ==========

pub fn get_config(env: &Env, registry_id: u64) -> Option<EventConfig> {
    let key = StorageKey::Config(registry_id);
    let config = env.storage().persistent().get::<_, EventConfig>(&key);
    if config.is_some() {
        env.storage().persistent().extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    config
}

pub fn set_config(env: &Env, registry_id: u64, config: &EventConfig) {
    let key = StorageKey::Config(registry_id);
    env.storage().persistent().set(&key, config);
    env.storage().persistent().extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ========== Runtime state ==========

pub fn get_state(env: &Env, registry_id: u64) -> Option<RegistryState> {
    let key = StorageKey::State(registry_id);
    let state = env.storage().persistent().get::<_, RegistryState>(&key);
    if state.is_some() {
        env.storage().persistent().extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    state
}

pub fn set_state(env: &Env, registry_id: u64, state: &RegistryState) {
    let key = StorageKey::State(registry_id);
    env.storage().persistent().set(&key, state);
    env.storage().persistent().extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ========== Base URI ==========

pub fn get_base_uri(env: &Env, registry_id: u64) -> Option<String> {
    let key = StorageKey::BaseUri(registry_id);
    let uri = env.storage().persistent().get::<_, String>(&key);
    if uri.is_some() {
        env.storage().persistent().extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    uri
}

pub fn set_base_uri(env: &Env, registry_id: u64, uri: &String) {
    let key = StorageKey::BaseUri(registry_id);
    env.storage().persistent().set(&key, uri);
    env.storage().persistent().extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ========== Tickets ==========

pub fn get_ticket(env: &Env, registry_id: u64, ticket_id: u32) -> Option<Ticket> {
    let key = StorageKey::Ticket(TicketKey { registry_id, ticket_id });
    let ticket = env.storage().persistent().get::<_, Ticket>(&key);
    if ticket.is_some() {
        env.storage().persistent().extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    ticket
}

pub fn set_ticket(env: &Env, registry_id: u64, ticket: &Ticket) {
    let key = StorageKey::Ticket(TicketKey {
        registry_id,
        ticket_id: ticket.id,
    });
    env.storage().persistent().set(&key, ticket);
    env.storage().persistent().extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}
