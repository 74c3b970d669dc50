use soroban_sdk::{Address, Env, Vec};

use crate::types::{DirectoryEntry, FactoryConfig, StorageKey};

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

// ========== Config ==========

pub fn get_config(env: &Env) -> Option<FactoryConfig> {
    env.storage().instance().get(&StorageKey::Config)
}

pub fn set_config(env: &Env, config: &FactoryConfig) {
    env.storage().instance().set(&StorageKey::Config, config);
}

// ========== Event counter ==========

pub fn get_event_counter(env: &Env) -> u64 {
    env.storage().instance().get(&StorageKey::EventCounter).unwrap_or(0)
}

pub fn increment_event_counter(env: &Env) -> u64 {
    let counter = get_event_counter(env) + 1;
    env.storage().instance().set(&StorageKey::EventCounter, &counter);
    counter
}

// ========== Directory entries ==========

pub fn get_entry(env: &Env, event_id: u64) -> Option<DirectoryEntry> {
    let key = StorageKey::Entry(event_id);
    let entry = env.storage().persistent().get::<_, DirectoryEntry>(&key);
    if entry.is_some() {
        env.storage().persistent().extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    entry
}

pub fn set_entry(env: &Env, entry: &DirectoryEntry) {
    let key = StorageKey::Entry(entry.event_id);
    env.storage().persistent().set(&key, entry);
    env.storage().persistent().extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

pub fn list_entries(env: &Env) -> Vec<DirectoryEntry> {
    let counter = get_event_counter(env);
    let mut entries = Vec::new(env);

    for event_id in 1..=counter {
        if let Some(entry) = get_entry(env, event_id) {
            entries.push_back(entry);
        }
    }

    entries
}

// ========== Organizer index ==========

pub fn get_organizer_events(env: &Env, organizer: &Address) -> Vec<u64> {
    let key = StorageKey::OrganizerEvents(organizer.clone());
    let events = env
        .storage()
        .persistent()
        .get::<_, Vec<u64>>(&key)
        .unwrap_or(Vec::new(env));
    if !events.is_empty() {
        env.storage().persistent().extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    events
}

pub fn add_organizer_event(env: &Env, organizer: &Address, event_id: u64) {
    let key = StorageKey::OrganizerEvents(organizer.clone());
    let mut events = get_organizer_events(env, organizer);
    events.push_back(event_id);
    env.storage().persistent().set(&key, &events);
    env.storage().persistent().extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ========== Collected fees ==========

pub fn get_fees(env: &Env) -> i128 {
    env.storage().instance().get(&StorageKey::FeesCollected).unwrap_or(0)
}

pub fn set_fees(env: &Env, amount: i128) {
    env.storage().instance().set(&StorageKey::FeesCollected, &amount);
}

pub fn add_fees(env: &Env, amount: i128) {
    let fees = get_fees(env).checked_add(amount).unwrap_or(i128::MAX);
    set_fees(env, fees);
}
