use soroban_sdk::{contracttype, Address, Env, String};

use crate::types::EventStatus;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FactoryInitializedEvent {
    pub owner: Address,
    pub registry: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EventCreatedEvent {
    pub event_id: u64,
    pub registry_id: u64,
    pub organizer: Address,
    pub name: String,
    pub ticket_price: i128,
    pub max_supply: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CreationFeeCollectedEvent {
    pub creator: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeesWithdrawnEvent {
    pub recipient: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResaleCeilingUpdatedEvent {
    pub new_percent: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DefaultFeeUpdatedEvent {
    pub new_percent: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CreationFeeUpdatedEvent {
    pub new_fee: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FactoryPausedEvent {
    pub owner: Address,
    pub paused: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EventStatusUpdatedEvent {
    pub event_id: u64,
    pub old_status: EventStatus,
    pub new_status: EventStatus,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerChangedEvent {
    pub old_owner: Address,
    pub new_owner: Address,
}

pub fn emit_factory_initialized(env: &Env, owner: Address, registry: Address) {
    let event = FactoryInitializedEvent { owner: owner.clone(), registry };
    env.events().publish(("factory_initialized", owner), event);
}

pub fn emit_event_created(
    env: &Env,
    event_id: u64,
    registry_id: u64,
    organizer: Address,
    name: String,
    ticket_price: i128,
    max_supply: u32,
) {
    let event = EventCreatedEvent {
        event_id,
        registry_id,
        organizer: organizer.clone(),
        name,
        ticket_price,
        max_supply,
    };
    env.events().publish(("event_created", event_id, organizer), event);
}

pub fn emit_creation_fee_collected(env: &Env, creator: Address, amount: i128) {
    let event = CreationFeeCollectedEvent { creator: creator.clone(), amount };
    env.events().publish(("creation_fee_collected", creator), event);
}

pub fn emit_fees_withdrawn(env: &Env, recipient: Address, amount: i128) {
    let event = FeesWithdrawnEvent { recipient: recipient.clone(), amount };
    env.events().publish(("fees_withdrawn", recipient), event);
}

pub fn emit_resale_ceiling_updated(env: &Env, new_percent: u32) {
    let event = ResaleCeilingUpdatedEvent { new_percent };
    env.events().publish(("resale_ceiling_updated", new_percent), event);
}

pub fn emit_default_fee_updated(env: &Env, new_percent: u32) {
    let event = DefaultFeeUpdatedEvent { new_percent };
    env.events().publish(("default_fee_updated", new_percent), event);
}

pub fn emit_creation_fee_updated(env: &Env, new_fee: i128) {
    let event = CreationFeeUpdatedEvent { new_fee };
    env.events().publish(("creation_fee_updated", new_fee), event);
}

pub fn emit_factory_paused(env: &Env, owner: Address, paused: bool) {
    let event = FactoryPausedEvent { owner: owner.clone(), paused };
    env.events().publish(("factory_paused", owner), event);
}

pub fn emit_event_status_updated(env: &Env, event_id: u64, old_status: EventStatus, new_status: EventStatus) {
    let event = EventStatusUpdatedEvent { event_id, old_status, new_status };
    env.events().publish(("event_status_updated", event_id), event);
}

pub fn emit_owner_changed(env: &Env, old_owner: Address, new_owner: Address) {
    let event = OwnerChangedEvent { old_owner: old_owner.clone(), new_owner: new_owner.clone() };
    env.events().publish(("owner_changed", old_owner, new_owner), event);
}
