use soroban_sdk::{contracttype, Address, Env, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistryCreatedEvent {
    pub registry_id: u64,
    pub organizer: Address,
    pub name: String,
    pub ticket_price: i128,
    pub max_supply: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TicketMintedEvent {
    pub registry_id: u64,
    pub ticket_id: u32,
    pub buyer: Address,
    pub price: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TicketResoldEvent {
    pub registry_id: u64,
    pub ticket_id: u32,
    pub seller: Address,
    pub buyer: Address,
    pub price: i128,
    pub organizer_fee: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TicketRefundedEvent {
    pub registry_id: u64,
    pub ticket_id: u32,
    pub holder: Address,
    pub amount: i128,
    pub post_cancellation: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TicketCheckedInEvent {
    pub registry_id: u64,
    pub ticket_id: u32,
    pub owner: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EventCancelledEvent {
    pub registry_id: u64,
    pub organizer: Address,
    pub reason: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProceedsWithdrawnEvent {
    pub registry_id: u64,
    pub organizer: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BaseUriUpdatedEvent {
    pub registry_id: u64,
}

pub fn emit_registry_created(
    env: &Env,
    registry_id: u64,
    organizer: Address,
    name: String,
    ticket_price: i128,
    max_supply: u32,
) {
    let event = RegistryCreatedEvent {
        registry_id,
        organizer: organizer.clone(),
        name,
        ticket_price,
        max_supply,
    };
    env.events().publish(("registry_created", registry_id, organizer), event);
}

pub fn emit_ticket_minted(env: &Env, registry_id: u64, ticket_id: u32, buyer: Address, price: i128) {
    let event = TicketMintedEvent {
        registry_id,
        ticket_id,
        buyer: buyer.clone(),
        price,
    };
    env.events().publish(("ticket_minted", registry_id, buyer), event);
}

pub fn emit_ticket_resold(
    env: &Env,
    registry_id: u64,
    ticket_id: u32,
    seller: Address,
    buyer: Address,
    price: i128,
    organizer_fee: i128,
) {
    let event = TicketResoldEvent {
        registry_id,
        ticket_id,
        seller: seller.clone(),
        buyer: buyer.clone(),
        price,
        organizer_fee,
    };
    env.events().publish(("ticket_resold", registry_id, seller, buyer), event);
}

pub fn emit_ticket_refunded(
    env: &Env,
    registry_id: u64,
    ticket_id: u32,
    holder: Address,
    amount: i128,
    post_cancellation: bool,
) {
    let event = TicketRefundedEvent {
        registry_id,
        ticket_id,
        holder: holder.clone(),
        amount,
        post_cancellation,
    };
    env.events().publish(("ticket_refunded", registry_id, holder), event);
}

pub fn emit_ticket_checked_in(env: &Env, registry_id: u64, ticket_id: u32, owner: Address) {
    let event = TicketCheckedInEvent {
        registry_id,
        ticket_id,
        owner: owner.clone(),
    };
    env.events().publish(("ticket_checked_in", registry_id, owner), event);
}

pub fn emit_event_cancelled(env: &Env, registry_id: u64, organizer: Address, reason: String) {
    let event = EventCancelledEvent {
        registry_id,
        organizer: organizer.clone(),
        reason,
    };
    env.events().publish(("event_cancelled", registry_id, organizer), event);
}

pub fn emit_proceeds_withdrawn(env: &Env, registry_id: u64, organizer: Address, amount: i128) {
    let event = ProceedsWithdrawnEvent {
        registry_id,
        organizer: organizer.clone(),
        amount,
    };
    env.events().publish(("proceeds_withdrawn", registry_id, organizer), event);
}

pub fn emit_base_uri_updated(env: &Env, registry_id: u64) {
    let event = BaseUriUpdatedEvent { registry_id };
    env.events().publish(("base_uri_updated", registry_id), event);
}
