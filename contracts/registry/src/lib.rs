#![no_std]

use soroban_sdk::{contract, contractimpl, token, Address, Env, String};

mod errors;
mod events;
mod storage;
mod types;

use errors::Error;
use types::{EventConfig, RegistryState, ResaleRules, Ticket, TicketState, MAX_URI_LENGTH};

#[contract]
pub struct TicketRegistry;

#[contractimpl]
impl TicketRegistry {
    // ========== INITIALIZATION ==========

    /// Initialize the registry with the factory authorized to create
    /// per-event registries and the platform payment token.
    pub fn initialize(env: Env, factory: Address, payment_token: Address) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }

        storage::set_initialized(&env);
        storage::set_factory(&env, &factory);
        storage::set_payment_token(&env, &payment_token);

        Ok(())
    }

    // ========== REGISTRY CREATION (Factory Only) ==========

    /// Create a new per-event registry and return its handle.
    ///
    /// Handles are sequential, 1-based, and never reused; registries are
    /// never deleted. Parameter policy (ceilings, minimum price) is the
    /// factory's responsibility; only registry-local invariants are
    /// checked here.
    pub fn create_registry(
        env: Env,
        caller: Address,
        name: String,
        symbol: String,
        max_supply: u32,
        ticket_price: i128,
        organizer: Address,
        base_uri: String,
        max_resale_percent: u32,
        organizer_fee_percent: u32,
    ) -> Result<u64, Error> {
        Self::require_initialized(&env)?;
        Self::require_factory(&env, &caller)?;

        if name.is_empty() || symbol.is_empty() {
            return Err(Error::InvalidParams);
        }
        if max_supply == 0 || ticket_price <= 0 {
            return Err(Error::InvalidParams);
        }
        if base_uri.len() > MAX_URI_LENGTH {
            return Err(Error::UriTooLong);
        }

        let registry_id = storage::increment_registry_counter(&env);

        let config = EventConfig {
            name: name.clone(),
            symbol,
            max_supply,
            ticket_price,
            organizer: organizer.clone(),
            max_resale_percent,
            organizer_fee_percent,
            created_at: env.ledger().timestamp(),
        };

        let state = RegistryState {
            total_minted: 0,
            outstanding: 0,
            checked_in: 0,
            cancelled: false,
            unclaimed_proceeds: 0,
            cancel_reason: None,
        };

        storage::set_config(&env, registry_id, &config);
        storage::set_state(&env, registry_id, &state);
        storage::set_base_uri(&env, registry_id, &base_uri);

        events::emit_registry_created(&env, registry_id, organizer, name, ticket_price, max_supply);

        Ok(registry_id)
    }

    // ========== TICKET LIFECYCLE ==========

    /// Mint the next ticket to `buyer` against exact payment of the face
    /// value. The payment is escrowed at this contract until the ticket is
    /// refunded or checked in.
    pub fn mint_ticket(env: Env, registry_id: u64, buyer: Address, payment: i128) -> Result<u32, Error> {
        buyer.require_auth();

        let config = Self::load_config(&env, registry_id)?;
        let mut state = Self::load_state(&env, registry_id)?;

        if state.cancelled {
            return Err(Error::EventCancelled);
        }
        if state.total_minted >= config.max_supply {
            return Err(Error::SoldOut);
        }
        // Exact match required in both directions; no change is given.
        if payment != config.ticket_price {
            return Err(Error::PaymentMismatch);
        }

        let ticket_id = state.total_minted + 1;

        let ticket = Ticket {
            id: ticket_id,
            owner: Some(buyer.clone()),
            original_price: config.ticket_price,
            last_price_paid: config.ticket_price,
            state: TicketState::Sold,
            minted_at: env.ledger().timestamp(),
        };

        state.total_minted = ticket_id;
        state.outstanding += 1;

        storage::set_ticket(&env, registry_id, &ticket);
        storage::set_state(&env, registry_id, &state);

        // State is final before any value moves.
        let token_client = token::Client::new(&env, &storage::get_payment_token(&env));
        token_client.transfer(&buyer, &env.current_contract_address(), &payment);

        events::emit_ticket_minted(&env, registry_id, ticket_id, buyer, payment);

        Ok(ticket_id)
    }

    /// Resell a ticket to `buyer` at `offered_price`. The offered price is
    /// the payment: the buyer pays the organizer fee and the seller payout
    /// directly, and the two always sum to the offered price exactly.
    pub fn resale_ticket(
        env: Env,
        registry_id: u64,
        ticket_id: u32,
        buyer: Address,
        offered_price: i128,
    ) -> Result<(), Error> {
        buyer.require_auth();

        let config = Self::load_config(&env, registry_id)?;
        let state = Self::load_state(&env, registry_id)?;

        if state.cancelled {
            return Err(Error::EventCancelled);
        }

        let mut ticket = Self::load_ticket(&env, registry_id, ticket_id)?;
        if ticket.state != TicketState::Sold {
            return Err(Error::TicketNotActive);
        }
        let seller = ticket.owner.clone().ok_or(Error::TicketNotActive)?;
        if seller == buyer {
            return Err(Error::SelfResale);
        }

        if offered_price <= 0 {
            return Err(Error::InvalidParams);
        }
        let cap = config
            .max_resale_price(ticket.original_price)
            .ok_or(Error::AmountOverflow)?;
        if offered_price > cap {
            return Err(Error::ResaleCapExceeded);
        }

        let fee = config.resale_fee(offered_price).ok_or(Error::AmountOverflow)?;
        let seller_payout = offered_price - fee;

        ticket.owner = Some(buyer.clone());
        ticket.last_price_paid = offered_price;
        storage::set_ticket(&env, registry_id, &ticket);

        let token_client = token::Client::new(&env, &storage::get_payment_token(&env));
        if fee > 0 {
            token_client.transfer(&buyer, &config.organizer, &fee);
        }
        if seller_payout > 0 {
            token_client.transfer(&buyer, &seller, &seller_payout);
        }

        events::emit_ticket_resold(&env, registry_id, ticket_id, seller, buyer, offered_price, fee);

        Ok(())
    }

    /// Refund a ticket at face value while the event is live.
    pub fn refund_ticket(env: Env, registry_id: u64, ticket_id: u32, holder: Address) -> Result<(), Error> {
        Self::execute_refund(&env, registry_id, ticket_id, holder, false)
    }

    /// Refund a ticket at face value after cancellation.
    pub fn cancel_refund(env: Env, registry_id: u64, ticket_id: u32, holder: Address) -> Result<(), Error> {
        Self::execute_refund(&env, registry_id, ticket_id, holder, true)
    }

    /// Mark a ticket as used at the venue. Irreversible; the ticket can no
    /// longer be resold or refunded, and its face value becomes organizer
    /// proceeds.
    pub fn check_in(env: Env, registry_id: u64, ticket_id: u32, organizer: Address) -> Result<(), Error> {
        let config = Self::require_organizer(&env, registry_id, &organizer)?;
        let mut state = Self::load_state(&env, registry_id)?;

        if state.cancelled {
            return Err(Error::EventCancelled);
        }

        let mut ticket = Self::load_ticket(&env, registry_id, ticket_id)?;
        if ticket.state != TicketState::Sold {
            return Err(Error::TicketNotActive);
        }
        let owner = ticket.owner.clone().ok_or(Error::TicketNotActive)?;

        ticket.state = TicketState::CheckedIn;
        state.checked_in += 1;
        state.unclaimed_proceeds = state
            .unclaimed_proceeds
            .checked_add(config.ticket_price)
            .ok_or(Error::AmountOverflow)?;

        storage::set_ticket(&env, registry_id, &ticket);
        storage::set_state(&env, registry_id, &state);

        events::emit_ticket_checked_in(&env, registry_id, ticket_id, owner);

        Ok(())
    }

    /// Cancel the event. One-way: blocks all future mints and resales and
    /// opens the post-cancellation refund path for every ticket that has
    /// not been checked in. `reason` is recorded for observability only.
    pub fn cancel_event(env: Env, registry_id: u64, organizer: Address, reason: String) -> Result<(), Error> {
        Self::require_organizer(&env, registry_id, &organizer)?;
        let mut state = Self::load_state(&env, registry_id)?;

        if state.cancelled {
            return Err(Error::AlreadyCancelled);
        }

        state.cancelled = true;
        state.cancel_reason = Some(reason.clone());
        storage::set_state(&env, registry_id, &state);

        events::emit_event_cancelled(&env, registry_id, organizer, reason);

        Ok(())
    }

    /// Withdraw the accrued face value of checked-in tickets. Checked-in
    /// tickets can never be refunded, so this never touches escrow backing
    /// outstanding tickets.
    pub fn withdraw_proceeds(env: Env, registry_id: u64, organizer: Address) -> Result<i128, Error> {
        Self::require_organizer(&env, registry_id, &organizer)?;
        let mut state = Self::load_state(&env, registry_id)?;

        let amount = state.unclaimed_proceeds;
        state.unclaimed_proceeds = 0;
        storage::set_state(&env, registry_id, &state);

        if amount > 0 {
            let token_client = token::Client::new(&env, &storage::get_payment_token(&env));
            token_client.transfer(&env.current_contract_address(), &organizer, &amount);
        }

        events::emit_proceeds_withdrawn(&env, registry_id, organizer, amount);

        Ok(amount)
    }

    /// Update the metadata URI prefix. No economic effect.
    pub fn set_base_uri(env: Env, registry_id: u64, organizer: Address, uri: String) -> Result<(), Error> {
        Self::require_organizer(&env, registry_id, &organizer)?;

        if uri.len() > MAX_URI_LENGTH {
            return Err(Error::UriTooLong);
        }

        storage::set_base_uri(&env, registry_id, &uri);
        events::emit_base_uri_updated(&env, registry_id);

        Ok(())
    }

    /// Direct ownership transfer is deliberately unsupported. Every
    /// ownership change must flow through `resale_ticket`, which enforces
    /// the price cap and fee split, or through a refund.
    pub fn transfer_ticket(
        _env: Env,
        _registry_id: u64,
        _ticket_id: u32,
        _from: Address,
        _to: Address,
    ) -> Result<(), Error> {
        Err(Error::TransfersRestricted)
    }

    // ========== QUERIES ==========

    /// Immutable configuration of one registry
    pub fn get_event_info(env: Env, registry_id: u64) -> Result<EventConfig, Error> {
        Self::load_config(&env, registry_id)
    }

    /// Runtime counters and cancellation state of one registry
    pub fn get_registry_state(env: Env, registry_id: u64) -> Result<RegistryState, Error> {
        Self::load_state(&env, registry_id)
    }

    /// Anti-scalping parameters of one registry
    pub fn get_resale_rules(env: Env, registry_id: u64) -> Result<ResaleRules, Error> {
        let config = Self::load_config(&env, registry_id)?;
        let max_resale_price = config
            .max_resale_price(config.ticket_price)
            .ok_or(Error::AmountOverflow)?;
        Ok(ResaleRules {
            max_resale_percent: config.max_resale_percent,
            organizer_fee_percent: config.organizer_fee_percent,
            max_resale_price,
        })
    }

    /// Ticket metadata by id
    pub fn get_ticket(env: Env, registry_id: u64, ticket_id: u32) -> Result<Ticket, Error> {
        Self::load_ticket(&env, registry_id, ticket_id)
    }

    /// Whether the ticket has been used at the venue
    pub fn is_checked_in(env: Env, registry_id: u64, ticket_id: u32) -> Result<bool, Error> {
        let ticket = Self::load_ticket(&env, registry_id, ticket_id)?;
        Ok(ticket.state == TicketState::CheckedIn)
    }

    /// Metadata URI for one ticket: base prefix, `/`, decimal ticket id
    pub fn ticket_uri(env: Env, registry_id: u64, ticket_id: u32) -> Result<String, Error> {
        let ticket = Self::load_ticket(&env, registry_id, ticket_id)?;
        let base = storage::get_base_uri(&env, registry_id).unwrap_or(String::from_str(&env, ""));
        Ok(Self::compose_ticket_uri(&env, &base, ticket.id))
    }

    /// Factory authorized to create registries
    pub fn get_factory(env: Env) -> Result<Address, Error> {
        if !storage::is_initialized(&env) {
            return Err(Error::NotInitialized);
        }
        Ok(storage::get_factory(&env))
    }

    /// Platform payment token
    pub fn get_payment_token(env: Env) -> Result<Address, Error> {
        if !storage::is_initialized(&env) {
            return Err(Error::NotInitialized);
        }
        Ok(storage::get_payment_token(&env))
    }

    /// Total registries ever created
    pub fn get_total_registries(env: Env) -> u64 {
        storage::get_registry_counter(&env)
    }

    // ========== INTERNAL HELPERS ==========

    fn require_initialized(env: &Env) -> Result<(), Error> {
        if !storage::is_initialized(env) {
            return Err(Error::NotInitialized);
        }
        Ok(())
    }

    fn require_factory(env: &Env, caller: &Address) -> Result<(), Error> {
        caller.require_auth();
        let factory = storage::get_factory(env);
        if *caller != factory {
            return Err(Error::CallerNotFactory);
        }
        Ok(())
    }

    /// Authorize `organizer` for one registry. Organizer authority is
    /// scoped per registry; the organizer of one event holds no role on
    /// any other.
    fn require_organizer(env: &Env, registry_id: u64, organizer: &Address) -> Result<EventConfig, Error> {
        organizer.require_auth();
        let config = Self::load_config(env, registry_id)?;
        if *organizer != config.organizer {
            return Err(Error::Unauthorized);
        }
        Ok(config)
    }

    fn load_config(env: &Env, registry_id: u64) -> Result<EventConfig, Error> {
        storage::get_config(env, registry_id).ok_or(Error::RegistryNotFound)
    }

    fn load_state(env: &Env, registry_id: u64) -> Result<RegistryState, Error> {
        storage::get_state(env, registry_id).ok_or(Error::RegistryNotFound)
    }

    fn load_ticket(env: &Env, registry_id: u64, ticket_id: u32) -> Result<Ticket, Error> {
        // Distinguish an unknown registry from an unminted ticket id.
        Self::load_config(env, registry_id)?;
        storage::get_ticket(env, registry_id, ticket_id).ok_or(Error::TicketNotFound)
    }

    /// Shared refund routine for the live and post-cancellation paths.
    /// Pays exactly the face value, regardless of the last price paid;
    /// the ticket identity is retired and ownership cleared.
    fn execute_refund(
        env: &Env,
        registry_id: u64,
        ticket_id: u32,
        holder: Address,
        expect_cancelled: bool,
    ) -> Result<(), Error> {
        holder.require_auth();

        Self::load_config(env, registry_id)?;
        let mut state = Self::load_state(env, registry_id)?;

        if expect_cancelled && !state.cancelled {
            return Err(Error::EventNotCancelled);
        }
        if !expect_cancelled && state.cancelled {
            return Err(Error::EventCancelled);
        }

        let mut ticket = Self::load_ticket(env, registry_id, ticket_id)?;
        if ticket.state != TicketState::Sold {
            return Err(Error::TicketNotActive);
        }
        let owner = ticket.owner.clone().ok_or(Error::TicketNotActive)?;
        if owner != holder {
            return Err(Error::Unauthorized);
        }

        let amount = ticket.original_price;

        ticket.state = TicketState::Refunded;
        ticket.owner = None;
        state.outstanding -= 1;

        storage::set_ticket(env, registry_id, &ticket);
        storage::set_state(env, registry_id, &state);

        // State is final before escrow pays out.
        let token_client = token::Client::new(env, &storage::get_payment_token(env));
        token_client.transfer(&env.current_contract_address(), &holder, &amount);

        events::emit_ticket_refunded(env, registry_id, ticket_id, holder, amount, state.cancelled);

        Ok(())
    }

    fn compose_ticket_uri(env: &Env, base: &String, ticket_id: u32) -> String {
        let base_len = base.len() as usize;
        let mut buf = [0u8; MAX_URI_LENGTH as usize + 12];
        base.copy_into_slice(&mut buf[..base_len]);

        let mut pos = base_len;
        if base_len > 0 {
            buf[pos] = b'/';
            pos += 1;
        }

        let mut digits = [0u8; 10];
        let mut n = ticket_id;
        let mut count = 0;
        loop {
            digits[count] = b'0' + (n % 10) as u8;
            n /= 10;
            count += 1;
            if n == 0 {
                break;
            }
        }
        while count > 0 {
            count -= 1;
            buf[pos] = digits[count];
            pos += 1;
        }

        String::from_bytes(env, &buf[..pos])
    }
}

#[cfg(test)]
mod test;
