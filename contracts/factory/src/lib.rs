#![no_std]

use soroban_sdk::{contract, contractimpl, token, vec, Address, Env, IntoVal, Symbol, Val, Vec};

mod errors;
mod events;
mod storage;
mod types;

use errors::Error;
use types::{
    DirectoryEntry, EventParams, EventStatus, FactoryConfig, MAX_BATCH_SIZE,
    MAX_EVENTS_PER_ORGANIZER, MAX_ORGANIZER_FEE_PERCENT, MAX_RESALE_PERCENT_CEILING,
    MAX_TICKETS_PER_EVENT, MAX_URI_LENGTH, MIN_TICKET_PRICE,
};

#[contract]
pub struct EventFactory;

#[contractimpl]
impl EventFactory {
    // ========== INITIALIZATION ==========

    /// Initialize the factory with the platform owner, the ticket registry
    /// contract, and the initial platform policy.
    pub fn initialize(
        env: Env,
        owner: Address,
        registry: Address,
        payment_token: Address,
        global_max_resale_percent: u32,
        default_organizer_fee_percent: u32,
        event_creation_fee: i128,
    ) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }

        owner.require_auth();

        if global_max_resale_percent > MAX_RESALE_PERCENT_CEILING {
            return Err(Error::InvalidCeiling);
        }
        if default_organizer_fee_percent > MAX_ORGANIZER_FEE_PERCENT {
            return Err(Error::OrganizerFeeTooHigh);
        }
        if event_creation_fee < 0 {
            return Err(Error::InvalidCeiling);
        }

        let config = FactoryConfig {
            owner: owner.clone(),
            registry: registry.clone(),
            payment_token,
            global_max_resale_percent,
            default_organizer_fee_percent,
            event_creation_fee,
            paused: false,
            updated_at: env.ledger().timestamp(),
        };

        storage::set_config(&env, &config);
        storage::set_initialized(&env);

        events::emit_factory_initialized(&env, owner, registry);

        Ok(())
    }

    // ========== EVENT CREATION ==========

    /// Validate `params` against the platform policy, collect the creation
    /// fee, instantiate a registry for the event, and record a directory
    /// entry. Returns the new event id.
    pub fn create_event(
        env: Env,
        creator: Address,
        params: EventParams,
        fee_payment: i128,
    ) -> Result<u64, Error> {
        creator.require_auth();

        let config = storage::get_config(&env).ok_or(Error::NotInitialized)?;
        if config.paused {
            return Err(Error::FactoryPaused);
        }

        let params = Self::apply_fee_default(&params, &config);
        Self::validate_params(&params, &config)?;

        if storage::get_organizer_events(&env, &params.organizer).len() >= MAX_EVENTS_PER_ORGANIZER {
            return Err(Error::OrganizerEventLimit);
        }

        if fee_payment != config.event_creation_fee {
            return Err(Error::FeeMismatch);
        }

        let event_id = Self::record_event(&env, &config, &params);

        storage::add_fees(&env, config.event_creation_fee);

        // Directory and accrual are final before the fee moves.
        if config.event_creation_fee > 0 {
            let token_client = token::Client::new(&env, &config.payment_token);
            token_client.transfer(&creator, &env.current_contract_address(), &config.event_creation_fee);
            events::emit_creation_fee_collected(&env, creator, config.event_creation_fee);
        }

        Ok(event_id)
    }

    /// Create several events atomically. Every candidate is validated
    /// before any registry is created; one invalid candidate rejects the
    /// whole batch with that candidate's error.
    pub fn batch_create_events(
        env: Env,
        creator: Address,
        candidates: Vec<EventParams>,
        fee_payment: i128,
    ) -> Result<Vec<u64>, Error> {
        creator.require_auth();

        let config = storage::get_config(&env).ok_or(Error::NotInitialized)?;
        if config.paused {
            return Err(Error::FactoryPaused);
        }

        if candidates.is_empty() {
            return Err(Error::EmptyBatch);
        }
        if candidates.len() > MAX_BATCH_SIZE {
            return Err(Error::BatchTooLarge);
        }

        // First pass: validate every candidate, counting earlier batch
        // entries against the per-organizer limit.
        let mut accepted: Vec<EventParams> = Vec::new(&env);
        for candidate in candidates.iter() {
            let params = Self::apply_fee_default(&candidate, &config);
            Self::validate_params(&params, &config)?;

            let mut queued = 0u32;
            for earlier in accepted.iter() {
                if earlier.organizer == params.organizer {
                    queued += 1;
                }
            }
            if storage::get_organizer_events(&env, &params.organizer).len() + queued
                >= MAX_EVENTS_PER_ORGANIZER
            {
                return Err(Error::OrganizerEventLimit);
            }

            accepted.push_back(params);
        }

        let total_fee = config
            .event_creation_fee
            .checked_mul(accepted.len() as i128)
            .ok_or(Error::AmountOverflow)?;
        if fee_payment != total_fee {
            return Err(Error::FeeMismatch);
        }

        // Second pass: commit.
        let mut event_ids = Vec::new(&env);
        for params in accepted.iter() {
            event_ids.push_back(Self::record_event(&env, &config, &params));
        }

        storage::add_fees(&env, total_fee);

        if total_fee > 0 {
            let token_client = token::Client::new(&env, &config.payment_token);
            token_client.transfer(&creator, &env.current_contract_address(), &total_fee);
            events::emit_creation_fee_collected(&env, creator, total_fee);
        }

        Ok(event_ids)
    }

    // ========== PLATFORM POLICY ==========

    /// Update the global resale ceiling for subsequent creations. Existing
    /// registries keep the cap they were created with.
    pub fn set_global_max_resale_percent(env: Env, owner: Address, new_percent: u32) -> Result<(), Error> {
        let mut config = Self::require_owner(&env, &owner)?;

        if new_percent > MAX_RESALE_PERCENT_CEILING {
            return Err(Error::InvalidCeiling);
        }

        config.global_max_resale_percent = new_percent;
        Self::touch_config(&env, &mut config);

        events::emit_resale_ceiling_updated(&env, new_percent);

        Ok(())
    }

    /// Update the fee percent applied to candidates that do not name one.
    pub fn set_default_organizer_fee(env: Env, owner: Address, new_percent: u32) -> Result<(), Error> {
        let mut config = Self::require_owner(&env, &owner)?;

        if new_percent > MAX_ORGANIZER_FEE_PERCENT {
            return Err(Error::OrganizerFeeTooHigh);
        }

        config.default_organizer_fee_percent = new_percent;
        Self::touch_config(&env, &mut config);

        events::emit_default_fee_updated(&env, new_percent);

        Ok(())
    }

    /// Update the per-creation fee for subsequent creations.
    pub fn set_event_creation_fee(env: Env, owner: Address, new_fee: i128) -> Result<(), Error> {
        let mut config = Self::require_owner(&env, &owner)?;

        if new_fee < 0 {
            return Err(Error::InvalidCeiling);
        }

        config.event_creation_fee = new_fee;
        Self::touch_config(&env, &mut config);

        events::emit_creation_fee_updated(&env, new_fee);

        Ok(())
    }

    /// Pause or resume new creation. Existing registries are unaffected.
    pub fn set_paused(env: Env, owner: Address, paused: bool) -> Result<(), Error> {
        let mut config = Self::require_owner(&env, &owner)?;

        config.paused = paused;
        Self::touch_config(&env, &mut config);

        events::emit_factory_paused(&env, owner, paused);

        Ok(())
    }

    /// Transfer platform ownership.
    pub fn set_owner(env: Env, owner: Address, new_owner: Address) -> Result<(), Error> {
        let mut config = Self::require_owner(&env, &owner)?;

        config.owner = new_owner.clone();
        Self::touch_config(&env, &mut config);

        events::emit_owner_changed(&env, owner, new_owner);

        Ok(())
    }

    /// Withdraw the entire accrued creation-fee balance to `recipient`.
    /// A failed transfer traps and rolls the accrual back.
    pub fn withdraw_fees(env: Env, owner: Address, recipient: Address) -> Result<i128, Error> {
        let config = Self::require_owner(&env, &owner)?;

        let amount = storage::get_fees(&env);
        storage::set_fees(&env, 0);

        if amount > 0 {
            let token_client = token::Client::new(&env, &config.payment_token);
            token_client.transfer(&env.current_contract_address(), &recipient, &amount);
        }

        events::emit_fees_withdrawn(&env, recipient, amount);

        Ok(amount)
    }

    /// Advisory directory bookkeeping: updates the entry's status and never
    /// invokes or alters the target registry, which keeps its own
    /// authoritative cancellation and supply state.
    pub fn update_event_status(
        env: Env,
        owner: Address,
        event_id: u64,
        status: EventStatus,
    ) -> Result<(), Error> {
        Self::require_owner(&env, &owner)?;

        let mut entry = storage::get_entry(&env, event_id).ok_or(Error::EventNotFound)?;
        let old_status = entry.status;
        entry.status = status;
        entry.updated_at = env.ledger().timestamp();
        storage::set_entry(&env, &entry);

        events::emit_event_status_updated(&env, event_id, old_status, status);

        Ok(())
    }

    // ========== QUERIES ==========

    /// Factory configuration
    pub fn get_config(env: Env) -> Result<FactoryConfig, Error> {
        storage::get_config(&env).ok_or(Error::NotInitialized)
    }

    /// All directory entries, in creation order
    pub fn get_deployed_events(env: Env) -> Vec<DirectoryEntry> {
        storage::list_entries(&env)
    }

    /// Event ids created for one organizer
    pub fn get_events_by_organizer(env: Env, organizer: Address) -> Vec<u64> {
        storage::get_organizer_events(&env, &organizer)
    }

    /// Directory entry by event id
    pub fn get_event_entry(env: Env, event_id: u64) -> Result<DirectoryEntry, Error> {
        storage::get_entry(&env, event_id).ok_or(Error::EventNotFound)
    }

    /// Total events ever created
    pub fn get_total_events(env: Env) -> u64 {
        storage::get_event_counter(&env)
    }

    /// Accrued, not-yet-withdrawn creation fees
    pub fn get_collected_fees(env: Env) -> i128 {
        storage::get_fees(&env)
    }

    /// Whether new creation is paused
    pub fn is_paused(env: Env) -> bool {
        storage::get_config(&env).map_or(false, |config| config.paused)
    }

    // ========== INTERNAL HELPERS ==========

    fn require_owner(env: &Env, owner: &Address) -> Result<FactoryConfig, Error> {
        owner.require_auth();
        let config = storage::get_config(env).ok_or(Error::NotInitialized)?;
        if *owner != config.owner {
            return Err(Error::Unauthorized);
        }
        Ok(config)
    }

    fn touch_config(env: &Env, config: &mut FactoryConfig) {
        config.updated_at = env.ledger().timestamp();
        storage::set_config(env, config);
    }

    /// Substitute the platform default when a candidate does not name an
    /// organizer fee.
    fn apply_fee_default(params: &EventParams, config: &FactoryConfig) -> EventParams {
        let mut params = params.clone();
        if params.organizer_fee_percent == 0 {
            params.organizer_fee_percent = config.default_organizer_fee_percent;
        }
        params
    }

    /// Field-by-field candidate validation; the first failing field names
    /// the error. Organizer addresses are structurally valid by type, so
    /// there is no zero-address case to reject.
    fn validate_params(params: &EventParams, config: &FactoryConfig) -> Result<(), Error> {
        if params.name.is_empty() {
            return Err(Error::EmptyName);
        }
        if params.symbol.is_empty() {
            return Err(Error::EmptySymbol);
        }
        if params.max_supply == 0 || params.max_supply > MAX_TICKETS_PER_EVENT {
            return Err(Error::InvalidSupply);
        }
        if params.ticket_price < MIN_TICKET_PRICE {
            return Err(Error::PriceBelowMinimum);
        }
        if params.base_uri.len() > MAX_URI_LENGTH {
            return Err(Error::UriTooLong);
        }
        if params.max_resale_percent > config.global_max_resale_percent {
            return Err(Error::ResaleCapTooHigh);
        }
        if params.organizer_fee_percent > MAX_ORGANIZER_FEE_PERCENT {
            return Err(Error::OrganizerFeeTooHigh);
        }
        Ok(())
    }

    /// Instantiate the registry for one validated candidate and record its
    /// directory entry.
    fn record_event(env: &Env, config: &FactoryConfig, params: &EventParams) -> u64 {
        let event_id = storage::increment_event_counter(env);
        let registry_id = Self::call_create_registry(env, &config.registry, params);

        let now = env.ledger().timestamp();
        let entry = DirectoryEntry {
            event_id,
            registry_id,
            organizer: params.organizer.clone(),
            name: params.name.clone(),
            ticket_price: params.ticket_price,
            max_supply: params.max_supply,
            status: EventStatus::Active,
            created_at: now,
            updated_at: now,
        };

        storage::set_entry(env, &entry);
        storage::add_organizer_event(env, &params.organizer, event_id);

        events::emit_event_created(
            env,
            event_id,
            registry_id,
            params.organizer.clone(),
            params.name.clone(),
            params.ticket_price,
            params.max_supply,
        );

        event_id
    }

    /// Call `create_registry` on the ticket registry contract.
    fn call_create_registry(env: &Env, registry: &Address, params: &EventParams) -> u64 {
        let create_fn = Symbol::new(env, "create_registry");
        let caller = env.current_contract_address();
        let args: Vec<Val> = vec![
            env,
            caller.into_val(env),
            params.name.into_val(env),
            params.symbol.into_val(env),
            params.max_supply.into_val(env),
            params.ticket_price.into_val(env),
            params.organizer.into_val(env),
            params.base_uri.into_val(env),
            params.max_resale_percent.into_val(env),
            params.organizer_fee_percent.into_val(env),
        ];
        env.invoke_contract(registry, &create_fn, args)
    }
}
