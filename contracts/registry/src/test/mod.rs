pub mod metadata_test;
pub mod mint_test;
pub mod registry_test;

use soroban_sdk::{testutils::Address as _, token, Address, Env, String};

use crate::{TicketRegistry, TicketRegistryClient};

pub const TICKET_PRICE: i128 = 1_000;
pub const MAX_SUPPLY: u32 = 5;
pub const RESALE_CAP_PERCENT: u32 = 110;
pub const ORGANIZER_FEE_PERCENT: u32 = 10;

pub fn setup_test() -> (
    Env,
    TicketRegistryClient<'static>,
    Address,
    Address,
    token::TokenClient<'static>,
    token::StellarAssetClient<'static>,
) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(TicketRegistry, ());
    let client = TicketRegistryClient::new(&env, &contract_id);

    let factory = Address::generate(&env);
    let organizer = Address::generate(&env);

    let token_admin = Address::generate(&env);
    let token_contract = env.register_stellar_asset_contract_v2(token_admin.clone());
    let token = token::TokenClient::new(&env, &token_contract.address());
    let token_admin_client = token::StellarAssetClient::new(&env, &token_contract.address());

    client.initialize(&factory, &token_contract.address());

    (env, client, factory, organizer, token, token_admin_client)
}

/// Create a registry with the default test parameters and return its handle.
pub fn create_default_registry(
    env: &Env,
    client: &TicketRegistryClient,
    factory: &Address,
    organizer: &Address,
) -> u64 {
    client.create_registry(
        factory,
        &String::from_str(env, "Launch Night"),
        &String::from_str(env, "LNX"),
        &MAX_SUPPLY,
        &TICKET_PRICE,
        organizer,
        &String::from_str(env, "ipfs://launch-night"),
        &RESALE_CAP_PERCENT,
        &ORGANIZER_FEE_PERCENT,
    )
}

/// Generate a fresh address holding `amount` of the payment token.
pub fn funded_address(
    env: &Env,
    token_admin_client: &token::StellarAssetClient,
    amount: i128,
) -> Address {
    let addr = Address::generate(env);
    token_admin_client.mint(&addr, &amount);
    addr
}
