use soroban_sdk::{testutils::Address as _, Address, String};

use crate::test::{create_default_registry, funded_address, setup_test, MAX_SUPPLY, TICKET_PRICE};
use crate::types::TicketState;

#[test]
fn test_initialization() {
    let (_env, client, factory, _organizer, token, _token_admin) = setup_test();

    assert_eq!(client.get_factory(), factory);
    assert_eq!(client.get_payment_token(), token.address);
    assert_eq!(client.get_total_registries(), 0);
}

#[test]
#[should_panic(expected = "Error(Contract, #100)")] // AlreadyInitialized
fn test_double_initialization() {
    let (_env, client, factory, _organizer, token, _token_admin) = setup_test();

    client.initialize(&factory, &token.address);
}

#[test]
fn test_create_registry() {
    let (env, client, factory, organizer, _token, _token_admin) = setup_test();

    let registry_id = create_default_registry(&env, &client, &factory, &organizer);

    assert_eq!(registry_id, 1);
    assert_eq!(client.get_total_registries(), 1);

    let config = client.get_event_info(&registry_id);
    assert_eq!(config.name, String::from_str(&env, "Launch Night"));
    assert_eq!(config.symbol, String::from_str(&env, "LNX"));
    assert_eq!(config.max_supply, MAX_SUPPLY);
    assert_eq!(config.ticket_price, TICKET_PRICE);
    assert_eq!(config.organizer, organizer);

    let state = client.get_registry_state(&registry_id);
    assert_eq!(state.total_minted, 0);
    assert_eq!(state.outstanding, 0);
    assert_eq!(state.checked_in, 0);
    assert_eq!(state.cancelled, false);
    assert_eq!(state.unclaimed_proceeds, 0);
    assert_eq!(state.cancel_reason, None);
}

#[test]
fn test_registry_handles_are_sequential() {
    let (env, client, factory, organizer, _token, _token_admin) = setup_test();

    let first = create_default_registry(&env, &client, &factory, &organizer);
    let second = create_default_registry(&env, &client, &factory, &organizer);
    let third = create_default_registry(&env, &client, &factory, &organizer);

    assert_eq!((first, second, third), (1, 2, 3));
    assert_eq!(client.get_total_registries(), 3);
}

#[test]
#[should_panic(expected = "Error(Contract, #103)")] // CallerNotFactory
fn test_create_registry_rejects_non_factory() {
    let (env, client, _factory, organizer, _token, _token_admin) = setup_test();

    let intruder = Address::generate(&env);
    create_default_registry(&env, &client, &intruder, &organizer);
}

#[test]
#[should_panic(expected = "Error(Contract, #117)")] // InvalidParams
fn test_create_registry_rejects_zero_supply() {
    let (env, client, factory, organizer, _token, _token_admin) = setup_test();

    client.create_registry(
        &factory,
        &String::from_str(&env, "Launch Night"),
        &String::from_str(&env, "LNX"),
        &0,
        &TICKET_PRICE,
        &organizer,
        &String::from_str(&env, "ipfs://launch-night"),
        &110,
        &10,
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #117)")] // InvalidParams
fn test_create_registry_rejects_empty_name() {
    let (env, client, factory, organizer, _token, _token_admin) = setup_test();

    client.create_registry(
        &factory,
        &String::from_str(&env, ""),
        &String::from_str(&env, "LNX"),
        &MAX_SUPPLY,
        &TICKET_PRICE,
        &organizer,
        &String::from_str(&env, "ipfs://launch-night"),
        &110,
        &10,
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #104)")] // RegistryNotFound
fn test_unknown_registry_rejected() {
    let (env, client, _factory, _organizer, _token, token_admin) = setup_test();

    let buyer = funded_address(&env, &token_admin, TICKET_PRICE);
    client.mint_ticket(&99, &buyer, &TICKET_PRICE);
}

#[test]
fn test_registries_are_isolated() {
    let (env, client, factory, organizer, _token, token_admin) = setup_test();

    let first = create_default_registry(&env, &client, &factory, &organizer);
    let second = create_default_registry(&env, &client, &factory, &organizer);

    let buyer = funded_address(&env, &token_admin, 2 * TICKET_PRICE);
    client.mint_ticket(&first, &buyer, &TICKET_PRICE);
    client.mint_ticket(&first, &buyer, &TICKET_PRICE);

    assert_eq!(client.get_registry_state(&first).total_minted, 2);
    assert_eq!(client.get_registry_state(&second).total_minted, 0);

    // Ticket ids restart per registry.
    let ticket = client.get_ticket(&first, &1);
    assert_eq!(ticket.id, 1);
    assert_eq!(ticket.state, TicketState::Sold);
}
