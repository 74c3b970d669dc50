use soroban_sdk::String;

use crate::test::{
    create_default_registry, funded_address, setup_test, MAX_SUPPLY, TICKET_PRICE,
};
use crate::types::TicketState;

#[test]
fn test_mint_assigns_sequential_ids() {
    let (env, client, factory, organizer, _token, token_admin) = setup_test();
    let registry_id = create_default_registry(&env, &client, &factory, &organizer);

    let first_buyer = funded_address(&env, &token_admin, TICKET_PRICE);
    let second_buyer = funded_address(&env, &token_admin, TICKET_PRICE);
    let third_buyer = funded_address(&env, &token_admin, TICKET_PRICE);

    assert_eq!(client.mint_ticket(&registry_id, &first_buyer, &TICKET_PRICE), 1);
    assert_eq!(client.mint_ticket(&registry_id, &second_buyer, &TICKET_PRICE), 2);
    assert_eq!(client.mint_ticket(&registry_id, &third_buyer, &TICKET_PRICE), 3);

    let state = client.get_registry_state(&registry_id);
    assert_eq!(state.total_minted, 3);
    assert_eq!(state.outstanding, 3);

    let ticket = client.get_ticket(&registry_id, &2);
    assert_eq!(ticket.id, 2);
    assert_eq!(ticket.owner, Some(second_buyer));
    assert_eq!(ticket.original_price, TICKET_PRICE);
    assert_eq!(ticket.last_price_paid, TICKET_PRICE);
    assert_eq!(ticket.state, TicketState::Sold);
}

#[test]
fn test_mint_escrows_face_value() {
    let (env, client, factory, organizer, token, token_admin) = setup_test();
    let registry_id = create_default_registry(&env, &client, &factory, &organizer);

    let buyer = funded_address(&env, &token_admin, 5 * TICKET_PRICE);
    client.mint_ticket(&registry_id, &buyer, &TICKET_PRICE);

    assert_eq!(token.balance(&buyer), 4 * TICKET_PRICE);
    assert_eq!(token.balance(&client.address), TICKET_PRICE);
    // Primary-sale revenue is escrowed, not forwarded.
    assert_eq!(token.balance(&organizer), 0);
}

#[test]
#[should_panic(expected = "Error(Contract, #107)")] // PaymentMismatch
fn test_mint_rejects_underpayment() {
    let (env, client, factory, organizer, _token, token_admin) = setup_test();
    let registry_id = create_default_registry(&env, &client, &factory, &organizer);

    let buyer = funded_address(&env, &token_admin, TICKET_PRICE);
    client.mint_ticket(&registry_id, &buyer, &(TICKET_PRICE - 1));
}

#[test]
#[should_panic(expected = "Error(Contract, #107)")] // PaymentMismatch
fn test_mint_rejects_overpayment() {
    let (env, client, factory, organizer, _token, token_admin) = setup_test();
    let registry_id = create_default_registry(&env, &client, &factory, &organizer);

    let buyer = funded_address(&env, &token_admin, 2 * TICKET_PRICE);
    client.mint_ticket(&registry_id, &buyer, &(TICKET_PRICE + 1));
}

#[test]
fn test_mint_sells_out_at_max_supply() {
    let (env, client, factory, organizer, _token, token_admin) = setup_test();
    let registry_id = create_default_registry(&env, &client, &factory, &organizer);

    for _ in 0..MAX_SUPPLY {
        let buyer = funded_address(&env, &token_admin, TICKET_PRICE);
        client.mint_ticket(&registry_id, &buyer, &TICKET_PRICE);
    }

    let state = client.get_registry_state(&registry_id);
    assert_eq!(state.total_minted, MAX_SUPPLY);

    let late_buyer = funded_address(&env, &token_admin, TICKET_PRICE);
    let result = client.try_mint_ticket(&registry_id, &late_buyer, &TICKET_PRICE);
    assert_eq!(result, Err(Ok(crate::errors::Error::SoldOut)));
}

#[test]
#[should_panic(expected = "Error(Contract, #111)")] // EventCancelled
fn test_mint_after_cancellation_rejected() {
    let (env, client, factory, organizer, _token, token_admin) = setup_test();
    let registry_id = create_default_registry(&env, &client, &factory, &organizer);

    client.cancel_event(&registry_id, &organizer, &String::from_str(&env, "venue flooded"));

    let buyer = funded_address(&env, &token_admin, TICKET_PRICE);
    client.mint_ticket(&registry_id, &buyer, &TICKET_PRICE);
}

#[test]
#[should_panic(expected = "Error(Contract, #105)")] // TicketNotFound
fn test_unminted_ticket_does_not_exist() {
    let (env, client, factory, organizer, _token, _token_admin) = setup_test();
    let registry_id = create_default_registry(&env, &client, &factory, &organizer);

    client.get_ticket(&registry_id, &1);
}
