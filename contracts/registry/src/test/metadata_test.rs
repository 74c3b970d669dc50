use soroban_sdk::{testutils::Address as _, Address, String};

use crate::test::{
    create_default_registry, funded_address, setup_test, ORGANIZER_FEE_PERCENT,
    RESALE_CAP_PERCENT, TICKET_PRICE,
};

#[test]
fn test_ticket_uri_appends_ticket_id() {
    let (env, client, factory, organizer, _token, token_admin) = setup_test();
    let registry_id = create_default_registry(&env, &client, &factory, &organizer);

    let holder = funded_address(&env, &token_admin, 2 * TICKET_PRICE);
    client.mint_ticket(&registry_id, &holder, &TICKET_PRICE);
    client.mint_ticket(&registry_id, &holder, &TICKET_PRICE);

    assert_eq!(
        client.ticket_uri(&registry_id, &1),
        String::from_str(&env, "ipfs://launch-night/1")
    );
    assert_eq!(
        client.ticket_uri(&registry_id, &2),
        String::from_str(&env, "ipfs://launch-night/2")
    );
}

#[test]
fn test_set_base_uri_applies_to_existing_tickets() {
    let (env, client, factory, organizer, _token, token_admin) = setup_test();
    let registry_id = create_default_registry(&env, &client, &factory, &organizer);

    let holder = funded_address(&env, &token_admin, TICKET_PRICE);
    client.mint_ticket(&registry_id, &holder, &TICKET_PRICE);

    client.set_base_uri(&registry_id, &organizer, &String::from_str(&env, "ipfs://rescheduled"));

    assert_eq!(
        client.ticket_uri(&registry_id, &1),
        String::from_str(&env, "ipfs://rescheduled/1")
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")] // Unauthorized
fn test_set_base_uri_requires_organizer() {
    let (env, client, factory, organizer, _token, _token_admin) = setup_test();
    let registry_id = create_default_registry(&env, &client, &factory, &organizer);

    let stranger = Address::generate(&env);
    client.set_base_uri(&registry_id, &stranger, &String::from_str(&env, "ipfs://hijacked"));
}

#[test]
#[should_panic(expected = "Error(Contract, #115)")] // UriTooLong
fn test_set_base_uri_rejects_oversized_prefix() {
    let (env, client, factory, organizer, _token, _token_admin) = setup_test();
    let registry_id = create_default_registry(&env, &client, &factory, &organizer);

    let oversized = String::from_bytes(&env, &[b'x'; 201]);
    client.set_base_uri(&registry_id, &organizer, &oversized);
}

#[test]
fn test_resale_rules_expose_anti_scalping_config() {
    let (env, client, factory, organizer, _token, _token_admin) = setup_test();
    let registry_id = create_default_registry(&env, &client, &factory, &organizer);

    let rules = client.get_resale_rules(&registry_id);
    assert_eq!(rules.max_resale_percent, RESALE_CAP_PERCENT);
    assert_eq!(rules.organizer_fee_percent, ORGANIZER_FEE_PERCENT);
    assert_eq!(rules.max_resale_price, TICKET_PRICE * RESALE_CAP_PERCENT as i128 / 100);
}
