use crate::errors::ServerError;
use crate::router::{handle, respond};
use crate::tests::utils::{body_string, card_ids, failing_state, get, init_test_state};

#[test]
fn unfiltered_page_lists_whole_snapshot_in_order() {
    let state = init_test_state();

    let resp = handle(get("/listings"), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert_eq!(card_ids(&body), ["a", "b", "c", "d", "e", "f", "g", "h"]);
    assert!(!body.contains("Showing"), "No count line without active filters");
    assert!(body.contains("Filter Rental Properties"));
}

#[test]
fn location_search_ignores_case() {
    let state = init_test_state();

    for query in ["dhaka", "DHAKA", "Dha"] {
        let resp = handle(get(&format!("/listings?location={query}")), &state).unwrap();
        let body = body_string(resp);
        assert_eq!(card_ids(&body), ["a", "b"], "query {query:?}");
    }

    let body = body_string(handle(get("/listings?location=dhaka"), &state).unwrap());
    assert!(body.contains("Showing <strong>2</strong> of 8 listings"));
    // Form keeps what the user typed.
    assert!(body.contains(r#"value="dhaka""#));
}

#[test]
fn whitespace_location_narrows_to_multi_word_locations() {
    let state = init_test_state();

    let body = body_string(handle(get("/listings?location=+"), &state).unwrap());
    // "e" (Banani) has no space in its location.
    assert_eq!(card_ids(&body), ["a", "b", "c", "d", "f", "g", "h"]);
    assert!(body.contains("Showing <strong>7</strong> of 8 listings"));
}

#[test]
fn price_range_is_inclusive() {
    let state = init_test_state();

    let body = body_string(handle(get("/listings?max_price=20000"), &state).unwrap());
    assert_eq!(card_ids(&body), ["a", "c", "d", "g"]);

    let body = body_string(handle(get("/listings?min_price=50000&max_price=50000"), &state).unwrap());
    assert_eq!(card_ids(&body), ["h"]);

    let body = body_string(handle(get("/listings?min_price=0&max_price=49999&location=khulshi"), &state).unwrap());
    assert!(card_ids(&body).is_empty());
}

#[test]
fn five_bedrooms_means_exactly_five() {
    let state = init_test_state();

    let body = body_string(handle(get("/listings?bedrooms=5"), &state).unwrap());
    assert_eq!(card_ids(&body), ["e"]);
    assert!(body.contains(r#"<option value="5" selected>5+</option>"#));
}

#[test]
fn combined_filters_and_empty_result() {
    let state = init_test_state();

    let body = body_string(
        handle(get("/listings?location=chattogram&max_price=20000&bedrooms=2"), &state).unwrap(),
    );
    assert_eq!(card_ids(&body), ["c"]);

    let body = body_string(handle(get("/listings?location=rajshahi"), &state).unwrap());
    assert!(card_ids(&body).is_empty());
    assert!(body.contains("No listings match your search criteria."));
}

#[test]
fn reset_link_brings_back_everything() {
    let state = init_test_state();

    let narrowed = body_string(handle(get("/listings?location=banani"), &state).unwrap());
    assert_eq!(card_ids(&narrowed), ["e"]);
    assert!(narrowed.contains(r#"<a href="/listings" class="btn outline">Reset</a>"#));

    let reset = body_string(handle(get("/listings"), &state).unwrap());
    assert_eq!(card_ids(&reset), ["a", "b", "c", "d", "e", "f", "g", "h"]);
}

#[test]
fn bad_filter_input_is_rejected() {
    let state = init_test_state();

    match handle(get("/listings?min_price=abc"), &state) {
        Err(ServerError::BadRequest(msg)) => assert!(msg.contains("min_price")),
        other => panic!("expected BadRequest, got: {:?}", other.map(|r| r.status())),
    }

    let resp = respond(get("/listings?bedrooms=many"), &state);
    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("bedrooms"));
}

#[test]
fn listing_outage_renders_notice_and_empty_grid() {
    let state = failing_state();

    let resp = respond(get("/listings?location=dhaka"), &state);
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("could not load listings"));
    assert!(body.contains("No listings match your search criteria."));
}

#[test]
fn cards_show_rent_cover_and_amenity_overflow() {
    let state = init_test_state();

    let body = body_string(handle(get("/listings?location=dhanmondi"), &state).unwrap());
    assert!(body.contains("৳15,000"));
    assert!(body.contains(r#"src="https://img.example.com/a1.jpg""#));
    assert!(body.contains("+1 more"));
    assert!(body.contains(r#"href="/listings/a""#));
}
