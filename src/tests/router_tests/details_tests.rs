use crate::router::respond;
use crate::tests::utils::{body_string, failing_state, get, init_test_state};

#[test]
fn details_page_shows_full_listing() {
    let state = init_test_state();

    let resp = respond(get("/listings/a"), &state);
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Bright flat near the lake"));
    assert!(body.contains("Dhanmondi, Dhaka"));
    assert!(body.contains("৳15,000"));
    // Every amenity, not just the card preview.
    assert!(body.contains("<li>Parking</li>"));
}

#[test]
fn unknown_listing_is_not_found() {
    let state = init_test_state();

    assert_eq!(respond(get("/listings/zzz"), &state).status(), 404);
    assert_eq!(respond(get("/listings/"), &state).status(), 404);
    assert_eq!(respond(get("/listings/a/extra"), &state).status(), 404);
}

#[test]
fn details_outage_is_bad_gateway() {
    let state = failing_state();

    let resp = respond(get("/listings/a"), &state);
    assert_eq!(resp.status(), 502);
    assert!(body_string(resp).contains("listings service is unavailable"));
}
