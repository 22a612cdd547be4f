use crate::router::respond;
use crate::tests::utils::{body_string, card_ids, failing_state, get, init_test_state};

#[test]
fn home_shows_six_latest_listings() {
    let state = init_test_state();

    let resp = respond(get("/"), &state);
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Latest Listings"));
    assert!(body.contains(r#"href="/listings""#));
    assert_eq!(card_ids(&body), ["a", "b", "c", "d", "e", "f"]);
}

#[test]
fn home_survives_listing_outage() {
    let state = failing_state();

    let resp = respond(get("/"), &state);
    assert_eq!(resp.status(), 200, "Fetch failures degrade to an empty page");

    let body = body_string(resp);
    assert!(body.contains("could not load listings"));
    assert!(card_ids(&body).is_empty());
}

#[test]
fn health_check_and_unknown_routes() {
    let state = init_test_state();

    let health = respond(get("/health"), &state);
    assert_eq!(health.status(), 200);
    assert_eq!(body_string(health), "ok");

    assert_eq!(respond(get("/nope"), &state).status(), 404);
}
