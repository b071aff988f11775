use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, post_form, start_session, test_app, wait_for_results};
use astra::Body;
use http::{Method, Request};

fn search_session() -> (crate::app::App, String) {
    let app = test_app();
    let cookie = start_session(&app);
    post_form(&app, "/navigate/search", "", &cookie, false);
    (app, cookie)
}

#[test]
fn empty_submission_shows_the_inline_error_and_keeps_the_prompt() {
    let (app, cookie) = search_session();

    let resp = post_form(&app, "/search/submit", "query=+++&details=", &cookie, true);
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Please tell us what you want to buy!"));
    assert!(body.contains("Your personalized product details and best deals will appear here."));
    assert!(!body.contains("panel-loading"));
    assert!(!body.contains("<!DOCTYPE html>"));
}

#[test]
fn submission_loads_then_renders_three_results() {
    let (app, cookie) = search_session();

    let body = body_string(post_form(&app, "/search/submit", "query=desk+lamp", &cookie, true));
    assert!(body.contains("Finding the best deals for you..."));
    assert!(body.contains("Searching..."));
    assert!(!body.contains("Please tell us what you want to buy!"));

    let body = wait_for_results(&app, &cookie);
    assert_eq!(body.matches("class=\"product-card\"").count(), 3);
    assert!(body.contains("desk lamp - Premium Model"));
    assert!(body.contains("desk lamp - Previous Gen"));
    assert!(body.contains("Sold by Best Buy"));
    assert!(body.contains("2,847 reviews"));
    // Submit button comes back enabled out of band.
    assert!(body.contains("hx-swap-oob=\"true\""));
    assert!(body.contains("Search Smart"));
}

#[test]
fn iphone_search_shows_the_branded_results() {
    let (app, cookie) = search_session();

    post_form(&app, "/search/submit", "query=iPhone+16", &cookie, true);
    let body = wait_for_results(&app, &cookie);

    assert!(body.contains("iPhone 16 Pro 128GB Black"));
    assert!(body.contains("$999"));
    assert!(body.contains("4.8 (2,847 reviews)"));
    assert!(body.contains("17% OFF"));
}

#[test]
fn query_typed_earlier_is_used_when_submit_omits_it() {
    let (app, cookie) = search_session();

    let resp = post_form(&app, "/search/query", "query=standing+desk", &cookie, true);
    assert_eq!(resp.status(), 204);
    let resp = post_form(&app, "/search/details", "details=oak+top", &cookie, true);
    assert_eq!(resp.status(), 204);

    post_form(&app, "/search/submit", "", &cookie, true);
    let body = wait_for_results(&app, &cookie);
    assert!(body.contains("standing desk - Standard Model"));

    let page = body_string(get(&app, "/", Some(&cookie)));
    assert!(page.contains("value=\"standing desk\""));
    assert!(page.contains("oak top"));
}

#[test]
fn plain_form_submission_redirects_home() {
    let (app, cookie) = search_session();

    let resp = post_form(&app, "/search/submit", "query=kettle", &cookie, false);
    assert_eq!(resp.status(), 303);

    wait_for_results(&app, &cookie);
    let page = body_string(get(&app, "/", Some(&cookie)));
    assert!(page.contains("kettle - Premium Model"));
}

#[test]
fn urgency_selection_is_exclusive() {
    let (app, cookie) = search_session();

    let body = body_string(post_form(&app, "/search/urgency", "urgency=standard", &cookie, true));
    assert_eq!(body.matches("aria-pressed=\"true\"").count(), 1);
    assert!(body.contains("urgency-standard"));

    let body = body_string(post_form(&app, "/search/urgency", "urgency=urgent", &cookie, true));
    assert_eq!(body.matches("aria-pressed=\"true\"").count(), 1);
    assert!(body.contains("urgency-urgent"));
    assert!(!body.contains("choice-active urgency-standard"));
}

#[test]
fn priority_buttons_toggle() {
    let (app, cookie) = search_session();

    let body = body_string(post_form(&app, "/search/priority", "priority=price", &cookie, true));
    assert_eq!(body.matches("aria-pressed=\"true\"").count(), 1);

    let body = body_string(post_form(&app, "/search/priority", "priority=offers", &cookie, true));
    assert_eq!(body.matches("aria-pressed=\"true\"").count(), 2);

    let body = body_string(post_form(&app, "/search/priority", "priority=price", &cookie, true));
    assert_eq!(body.matches("aria-pressed=\"true\"").count(), 1);
}

#[test]
fn unknown_choice_values_are_bad_requests() {
    let (app, cookie) = search_session();

    for (uri, form) in [
        ("/search/urgency", "urgency=yesterday"),
        ("/search/priority", "priority=vibes"),
        ("/search/priority", ""),
    ] {
        let req = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("cookie", cookie.as_str())
            .header("hx-request", "true")
            .body(Body::from(form.as_bytes().to_vec()))
            .unwrap();
        assert!(matches!(handle(req, &app), Err(ServerError::BadRequest(_))), "{uri} {form}");
    }
}

#[test]
fn results_panel_starts_as_the_prompt() {
    let (app, cookie) = search_session();
    let body = body_string(get(&app, "/search/results", Some(&cookie)));
    assert!(body.contains("panel-prompt"));
    assert!(!body.contains("panel-results"));
}

#[test]
fn oversized_form_is_rejected_without_touching_the_session() {
    let (app, cookie) = search_session();
    post_form(&app, "/search/details", "details=oak+top", &cookie, true);

    let form = format!("details={}", "a".repeat(20_000));
    let req = Request::builder()
        .method(Method::POST)
        .uri("/search/details")
        .header("cookie", cookie.as_str())
        .header("hx-request", "true")
        .body(Body::from(form.into_bytes()))
        .unwrap();

    let err = handle(req, &app).unwrap_err();
    assert!(matches!(err, ServerError::PayloadTooLarge));
    assert_eq!(err.status(), 413);

    let token = cookie.split_once('=').unwrap().1;
    let details = app
        .sessions
        .with_session(token, |s| Ok(s.search.intent().details.clone()))
        .unwrap();
    assert_eq!(details, "oak top");
}
