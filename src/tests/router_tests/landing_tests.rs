use crate::errors::ServerError;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::tests::utils::{body_string, get, post_form, start_session, test_app};
use astra::Body;
use http::{Method, Request};

#[test]
fn landing_page_loads_and_starts_a_session() {
    let app = test_app();
    let resp = get(&app, "/", None);

    assert_eq!(resp.status(), 200);
    let cookie = resp
        .headers()
        .get("set-cookie")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(cookie.starts_with("wisepick_session="));

    let body = body_string(resp);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("See Reviews. See Prices. Decide Smarter."));
    assert!(body.contains("Why Choose WisePick?"));
    assert!(body.contains("Is WisePick free to use?"));
    assert!(body.contains("Buy Smart - It&#39;s Free!") || body.contains("Buy Smart - It's Free!"));
}

#[test]
fn returning_visitor_keeps_the_session() {
    let app = test_app();
    let cookie = start_session(&app);

    let resp = get(&app, "/", Some(&cookie));
    assert_eq!(resp.status(), 200);
    assert!(resp.headers().get("set-cookie").is_none());
}

#[test]
fn unknown_session_cookie_gets_a_fresh_session() {
    let app = test_app();
    let resp = get(&app, "/", Some("wisepick_session=forged"));
    assert!(resp.headers().get("set-cookie").is_some());
}

#[test]
fn buy_smart_switches_to_the_search_view() {
    let app = test_app();
    let cookie = start_session(&app);

    let resp = post_form(&app, "/navigate/search", "", &cookie, false);
    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers().get("location").unwrap().to_str().unwrap(), "/");

    let body = body_string(get(&app, "/", Some(&cookie)));
    assert!(body.contains("Hi Alex, ready to shop smarter?"));
    assert!(body.contains("Welcome back"));
    assert!(body.contains("Your personalized product details and best deals will appear here."));
    assert!(!body.contains("Why Choose WisePick?"));
}

#[test]
fn faq_toggle_returns_the_accordion_partial() {
    let app = test_app();
    let cookie = start_session(&app);
    let answer = "WisePick learns your buyer style";

    let body = body_string(post_form(&app, "/faq/1", "", &cookie, true));
    assert!(body.contains(answer));
    assert!(!body.contains("<!DOCTYPE html>"));

    let body = body_string(post_form(&app, "/faq/2", "", &cookie, true));
    assert!(!body.contains(answer));
    assert!(body.contains("electronics, clothing, accessories"));

    let body = body_string(post_form(&app, "/faq/2", "", &cookie, true));
    assert!(!body.contains("faq-answer"));
}

#[test]
fn faq_toggle_without_htmx_redirects_and_persists() {
    let app = test_app();
    let cookie = start_session(&app);

    let resp = post_form(&app, "/faq/0", "", &cookie, false);
    assert_eq!(resp.status(), 303);

    let body = body_string(get(&app, "/", Some(&cookie)));
    assert!(body.contains("completely free for all users"));
}

#[test]
fn faq_rejects_bad_indexes() {
    let app = test_app();
    let cookie = start_session(&app);

    let out_of_range = Request::builder()
        .method(Method::POST)
        .uri("/faq/9")
        .header("cookie", cookie.as_str())
        .body(Body::empty())
        .unwrap();
    assert!(matches!(handle(out_of_range, &app), Err(ServerError::NotFound)));

    let garbage = Request::builder()
        .method(Method::POST)
        .uri("/faq/first")
        .header("cookie", cookie.as_str())
        .body(Body::empty())
        .unwrap();
    assert!(matches!(handle(garbage, &app), Err(ServerError::BadRequest(_))));
}

#[test]
fn mobile_menu_toggles() {
    let app = test_app();
    let cookie = start_session(&app);

    let body = body_string(post_form(&app, "/menu", "", &cookie, true));
    assert!(body.contains("Close menu"));
    assert!(body.contains("mobile-menu"));

    let body = body_string(post_form(&app, "/menu", "", &cookie, true));
    assert!(body.contains("Open menu"));
    assert!(!body.contains("class=\"mobile-menu"));
}

#[test]
fn unknown_route_is_not_found() {
    let app = test_app();
    let req = Request::builder()
        .method(Method::GET)
        .uri("/nowhere")
        .body(Body::empty())
        .unwrap();

    let err = handle(req, &app).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));

    let resp = error_to_response(err);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Error 404"));
}

#[test]
fn cookieless_failures_leave_no_sessions_behind() {
    let app = test_app();

    for _ in 0..50 {
        let req = Request::builder()
            .method(Method::GET)
            .uri("/robots.txt")
            .body(Body::empty())
            .unwrap();
        assert!(matches!(handle(req, &app), Err(ServerError::NotFound)));
    }

    for uri in ["/faq/abc", "/faq/99"] {
        let req = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("hx-request", "true")
            .body(Body::empty())
            .unwrap();
        assert!(handle(req, &app).is_err(), "{uri}");
    }

    assert_eq!(app.sessions.len(), 0);

    // A successful first visit still gets one.
    start_session(&app);
    assert_eq!(app.sessions.len(), 1);
}
