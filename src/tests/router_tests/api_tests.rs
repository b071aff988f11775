use crate::app::App;
use crate::config::AppConfig;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, test_app};
use astra::Body;
use http::{Method, Request};
use serde_json::Value;
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

#[test]
fn api_search_returns_camel_case_results() {
    let app = test_app();
    let resp = get(&app, "/api/search?q=iPhone%2016&priority=price&urgency=urgent", None);

    assert_eq!(resp.status(), 200);
    assert!(resp.headers().get("set-cookie").is_none());

    let json: Value = serde_json::from_str(&body_string(resp)).unwrap();
    let results = json["results"].as_array().unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0]["name"], "iPhone 16 Pro 128GB Black");
    assert_eq!(results[0]["price"], "$999");
    assert_eq!(results[0]["originalPrice"], "$1,199");
    assert_eq!(results[0]["reviewCount"], 2847);
    assert_eq!(json["intent"]["urgency"], "urgent");
    assert_eq!(json["intent"]["priorities"][0], "price");
}

#[test]
fn api_search_rejects_an_empty_query() {
    let app = test_app();
    let resp = get(&app, "/api/search?q=%20%20", None);

    assert_eq!(resp.status(), 400);
    let json: Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert_eq!(json["error"], "Please tell us what you want to buy!");
}

#[test]
fn stylesheet_and_health_are_served() {
    let app = test_app();

    let css = get(&app, "/static/main.css", None);
    assert_eq!(css.status(), 200);
    assert!(css
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .starts_with("text/css"));

    let health = get(&app, "/healthz", None);
    assert_eq!(body_string(health), "ok");
}

fn app_with_static_dir(dir: PathBuf) -> App {
    App::new(AppConfig {
        search_delay: Duration::ZERO,
        static_dir: dir,
        ..AppConfig::default()
    })
}

#[test]
fn htmx_is_served_from_the_static_dir() {
    let dir = std::env::temp_dir().join(format!(
        "wisepick_static_{}",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("htmx.js"), "var htmx = {};").unwrap();

    let app = app_with_static_dir(dir.clone());
    let resp = get(&app, "/static/htmx.js", None);
    assert_eq!(resp.status(), 200);
    assert!(resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .contains("javascript"));
    assert!(resp.headers().get("set-cookie").is_none());
    assert_eq!(body_string(resp), "var htmx = {};");

    let page = body_string(get(&app, "/", None));
    assert!(page.contains("src=\"/static/htmx.js\""));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn missing_htmx_file_is_not_found() {
    let app = app_with_static_dir(std::env::temp_dir().join("wisepick_static_missing"));
    let req = Request::builder()
        .method(Method::GET)
        .uri("/static/htmx.js")
        .body(Body::empty())
        .unwrap();

    assert!(matches!(handle(req, &app), Err(ServerError::NotFound)));
    assert_eq!(app.sessions.len(), 0);
}
