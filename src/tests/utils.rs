use crate::app::App;
use crate::config::AppConfig;
use crate::router::handle;
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;
use std::thread;
use std::time::Duration;

/// App with no search delay, so lookups settle as soon as the lock is free.
pub fn test_app() -> App {
    App::new(AppConfig {
        search_delay: Duration::ZERO,
        ..AppConfig::default()
    })
}

pub fn get(app: &App, uri: &str, cookie: Option<&str>) -> Response {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header("cookie", cookie);
    }
    let req = builder.body(Body::empty()).unwrap();
    handle(req, app).expect("handler failed")
}

pub fn post_form(app: &App, uri: &str, form: &str, cookie: &str, htmx: bool) -> Response {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .header("cookie", cookie);
    if htmx {
        builder = builder.header("hx-request", "true");
    }
    let req = builder.body(Body::from(form.as_bytes().to_vec())).unwrap();
    handle(req, app).expect("handler failed")
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

/// Opens a session and returns the `Cookie` header value that carries it.
pub fn start_session(app: &App) -> String {
    let resp = get(app, "/", None);
    let set_cookie = resp
        .headers()
        .get("set-cookie")
        .and_then(|v| v.to_str().ok())
        .expect("first visit should set a session cookie");
    set_cookie.split(';').next().unwrap().to_string()
}

/// Polls the result panel until it stops loading and returns the final body.
pub fn wait_for_results(app: &App, cookie: &str) -> String {
    for _ in 0..300 {
        let body = body_string(get(app, "/search/results", Some(cookie)));
        if !body.contains("panel-loading") {
            return body;
        }
        thread::sleep(Duration::from_millis(10));
    }
    panic!("search never finished");
}
