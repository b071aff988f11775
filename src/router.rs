use crate::app::App;
use crate::domain::{NavigationState, Priority, SearchIntent, Urgency};
use crate::errors::ServerError;
use crate::responses::{
    css_response, html_response, json_response, no_content, script_response, see_other,
    text_response, ResultResp, STYLESHEET,
};
use crate::session::cookie;
use crate::templates::components::{
    faq_list, nav_bar, priority_group, result_panel_update, urgency_group,
};
use crate::templates::pages::{landing_page, search_page, search_workspace};
use astra::Request;
use http::header::{HeaderValue, COOKIE, SET_COOKIE};
use maud::Markup;
use serde::Serialize;
use std::collections::HashMap;
use std::io::Read;
use tracing::{debug, info};
use url::form_urlencoded;

const MAX_FORM_BYTES: u64 = 16 * 1024;

pub fn handle(req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    debug!(%method, %path, "request");

    // Session-free routes.
    match (method.as_str(), path.as_str()) {
        ("GET", "/static/main.css") => return css_response(STYLESHEET),
        ("GET", "/static/htmx.js") => {
            return script_response(&app.config.static_dir.join("htmx.js"));
        }
        ("GET", "/healthz") => return text_response("ok"),
        ("GET", "/api/search") => return api_search(&req, app),
        _ => {}
    }

    if !is_session_route(&method, &path) {
        return Err(ServerError::NotFound);
    }

    let (token, fresh) = resolve_session(&req, app)?;
    let mut resp = match route(req, &method, &path, app, &token) {
        Ok(resp) => resp,
        Err(err) => {
            // The cookie never reaches the client, so the session is unreachable.
            if fresh {
                app.sessions.remove(&token);
            }
            return Err(err);
        }
    };

    if fresh {
        let value = HeaderValue::from_str(&cookie::session_cookie(&token))
            .map_err(|_| ServerError::InternalError)?;
        resp.headers_mut().insert(SET_COOKIE, value);
    }

    Ok(resp)
}

/// Routes that read or write visitor state. Anything else never gets a session.
fn is_session_route(method: &str, path: &str) -> bool {
    match (method, path) {
        ("GET", "/") | ("GET", "/search/results") => true,
        ("POST", "/navigate/search" | "/menu") => true,
        ("POST", "/search/query" | "/search/details" | "/search/urgency") => true,
        ("POST", "/search/priority" | "/search/submit") => true,
        ("POST", p) => p.starts_with("/faq/"),
        _ => false,
    }
}

fn route(req: Request, method: &str, path: &str, app: &App, token: &str) -> ResultResp {
    let htmx = is_htmx(&req);
    let sessions = &app.sessions;

    match (method, path) {
        ("GET", "/") => {
            let page = sessions.with_session(token, |s| {
                Ok(match s.nav {
                    NavigationState::Landing => landing_page(&s.landing),
                    NavigationState::Search => search_page(&app.config.user_name, &s.search),
                })
            })?;
            html_response(page)
        }

        ("POST", "/navigate/search") => {
            let view = sessions.with_session(token, |s| {
                s.nav.activate_search();
                Ok(s.nav.as_str())
            })?;
            info!(view, "visitor switched view");
            see_other("/")
        }

        ("POST", "/menu") => {
            let markup = sessions.with_session(token, |s| {
                s.landing.toggle_mobile_menu();
                Ok(nav_bar(&s.landing))
            })?;
            partial_or_redirect(htmx, markup)
        }

        ("POST", p) if p.starts_with("/faq/") => {
            let index: usize = p
                .trim_start_matches("/faq/")
                .parse()
                .map_err(|_| ServerError::BadRequest("FAQ index must be a number".into()))?;
            let markup = sessions.with_session(token, |s| {
                if !s.landing.toggle_faq(index) {
                    return Err(ServerError::NotFound);
                }
                Ok(faq_list(&s.landing))
            })?;
            partial_or_redirect(htmx, markup)
        }

        ("POST", "/search/query") => {
            let form = read_form(req)?;
            let query = form.get("query").cloned().unwrap_or_default();
            sessions.with_session(token, |s| {
                s.search.set_query(query);
                Ok(())
            })?;
            if htmx { no_content() } else { see_other("/") }
        }

        ("POST", "/search/details") => {
            let form = read_form(req)?;
            let details = form.get("details").cloned().unwrap_or_default();
            sessions.with_session(token, |s| {
                s.search.set_details(details);
                Ok(())
            })?;
            if htmx { no_content() } else { see_other("/") }
        }

        ("POST", "/search/urgency") => {
            let form = read_form(req)?;
            let urgency = required(&form, "urgency").and_then(|v| {
                Urgency::from_value(v)
                    .ok_or_else(|| ServerError::BadRequest(format!("unknown urgency {v:?}")))
            })?;
            let markup = sessions.with_session(token, |s| {
                s.search.set_urgency(urgency);
                Ok(urgency_group(s.search.intent().urgency))
            })?;
            partial_or_redirect(htmx, markup)
        }

        ("POST", "/search/priority") => {
            let form = read_form(req)?;
            let priority = required(&form, "priority").and_then(|v| {
                Priority::from_value(v)
                    .ok_or_else(|| ServerError::BadRequest(format!("unknown priority {v:?}")))
            })?;
            let markup = sessions.with_session(token, |s| {
                s.search.toggle_priority(priority);
                Ok(priority_group(&s.search.intent().priorities))
            })?;
            partial_or_redirect(htmx, markup)
        }

        ("POST", "/search/submit") => {
            let form = read_form(req)?;
            let markup = sessions.with_session(token, |s| {
                if let Some(query) = form.get("query") {
                    s.search.set_query(query.clone());
                }
                if let Some(details) = form.get("details") {
                    s.search.set_details(details.clone());
                }

                match s.search.submit() {
                    Ok(ticket) => {
                        info!(
                            ticket = ticket.id(),
                            query = %s.search.intent().query,
                            "search submitted"
                        );
                        let task = app.runner.spawn(s, ticket, sessions.clone(), token.to_string());
                        if let Some(task) = task {
                            debug!(
                                ticket = task.ticket.id(),
                                worker = task.handle.thread().name().unwrap_or("search"),
                                "search worker started"
                            );
                        }
                    }
                    Err(e) => debug!(error = %e, "search rejected"),
                }
                Ok(search_workspace(&s.search))
            })?;
            partial_or_redirect(htmx, markup)
        }

        ("GET", "/search/results") => {
            let markup = sessions.with_session(token, |s| Ok(result_panel_update(&s.search)))?;
            html_response(markup)
        }

        _ => Err(ServerError::NotFound),
    }
}

#[derive(Serialize)]
struct ApiResults<'a> {
    intent: &'a SearchIntent,
    results: Vec<crate::domain::ProductResult>,
}

#[derive(Serialize)]
struct ApiError {
    error: String,
}

/// `GET /api/search?q=...&urgency=...&priority=...` runs the lookup with no delay.
fn api_search(req: &Request, app: &App) -> ResultResp {
    let mut intent = SearchIntent::default();

    if let Some(q) = req.uri().query() {
        for (key, value) in form_urlencoded::parse(q.as_bytes()) {
            match key.as_ref() {
                "q" => intent.query = value.into_owned(),
                "details" => intent.details = value.into_owned(),
                "urgency" => {
                    intent.urgency = Some(Urgency::from_value(&value).ok_or_else(|| {
                        ServerError::BadRequest(format!("unknown urgency {value:?}"))
                    })?)
                }
                "priority" => {
                    let p = Priority::from_value(&value).ok_or_else(|| {
                        ServerError::BadRequest(format!("unknown priority {value:?}"))
                    })?;
                    intent.priorities.insert(p);
                }
                _ => {}
            }
        }
    }

    if intent.query.trim().is_empty() {
        let err = crate::domain::SearchError::EmptyQuery;
        return json_response(400, &ApiError { error: err.to_string() });
    }

    match app.runner.lookup(&intent) {
        Ok(results) => json_response(200, &ApiResults { intent: &intent, results }),
        Err(e) => {
            info!(error = %e, "api search failed");
            let err = crate::domain::SearchError::Failed;
            json_response(502, &ApiError { error: err.to_string() })
        }
    }
}

/// Returns the visitor's session token, creating a session when the cookie is
/// missing or refers to one that no longer exists.
fn resolve_session(req: &Request, app: &App) -> Result<(String, bool), ServerError> {
    let existing = req
        .headers()
        .get(COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(cookie::session_token)
        .filter(|token| app.sessions.contains(token))
        .map(str::to_owned);

    match existing {
        Some(token) => Ok((token, false)),
        None => {
            let token = app.sessions.create()?;
            debug!(sessions = app.sessions.len(), "created session");
            Ok((token, true))
        }
    }
}

fn is_htmx(req: &Request) -> bool {
    req.headers()
        .get("hx-request")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == "true")
        .unwrap_or(false)
}

fn partial_or_redirect(htmx: bool, markup: Markup) -> ResultResp {
    if htmx {
        html_response(markup)
    } else {
        see_other("/")
    }
}

fn read_form(req: Request) -> Result<HashMap<String, String>, ServerError> {
    let mut raw = Vec::new();
    req.into_body()
        .reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut raw)
        .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;

    if raw.len() as u64 > MAX_FORM_BYTES {
        return Err(ServerError::PayloadTooLarge);
    }

    Ok(form_urlencoded::parse(&raw).into_owned().collect())
}

fn required<'a>(form: &'a HashMap<String, String>, field: &str) -> Result<&'a str, ServerError> {
    form.get(field)
        .map(String::as_str)
        .ok_or_else(|| ServerError::BadRequest(format!("missing field {field:?}")))
}
