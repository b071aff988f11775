// responses/assets.rs
use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};
use std::path::Path;
use tracing::warn;

pub const STYLESHEET: &str = include_str!("../../static/main.css");

pub fn css_response(css: &'static str) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::TEXT_CSS_UTF_8.as_ref())
        .header("Cache-Control", "public, max-age=3600")
        .body(Body::from(css.to_owned()))
        .map_err(|_| ServerError::InternalError)
}

pub fn text_response(text: &'static str) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::TEXT_PLAIN_UTF_8.as_ref())
        .body(Body::from(text.to_owned()))
        .map_err(|_| ServerError::InternalError)
}

/// Serves a script from disk; a missing file is a 404.
pub fn script_response(path: &Path) -> ResultResp {
    let script = std::fs::read(path).map_err(|e| {
        warn!(path = %path.display(), error = %e, "static script unavailable");
        ServerError::NotFound
    })?;

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::APPLICATION_JAVASCRIPT_UTF_8.as_ref())
        .header("Cache-Control", "public, max-age=3600")
        .body(Body::from(script))
        .map_err(|_| ServerError::InternalError)
}
