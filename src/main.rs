use crate::app::App;
use crate::config::AppConfig;
use crate::responses::error_to_response;
use crate::router::handle;
use astra::Server;
use tracing::{error, info, warn};

mod app;
mod config;
mod domain;
mod errors;
mod responses;
mod router;
mod search;
mod session;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wisepick=info".into()),
        )
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let addr = config.addr;
    info!(
        %addr,
        workers = config.max_workers,
        delay_ms = config.search_delay.as_millis() as u64,
        "starting WisePick"
    );

    let server = Server::bind(&addr).max_workers(config.max_workers);
    let app = App::new(config);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => {
            warn!(error = %err, "request failed");
            error_to_response(err)
        }
    });

    if let Err(e) = result {
        error!("server ended with error: {e}");
    }

    info!("server shut down cleanly");
}
