use crate::api::ApiClient;
use crate::config::Config;
use crate::router::respond;
use crate::state::AppState;
use astra::Server;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod domain;
mod errors;
mod responses;
mod router;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("basafinder=info")),
        )
        .init();

    // 1️⃣ Configuration
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Listings API client
    let client = match ApiClient::new(config.api_base.clone(), config.api_timeout) {
        Ok(client) => client,
        Err(e) => {
            error!("Listings API client failed to start: {e}");
            std::process::exit(1);
        }
    };
    let state = AppState::new(client, config.price_ceiling);

    // 3️⃣ Start the server
    info!(
        addr = %config.addr,
        api = %config.api_base,
        workers = config.max_workers,
        "Starting server at http://{}",
        config.addr
    );

    let server = Server::bind(&config.addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| respond(req, &state));

    if let Err(e) = result {
        error!("Server ended with error: {e}");
        std::process::exit(1);
    }

    info!("Server shut down cleanly.");
}
