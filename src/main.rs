//! Growth Mindset Hub · Backend
//!
//! - Axum HTTP + WebSocket API for the six sections (home, daily challenge,
//!   quiz, journal, file converter, growth tracker)
//! - Flat JSON document store for challenge responses and journal entries
//! - Static SPA fallback (./static/index.html)
//!
//! Important env variables:
//!   PORT             : u16 (overrides the config port; default 3000)
//!   HUB_CONFIG_PATH  : path to TOML config (data path, static dir, upload limits)
//!   LOG_LEVEL        : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT       : "pretty" (default) or "json"

mod telemetry;
mod util;
mod domain;
mod config;
mod seeds;
mod store;
mod error;
mod state;
mod protocol;
mod logic;
mod convert;
mod routes;

use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::load_config_from_env;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  telemetry::init_tracing();

  let config = load_config_from_env();

  // A store that exists but does not parse is fatal: surface it, never reset it.
  let state = match AppState::load(config) {
    Ok(s) => Arc::new(s),
    Err(e) => {
      error!(target: "growth_hub", error = %e, "Cannot load document store");
      return Err(e.into());
    }
  };

  let port = std::env::var("PORT")
    .ok()
    .and_then(|p| p.parse::<u16>().ok())
    .unwrap_or(state.config.port);
  let addr = SocketAddr::from(([0, 0, 0, 0], port));

  let app = build_router(state.clone());

  let listener = TcpListener::bind(addr).await?;
  info!(target: "growth_hub", %addr, data_path = %state.store.path().display(), "HTTP server listening");
  axum::serve(listener, app).await?;
  Ok(())
}
