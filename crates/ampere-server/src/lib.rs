// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of Ampere.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.
//
// For commercial licensing, please contact: info@solare.cz

//! HTTP front end for the standby battery calculator.
//!
//! - `GET /` serves the input form
//! - `POST /calculate` takes the form fields and answers with JSON
//! - `GET /health` is a liveness probe

pub mod calculate;
pub mod config;
pub mod error;
pub mod health;
pub mod index;

use axum::Router;
use axum::routing::{get, post};
use tracing::info;

use crate::config::ServerConfig;

/// Builds the application router. Handlers are stateless, so there is no shared state.
#[must_use]
pub fn router() -> Router {
    Router::new()
        .route("/", get(index::index_handler))
        .route("/calculate", post(calculate::calculate_handler))
        .route("/health", get(health::health_handler))
}

/// Binds the configured address and serves until the process is stopped.
pub async fn serve(config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Ampere calculator listening on {addr}");
    axum::serve(listener, router()).await?;
    Ok(())
}
