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

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use tracing::{debug, error};

use ampere_core::catalog::largest_standard_size;
use ampere_core::{OPERATIONAL_DURATION_HOURS, SAFETY_FACTOR, STANDARD_BATTERY_SIZES_AH};

#[derive(Debug, Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub operational_duration_hours: f64,
    pub safety_margin_percent: f64,
    pub battery_sizes: Vec<String>,
    pub largest_size_ah: f64,
}

impl IndexTemplate {
    #[must_use]
    pub fn new() -> Self {
        Self {
            operational_duration_hours: OPERATIONAL_DURATION_HOURS,
            safety_margin_percent: (SAFETY_FACTOR - 1.0) * 100.0,
            battery_sizes: STANDARD_BATTERY_SIZES_AH
                .iter()
                .map(|size| format!("{size} Ah"))
                .collect(),
            largest_size_ah: largest_standard_size(),
        }
    }
}

#[expect(clippy::unused_async, reason = "axum handler must be async")]
pub async fn index_handler() -> impl IntoResponse {
    debug!("Index page requested");

    match IndexTemplate::new().render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!(error = %e, "Template render error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html("<h1>Error rendering calculator</h1>".to_owned()),
            )
                .into_response()
        }
    }
}
