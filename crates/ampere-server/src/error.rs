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

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

/// Message returned to clients for every rejected calculation request.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input values";

/// Reasons a calculation request is rejected before any arithmetic runs.
///
/// The detail is logged; clients only ever see [`INVALID_INPUT_MESSAGE`].
#[derive(Debug, Error)]
pub enum CalculateError {
    #[error("request body is not a form: {0}")]
    MalformedBody(String),

    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("field {field} is not a number: {value:?}")]
    NotANumber { field: &'static str, value: String },

    #[error("field {field} is not finite: {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("inputs overflow the capacity figures")]
    Overflow,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
}

impl IntoResponse for CalculateError {
    fn into_response(self) -> Response {
        warn!(error = %self, "Rejected calculation request");
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: INVALID_INPUT_MESSAGE,
            }),
        )
            .into_response()
    }
}
