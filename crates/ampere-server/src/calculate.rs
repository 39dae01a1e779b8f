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
use axum::extract::Form;
use axum::extract::rejection::FormRejection;
use serde::Serialize;
use tracing::{debug, info};

use ampere_core::{LoadInputs, SizingReport, size_battery};

use crate::error::CalculateError;

pub const NO_FIT_MESSAGE: &str = "No standard battery available for this requirement";

/// Raw form fields as posted by the index page.
///
/// Everything is optional text so that a missing or garbled field surfaces as
/// [`CalculateError`] instead of an extractor rejection.
#[derive(Debug, Default)]
pub struct CalculateForm {
    pub quiescent_load: Option<String>,
    pub alarm_load: Option<String>,
    pub standby_period: Option<String>,
}

/// Collects the known fields from decoded form pairs.
///
/// A repeated field keeps its first value; unknown fields are ignored.
impl FromIterator<(String, String)> for CalculateForm {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut form = Self::default();
        for (name, value) in pairs {
            let slot = match name.as_str() {
                "quiescent_load" => &mut form.quiescent_load,
                "alarm_load" => &mut form.alarm_load,
                "standby_period" => &mut form.standby_period,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        form
    }
}

impl CalculateForm {
    pub fn into_inputs(self) -> Result<LoadInputs, CalculateError> {
        Ok(LoadInputs {
            quiescent_load_ma: parse_field("quiescent_load", self.quiescent_load)?,
            alarm_load_ma: parse_field("alarm_load", self.alarm_load)?,
            standby_period_hours: parse_field("standby_period", self.standby_period)?,
        })
    }
}

fn parse_field(field: &'static str, raw: Option<String>) -> Result<f64, CalculateError> {
    let raw = raw.ok_or(CalculateError::MissingField(field))?;
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| CalculateError::NotANumber {
            field,
            value: raw.clone(),
        })?;

    // JSON has no representation for NaN or infinity
    if !value.is_finite() {
        return Err(CalculateError::NotFinite { field, value });
    }
    Ok(value)
}

/// Response body for POST /calculate
#[derive(Debug, Serialize)]
pub struct CalculateResponse {
    /// mAh, rounded to two decimals
    pub standby_capacity: f64,
    /// mAh, rounded to two decimals
    pub operational_capacity: f64,
    /// Hours the alarm load is carried
    pub operational_duration: f64,
    /// Ah including the safety margin, rounded to two decimals
    pub minimum_required_capacity: f64,
    /// Ah, `null` when nothing in the catalog is large enough
    pub battery_size_required: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<&'static str>,
}

impl From<&SizingReport> for CalculateResponse {
    fn from(report: &SizingReport) -> Self {
        let rounded = report.rounded();
        Self {
            standby_capacity: rounded.capacity.standby_capacity_mah,
            operational_capacity: rounded.capacity.operational_capacity_mah,
            operational_duration: rounded.capacity.operational_duration_hours,
            minimum_required_capacity: rounded.capacity.minimum_required_capacity_ah,
            battery_size_required: rounded.battery_size_ah,
            error_message: if rounded.has_fit() {
                None
            } else {
                Some(NO_FIT_MESSAGE)
            },
        }
    }
}

#[expect(clippy::unused_async, reason = "axum handler must be async")]
pub async fn calculate_handler(
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Result<Json<CalculateResponse>, CalculateError> {
    let Form(pairs) = form.map_err(|e| CalculateError::MalformedBody(e.body_text()))?;
    let inputs = pairs.into_iter().collect::<CalculateForm>().into_inputs()?;
    debug!(
        quiescent_load_ma = inputs.quiescent_load_ma,
        alarm_load_ma = inputs.alarm_load_ma,
        standby_period_hours = inputs.standby_period_hours,
        "Calculating battery size"
    );

    // Selection happens on the unrounded minimum; rounding is only for the response
    let report = size_battery(&inputs);
    if !report.capacity.is_finite() {
        return Err(CalculateError::Overflow);
    }
    info!(
        minimum_required_capacity_ah = report.capacity.minimum_required_capacity_ah,
        battery_size_ah = ?report.battery_size_ah,
        "Battery size calculated"
    );

    Ok(Json(CalculateResponse::from(&report)))
}
