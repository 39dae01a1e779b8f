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

//! Capacity formulas for a standby battery.
//!
//! Loads are in milliamps, periods in hours. Intermediate capacities stay in
//! mAh; the minimum required capacity is reported in Ah because that is how
//! standard batteries are rated.

use serde::{Deserialize, Serialize};

/// How long the alarm load has to be carried after the standby period.
pub const OPERATIONAL_DURATION_HOURS: f64 = 0.5;

/// Margin applied on top of the raw standby and operational demand (25 %).
pub const SAFETY_FACTOR: f64 = 1.25;

pub const MAH_PER_AH: f64 = 1000.0;

/// The three figures a user enters for a power budget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadInputs {
    pub quiescent_load_ma: f64,
    pub alarm_load_ma: f64,
    pub standby_period_hours: f64,
}

/// Capacities derived from [`LoadInputs`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapacityResult {
    pub standby_capacity_mah: f64,
    pub operational_capacity_mah: f64,
    pub operational_duration_hours: f64,
    pub minimum_required_capacity_ah: f64,
}

impl CapacityResult {
    #[must_use]
    pub fn from_inputs(inputs: &LoadInputs) -> Self {
        let standby = standby_capacity_mah(inputs.quiescent_load_ma, inputs.standby_period_hours);
        let operational = operational_capacity_mah(inputs.alarm_load_ma);

        Self {
            standby_capacity_mah: standby,
            operational_capacity_mah: operational,
            operational_duration_hours: OPERATIONAL_DURATION_HOURS,
            minimum_required_capacity_ah: minimum_required_capacity_ah(standby, operational),
        }
    }

    /// False when huge inputs overflowed any figure to infinity.
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.standby_capacity_mah.is_finite()
            && self.operational_capacity_mah.is_finite()
            && self.minimum_required_capacity_ah.is_finite()
    }
}

/// Charge drawn by the quiescent load over the standby period, in mAh.
///
/// Inputs are not validated; zero or negative values pass straight through.
#[must_use]
pub fn standby_capacity_mah(quiescent_load_ma: f64, standby_period_hours: f64) -> f64 {
    quiescent_load_ma * standby_period_hours
}

/// Charge drawn by the alarm load for [`OPERATIONAL_DURATION_HOURS`], in mAh.
#[must_use]
pub fn operational_capacity_mah(alarm_load_ma: f64) -> f64 {
    alarm_load_ma * OPERATIONAL_DURATION_HOURS
}

/// Total demand converted to Ah with [`SAFETY_FACTOR`] applied.
#[must_use]
pub fn minimum_required_capacity_ah(standby_capacity_mah: f64, operational_capacity_mah: f64) -> f64 {
    (standby_capacity_mah + operational_capacity_mah) / MAH_PER_AH * SAFETY_FACTOR
}
