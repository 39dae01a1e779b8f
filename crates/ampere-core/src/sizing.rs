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

use serde::{Deserialize, Serialize};

use crate::capacity::{CapacityResult, LoadInputs};
use crate::catalog::{STANDARD_BATTERY_SIZES_AH, select_battery_size};

/// Full outcome of sizing a battery for one set of loads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizingReport {
    pub capacity: CapacityResult,
    /// Smallest standard size that fits, `None` if the requirement is above the catalog.
    pub battery_size_ah: Option<f64>,
}

impl SizingReport {
    #[must_use]
    pub const fn has_fit(&self) -> bool {
        self.battery_size_ah.is_some()
    }

    /// Copy with every capacity figure rounded to two decimals for display.
    ///
    /// The selected size is carried over untouched; it was chosen from the
    /// unrounded minimum and is already a catalog value.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            capacity: CapacityResult {
                standby_capacity_mah: round_to_hundredths(self.capacity.standby_capacity_mah),
                operational_capacity_mah: round_to_hundredths(
                    self.capacity.operational_capacity_mah,
                ),
                operational_duration_hours: self.capacity.operational_duration_hours,
                minimum_required_capacity_ah: round_to_hundredths(
                    self.capacity.minimum_required_capacity_ah,
                ),
            },
            battery_size_ah: self.battery_size_ah,
        }
    }
}

/// Computes capacities and picks a standard battery for them.
#[must_use]
pub fn size_battery(inputs: &LoadInputs) -> SizingReport {
    let capacity = CapacityResult::from_inputs(inputs);
    SizingReport {
        battery_size_ah: select_battery_size(
            capacity.minimum_required_capacity_ah,
            &STANDARD_BATTERY_SIZES_AH,
        ),
        capacity,
    }
}

/// Rounds to two decimal places, ties to even.
///
/// Rounds the exact binary value through precision formatting. Scaling by 100
/// first would turn near-halves such as 0.085 into exact ties and could
/// overflow for very large values.
#[must_use]
pub fn round_to_hundredths(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}
