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

/// Commercially available standby battery ratings in Ah, smallest first.
///
/// Lookups walk this list front to back, so it must stay sorted ascending.
pub const STANDARD_BATTERY_SIZES_AH: [f64; 10] =
    [1.2, 2.1, 3.2, 4.0, 7.0, 12.0, 18.0, 20.0, 24.0, 38.0];

/// Returns the smallest size in `catalog` that is at least `minimum_capacity_ah`.
///
/// `catalog` must be sorted ascending. `None` means the requirement exceeds
/// every entry, which callers report as advice rather than as a failure.
#[must_use]
pub fn select_battery_size(minimum_capacity_ah: f64, catalog: &[f64]) -> Option<f64> {
    catalog
        .iter()
        .copied()
        .find(|&size| size >= minimum_capacity_ah)
}

pub const LARGEST_STANDARD_SIZE_AH: f64 = 38.0;

#[must_use]
pub const fn largest_standard_size() -> f64 {
    LARGEST_STANDARD_SIZE_AH
}
