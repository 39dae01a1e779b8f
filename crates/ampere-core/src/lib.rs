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

//! Standby battery sizing for alarm and fire panel power budgets.
//!
//! The capacity formulas live in [`capacity`], the standard size lookup in
//! [`catalog`], and [`sizing`] chains the two into a single report.

pub mod capacity;
pub mod catalog;
pub mod sizing;

pub use capacity::{CapacityResult, LoadInputs, OPERATIONAL_DURATION_HOURS, SAFETY_FACTOR};
pub use catalog::{STANDARD_BATTERY_SIZES_AH, select_battery_size};
pub use sizing::{SizingReport, round_to_hundredths, size_battery};
