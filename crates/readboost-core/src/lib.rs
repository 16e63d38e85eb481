// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Readboost — Core types, settings and error definitions shared across all crates.

pub mod config;
pub mod error;
pub mod human_errors;
pub mod types;

pub use config::{Alignment, BoldingConfig, BoldingMethod, ExcerptConfig, LayoutConfig, SessionSettings};
pub use error::{ReadboostError, Result};
pub use types::*;
