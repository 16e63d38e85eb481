// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Layout engine — reflow bolded words into measured lines, then paginate.

pub mod paginate;
pub mod reflow;

pub use paginate::{Page, PlacedLine, paginate};
pub use reflow::{Line, TextRun, reflow};
