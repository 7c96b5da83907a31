// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod access;
pub mod spot;

pub use access::SpotAccess;
pub use spot::{Spot, SpotSummary};
