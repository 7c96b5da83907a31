// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod catalog;
pub mod checkin;

pub use catalog::{CatalogError, SpotCatalog};
pub use checkin::{CheckInDecision, CheckInError, CheckInVerifier};
