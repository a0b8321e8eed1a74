//! Domain model for contact/case tracking.
//!
//! # Responsibility
//! - Define the canonical person record and its value types.
//! - Hold the in-memory application state commands operate on.
//!
//! # Invariants
//! - Records are immutable once built; changes produce new records.
//! - Duplicate detection uses name-only matching.

pub mod contact_book;
pub mod fields;
pub mod person;
