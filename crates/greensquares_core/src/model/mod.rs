//! Grid domain model.
//!
//! # Responsibility
//! - Define the canonical record shape shared by layout, editing and storage.
//! - Keep one date-keyed grid representation for every edit operation.
//!
//! # Invariants
//! - Every record is identified by its calendar date.
//! - Levels are always within `0..=4` once inside the model.

pub mod contribution;
