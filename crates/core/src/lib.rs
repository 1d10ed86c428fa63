//! Domain logic for the project hub.
//!
//! Everything in this crate is pure: no async, no I/O, no clock reads.
//! Timestamps are passed in explicitly so every operation is deterministic
//! and unit-testable without a database fixture.

pub mod error;
pub mod merge;
pub mod policy;
pub mod project;
pub mod seed;
pub mod transfer;
pub mod types;
