//! Integration tests for tint-rs crates.
//!
//! This crate contains end-to-end tests that verify the interaction
//! between tint-math and tint-color: the operator laws, the
//! equality/ordering split, and the HSV round trip.

mod golden;
