//! Integration test crate for Waveslide.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It depends on every waveslide crate to verify they work together.

#[cfg(test)]
mod pipeline;

#[cfg(test)]
mod seeking;
