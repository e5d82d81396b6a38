//! Shared infrastructure for the `m2o` binary.
//!
//! Only logging lives in the library crate; command wiring stays in the
//! binary so integration tests can exercise logging setup in isolation.

#![deny(unsafe_code)]

pub mod logging;
