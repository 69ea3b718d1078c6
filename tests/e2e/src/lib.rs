//! End-to-end test support for the Leitner scheduler
//!
//! - [`mocks`]: factories for cards and bucket states
//! - [`harness`]: a multi-day learner simulator

pub mod harness;
