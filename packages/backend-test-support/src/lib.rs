//! Shared helpers for the backend test binaries: one-time logging setup and
//! Problem Details assertions that do not depend on backend types.

pub mod logging;
pub mod problem_details;
