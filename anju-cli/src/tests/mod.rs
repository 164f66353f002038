//! Shared test harness modules for the Anju CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;

mod counter_unit;
mod helpers;
mod recommend_steps;
