// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vantage Refresh: host-agnostic throttling of transform commits.
//!
//! High-frequency input (a drag produces many pointer moves per frame) must
//! not push a matrix to the rendered surface on every event. This crate
//! decouples the two rates: state mutations [`mark`](RefreshScheduler::mark)
//! the scheduler, and the host drives [`on_frame`](RefreshScheduler::on_frame)
//! at its native paint cadence; the scheduler decides on which frames the
//! pending commit is actually released.
//!
//! The crate never reads a clock. All timestamps are milliseconds passed in
//! by the host, which keeps the scheduler deterministic under test and
//! usable from any runtime.
//!
//! ## Minimal example
//!
//! ```
//! use vantage_refresh::{RefreshPolicy, RefreshScheduler};
//!
//! // At most one commit per 100ms.
//! let mut scheduler = RefreshScheduler::new(RefreshPolicy::Fixed(10.0));
//!
//! scheduler.mark();
//! assert!(scheduler.on_frame(0)); // first commit releases immediately
//!
//! scheduler.mark();
//! scheduler.mark(); // burst of updates inside the interval…
//! assert!(!scheduler.on_frame(40)); // …stays pending
//! assert!(scheduler.on_frame(100)); // and releases once the interval elapses
//! assert!(!scheduler.on_frame(160)); // nothing pending, nothing to release
//! ```
//!
//! This crate is `no_std` and has no dependencies.

#![no_std]

mod scheduler;

pub use scheduler::{RefreshPolicy, RefreshScheduler};
