// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vantage Event State: input-gesture state managers for pan/zoom control.
//!
//! This crate provides small, focused state helpers for the two stateful
//! input patterns a pan/zoom controller needs:
//!
//! - [`drag`]: turn a stream of pointer positions into incremental pan
//!   deltas for the lifetime of one drag gesture.
//! - [`wheel`]: normalize wheel deltas across delta modes and map them to a
//!   multiplicative zoom factor via a configured sensitivity.
//!
//! ## Design philosophy
//!
//! Each helper is:
//!
//! - **Minimal and focused**: one interaction pattern each.
//! - **Integration-friendly**: no event types from any particular UI
//!   framework; callers pass positions and deltas they already have.
//! - **Pure where possible**: the wheel mapping is a pure function, the
//!   drag tracker holds exactly the two positions it needs.
//!
//! The crate does not decide *whether* a gesture is allowed (feature flags,
//! hook vetoes) or *when* its result is committed (refresh throttling);
//! those concerns live in the controller layer built on top.
//!
//! ## Features
//!
//! - `drag`: enable the drag tracker (requires the `kurbo` dependency)
//! - `wheel`: enable wheel-delta mapping
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(all(feature = "wheel", not(any(feature = "std", feature = "libm"))))]
compile_error!("the `wheel` feature requires either the `std` or `libm` feature");

#[cfg(feature = "drag")]
pub mod drag;

#[cfg(feature = "wheel")]
pub mod wheel;
