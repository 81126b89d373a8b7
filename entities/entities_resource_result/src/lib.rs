//! Entities Layer: Resource Result Values
//!
//! Provides the two-state success/error container used throughout the
//! resource lifecycle crates. An operation that acquires a native handle
//! reports its outcome as an [`InitOutcome`]: exactly one of a success
//! payload or an [`ErrorValue`] is active at any time, and reading the
//! inactive side is a contract violation surfaced as an
//! [`AccessViolation`], never as a stale payload.
//!
//! ## Overview
//!
//! The `entities_resource_result` crate provides:
//! - **`InitOutcome<T, E>`**: move-only tagged container for an operation's
//!   success value or error value
//! - **`ErrorValue<E>`**: move-only wrapper around an error payload
//! - **`AccessViolation`**: the taxonomy for out-of-contract accessor calls
//! - **Handle transfer**: descriptor stealing between numeric containers via
//!   [`InitOutcome::take_from`]
//!
//! ## Architecture
//!
//! This crate sits in the entities layer and has no dependency on any other
//! workspace crate. The use-case and adapter layers build deferred
//! initialization and platform bindings on top of it.

pub mod outcome;

pub use outcome::{AccessViolation, ErrorValue, InitOutcome, RawHandleValue};
