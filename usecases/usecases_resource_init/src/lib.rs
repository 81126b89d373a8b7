//! Use Cases Layer: Deferred Resource Initialization
//!
//! Provides the deferred-initializer machinery that turns a caller-supplied
//! acquisition callable into a managed, re-invocable resource producer.
//! An initializer does nothing at construction time; each explicit
//! `initialize_resource` call re-runs the callable (which may acquire a
//! native OS handle as a side effect) and replaces the cached outcome.
//!
//! ## Overview
//!
//! The `usecases_resource_init` crate provides:
//! - **`ResourceInitializer`**: initializer parameterized by a dependency
//!   bundle that is fed to the callable on every invocation
//! - **`SimpleResourceInitializer`**: dependency-less variant
//! - **`ResourceInitialize` / `ResourceRelease`**: capability traits that
//!   concrete initializers and releasers implement, used as extension seams
//!   by outer layers
//! - **`InitViolation`**: the contract-violation taxonomy for accessing an
//!   initializer outside the state its last invocation produced
//!
//! ## Architecture
//!
//! This crate is part of the use-cases layer. It depends only on
//! `entities_resource_result` for the outcome container; platform bindings
//! live in the adapters layer.

pub mod initializer;

pub use initializer::{
    InitViolation, ResourceInitialize, ResourceInitializer, ResourceRelease,
    SimpleResourceInitializer,
};
