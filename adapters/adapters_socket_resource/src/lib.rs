//! Adapters Layer: Platform Socket Resource Backend
//!
//! Binds the generic outcome/initializer machinery to a concrete native
//! socket resource for the build target. The POSIX backend is the only
//! implemented one: the native handle is a raw socket descriptor and the
//! dependency bundle mirrors the `socket(2)` argument triple exactly. A
//! Windows backend is declared as a placeholder, and any other target
//! fails the build rather than compiling a partial type.
//!
//! ## Overview
//!
//! The `adapters_socket_resource` crate provides:
//! - **`SocketHandle` / `SocketPlatformError`**: the target's descriptor
//!   and error-code types
//! - **`SocketResourceDependencies`**: the {domain, type, protocol} bundle
//! - **`open_socket` / `close_socket`**: the blocking acquisition and
//!   release calls
//! - **`SocketResourceReleaser`**: release-capability wrapper that never
//!   double-closes
//! - **`socket_initializer` / `socket_initializer_with`**: canonical
//!   deferred initializers wired to `open_socket`
//!
//! ## Architecture
//!
//! This crate is part of the adapters layer. It depends on
//! `entities_resource_result` and `usecases_resource_init`; the lifecycle
//! façade in `api_facades` composes it into the public open/close/get API.

#[cfg(unix)]
mod posix;

#[cfg(unix)]
pub use posix::{
    close_socket, open_socket, socket_initializer, socket_initializer_with, SocketHandle,
    SocketInitOutcome, SocketPlatformError, SocketResourceDependencies, SocketResourceInitializer,
    SocketResourceReleaser,
};

#[cfg(windows)]
mod win32;

#[cfg(not(any(unix, windows)))]
compile_error!("the socket resource backend does not support this platform");
