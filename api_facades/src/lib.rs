//! API Facades Layer
//!
//! Public lifecycle surface of the workspace. [`BasicSocket`] composes the
//! platform-bound initializer from the adapters layer into a minimal
//! open/close/get state machine and guarantees that an acquired native
//! handle is released exactly once, at the latest when the façade is
//! dropped.
//!
//! All platform-specific composition details are hidden behind an opaque
//! inner type; callers see only the raw handle, the dependency bundle, and
//! the contract-violation taxonomy from the inner layers.

pub mod socket_facade;

pub use socket_facade::{BasicSocket, SocketState};
