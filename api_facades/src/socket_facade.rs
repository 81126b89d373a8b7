//! Socket Facade Module
//!
//! Minimal open/close/get lifecycle over the platform socket backend. The
//! façade owns its initializer and, transitively, any open descriptor; the
//! descriptor is released exactly once, either by an explicit
//! [`BasicSocket::close_socket`] or by the destructor.

use std::sync::Arc;

use tracing::{debug, warn};

use adapters_socket_resource::{
    close_socket, socket_initializer, SocketHandle, SocketPlatformError,
    SocketResourceDependencies, SocketResourceInitializer,
};
use usecases_resource_init::InitViolation;

/// Lifecycle state of a [`BasicSocket`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocketState {
    /// No acquisition has succeeded yet.
    Unopened,
    /// A native descriptor is held.
    Open,
    /// The descriptor was released; the façade can be reopened.
    Closed,
}

/// Internal composition of the façade. Kept out of the public type so the
/// platform-bound initializer never leaks into the caller's view of
/// [`BasicSocket`].
struct SocketFacadeImpl {
    initializer: SocketResourceInitializer,
    state: SocketState,
}

/// Open/close/get lifecycle façade over a native socket descriptor.
///
/// State machine: Unopened → Open on a successful [`open_socket`]; Open →
/// Closed on [`close_socket`]; Closed → Open on a later successful reopen.
/// Accessors are valid only while Open and otherwise surface the
/// initializer's [`InitViolation::InvalidResource`] signal rather than a
/// stale or zero descriptor.
///
/// The façade exclusively owns the descriptor. Dropping an Open façade
/// closes it, so the handle is never leaked.
///
/// # Examples
///
/// ```rust
/// use api_facades::{BasicSocket, SocketState};
/// use adapters_socket_resource::SocketResourceDependencies;
///
/// let mut socket = BasicSocket::new();
/// assert_eq!(socket.state(), SocketState::Unopened);
///
/// if socket.open_socket(&SocketResourceDependencies::inet_stream()) {
///     assert!(socket.socket().unwrap() >= 0);
///     assert!(socket.close_socket());
///     assert_eq!(socket.state(), SocketState::Closed);
/// }
/// ```
///
/// [`open_socket`]: BasicSocket::open_socket
/// [`close_socket`]: BasicSocket::close_socket
pub struct BasicSocket {
    inner: SocketFacadeImpl,
}

impl BasicSocket {
    /// Create an Unopened façade around the canonical platform
    /// initializer. No native call happens here.
    pub fn new() -> Self {
        Self {
            inner: SocketFacadeImpl {
                initializer: socket_initializer(),
                state: SocketState::Unopened,
            },
        }
    }

    /// Create a façade around a caller-supplied initializer.
    ///
    /// If the initializer was already invoked successfully, the façade
    /// starts Open and owns the cached descriptor; otherwise it starts
    /// Unopened.
    pub fn with_initializer(initializer: SocketResourceInitializer) -> Self {
        let state = if initializer.is_valid_resource() {
            SocketState::Open
        } else {
            SocketState::Unopened
        };
        Self {
            inner: SocketFacadeImpl { initializer, state },
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SocketState {
        self.inner.state
    }

    /// Whether a native descriptor is currently held.
    pub fn is_open(&self) -> bool {
        self.inner.state == SocketState::Open
    }

    /// Acquire a native socket descriptor for the given bundle.
    ///
    /// Feeds the bundle to the internal initializer and invokes it once
    /// (a blocking native call). Reopening an Open façade first closes the
    /// held descriptor so it cannot leak.
    ///
    /// # Arguments
    ///
    /// * `dependencies` - The `socket(2)` argument triple
    ///
    /// # Returns
    ///
    /// * `true` - A descriptor was acquired; the façade is Open
    /// * `false` - Validation or the native call failed; the façade stays
    ///   in its previous non-Open state and [`last_error`] reports the
    ///   platform error code when the OS was reached
    ///
    /// [`last_error`]: BasicSocket::last_error
    pub fn open_socket(&mut self, dependencies: &SocketResourceDependencies) -> bool {
        if let Err(violation) = dependencies.validate() {
            warn!(%violation, "rejecting socket open");
            return false;
        }

        if self.is_open() {
            self.close_socket();
        }

        self.inner
            .initializer
            .set_resource_dependencies(*dependencies);
        self.inner.initializer.initialize_resource();

        if self.inner.initializer.is_valid_resource() {
            self.inner.state = SocketState::Open;
            debug!("socket facade opened");
            true
        } else {
            false
        }
    }

    /// Release the held descriptor.
    ///
    /// Idempotent: closing an Unopened or already Closed façade is a
    /// successful no-op, since there is nothing to release.
    ///
    /// # Returns
    ///
    /// * `true` - The descriptor was released (or none was held)
    /// * `false` - The platform close call failed; the façade is Closed
    ///   regardless and the descriptor is not closed again
    pub fn close_socket(&mut self) -> bool {
        if !self.is_open() {
            return true;
        }

        self.inner.state = SocketState::Closed;
        match self.inner.initializer.actual_resource() {
            Ok(&handle) => {
                let released = close_socket(handle);
                debug!(handle, released, "socket facade closed");
                released
            }
            // Open state without a cached descriptor cannot be reached
            // through this façade; treat it as nothing to release.
            Err(_) => true,
        }
    }

    /// The held native descriptor.
    ///
    /// # Returns
    ///
    /// * `Ok(SocketHandle)` - The descriptor; only while Open
    /// * `Err(InitViolation::InvalidResource)` - The façade is Unopened or
    ///   Closed
    pub fn socket(&self) -> Result<SocketHandle, InitViolation> {
        self.socket_resource()
    }

    /// The held native descriptor, via the initializer's accessor.
    ///
    /// Equivalent to [`socket`](BasicSocket::socket); both delegate to the
    /// underlying initializer and are gated on the Open state.
    pub fn socket_resource(&self) -> Result<SocketHandle, InitViolation> {
        if !self.is_open() {
            warn!(state = ?self.inner.state, "socket accessed outside the open state");
            return Err(InitViolation::InvalidResource);
        }
        self.inner.initializer.actual_resource().copied()
    }

    /// A fresh shared-ownership copy of the descriptor value.
    ///
    /// The explicit promotion step: until this is called, the descriptor
    /// has exactly one owner. The copy shares the descriptor number, not
    /// the close responsibility, which stays with the façade.
    ///
    /// # Returns
    ///
    /// * `Ok(Arc<SocketHandle>)` - Shared copy; only while Open
    /// * `Err(InitViolation::InvalidResource)` - The façade is not Open
    pub fn shared_socket(&self) -> Result<Arc<SocketHandle>, InitViolation> {
        if !self.is_open() {
            return Err(InitViolation::InvalidResource);
        }
        self.inner.initializer.shared_resource()
    }

    /// The platform error code of the last failed acquisition.
    ///
    /// # Returns
    ///
    /// * `Ok(SocketPlatformError)` - errno from the last failed open
    /// * `Err(InitViolation::NoErrorExists)` - The last open succeeded or
    ///   none was attempted
    pub fn last_error(&self) -> Result<SocketPlatformError, InitViolation> {
        self.inner.initializer.actual_error().copied()
    }
}

impl Default for BasicSocket {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for BasicSocket {
    fn drop(&mut self) {
        if self.is_open() {
            self.close_socket();
        }
    }
}
