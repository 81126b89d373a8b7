//! POSIX Socket Backend
//!
//! Platform definitions and the blocking acquisition/release calls for
//! Unix-family targets. The dependency triple maps one-to-one onto the
//! arguments of `socket(2)`; the outcome maps onto its (descriptor, errno)
//! result. Sockets are created through the `socket2` crate and immediately
//! detached into a raw descriptor, so ownership of the handle stays with
//! this layer's callers rather than with a wrapper object.

use std::os::fd::IntoRawFd;
use std::os::unix::io::RawFd;

use libc::c_int;
use socket2::{Domain, Protocol, Socket, Type};
use tracing::{debug, warn};

use entities_resource_result::InitOutcome;
use usecases_resource_init::{InitViolation, ResourceInitializer, ResourceRelease};

/// The native socket resource: a signed integer descriptor.
pub type SocketHandle = RawFd;

/// The platform error code reported by a failed acquisition (errno).
pub type SocketPlatformError = i32;

/// Outcome of one socket acquisition attempt.
pub type SocketInitOutcome = InitOutcome<SocketHandle, SocketPlatformError>;

/// The platform-bound initializer type for socket resources.
pub type SocketResourceInitializer =
    ResourceInitializer<SocketHandle, SocketPlatformError, SocketResourceDependencies>;

/// Parameters of one socket acquisition, mirroring `socket(2)` exactly:
/// address family, communication semantics, protocol number.
///
/// The bundle is plain data owned by whoever performs the acquisition; it
/// carries no resource itself and may be freely copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocketResourceDependencies {
    /// Address family (e.g. `AF_INET`).
    pub domain: c_int,
    /// Communication semantics (e.g. `SOCK_STREAM`).
    pub socket_type: c_int,
    /// Protocol number; 0 selects the family default.
    pub protocol: c_int,
}

impl SocketResourceDependencies {
    /// Build a bundle from a raw `socket(2)` argument triple.
    pub fn new(domain: c_int, socket_type: c_int, protocol: c_int) -> Self {
        Self {
            domain,
            socket_type,
            protocol,
        }
    }

    /// IPv4 stream socket parameters: {`AF_INET`, `SOCK_STREAM`, 0}.
    pub fn inet_stream() -> Self {
        Self::new(libc::AF_INET, libc::SOCK_STREAM, 0)
    }

    /// IPv4 datagram socket parameters: {`AF_INET`, `SOCK_DGRAM`, 0}.
    pub fn inet_dgram() -> Self {
        Self::new(libc::AF_INET, libc::SOCK_DGRAM, 0)
    }

    /// IPv6 stream socket parameters: {`AF_INET6`, `SOCK_STREAM`, 0}.
    pub fn inet6_stream() -> Self {
        Self::new(libc::AF_INET6, libc::SOCK_STREAM, 0)
    }

    /// Check that the triple is plausible before handing it to the OS.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - All three values are non-negative
    /// * `Err(InitViolation::InvalidDependencies)` - The bundle cannot
    ///   describe a socket and must not reach `socket(2)`
    pub fn validate(&self) -> Result<(), InitViolation> {
        if self.domain < 0 || self.socket_type < 0 || self.protocol < 0 {
            return Err(InitViolation::InvalidDependencies);
        }
        Ok(())
    }
}

/// Request a new socket descriptor from the operating system.
///
/// Blocking native call with no timeout or cancellation; bounded waits
/// belong to layers above this one.
///
/// # Arguments
///
/// * `deps` - The `socket(2)` argument triple
///
/// # Returns
///
/// A success outcome holding the raw descriptor (ownership passes to the
/// caller, who must release it exactly once), or an error outcome holding
/// the platform errno.
pub fn open_socket(deps: &SocketResourceDependencies) -> SocketInitOutcome {
    let domain = Domain::from(deps.domain);
    let socket_type = Type::from(deps.socket_type);
    let protocol = (deps.protocol != 0).then(|| Protocol::from(deps.protocol));

    match Socket::new(domain, socket_type, protocol) {
        Ok(socket) => {
            let handle = socket.into_raw_fd();
            debug!(handle, "acquired socket descriptor");
            InitOutcome::success(handle)
        }
        Err(err) => {
            let errno = err.raw_os_error().unwrap_or(libc::EIO);
            warn!(errno, "socket acquisition failed");
            InitOutcome::fail_with(errno)
        }
    }
}

/// Release a socket descriptor.
///
/// # Arguments
///
/// * `handle` - The descriptor to close
///
/// # Returns
///
/// * `true` - The descriptor was closed
/// * `false` - The descriptor was negative or the close call failed
pub fn close_socket(handle: SocketHandle) -> bool {
    if handle < 0 {
        return false;
    }

    let rc = unsafe { libc::close(handle) };
    if rc == 0 {
        debug!(handle, "released socket descriptor");
        true
    } else {
        warn!(handle, "failed to release socket descriptor");
        false
    }
}

/// Release-capability wrapper around an owned socket descriptor.
///
/// Takes ownership of the handle; [`ResourceRelease::release`] closes it
/// at most once, and dropping the wrapper releases it if the caller never
/// did. Repeated release calls are no-ops.
#[derive(Debug)]
pub struct SocketResourceReleaser {
    handle: Option<SocketHandle>,
}

impl SocketResourceReleaser {
    /// Adopt a descriptor for later release.
    pub fn new(handle: SocketHandle) -> Self {
        Self {
            handle: Some(handle),
        }
    }

    /// Whether a descriptor is still held.
    pub fn is_armed(&self) -> bool {
        self.handle.is_some()
    }
}

impl ResourceRelease for SocketResourceReleaser {
    fn release(&mut self) {
        if let Some(handle) = self.handle.take() {
            close_socket(handle);
        }
    }
}

impl Drop for SocketResourceReleaser {
    fn drop(&mut self) {
        self.release();
    }
}

/// Canonical socket initializer with default IPv4 stream parameters.
///
/// The returned initializer has not been invoked; it reports an invalid
/// resource until the first `initialize_resource` call.
pub fn socket_initializer() -> SocketResourceInitializer {
    socket_initializer_with(SocketResourceDependencies::inet_stream())
}

/// Canonical socket initializer with a caller-supplied bundle.
///
/// # Arguments
///
/// * `deps` - The `socket(2)` argument triple for the first invocation
pub fn socket_initializer_with(deps: SocketResourceDependencies) -> SocketResourceInitializer {
    ResourceInitializer::new(deps, |deps: &SocketResourceDependencies| open_socket(deps))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_socket_inet_stream() {
        let deps = SocketResourceDependencies::inet_stream();
        let outcome = open_socket(&deps);

        assert!(outcome.has_result());
        let handle = *outcome.result().unwrap();
        assert!(handle >= 0);
        assert!(close_socket(handle));
    }

    #[test]
    fn test_open_socket_invalid_family_reports_errno() {
        // A nonsense address family is rejected by the OS, not by us.
        let deps = SocketResourceDependencies::new(9999, libc::SOCK_STREAM, 0);
        let outcome = open_socket(&deps);

        assert!(!outcome.has_result());
        assert_eq!(outcome.error(), Ok(&libc::EAFNOSUPPORT));
    }

    #[test]
    fn test_close_socket_rejects_negative_handle() {
        assert!(!close_socket(-1));
    }

    #[test]
    fn test_close_socket_fails_on_unknown_descriptor() {
        // A descriptor number far above anything this test process opened.
        assert!(!close_socket(1_000_000));
    }

    #[test]
    fn test_dependencies_validation() {
        assert!(SocketResourceDependencies::inet_stream().validate().is_ok());
        assert!(SocketResourceDependencies::inet_dgram().validate().is_ok());
        assert!(SocketResourceDependencies::inet6_stream().validate().is_ok());

        let bad = SocketResourceDependencies::new(-1, libc::SOCK_STREAM, 0);
        assert_eq!(bad.validate(), Err(InitViolation::InvalidDependencies));
    }

    #[test]
    fn test_releaser_releases_exactly_once() {
        let deps = SocketResourceDependencies::inet_stream();
        let handle = open_socket(&deps).into_result().unwrap();

        let mut releaser = SocketResourceReleaser::new(handle);
        assert!(releaser.is_armed());

        releaser.release();
        assert!(!releaser.is_armed());

        // Second release is a no-op; the descriptor is not closed again.
        releaser.release();
        assert!(!releaser.is_armed());
    }

    #[test]
    fn test_initializer_defers_acquisition() {
        let initializer = socket_initializer();
        assert!(!initializer.is_valid_resource());
    }

    #[test]
    fn test_initializer_acquires_and_reports_descriptor() {
        let mut initializer =
            socket_initializer_with(SocketResourceDependencies::inet_dgram());
        initializer.initialize_resource();

        assert!(initializer.is_valid_resource());
        let handle = *initializer.actual_resource().unwrap();
        assert!(handle >= 0);
        assert!(close_socket(handle));
    }

    #[test]
    fn test_initializer_failure_surfaces_platform_error() {
        let mut initializer = socket_initializer_with(SocketResourceDependencies::new(
            9999,
            libc::SOCK_STREAM,
            0,
        ));
        initializer.initialize_resource();

        assert!(!initializer.is_valid_resource());
        assert_eq!(initializer.actual_error(), Ok(&libc::EAFNOSUPPORT));
    }
}
