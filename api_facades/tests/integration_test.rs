//! Integration tests for api_facades crate
//!
//! End-to-end lifecycle flows through the public façade on a supported
//! platform: acquisition with real `socket(2)` parameters, state
//! transitions, and the contract-violation surface.

#![cfg(unix)]

use api_facades::{BasicSocket, SocketState};

use adapters_socket_resource::SocketResourceDependencies;
use usecases_resource_init::InitViolation;

#[test]
fn test_inet_stream_open_then_close() {
    let mut socket = BasicSocket::new();
    let deps = SocketResourceDependencies::new(libc::AF_INET, libc::SOCK_STREAM, 0);

    assert!(socket.open_socket(&deps));
    assert_eq!(socket.state(), SocketState::Open);

    let handle = socket.socket().expect("open facade must expose a descriptor");
    assert!(handle >= 0);

    assert!(socket.close_socket());
    assert_eq!(socket.state(), SocketState::Closed);
}

#[test]
fn test_unopened_facade_never_returns_a_stale_descriptor() {
    let socket = BasicSocket::new();

    assert_eq!(socket.state(), SocketState::Unopened);
    assert_eq!(socket.socket(), Err(InitViolation::InvalidResource));
    assert_eq!(socket.socket_resource(), Err(InitViolation::InvalidResource));
}

#[test]
fn test_closed_facade_rejects_descriptor_access() {
    let mut socket = BasicSocket::new();
    assert!(socket.open_socket(&SocketResourceDependencies::inet_stream()));
    assert!(socket.close_socket());

    assert_eq!(socket.socket(), Err(InitViolation::InvalidResource));
    assert_eq!(socket.shared_socket(), Err(InitViolation::InvalidResource));
}

#[test]
fn test_failed_open_reports_platform_error() {
    let mut socket = BasicSocket::new();
    // Address family the OS does not support.
    let deps = SocketResourceDependencies::new(9999, libc::SOCK_STREAM, 0);

    assert!(!socket.open_socket(&deps));
    assert_eq!(socket.state(), SocketState::Unopened);
    assert_eq!(socket.last_error(), Ok(libc::EAFNOSUPPORT));
}

#[test]
fn test_retry_after_failed_open() {
    let mut socket = BasicSocket::new();

    assert!(!socket.open_socket(&SocketResourceDependencies::new(
        9999,
        libc::SOCK_STREAM,
        0
    )));
    assert!(socket.open_socket(&SocketResourceDependencies::inet_stream()));
    assert_eq!(socket.state(), SocketState::Open);
    assert_eq!(socket.last_error(), Err(InitViolation::NoErrorExists));

    assert!(socket.close_socket());
}

#[test]
fn test_dgram_and_inet6_bundles() {
    let mut socket = BasicSocket::new();

    if socket.open_socket(&SocketResourceDependencies::inet_dgram()) {
        assert!(socket.socket().unwrap() >= 0);
        assert!(socket.close_socket());
    }

    // IPv6 may be unavailable in constrained environments.
    if socket.open_socket(&SocketResourceDependencies::inet6_stream()) {
        assert!(socket.socket().unwrap() >= 0);
        assert!(socket.close_socket());
    }
}

#[test]
fn test_facades_do_not_leak_descriptors() {
    // Far more iterations than the default per-process descriptor limit;
    // only passes if every drop and close actually releases the handle.
    for _ in 0..2048 {
        let mut socket = BasicSocket::new();
        if socket.open_socket(&SocketResourceDependencies::inet_stream()) {
            drop(socket);
        }
    }
}
