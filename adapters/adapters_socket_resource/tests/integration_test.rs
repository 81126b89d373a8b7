//! Integration tests for adapters_socket_resource crate
//!
//! Drives the platform backend through the generic initializer machinery
//! the way the façade layer does: defer, invoke, inspect, promote, release.

#![cfg(unix)]

use adapters_socket_resource::{
    close_socket, socket_initializer_with, SocketResourceDependencies, SocketResourceReleaser,
};
use usecases_resource_init::{InitViolation, ResourceRelease};

#[test]
fn test_deferred_acquisition_end_to_end() {
    let mut initializer =
        socket_initializer_with(SocketResourceDependencies::inet_stream());

    // Nothing acquired yet.
    assert!(!initializer.is_valid_resource());
    assert_eq!(
        initializer.actual_resource().copied(),
        Err(InitViolation::InvalidResource)
    );

    initializer.initialize_resource();
    assert!(initializer.is_valid_resource());

    let handle = *initializer.actual_resource().unwrap();
    assert!(handle >= 0);
    assert_eq!(
        initializer.actual_error().copied(),
        Err(InitViolation::NoErrorExists)
    );

    assert!(close_socket(handle));
}

#[test]
fn test_retry_with_different_dependencies() {
    // First attempt uses a family the OS rejects; the retry succeeds.
    let mut initializer = socket_initializer_with(SocketResourceDependencies::new(
        9999,
        libc::SOCK_STREAM,
        0,
    ));

    initializer.initialize_resource();
    assert!(!initializer.is_valid_resource());
    assert!(initializer.actual_error().is_ok());

    initializer.set_resource_dependencies(SocketResourceDependencies::inet_dgram());
    initializer.initialize_resource();
    assert!(initializer.is_valid_resource());

    let handle = *initializer.actual_resource().unwrap();
    assert!(close_socket(handle));
}

#[test]
fn test_shared_promotion_of_descriptor() {
    let mut initializer =
        socket_initializer_with(SocketResourceDependencies::inet_stream());
    initializer.initialize_resource();

    let shared = initializer.shared_resource().unwrap();
    let original = *initializer.actual_resource().unwrap();
    assert_eq!(*shared, original);

    assert!(close_socket(original));
}

#[test]
fn test_releaser_owns_descriptor_until_released() {
    let mut initializer =
        socket_initializer_with(SocketResourceDependencies::inet_stream());
    initializer.initialize_resource();
    let handle = *initializer.actual_resource().unwrap();

    let mut releaser = SocketResourceReleaser::new(handle);
    assert!(releaser.is_armed());

    releaser.release();
    assert!(!releaser.is_armed());

    // Disarmed: dropping the releaser must not touch the (already closed)
    // descriptor number again.
    drop(releaser);
}
