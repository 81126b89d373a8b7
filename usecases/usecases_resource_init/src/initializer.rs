//! Initializer Module
//!
//! Implements the deferred initializer family. Both variants cache the
//! outcome of their most recent invocation; all accessors are gated on the
//! cached state so a caller can never read a resource that was not
//! acquired, or an error that did not happen. A never-invoked initializer
//! reports an invalid resource and no error.

use std::sync::Arc;

use entities_resource_result::InitOutcome;
use thiserror::Error;

/// Contract violation raised when an initializer is queried outside the
/// state its last invocation produced.
///
/// These indicate caller bugs and are not part of normal control flow;
/// operational failures travel inside the cached [`InitOutcome`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InitViolation {
    /// A resource accessor was called while no valid resource exists.
    #[error("cannot get an invalid resource")]
    InvalidResource,
    /// An error accessor was called while the resource is valid (or no
    /// invocation has happened yet).
    #[error("cannot get an error while the resource is valid")]
    NoErrorExists,
    /// A dependency bundle failed validation before acquisition.
    #[error("invalid dependencies for resource initialization")]
    InvalidDependencies,
}

/// Capability of deferred, explicitly-triggered resource acquisition.
///
/// Outer layers that only need to (re-)run an acquisition can hold any
/// concrete initializer behind `&mut dyn ResourceInitialize`.
pub trait ResourceInitialize {
    /// Run the acquisition once, replacing any previously cached outcome.
    fn initialize_resource(&mut self);
}

/// Capability of releasing an acquired native resource.
///
/// Implementations must tolerate repeated calls: releasing an
/// already-released resource is a no-op.
pub trait ResourceRelease {
    /// Release the held resource, if any.
    fn release(&mut self);
}

/// Deferred initializer parameterized by a dependency bundle.
///
/// Holds a caller-supplied callable of shape
/// `FnMut(&D) -> InitOutcome<T, E>`, the bundle fed to it, and the outcome
/// of the most recent invocation. Invocation is never implicit: the
/// callable runs exactly once per [`initialize_resource`] call, and each
/// call overwrites the cached outcome. There is no retry policy here — a
/// retry is [`set_resource_dependencies`] followed by another invocation.
///
/// The initializer is move-only, like the outcome it caches.
///
/// [`initialize_resource`]: ResourceInitializer::initialize_resource
/// [`set_resource_dependencies`]: ResourceInitializer::set_resource_dependencies
pub struct ResourceInitializer<T, E, D> {
    initializer: Box<dyn FnMut(&D) -> InitOutcome<T, E>>,
    dependencies: D,
    outcome: Option<InitOutcome<T, E>>,
}

impl<T, E, D> ResourceInitializer<T, E, D> {
    /// Create an initializer with its acquisition callable and an initial
    /// dependency bundle. No acquisition happens here.
    ///
    /// # Arguments
    ///
    /// * `dependencies` - Bundle fed to the callable on each invocation
    /// * `initializer` - The acquisition callable
    pub fn new<F>(dependencies: D, initializer: F) -> Self
    where
        F: FnMut(&D) -> InitOutcome<T, E> + 'static,
    {
        Self {
            initializer: Box::new(initializer),
            dependencies,
            outcome: None,
        }
    }

    /// Replace the dependency bundle used by the next invocation.
    pub fn set_resource_dependencies(&mut self, dependencies: D) {
        self.dependencies = dependencies;
    }

    /// Borrow the current dependency bundle.
    pub fn resource_dependencies(&self) -> &D {
        &self.dependencies
    }

    /// Run the acquisition callable once against the current bundle,
    /// replacing the cached outcome.
    ///
    /// Not idempotent: every call re-runs the callable, which may acquire
    /// a fresh OS handle. The previous outcome is dropped; releasing any
    /// handle it held is the caller's responsibility.
    pub fn initialize_resource(&mut self) {
        self.outcome = Some((self.initializer)(&self.dependencies));
    }

    /// Whether the most recent invocation produced a valid resource.
    ///
    /// # Returns
    ///
    /// * `true` - The cached outcome holds a success payload
    /// * `false` - The cached outcome holds an error, or the initializer
    ///   was never invoked
    pub fn is_valid_resource(&self) -> bool {
        self.outcome.as_ref().is_some_and(InitOutcome::has_result)
    }

    /// Borrow the acquired resource.
    ///
    /// # Returns
    ///
    /// * `Ok(&T)` - The resource from the last successful invocation
    /// * `Err(InitViolation::InvalidResource)` - No valid resource exists
    pub fn actual_resource(&self) -> Result<&T, InitViolation> {
        self.outcome
            .as_ref()
            .and_then(|outcome| outcome.result().ok())
            .ok_or(InitViolation::InvalidResource)
    }

    /// Borrow the acquisition error.
    ///
    /// Legal only while the resource is not valid: a valid resource means
    /// no error exists, and a never-invoked initializer has no error
    /// either.
    ///
    /// # Returns
    ///
    /// * `Ok(&E)` - The error from the last failed invocation
    /// * `Err(InitViolation::NoErrorExists)` - The resource is valid or no
    ///   invocation has happened
    pub fn actual_error(&self) -> Result<&E, InitViolation> {
        self.outcome
            .as_ref()
            .and_then(|outcome| outcome.error().ok())
            .ok_or(InitViolation::NoErrorExists)
    }
}

impl<T, E, D> ResourceInitializer<T, E, D>
where
    T: Clone,
{
    /// Allocate a fresh, exclusively-owned copy of the resource.
    ///
    /// # Returns
    ///
    /// * `Ok(Box<T>)` - A new copy with a single owner
    /// * `Err(InitViolation::InvalidResource)` - No valid resource exists
    pub fn unique_resource(&self) -> Result<Box<T>, InitViolation> {
        self.actual_resource().map(|value| Box::new(value.clone()))
    }

    /// Allocate a fresh, shared-ownership copy of the resource.
    ///
    /// This is the only sharing path: until it is called, the resource has
    /// exactly one owner.
    ///
    /// # Returns
    ///
    /// * `Ok(Arc<T>)` - A new shared-ownership copy
    /// * `Err(InitViolation::InvalidResource)` - No valid resource exists
    pub fn shared_resource(&self) -> Result<Arc<T>, InitViolation> {
        self.actual_resource().map(|value| Arc::new(value.clone()))
    }
}

impl<T, E, D> ResourceInitialize for ResourceInitializer<T, E, D> {
    fn initialize_resource(&mut self) {
        ResourceInitializer::initialize_resource(self);
    }
}

/// Deferred initializer without a dependency bundle.
///
/// Same contract as [`ResourceInitializer`] with a no-argument callable;
/// useful when the acquisition parameters are baked into the callable
/// itself.
pub struct SimpleResourceInitializer<T, E> {
    initializer: Box<dyn FnMut() -> InitOutcome<T, E>>,
    outcome: Option<InitOutcome<T, E>>,
}

impl<T, E> SimpleResourceInitializer<T, E> {
    /// Create an initializer from its acquisition callable. No acquisition
    /// happens here.
    pub fn new<F>(initializer: F) -> Self
    where
        F: FnMut() -> InitOutcome<T, E> + 'static,
    {
        Self {
            initializer: Box::new(initializer),
            outcome: None,
        }
    }

    /// Run the acquisition callable once, replacing the cached outcome.
    pub fn initialize_resource(&mut self) {
        self.outcome = Some((self.initializer)());
    }

    /// Whether the most recent invocation produced a valid resource.
    pub fn is_valid_resource(&self) -> bool {
        self.outcome.as_ref().is_some_and(InitOutcome::has_result)
    }

    /// Borrow the acquired resource.
    ///
    /// # Returns
    ///
    /// * `Ok(&T)` - The resource from the last successful invocation
    /// * `Err(InitViolation::InvalidResource)` - No valid resource exists
    pub fn actual_resource(&self) -> Result<&T, InitViolation> {
        self.outcome
            .as_ref()
            .and_then(|outcome| outcome.result().ok())
            .ok_or(InitViolation::InvalidResource)
    }

    /// Borrow the acquisition error.
    ///
    /// # Returns
    ///
    /// * `Ok(&E)` - The error from the last failed invocation
    /// * `Err(InitViolation::NoErrorExists)` - The resource is valid or no
    ///   invocation has happened
    pub fn actual_error(&self) -> Result<&E, InitViolation> {
        self.outcome
            .as_ref()
            .and_then(|outcome| outcome.error().ok())
            .ok_or(InitViolation::NoErrorExists)
    }
}

impl<T, E> SimpleResourceInitializer<T, E>
where
    T: Clone,
{
    /// Allocate a fresh, exclusively-owned copy of the resource.
    pub fn unique_resource(&self) -> Result<Box<T>, InitViolation> {
        self.actual_resource().map(|value| Box::new(value.clone()))
    }

    /// Allocate a fresh, shared-ownership copy of the resource.
    pub fn shared_resource(&self) -> Result<Arc<T>, InitViolation> {
        self.actual_resource().map(|value| Arc::new(value.clone()))
    }
}

impl<T, E> ResourceInitialize for SimpleResourceInitializer<T, E> {
    fn initialize_resource(&mut self) {
        SimpleResourceInitializer::initialize_resource(self);
    }
}
