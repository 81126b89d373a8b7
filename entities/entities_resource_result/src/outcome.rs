//! Outcome Module
//!
//! Implements the two-state success/error container for resource
//! acquisition results. The container is move-only: duplicating it would
//! duplicate ownership of whatever native handle the success payload
//! represents, so neither `Clone` nor `Copy` is provided and transferring a
//! numeric payload between containers goes through the explicit
//! [`InitOutcome::take_from`] operation, which zeroes the source.

use std::mem;

use thiserror::Error;

/// Contract violation raised when an [`InitOutcome`] accessor is called
/// against the wrong state.
///
/// These signal caller bugs, not operational failures: the error payload of
/// an outcome describes why an acquisition failed, while an
/// `AccessViolation` means the caller read the side of the container that
/// is not active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AccessViolation {
    /// A result accessor was called while the error payload is active.
    #[error("cannot access a result value while the outcome holds an error")]
    BadResultAccess,
    /// An error accessor was called while the success payload is active.
    #[error("cannot access an error value while the outcome holds a result")]
    BadErrorAccess,
}

/// Move-only wrapper around an error payload.
///
/// Error payloads must be default-constructible so that a transfer out of a
/// container can leave a well-defined value behind (see
/// [`InitOutcome::take_from`]). Platform error codes (`i32` errno values)
/// satisfy this trivially.
#[derive(Debug, PartialEq, Eq)]
pub struct ErrorValue<E> {
    value: E,
}

impl<E> ErrorValue<E> {
    /// Wrap an error payload.
    pub fn new(value: E) -> Self {
        Self { value }
    }

    /// Borrow the wrapped payload.
    pub fn get(&self) -> &E {
        &self.value
    }

    /// Consume the wrapper, yielding the payload.
    pub fn into_inner(self) -> E {
        self.value
    }
}

/// Numeric payload types that can be "stolen" out of a container.
///
/// A raw handle value is copyable and has a zero-equivalent default, so a
/// transfer can invalidate the source by resetting its payload to zero.
/// Implemented for the integer and floating-point primitives; a native
/// socket descriptor (`i32`) is the motivating case.
pub trait RawHandleValue: Copy + Default {}

macro_rules! impl_raw_handle_value {
    ($($ty:ty),*) => {
        $(impl RawHandleValue for $ty {})*
    };
}

impl_raw_handle_value!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

#[derive(Debug)]
enum OutcomeState<T, E> {
    Success(T),
    Failure(ErrorValue<E>),
}

/// Two-state container holding exactly one of a success payload or an
/// error payload.
///
/// The active side is determined solely by the construction path
/// ([`InitOutcome::success`] vs [`InitOutcome::failure`]); the inactive
/// side does not exist and can never be read. Accessors that target the
/// inactive side return an [`AccessViolation`].
///
/// The container is move-only. Rust's move semantics make a moved-from
/// outcome unusable without reassignment, which is exactly the ownership
/// story a native handle needs.
///
/// # Examples
///
/// ```rust
/// use entities_resource_result::{AccessViolation, InitOutcome};
///
/// let ok: InitOutcome<i32, i32> = InitOutcome::success(7);
/// assert!(ok.has_result());
/// assert_eq!(ok.result(), Ok(&7));
/// assert_eq!(ok.error(), Err(AccessViolation::BadErrorAccess));
///
/// let bad: InitOutcome<i32, i32> = InitOutcome::fail_with(-1);
/// assert!(!bad.has_result());
/// assert_eq!(bad.error(), Ok(&-1));
/// ```
#[derive(Debug)]
pub struct InitOutcome<T, E> {
    state: OutcomeState<T, E>,
}

impl<T, E> InitOutcome<T, E> {
    /// Construct an outcome in the success state.
    pub fn success(value: T) -> Self {
        Self {
            state: OutcomeState::Success(value),
        }
    }

    /// Construct an outcome in the error state from a wrapped payload.
    pub fn failure(error: ErrorValue<E>) -> Self {
        Self {
            state: OutcomeState::Failure(error),
        }
    }

    /// Construct an outcome in the error state from a bare payload.
    pub fn fail_with(error: E) -> Self {
        Self::failure(ErrorValue::new(error))
    }

    /// Whether the success payload is the active side.
    ///
    /// # Returns
    ///
    /// * `true` - The outcome was constructed or assigned in success state
    /// * `false` - The outcome holds an error payload
    pub fn has_result(&self) -> bool {
        matches!(self.state, OutcomeState::Success(_))
    }

    /// Borrow the success payload.
    ///
    /// # Returns
    ///
    /// * `Ok(&T)` - The success payload
    /// * `Err(AccessViolation::BadResultAccess)` - The error side is active
    pub fn result(&self) -> Result<&T, AccessViolation> {
        match &self.state {
            OutcomeState::Success(value) => Ok(value),
            OutcomeState::Failure(_) => Err(AccessViolation::BadResultAccess),
        }
    }

    /// Borrow the error payload.
    ///
    /// # Returns
    ///
    /// * `Ok(&E)` - The error payload
    /// * `Err(AccessViolation::BadErrorAccess)` - The success side is active
    pub fn error(&self) -> Result<&E, AccessViolation> {
        match &self.state {
            OutcomeState::Success(_) => Err(AccessViolation::BadErrorAccess),
            OutcomeState::Failure(error) => Ok(error.get()),
        }
    }

    /// Consume the outcome, yielding the success payload.
    ///
    /// # Returns
    ///
    /// * `Ok(T)` - The success payload, ownership transferred to the caller
    /// * `Err(AccessViolation::BadResultAccess)` - The error side is active
    pub fn into_result(self) -> Result<T, AccessViolation> {
        match self.state {
            OutcomeState::Success(value) => Ok(value),
            OutcomeState::Failure(_) => Err(AccessViolation::BadResultAccess),
        }
    }

    /// Consume the outcome, yielding the error payload.
    ///
    /// # Returns
    ///
    /// * `Ok(E)` - The error payload, ownership transferred to the caller
    /// * `Err(AccessViolation::BadErrorAccess)` - The success side is active
    pub fn into_error(self) -> Result<E, AccessViolation> {
        match self.state {
            OutcomeState::Success(_) => Err(AccessViolation::BadErrorAccess),
            OutcomeState::Failure(error) => Ok(error.into_inner()),
        }
    }
}

impl<T, E> From<ErrorValue<E>> for InitOutcome<T, E> {
    fn from(error: ErrorValue<E>) -> Self {
        Self::failure(error)
    }
}

impl<T, E> InitOutcome<T, E>
where
    T: RawHandleValue,
    E: Default,
{
    /// Transfer a numeric payload out of another container, invalidating
    /// the source.
    ///
    /// Models stealing a descriptor: the new outcome reproduces the
    /// source's discriminant and payload, while the source's success
    /// payload is reset to zero (or its error payload to the default) so
    /// the handle has exactly one live owner afterwards. The source
    /// container may hold a differently-typed numeric payload as long as
    /// it widens losslessly into `T`.
    ///
    /// # Arguments
    ///
    /// * `source` - The container to steal from; left in a reset state
    ///
    /// # Examples
    ///
    /// ```rust
    /// use entities_resource_result::InitOutcome;
    ///
    /// let mut fd: InitOutcome<i32, i32> = InitOutcome::success(5);
    /// let wide: InitOutcome<i64, i32> = InitOutcome::take_from(&mut fd);
    /// assert_eq!(wide.result(), Ok(&5));
    /// assert_eq!(fd.result(), Ok(&0));
    /// ```
    pub fn take_from<U>(source: &mut InitOutcome<U, E>) -> Self
    where
        U: RawHandleValue + Into<T>,
    {
        match &mut source.state {
            OutcomeState::Success(value) => Self::success(mem::take(value).into()),
            OutcomeState::Failure(error) => Self::fail_with(mem::take(&mut error.value)),
        }
    }
}
