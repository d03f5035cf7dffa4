// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Sticky exception flags of the interval operations.
//!
//! Operations never fail: when an operation leaves its domain, receives a malformed operand or loses boundedness in a conversion, it raises the corresponding flag and still returns a sound fallback value. Flags are additive and stay set until `clear()` is called.
//!
//! Each flag can also be put in the *throw mask*. A raised flag that is in the mask is additionally recorded as an `IntervalException` error, which `checked` turns into an `Err`. The register is thread-local, every thread sees its own flags and mask.
//!
//! # Examples
//!
//! ```rust
//! use p1788::exception::{self, Exceptions, IntervalException};
//! use p1788::Interval;
//!
//! exception::clear();
//! let x = Interval::new(-4.0, 4.0);
//! let r = x.sqrt();
//! assert_eq!(r, Interval::new(0.0, 2.0));
//! assert!(exception::possibly_undefined_operation());
//!
//! exception::set_throw_mask(Exceptions::POSSIBLY_UNDEFINED_OPERATION);
//! let res = exception::checked(|| x.sqrt());
//! assert_eq!(res, Err(IntervalException::PossiblyUndefinedOperation));
//! exception::set_throw_mask(Exceptions::empty());
//! ```

use std::cell::Cell;
use bitflags::bitflags;
use thiserror::Error;

bitflags! {
  /// Set of exception flags, one bit per condition of the standard.
  #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
  pub struct Exceptions: u8 {
    const UNDEFINED_OPERATION          = 0b0000_0001;
    const POSSIBLY_UNDEFINED_OPERATION = 0b0000_0010;
    const INVALID_OPERAND              = 0b0000_0100;
    const BOUND_CONVERSION_OVERFLOW    = 0b0000_1000;
    const ILL_FORMED_STRING            = 0b0001_0000;
  }
}

/// The error raised when a flag of the throw mask is signalled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum IntervalException {
  #[error("undefined operation: the input lies outside the domain of the function")]
  UndefinedOperation,
  #[error("possibly undefined operation: part of the input lies outside the domain of the function")]
  PossiblyUndefinedOperation,
  #[error("invalid operand: malformed interval or decoration")]
  InvalidOperand,
  #[error("bound conversion overflow: a finite bound became infinite")]
  BoundConversionOverflow,
  #[error("ill-formed string")]
  IllFormedString,
}

impl IntervalException {
  pub fn flag(self) -> Exceptions {
    use self::IntervalException::*;
    match self {
      UndefinedOperation => Exceptions::UNDEFINED_OPERATION,
      PossiblyUndefinedOperation => Exceptions::POSSIBLY_UNDEFINED_OPERATION,
      InvalidOperand => Exceptions::INVALID_OPERAND,
      BoundConversionOverflow => Exceptions::BOUND_CONVERSION_OVERFLOW,
      IllFormedString => Exceptions::ILL_FORMED_STRING,
    }
  }
}

#[derive(Clone, Copy, Debug, Default)]
struct Register {
  raised: Exceptions,
  throw_mask: Exceptions,
  pending: Option<IntervalException>,
}

thread_local! {
  static REGISTER: Cell<Register> = Cell::new(Register::default());
}

fn update<F: FnOnce(&mut Register)>(f: F) {
  REGISTER.with(|cell| {
    let mut reg = cell.get();
    f(&mut reg);
    cell.set(reg);
  });
}

fn read() -> Register {
  REGISTER.with(|cell| cell.get())
}

/// Resets every flag of the current thread. The throw mask is left untouched.
pub fn clear() {
  update(|reg| {
    reg.raised = Exceptions::empty();
    reg.pending = None;
  });
  tracing::trace!("interval exception flags cleared");
}

/// The flags raised since the last `clear()`.
pub fn state() -> Exceptions {
  read().raised
}

pub fn undefined_operation() -> bool {
  state().contains(Exceptions::UNDEFINED_OPERATION)
}

pub fn possibly_undefined_operation() -> bool {
  state().contains(Exceptions::POSSIBLY_UNDEFINED_OPERATION)
}

pub fn invalid_operand() -> bool {
  state().contains(Exceptions::INVALID_OPERAND)
}

pub fn bound_conversion_overflow() -> bool {
  state().contains(Exceptions::BOUND_CONVERSION_OVERFLOW)
}

pub fn ill_formed_string() -> bool {
  state().contains(Exceptions::ILL_FORMED_STRING)
}

/// Selects the flags that, when signalled, are also raised as errors.
pub fn set_throw_mask(mask: Exceptions) {
  update(|reg| reg.throw_mask = mask);
  tracing::trace!(mask = ?mask, "interval exception throw mask changed");
}

pub fn throw_mask() -> Exceptions {
  read().throw_mask
}

/// Raises `exception`. Idempotent on the flag register; the first masked exception signalled inside `checked` is kept as its error.
pub(crate) fn signal(exception: IntervalException) {
  let flag = exception.flag();
  let mut thrown = false;
  update(|reg| {
    reg.raised |= flag;
    if reg.throw_mask.contains(flag) {
      thrown = true;
      if reg.pending.is_none() {
        reg.pending = Some(exception);
      }
    }
  });
  tracing::debug!(exception = ?exception, thrown, "interval exception signalled");
}

/// Runs `f` and reports, as an error, the first exception of the throw mask signalled during its execution.
///
/// Flags raised by `f` stay set whatever the outcome. Calls can be nested, each level only reports what happened inside it.
pub fn checked<F, R>(f: F) -> Result<R, IntervalException> where
 F: FnOnce() -> R
{
  let outer = read().pending;
  update(|reg| reg.pending = None);
  let res = f();
  let inner = read().pending;
  update(|reg| reg.pending = outer.or(inner));
  match inner {
    Some(e) => Err(e),
    None => Ok(res)
  }
}
