// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Closed intervals of extended reals with floating-point bounds.
//!
//! An interval `[a..b]` is the set of all reals `x` such that `a <= x <= b`. The bounds can be infinite, which makes the interval unbounded, but `[-inf..-inf]` and `[+inf..+inf]` are not intervals since they contain no real. The empty interval is represented by a pair of NaN bounds.
//!
//! Zero bounds are canonical: a zero lower bound is always `-0.0` and a zero upper bound is always `+0.0`. Equality is the set equality and does not see the sign of zero.
//!
//! Every operation computes its lower bound rounded toward minus infinity and its upper bound rounded toward plus infinity so the result always contains the exact image of the operands. Operations never panic: out-of-domain inputs raise the flags of the [exception module](../exception/index.html) and a sound fallback is returned.
//!
//! # Examples
//!
//! ```rust
//! use p1788::Interval;
//!
//! let a = Interval::new(1.0, 2.0);
//! let b = Interval::new(-1.0, 3.0);
//! assert_eq!(a + b, Interval::new(0.0, 5.0));
//! assert_eq!(a * b, Interval::new(-2.0, 6.0));
//! assert!((a / Interval::point(3.0)).contains_value(0.5));
//! assert!(Interval::<f64>::empty().is_empty());
//! ```

use std::fmt::{Display, Formatter, Error};
use gcollections::kind::*;
use gcollections::ops::*;
use serde::{Serialize, Serializer, Deserialize, Deserializer};
use serde::de::Error as DeError;
use crate::ops::*;
use crate::rounding::*;
use crate::exception::{self, IntervalException};
use crate::decoration::Decoration;

#[derive(Debug, Copy, Clone)]
pub struct Interval<T> {
  lb: T,
  ub: T
}

impl<T> Interval<T> where
 T: Bound
{
  /// Builds the interval `[lb..ub]`. Raises `invalid_operand` and returns the empty interval if the bounds do not form an interval.
  pub fn new(lb: T, ub: T) -> Interval<T> {
    if Interval::is_valid(lb, ub) {
      Interval::make(lb, ub)
    }
    else {
      Interval::empty()
    }
  }

  /// Checks that `[lb..ub]` is an interval: NaN bounds denote the empty interval and must come in pair, otherwise `lb <= ub` and neither `lb = +inf` nor `ub = -inf`. Raises `invalid_operand` when it is not.
  pub fn is_valid(lb: T, ub: T) -> bool {
    let valid = Interval::check(lb, ub);
    if !valid {
      exception::signal(IntervalException::InvalidOperand);
    }
    valid
  }

  fn check(lb: T, ub: T) -> bool {
    if lb.is_nan() || ub.is_nan() {
      lb.is_nan() && ub.is_nan()
    }
    else {
      lb <= ub && lb != T::infinity() && ub != T::neg_infinity()
    }
  }

  /// Builds an interval from bounds computed by an operation, with canonical zeros.
  pub(crate) fn make(lb: T, ub: T) -> Interval<T> {
    if lb.is_nan() || ub.is_nan() {
      return Interval::empty();
    }
    let lb =
      if lb == T::infinity() { T::max_value() }
      else if lb == T::zero() { -T::zero() }
      else { lb };
    let ub =
      if ub == T::neg_infinity() { T::min_value() }
      else if ub == T::zero() { T::zero() }
      else { ub };
    Interval { lb, ub }
  }

  /// Raises the domain flags of a result paired with its local decoration: `trv` means the operands left the domain of the operation, entirely when the result is empty.
  pub(crate) fn report(eval: (Interval<T>, Decoration)) -> Interval<T> {
    let (res, dec) = eval;
    if dec == Decoration::Trv {
      exception::signal(
        if res.is_empty() { IntervalException::UndefinedOperation }
        else { IntervalException::PossiblyUndefinedOperation });
    }
    res
  }

  /// The interval `[x..x]`, or the empty interval when `x` is not finite.
  pub fn point(x: T) -> Interval<T> {
    if x.is_finite() {
      Interval::make(x, x)
    }
    else {
      Interval::empty()
    }
  }

  pub fn empty() -> Interval<T> {
    Interval { lb: T::nan(), ub: T::nan() }
  }

  pub fn entire() -> Interval<T> {
    Interval { lb: T::neg_infinity(), ub: T::infinity() }
  }

  /// Builds an interval of `T` from bounds of another type, rounding outward. A finite bound that becomes infinite raises `bound_conversion_overflow`.
  pub fn with_bounds<U: Bound>(lb: U, ub: U) -> Interval<T> {
    Interval::convert(&Interval::<U>::new(lb, ub))
  }

  /// The tightest interval of `T` containing `x`.
  pub fn convert<U: Bound>(x: &Interval<U>) -> Interval<T> {
    if x.is_empty() {
      return Interval::empty();
    }
    let lb = T::narrow(x.lb.widen(), Round::Down);
    let ub = T::narrow(x.ub.widen(), Round::Up);
    if (x.lb.is_finite() && lb.is_infinite()) || (x.ub.is_finite() && ub.is_infinite()) {
      exception::signal(IntervalException::BoundConversionOverflow);
    }
    Interval::make(lb, ub)
  }

  /// The tightest interval containing pi.
  pub fn pi() -> Interval<T> {
    let (lb, ub) = pi_f64();
    Interval::make(T::narrow(lb, Round::Down), T::narrow(ub, Round::Up))
  }

  /// Lower bound; `+inf` for the empty interval.
  pub fn inf(&self) -> T {
    if self.is_empty() { T::infinity() } else { self.lb }
  }

  /// Upper bound; `-inf` for the empty interval.
  pub fn sup(&self) -> T {
    if self.is_empty() { T::neg_infinity() } else { self.ub }
  }

  pub fn is_empty(&self) -> bool {
    self.lb.is_nan()
  }

  pub fn is_entire(&self) -> bool {
    self.lb == T::neg_infinity() && self.ub == T::infinity()
  }

  /// Both bounds finite. The empty interval is bounded.
  pub fn is_bounded(&self) -> bool {
    self.is_empty() || (self.lb.is_finite() && self.ub.is_finite())
  }

  pub fn contains_value(&self, x: T) -> bool {
    !self.is_empty() && x.is_finite() && self.lb <= x && x <= self.ub
  }

  pub(crate) fn contains_zero(&self) -> bool {
    !self.is_empty() && self.lb <= T::zero() && T::zero() <= self.ub
  }

  pub(crate) fn is_zero(&self) -> bool {
    !self.is_empty() && self.lb == T::zero() && self.ub == T::zero()
  }

  /// Midpoint rounded to nearest. `0` for the entire interval and the largest finite value of the right sign for half-bounded ones.
  pub fn mid(&self) -> T {
    if self.is_empty() {
      T::nan()
    }
    else if self.is_entire() {
      T::zero()
    }
    else if self.lb == T::neg_infinity() {
      T::min_value()
    }
    else if self.ub == T::infinity() {
      T::max_value()
    }
    else {
      let (l, u) = (self.lb.widen(), self.ub.widen());
      let sum = l + u;
      let m = if sum.is_finite() { sum * 0.5 } else { l * 0.5 + u * 0.5 };
      let m = T::narrow(m, Round::Nearest);
      if m == T::zero() { T::zero() } else { m }
    }
  }

  /// Radius: the smallest `r` such that `[mid - r..mid + r]` contains the interval.
  pub fn rad(&self) -> T {
    if self.is_empty() {
      T::nan()
    }
    else if !self.is_bounded() {
      T::infinity()
    }
    else {
      let m = self.mid();
      let r = sub_up(m, self.lb).max(sub_up(self.ub, m));
      if r == T::zero() { T::zero() } else { r }
    }
  }

  pub fn mid_rad(&self) -> (T, T) {
    (self.mid(), self.rad())
  }

  /// Width `sup - inf` rounded up.
  pub fn wid(&self) -> T {
    if self.is_empty() {
      T::nan()
    }
    else {
      let w = sub_up(self.ub, self.lb);
      if w == T::zero() { T::zero() } else { w }
    }
  }

  /// Magnitude: the largest absolute value of the interval.
  pub fn mag(&self) -> T {
    if self.is_empty() { T::nan() }
    else { self.lb.abs().max(self.ub.abs()) }
  }

  /// Mignitude: the smallest absolute value of the interval.
  pub fn mig(&self) -> T {
    if self.is_empty() { T::nan() }
    else if self.contains_zero() { T::zero() }
    else { self.lb.abs().min(self.ub.abs()) }
  }
}

impl<T> PartialEq for Interval<T> where
 T: Bound
{
  fn eq(&self, other: &Interval<T>) -> bool {
    if self.is_empty() || other.is_empty() {
      self.is_empty() && other.is_empty()
    }
    else {
      self.lb == other.lb && self.ub == other.ub
    }
  }
}

impl<T> Collection for Interval<T>
{
  type Item = T;
}

impl<T> Empty for Interval<T> where
 T: Bound
{
  fn empty() -> Interval<T> {
    Interval::empty()
  }
}

impl<T> Singleton for Interval<T> where
 T: Bound
{
  fn singleton(x: T) -> Interval<T> {
    Interval::point(x)
  }
}

impl<T> IsEmpty for Interval<T> where
 T: Bound
{
  fn is_empty(&self) -> bool {
    Interval::is_empty(self)
  }
}

impl<T> Bounded for Interval<T> where
 T: Bound
{
  fn lower(&self) -> T {
    self.inf()
  }

  fn upper(&self) -> T {
    self.sup()
  }
}

impl<T> Range for Interval<T> where
 T: Bound
{
  fn new(lb: T, ub: T) -> Interval<T> {
    Interval::new(lb, ub)
  }
}

impl<T> Whole for Interval<T> where
 T: Bound
{
  fn whole() -> Interval<T> {
    Interval::entire()
  }
}

impl<T> Display for Interval<T> where
 T: Bound
{
  fn fmt(&self, formatter: &mut Formatter) -> Result<(), Error> {
    if self.is_empty() {
      formatter.write_str("[empty]")
    }
    else if self.is_entire() {
      formatter.write_str("[entire]")
    }
    else {
      formatter.write_fmt(format_args!("[{}, {}]", self.lb, self.ub))
    }
  }
}

impl<T> Serialize for Interval<T> where
 T: Bound + Serialize
{
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where
   S: Serializer
  {
    if self.is_empty() {
      serializer.serialize_none()
    }
    else {
      serializer.serialize_some(&(self.lb, self.ub))
    }
  }
}

impl<'de, T> Deserialize<'de> for Interval<T> where
 T: Bound + Deserialize<'de>
{
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where
   D: Deserializer<'de>
  {
    let wrapper: Option<(T, T)> = Deserialize::deserialize(deserializer)?;
    match wrapper {
      Some((lb, ub)) if Interval::check(lb, ub) => Ok(Interval::make(lb, ub)),
      Some((lb, ub)) => Err(D::Error::custom(format!("[{}, {}] is not an interval", lb, ub))),
      None => Ok(Interval::empty())
    }
  }
}
