// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Decorated intervals: a bare interval tagged with a [decoration](../decoration/index.html).
//!
//! The decoration of a result tells what is known of the function on the whole input box: `com` if it is defined, continuous and the result is bounded, `dac` if it is defined and continuous, `def` if it is only defined, `trv` when nothing is known. The pair must be consistent: `com` needs a bounded nonempty interval, `dac` a nonempty one, and `ill` only tags the NaI ("not an interval"), the result of an invalid construction.
//!
//! ```rust
//! use p1788::{DecoratedInterval, Decoration, Interval};
//!
//! let x = DecoratedInterval::from_bounds(1.0, 4.0);
//! assert_eq!(x.decoration(), Decoration::Com);
//! assert_eq!(x.sqrt().decoration(), Decoration::Com);
//! let y = DecoratedInterval::from_bounds(-1.0, 4.0).sqrt();
//! assert_eq!(y.decoration(), Decoration::Trv);
//! assert_eq!(y.interval(), Interval::new(0.0, 2.0));
//! assert!(DecoratedInterval::<f64>::point(f64::NAN).is_nai());
//! ```

use std::fmt::{Display, Formatter, Error};
use serde::{Serialize, Serializer, Deserialize, Deserializer};
use serde::de::Error as DeError;
use crate::interval::Interval;
use crate::decoration::Decoration;
use crate::boolean::OverlapState;
use crate::exception::{self, IntervalException};
use crate::ops::*;

#[derive(Debug, Copy, Clone)]
pub struct DecoratedInterval<T> {
  interval: Interval<T>,
  dec: Decoration
}

impl<T> DecoratedInterval<T> where
 T: Bound
{
  /// Tags `interval` with `dec`. Raises `invalid_operand` and returns NaI if the pair is inconsistent.
  pub fn new(interval: Interval<T>, dec: Decoration) -> DecoratedInterval<T> {
    if DecoratedInterval::is_valid(&interval, dec) {
      DecoratedInterval { interval, dec }
    }
    else {
      DecoratedInterval::nai()
    }
  }

  /// Checks that `dec` can tag `interval`. Raises `invalid_operand` when it cannot.
  pub fn is_valid(interval: &Interval<T>, dec: Decoration) -> bool {
    let valid = DecoratedInterval::check(interval, dec);
    if !valid {
      exception::signal(IntervalException::InvalidOperand);
    }
    valid
  }

  fn check(interval: &Interval<T>, dec: Decoration) -> bool {
    match dec {
      Decoration::Ill => interval.is_empty(),
      Decoration::Com => !interval.is_empty() && interval.is_bounded(),
      Decoration::Dac => !interval.is_empty(),
      Decoration::Def | Decoration::Trv => true,
    }
  }

  /// Tags a computed result with the decoration `dec`, lowered so that the pair is consistent.
  pub(crate) fn make(interval: Interval<T>, dec: Decoration) -> DecoratedInterval<T> {
    let dec =
      if interval.is_empty() { Decoration::Trv }
      else if dec == Decoration::Com && !interval.is_bounded() { Decoration::Dac }
      else { dec };
    DecoratedInterval { interval, dec }
  }

  /// The best decoration of a bare interval: `com` if it is bounded and nonempty, `dac` if it is unbounded and `trv` if it is empty.
  pub fn from_interval(interval: Interval<T>) -> DecoratedInterval<T> {
    DecoratedInterval::make(interval, Decoration::Com)
  }

  /// Decorated `[lb..ub]`, NaI if the bounds do not form an interval.
  pub fn from_bounds(lb: T, ub: T) -> DecoratedInterval<T> {
    if Interval::is_valid(lb, ub) {
      DecoratedInterval::from_interval(Interval::new(lb, ub))
    }
    else {
      DecoratedInterval::nai()
    }
  }

  /// `[x..x]_com`. A non-finite `x` gives NaI and raises `invalid_operand`.
  pub fn point(x: T) -> DecoratedInterval<T> {
    if x.is_finite() {
      DecoratedInterval::from_interval(Interval::point(x))
    }
    else {
      exception::signal(IntervalException::InvalidOperand);
      DecoratedInterval::nai()
    }
  }

  pub fn empty() -> DecoratedInterval<T> {
    DecoratedInterval { interval: Interval::empty(), dec: Decoration::Trv }
  }

  pub fn entire() -> DecoratedInterval<T> {
    DecoratedInterval { interval: Interval::entire(), dec: Decoration::Dac }
  }

  /// Not an interval.
  pub fn nai() -> DecoratedInterval<T> {
    DecoratedInterval { interval: Interval::empty(), dec: Decoration::Ill }
  }

  /// The NaI resulting from an operation on NaI.
  pub(crate) fn nai_operand() -> DecoratedInterval<T> {
    exception::signal(IntervalException::InvalidOperand);
    DecoratedInterval::nai()
  }

  /// The tightest decorated interval of `T` containing `x`. The decoration drops to `dac` if a bound overflows.
  pub fn convert<U: Bound>(x: &DecoratedInterval<U>) -> DecoratedInterval<T> {
    if x.is_nai() {
      DecoratedInterval::nai()
    }
    else {
      DecoratedInterval::make(Interval::convert(&x.interval), x.dec)
    }
  }

  /// The bare part. NaI has no bare part: raises `invalid_operand` and returns the empty interval.
  pub fn interval(&self) -> Interval<T> {
    if self.is_nai() {
      exception::signal(IntervalException::InvalidOperand);
    }
    self.interval
  }

  pub(crate) fn bare(&self) -> &Interval<T> {
    &self.interval
  }

  pub fn decoration(&self) -> Decoration {
    self.dec
  }

  pub fn is_nai(&self) -> bool {
    self.dec == Decoration::Ill
  }

  fn numeric<F>(&self, f: F) -> T where
   F: Fn(&Interval<T>) -> T
  {
    if self.is_nai() { T::nan() }
    else { f(&self.interval) }
  }

  pub fn inf(&self) -> T { self.numeric(Interval::inf) }
  pub fn sup(&self) -> T { self.numeric(Interval::sup) }
  pub fn mid(&self) -> T { self.numeric(Interval::mid) }
  pub fn rad(&self) -> T { self.numeric(Interval::rad) }
  pub fn wid(&self) -> T { self.numeric(Interval::wid) }
  pub fn mag(&self) -> T { self.numeric(Interval::mag) }
  pub fn mig(&self) -> T { self.numeric(Interval::mig) }

  pub fn mid_rad(&self) -> (T, T) {
    (self.mid(), self.rad())
  }

  fn predicate<F>(&self, f: F) -> bool where
   F: Fn(&Interval<T>) -> bool
  {
    !self.is_nai() && f(&self.interval)
  }

  fn relation<F>(&self, other: &DecoratedInterval<T>, f: F) -> bool where
   F: Fn(&Interval<T>, &Interval<T>) -> bool
  {
    !self.is_nai() && !other.is_nai() && f(&self.interval, &other.interval)
  }

  pub fn is_empty(&self) -> bool {
    self.predicate(Interval::is_empty)
  }

  pub fn is_entire(&self) -> bool {
    self.predicate(Interval::is_entire)
  }

  pub fn is_common_interval(&self) -> bool {
    self.predicate(Interval::is_common_interval)
  }

  pub fn is_singleton(&self) -> bool {
    self.predicate(Interval::is_singleton)
  }

  pub fn is_member(&self, x: T) -> bool {
    self.predicate(|i| i.is_member(x))
  }

  /// Set equality of the bare parts, decorations are not compared.
  pub fn is_equal(&self, other: &DecoratedInterval<T>) -> bool {
    self.relation(other, Interval::is_equal)
  }

  pub fn subset(&self, other: &DecoratedInterval<T>) -> bool {
    self.relation(other, Interval::subset)
  }

  pub fn less(&self, other: &DecoratedInterval<T>) -> bool {
    self.relation(other, Interval::less)
  }

  pub fn strictly_less(&self, other: &DecoratedInterval<T>) -> bool {
    self.relation(other, Interval::strictly_less)
  }

  pub fn precedes(&self, other: &DecoratedInterval<T>) -> bool {
    self.relation(other, Interval::precedes)
  }

  pub fn strictly_precedes(&self, other: &DecoratedInterval<T>) -> bool {
    self.relation(other, Interval::strictly_precedes)
  }

  pub fn is_interior(&self, other: &DecoratedInterval<T>) -> bool {
    self.relation(other, Interval::is_interior)
  }

  pub fn are_disjoint(&self, other: &DecoratedInterval<T>) -> bool {
    self.relation(other, Interval::are_disjoint)
  }

  /// Overlapping state of the bare parts, `None` if one of the operands is NaI.
  pub fn overlap(&self, other: &DecoratedInterval<T>) -> Option<OverlapState> {
    if self.is_nai() || other.is_nai() { None }
    else { Some(self.interval.overlap(&other.interval)) }
  }
}

/// Structural equality: same bare part and same decoration.
impl<T> PartialEq for DecoratedInterval<T> where
 T: Bound
{
  fn eq(&self, other: &DecoratedInterval<T>) -> bool {
    self.dec == other.dec && self.interval == other.interval
  }
}

impl<T> Display for DecoratedInterval<T> where
 T: Bound
{
  fn fmt(&self, formatter: &mut Formatter) -> Result<(), Error> {
    if self.is_nai() {
      formatter.write_str("[nai]")
    }
    else {
      formatter.write_fmt(format_args!("{}_{}", self.interval, self.dec))
    }
  }
}

impl<T> Serialize for DecoratedInterval<T> where
 T: Bound + Serialize
{
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where
   S: Serializer
  {
    (&self.interval, self.dec).serialize(serializer)
  }
}

impl<'de, T> Deserialize<'de> for DecoratedInterval<T> where
 T: Bound + Deserialize<'de>
{
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where
   D: Deserializer<'de>
  {
    let (interval, dec): (Interval<T>, Decoration) = Deserialize::deserialize(deserializer)?;
    if DecoratedInterval::check(&interval, dec) {
      Ok(DecoratedInterval { interval, dec })
    }
    else {
      Err(D::Error::custom(format!("{} cannot be decorated with `{}`", interval, dec)))
    }
  }
}
