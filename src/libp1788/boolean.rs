// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Boolean functions of intervals.
//!
//! The empty and entire intervals follow explicit truth tables. In `less`, `strictly_less` and `is_interior`, an infinite bound is related to itself (`-inf <' -inf` and `+inf <' +inf`), hence `strictly_less(entire, entire)` holds. `precedes` and `strictly_precedes` are true as soon as one operand is empty.
//!
//! `overlap` classifies a pair of intervals into one of the sixteen states of `OverlapState`, thirteen for non-empty intervals (Allen's relations) and three for the empty ones.

use std::fmt::{Display, Formatter, Error};
use gcollections::ops::*;
use crate::interval::Interval;
use crate::ops::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OverlapState {
  BothEmpty,
  FirstEmpty,
  SecondEmpty,
  Before,
  Meets,
  Overlaps,
  Starts,
  ContainedBy,
  Finishes,
  Equal,
  FinishedBy,
  Contains,
  StartedBy,
  OverlappedBy,
  MetBy,
  After,
}

impl OverlapState
{
  /// The state of `overlap(b, a)` when `self` is `overlap(a, b)`.
  pub fn inverse(self) -> OverlapState {
    use self::OverlapState::*;
    match self {
      BothEmpty => BothEmpty,
      FirstEmpty => SecondEmpty,
      SecondEmpty => FirstEmpty,
      Before => After,
      Meets => MetBy,
      Overlaps => OverlappedBy,
      Starts => StartedBy,
      ContainedBy => Contains,
      Finishes => FinishedBy,
      Equal => Equal,
      FinishedBy => Finishes,
      Contains => ContainedBy,
      StartedBy => Starts,
      OverlappedBy => Overlaps,
      MetBy => Meets,
      After => Before,
    }
  }

  pub fn as_str(self) -> &'static str {
    use self::OverlapState::*;
    match self {
      BothEmpty => "bothEmpty",
      FirstEmpty => "firstEmpty",
      SecondEmpty => "secondEmpty",
      Before => "before",
      Meets => "meets",
      Overlaps => "overlaps",
      Starts => "starts",
      ContainedBy => "containedBy",
      Finishes => "finishes",
      Equal => "equal",
      FinishedBy => "finishedBy",
      Contains => "contains",
      StartedBy => "startedBy",
      OverlappedBy => "overlappedBy",
      MetBy => "metBy",
      After => "after",
    }
  }
}

impl Display for OverlapState
{
  fn fmt(&self, formatter: &mut Formatter) -> Result<(), Error> {
    formatter.write_str(self.as_str())
  }
}

/// `x <' y`: strict order where an infinite value is related to itself.
fn lt_or_both_infinite<T: Bound>(x: T, y: T) -> bool {
  x < y || (x == y && x.is_infinite())
}

impl<T> Interval<T> where
 T: Bound
{
  pub fn is_equal(&self, other: &Interval<T>) -> bool {
    self == other
  }

  /// Every member of `self` is a member of `other`.
  pub fn subset(&self, other: &Interval<T>) -> bool {
    if self.is_empty() {
      true
    }
    else if other.is_empty() {
      false
    }
    else {
      other.inf() <= self.inf() && self.sup() <= other.sup()
    }
  }

  pub fn less(&self, other: &Interval<T>) -> bool {
    if self.is_empty() || other.is_empty() {
      self.is_empty() && other.is_empty()
    }
    else {
      self.inf() <= other.inf() && self.sup() <= other.sup()
    }
  }

  pub fn strictly_less(&self, other: &Interval<T>) -> bool {
    if self.is_empty() || other.is_empty() {
      self.is_empty() && other.is_empty()
    }
    else {
      lt_or_both_infinite(self.inf(), other.inf()) && lt_or_both_infinite(self.sup(), other.sup())
    }
  }

  pub fn precedes(&self, other: &Interval<T>) -> bool {
    self.is_empty() || other.is_empty() || self.sup() <= other.inf()
  }

  pub fn strictly_precedes(&self, other: &Interval<T>) -> bool {
    self.is_empty() || other.is_empty() || self.sup() < other.inf()
  }

  /// `self` is included in the topological interior of `other`.
  pub fn is_interior(&self, other: &Interval<T>) -> bool {
    if self.is_empty() {
      true
    }
    else if other.is_empty() {
      false
    }
    else {
      lt_or_both_infinite(other.inf(), self.inf()) && lt_or_both_infinite(self.sup(), other.sup())
    }
  }

  pub fn are_disjoint(&self, other: &Interval<T>) -> bool {
    self.is_empty() || other.is_empty()
    || self.sup() < other.inf() || other.sup() < self.inf()
  }

  /// Non-empty and bounded.
  pub fn is_common_interval(&self) -> bool {
    !self.is_empty() && self.is_bounded()
  }

  pub fn is_singleton(&self) -> bool {
    !self.is_empty() && self.inf() == self.sup()
  }

  pub fn is_member(&self, x: T) -> bool {
    self.contains_value(x)
  }

  pub fn overlap(&self, other: &Interval<T>) -> OverlapState {
    use self::OverlapState::*;
    if self.is_empty() || other.is_empty() {
      return match (self.is_empty(), other.is_empty()) {
        (true, true) => BothEmpty,
        (true, false) => FirstEmpty,
        _ => SecondEmpty
      };
    }
    let (a, b) = (self.inf(), self.sup());
    let (c, d) = (other.inf(), other.sup());
    if b < c { Before }
    else if a != b && c != d && b == c { Meets }
    else if a < c && c < b && b < d { Overlaps }
    else if a == c && b < d { Starts }
    else if c < a && b < d { ContainedBy }
    else if c < a && b == d { Finishes }
    else if a == c && b == d { Equal }
    else if d < a { After }
    else if a != b && c != d && d == a { MetBy }
    else if c < a && a < d && d < b { OverlappedBy }
    else if a == c && d < b { StartedBy }
    else if a < c && d < b { Contains }
    else { FinishedBy }
  }
}

impl<T> Contains for Interval<T> where
 T: Bound
{
  fn contains(&self, value: &T) -> bool {
    self.contains_value(*value)
  }
}

impl<T> Subset for Interval<T> where
 T: Bound
{
  fn is_subset(&self, other: &Interval<T>) -> bool {
    self.subset(other)
  }
}

impl<T> ProperSubset for Interval<T> where
 T: Bound
{
  fn is_proper_subset(&self, other: &Interval<T>) -> bool {
    self.subset(other) && self != other
  }
}

impl<T> Disjoint for Interval<T> where
 T: Bound
{
  fn is_disjoint(&self, other: &Interval<T>) -> bool {
    self.are_disjoint(other)
  }
}

impl<T> IsSingleton for Interval<T> where
 T: Bound
{
  fn is_singleton(&self) -> bool {
    Interval::is_singleton(self)
  }
}
