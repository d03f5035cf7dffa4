// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Intersection and convex hull. Both are exact: bounds are only selected, never computed.

use gcollections::ops::*;
use crate::interval::Interval;
use crate::ops::*;

impl<T> Interval<T> where
 T: Bound
{
  pub fn intersect(&self, other: &Interval<T>) -> Interval<T> {
    if self.is_empty() || other.is_empty() {
      return Interval::empty();
    }
    let lb = self.inf().max(other.inf());
    let ub = self.sup().min(other.sup());
    if lb > ub {
      Interval::empty()
    }
    else {
      Interval::make(lb, ub)
    }
  }

  /// The smallest interval containing both operands.
  pub fn convex_hull(&self, other: &Interval<T>) -> Interval<T> {
    if self.is_empty() {
      *other
    }
    else if other.is_empty() {
      *self
    }
    else {
      Interval::make(self.inf().min(other.inf()), self.sup().max(other.sup()))
    }
  }
}

impl<T> Intersection for Interval<T> where
 T: Bound
{
  type Output = Interval<T>;
  fn intersection(&self, other: &Interval<T>) -> Interval<T> {
    self.intersect(other)
  }
}

impl<T> Hull for Interval<T> where
 T: Bound
{
  type Output = Interval<T>;
  fn hull(&self, other: &Interval<T>) -> Interval<T> {
    self.convex_hull(other)
  }
}

#[allow(non_upper_case_globals)]
#[cfg(test)]
mod tests {
  use super::*;

  const inf: f64 = f64::INFINITY;

  fn i(lb: f64, ub: f64) -> Interval<f64> {
    Interval::new(lb, ub)
  }

  fn test_binary_op_sym<F>(test_id: String, a: Interval<f64>, b: Interval<f64>, op: F, expected: Interval<f64>) where
   F: Fn(&Interval<f64>, &Interval<f64>) -> Interval<f64>
  {
    println!("Info: {}.", test_id);
    assert_eq!(op(&a, &b), expected, "{} | {} op {}", test_id, a, b);
    assert_eq!(op(&b, &a), expected, "{} | {} op {} (symmetric)", test_id, b, a);
  }

  #[test]
  fn intersection_test() {
    let empty = Interval::empty();
    let cases = vec![
      (1, i(1.0, 3.0), i(3.0, 4.0), i(3.0, 3.0)),
      (2, i(1.0, 3.0), empty, empty),
      (3, empty, empty, empty),
      (4, i(1.0, 2.0), i(3.0, 4.0), empty),
      (5, i(-inf, 2.0), i(1.0, inf), i(1.0, 2.0)),
      (6, Interval::entire(), i(1.0, 2.0), i(1.0, 2.0)),
      (7, i(-1.0, 5.0), i(0.0, 2.0), i(0.0, 2.0)),
      (8, i(-2.0, 0.0), i(0.0, 3.0), i(0.0, 0.0)),
    ];
    for (id, a, b, expected) in cases {
      test_binary_op_sym(format!("test #{} of intersect", id), a, b, |x, y| x.intersect(y), expected);
      test_binary_op_sym(format!("test #{} of intersection", id), a, b, |x, y| x.intersection(y), expected);
    }
  }

  #[test]
  fn hull_test() {
    let empty = Interval::empty();
    let cases = vec![
      (1, i(1.0, 3.0), i(3.0, 4.0), i(1.0, 4.0)),
      (2, i(1.0, 3.0), empty, i(1.0, 3.0)),
      (3, empty, empty, empty),
      (4, i(1.0, 2.0), i(5.0, 6.0), i(1.0, 6.0)),
      (5, i(-inf, 2.0), i(1.0, 4.0), i(-inf, 4.0)),
      (6, Interval::entire(), empty, Interval::entire()),
    ];
    for (id, a, b, expected) in cases {
      test_binary_op_sym(format!("test #{} of convex_hull", id), a, b, |x, y| x.convex_hull(y), expected);
      test_binary_op_sym(format!("test #{} of hull", id), a, b, |x, y| x.hull(y), expected);
    }
  }

  #[test]
  fn round_trips() {
    let xs = vec![i(1.0, 2.0), i(-inf, 0.0), Interval::entire(), Interval::empty(), i(5.0, 5.0)];
    for x in xs {
      assert_eq!(x.hull(&x), x);
      assert_eq!(x.intersect(&x), x);
      assert!(x.intersect(&Interval::empty()).is_empty());
      assert_eq!(x.hull(&Interval::empty()), x);
    }
  }

  #[test]
  fn zero_signs_are_canonical() {
    let x = i(-2.0, 0.0).intersect(&i(0.0, 3.0));
    assert!(x.inf().is_sign_negative());
    assert!(x.sup().is_sign_positive());
  }
}
