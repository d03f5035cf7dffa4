// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Reverse-mode functions.
//!
//! For a function `f`, `c.f_rev(&x)` encloses the members `v` of `x` such that `f(v)` is in `c`. This is the contraction step of constraint propagation: knowing that `f(v)` lies in `c`, the values of `x` that cannot produce it are removed. The `_entire` forms take `x` as the entire interval. Binary functions have one reverse per operand, `b.mul_rev(&c, &x)` encloses the `v` of `x` such that `b * v` meets `c`.
//!
//! The preimage of a function that is not injective may be disconnected; it is enclosed by its hull, except for `mul_rev_to_pair` which keeps the two components. Periodic preimages are computed branch by branch near the bounds of `x`, so `sin_rev` on an unbounded `x` is unbounded on the same side. Reverse functions never raise exceptions: an inconsistent `c` simply gives the empty interval.
//!
//! ```rust
//! use p1788::Interval;
//!
//! let c = Interval::new(4.0, 9.0);
//! assert_eq!(c.sqr_rev_entire(), Interval::new(-3.0, 3.0));
//! assert_eq!(c.sqr_rev(&Interval::new(0.0, 10.0)), Interval::new(2.0, 3.0));
//! assert!(Interval::new(2.0, 3.0).sin_rev_entire().is_empty());
//! ```

use std::f64::consts::PI;
use crate::interval::Interval;
use crate::ops::*;
use crate::rounding::{self, Round, UnaryOp};
use crate::rounding::{add_down, add_up, sub_down, sub_up, mul_down, mul_up};

/// Above this magnitude the bound of `x` is kept by the periodic reverses.
const LOOSE: f64 = 1.0e12;

fn non_negative<T: Bound>() -> Interval<T> {
  Interval::make(T::zero(), T::infinity())
}

/// Hull of the members of `r` and of their opposites that are in `x`.
fn symmetric<T: Bound>(r: &Interval<T>, x: &Interval<T>) -> Interval<T> {
  r.intersect(x).convex_hull(&(-r).intersect(x))
}

fn unary(op: UnaryOp, v: f64, dir: Round) -> f64 {
  rounding::round_unary(op, v, dir)
}

/// Enclosure of `k * pi`.
fn multiple_of_pi(k: f64) -> (f64, f64) {
  let (pl, pu) = rounding::pi_f64();
  if k >= 0.0 { (mul_down(k, pl), mul_up(k, pu)) }
  else { (mul_down(k, pu), mul_up(k, pl)) }
}

/// `k * pi + acos(v)` rounded in the direction `dir`. `acos(-1)` is pi, so the sum is the multiple `(k + 1) * pi`.
fn plus_acos(k: f64, v: f64, dir: Round) -> f64 {
  if v == -1.0 {
    let (lo, hi) = multiple_of_pi(k + 1.0);
    return if dir == Round::Down { lo } else { hi };
  }
  let (kl, ku) = multiple_of_pi(k);
  match dir {
    Round::Down => add_down(kl, unary(UnaryOp::Acos, v, Round::Down)),
    _ => add_up(ku, unary(UnaryOp::Acos, v, Round::Up))
  }
}

/// Part of `x` covered by a preimage made of one branch per multiple of pi, `branch(k)` enclosing the branch of `k * pi`. Only the branches near the bounds of `x` are explored.
fn periodic_rev<T, F>(x: &Interval<T>, branch: F) -> Interval<T> where
 T: Bound,
 F: Fn(f64) -> (f64, f64)
{
  let (a, b) = (x.inf().widen(), x.sup().widen());
  let meet = |k: f64| {
    let (lo, hi) = branch(k);
    let (lo, hi) = (lo.max(a), hi.min(b));
    if lo <= hi { Some((lo, hi)) } else { None }
  };
  let lb =
    if !(a.abs() <= LOOSE) { Some(a) }
    else {
      let k = (a / PI).floor();
      (-2..=4).find_map(|j| meet(k + j as f64)).map(|r| r.0)
    };
  let ub =
    if !(b.abs() <= LOOSE) { Some(b) }
    else {
      let k = (b / PI).floor();
      (-4..=2).rev().find_map(|j| meet(k + j as f64)).map(|r| r.1)
    };
  match (lb, ub) {
    (Some(lb), Some(ub)) if lb <= ub =>
      Interval::make(T::narrow(lb, Round::Down), T::narrow(ub, Round::Up)).intersect(x),
    _ => Interval::empty()
  }
}

/// Enclosure of `tan` over `s`, included in `[-pi/2..pi/2]` up to rounding, `hp` enclosing `pi/2`.
fn tan_range<T: Bound>(s: &Interval<T>, hp: &Interval<T>) -> Interval<T> {
  if s.is_empty() {
    return Interval::empty();
  }
  let lb =
    if s.inf() <= -hp.inf() { T::neg_infinity() }
    else { rounding::round_unary(UnaryOp::Tan, s.inf(), Round::Down) };
  let ub =
    if s.sup() >= hp.inf() { T::infinity() }
    else { rounding::round_unary(UnaryOp::Tan, s.sup(), Round::Up) };
  Interval::make(lb, ub)
}

fn half_pi<T: Bound>() -> Interval<T> {
  &Interval::pi() * &Interval::point(T::narrow(0.5, Round::Nearest))
}

impl<T> Interval<T> where
 T: Bound
{
  /// Members of `x` whose square is in `self`.
  pub fn sqr_rev(&self, x: &Interval<T>) -> Interval<T> {
    let c = self.intersect(&non_negative());
    if c.is_empty() || x.is_empty() {
      return Interval::empty();
    }
    let r = Interval::make(
      rounding::round_unary(UnaryOp::Sqrt, c.inf(), Round::Down),
      rounding::round_unary(UnaryOp::Sqrt, c.sup(), Round::Up));
    symmetric(&r, x)
  }

  pub fn sqr_rev_entire(&self) -> Interval<T> {
    self.sqr_rev(&Interval::entire())
  }

  /// Members of `x` whose absolute value is in `self`.
  pub fn abs_rev(&self, x: &Interval<T>) -> Interval<T> {
    let c = self.intersect(&non_negative());
    if x.is_empty() {
      return Interval::empty();
    }
    symmetric(&c, x)
  }

  pub fn abs_rev_entire(&self) -> Interval<T> {
    self.abs_rev(&Interval::entire())
  }

  /// Members of `x` whose `n`-th power is in `self`.
  pub fn pown_rev(&self, x: &Interval<T>, n: i32) -> Interval<T> {
    if self.is_empty() || x.is_empty() {
      return Interval::empty();
    }
    if n == 0 {
      return if self.contains_value(T::one()) { *x } else { Interval::empty() };
    }
    let m = n.unsigned_abs();
    let even = m % 2 == 0;
    let c = if even { self.intersect(&non_negative()) } else { *self };
    if c.is_empty() {
      return Interval::empty();
    }
    let root = Interval::make(
      rounding::rootn(c.inf(), m, Round::Down),
      rounding::rootn(c.sup(), m, Round::Up));
    let root = if n < 0 { root.recip_eval().0 } else { root };
    if even { symmetric(&root, x) }
    else { root.intersect(x) }
  }

  pub fn pown_rev_entire(&self, n: i32) -> Interval<T> {
    self.pown_rev(&Interval::entire(), n)
  }

  /// Members of `x` whose sine is in `self`.
  pub fn sin_rev(&self, x: &Interval<T>) -> Interval<T> {
    let c = self.intersect(&Interval::make(-T::one(), T::one()));
    if c.is_empty() || x.is_empty() {
      return Interval::empty();
    }
    if x.is_entire() {
      return Interval::entire();
    }
    let (cl, cu) = (c.inf().widen(), c.sup().widen());
    periodic_rev(x, |k| {
      let (kl, ku) = multiple_of_pi(k);
      if k % 2.0 == 0.0 {
        (add_down(kl, unary(UnaryOp::Asin, cl, Round::Down)), add_up(ku, unary(UnaryOp::Asin, cu, Round::Up)))
      }
      else {
        (sub_down(kl, unary(UnaryOp::Asin, cu, Round::Up)), sub_up(ku, unary(UnaryOp::Asin, cl, Round::Down)))
      }
    })
  }

  pub fn sin_rev_entire(&self) -> Interval<T> {
    self.sin_rev(&Interval::entire())
  }

  /// Members of `x` whose cosine is in `self`.
  pub fn cos_rev(&self, x: &Interval<T>) -> Interval<T> {
    let c = self.intersect(&Interval::make(-T::one(), T::one()));
    if c.is_empty() || x.is_empty() {
      return Interval::empty();
    }
    if x.is_entire() {
      return Interval::entire();
    }
    let (cl, cu) = (c.inf().widen(), c.sup().widen());
    periodic_rev(x, |k| {
      // cos(k * pi + t) = (-1)^k cos(t) with t in [0..pi].
      if k % 2.0 == 0.0 { (plus_acos(k, cu, Round::Down), plus_acos(k, cl, Round::Up)) }
      else { (plus_acos(k, -cl, Round::Down), plus_acos(k, -cu, Round::Up)) }
    })
  }

  pub fn cos_rev_entire(&self) -> Interval<T> {
    self.cos_rev(&Interval::entire())
  }

  /// Members of `x` whose tangent is in `self`.
  pub fn tan_rev(&self, x: &Interval<T>) -> Interval<T> {
    if self.is_empty() || x.is_empty() {
      return Interval::empty();
    }
    if x.is_entire() {
      return Interval::entire();
    }
    let (cl, cu) = (self.inf().widen(), self.sup().widen());
    periodic_rev(x, |k| {
      let (kl, ku) = multiple_of_pi(k);
      (add_down(kl, unary(UnaryOp::Atan, cl, Round::Down)), add_up(ku, unary(UnaryOp::Atan, cu, Round::Up)))
    })
  }

  pub fn tan_rev_entire(&self) -> Interval<T> {
    self.tan_rev(&Interval::entire())
  }

  /// Members of `x` whose hyperbolic cosine is in `self`.
  pub fn cosh_rev(&self, x: &Interval<T>) -> Interval<T> {
    let c = self.intersect(&Interval::make(T::one(), T::infinity()));
    if c.is_empty() || x.is_empty() {
      return Interval::empty();
    }
    let r = Interval::make(
      rounding::round_unary(UnaryOp::Acosh, c.inf(), Round::Down),
      rounding::round_unary(UnaryOp::Acosh, c.sup(), Round::Up));
    symmetric(&r, x)
  }

  pub fn cosh_rev_entire(&self) -> Interval<T> {
    self.cosh_rev(&Interval::entire())
  }

  /// The values `v` such that `b * v` is in `c`, `self` being `b`, as two intervals. The second is empty when the set is connected.
  pub fn mul_rev_to_pair(&self, c: &Interval<T>) -> (Interval<T>, Interval<T>) {
    let empty = Interval::empty();
    if self.is_empty() || c.is_empty() {
      return (empty, empty);
    }
    if self.is_zero() {
      return if c.contains_zero() { (Interval::entire(), empty) } else { (empty, empty) };
    }
    if c.is_zero() {
      return if self.contains_zero() { (Interval::entire(), empty) } else { (*c, empty) };
    }
    c.div_to_pair_eval(self).0
  }

  /// Members `v` of `x` such that `b * v` is in `c`, `self` being `b`.
  pub fn mul_rev(&self, c: &Interval<T>, x: &Interval<T>) -> Interval<T> {
    let (first, second) = self.mul_rev_to_pair(c);
    first.intersect(x).convex_hull(&second.intersect(x))
  }

  pub fn mul_rev_entire(&self, c: &Interval<T>) -> Interval<T> {
    self.mul_rev(c, &Interval::entire())
  }

  /// Members `v` of `x` such that `v^b` is in `c`, `self` being the exponent `b`.
  pub fn pow_rev1(&self, c: &Interval<T>, x: &Interval<T>) -> Interval<T> {
    let x = x.intersect(&non_negative());
    let c = c.intersect(&non_negative());
    if self.is_empty() || c.is_empty() || x.is_empty() {
      return Interval::empty();
    }
    if self.contains_zero() && c.contains_value(T::one()) {
      return x;
    }
    c.pow_eval(&self.recip_eval().0).0.intersect(&x)
  }

  pub fn pow_rev1_entire(&self, c: &Interval<T>) -> Interval<T> {
    self.pow_rev1(c, &Interval::entire())
  }

  /// Members `v` of `x` such that `a^v` is in `c`, `self` being the base `a`.
  pub fn pow_rev2(&self, c: &Interval<T>, x: &Interval<T>) -> Interval<T> {
    let a = self.intersect(&non_negative());
    let c = c.intersect(&non_negative());
    if a.is_empty() || c.is_empty() || x.is_empty() {
      return Interval::empty();
    }
    let one = T::one();
    if a.contains_value(one) && c.contains_value(one) {
      return *x;
    }
    // 0^v = 0 for every v > 0.
    let from_zero =
      if a.contains_zero() && c.contains_zero() { x.intersect(&non_negative()) }
      else { Interval::empty() };
    if c.is_zero() || a.is_zero() {
      return from_zero;
    }
    let logs = c.log_eval().0.div_eval(&a.log_eval().0).0;
    logs.intersect(x).convex_hull(&from_zero)
  }

  pub fn pow_rev2_entire(&self, c: &Interval<T>) -> Interval<T> {
    self.pow_rev2(c, &Interval::entire())
  }

  /// Members `v` of `x` such that `atan2(v, b)` is in `c`, `self` being the abscissa `b`.
  pub fn atan2_rev1(&self, c: &Interval<T>, x: &Interval<T>) -> Interval<T> {
    if self.is_empty() || c.is_empty() || x.is_empty() {
      return Interval::empty();
    }
    let zero = T::zero();
    let inf = T::infinity();
    let pi: Interval<T> = Interval::pi();
    let hp: Interval<T> = half_pi();
    let mut res = Interval::empty();
    // On the right half-plane the ordinate is b * tan(angle).
    if self.sup() > zero {
      let right = self.intersect(&non_negative());
      let s = c.intersect(&Interval::make(-hp.sup(), hp.sup()));
      res = res.convex_hull(&(&right * &tan_range(&s, &hp)));
    }
    // On the left half-plane the angle is shifted by pi into the range of tan.
    if self.inf() < zero {
      let left = self.intersect(&Interval::make(-inf, zero));
      let upper = &c.intersect(&Interval::make(hp.inf(), pi.sup())) - &pi;
      let lower = &c.intersect(&Interval::make(-pi.sup(), -hp.inf())) + &pi;
      res = res
        .convex_hull(&(&left * &tan_range(&upper, &hp)))
        .convex_hull(&(&left * &tan_range(&lower, &hp)));
    }
    if self.contains_zero() {
      if c.inf() <= hp.sup() && c.sup() >= hp.inf() {
        res = res.convex_hull(&non_negative());
      }
      if c.inf() <= -hp.inf() && c.sup() >= -hp.sup() {
        res = res.convex_hull(&Interval::make(-inf, zero));
      }
    }
    res.intersect(x)
  }

  pub fn atan2_rev1_entire(&self, c: &Interval<T>) -> Interval<T> {
    self.atan2_rev1(c, &Interval::entire())
  }

  /// Members `v` of `x` such that `atan2(a, v)` is in `c`, `self` being the ordinate `a`.
  pub fn atan2_rev2(&self, c: &Interval<T>, x: &Interval<T>) -> Interval<T> {
    if self.is_empty() || c.is_empty() || x.is_empty() {
      return Interval::empty();
    }
    // Swapping the coordinates maps the angle t to pi/2 - t, modulo 2 pi.
    let pi: Interval<T> = Interval::pi();
    let range = Interval::make(-pi.sup(), pi.sup());
    let turn = &pi + &pi;
    let reflected = &half_pi() - &c.intersect(&range);
    let first = self.atan2_rev1(&reflected.intersect(&range), x);
    let second = self.atan2_rev1(&(&reflected - &turn).intersect(&range), x);
    first.convex_hull(&second)
  }

  pub fn atan2_rev2_entire(&self, c: &Interval<T>) -> Interval<T> {
    self.atan2_rev2(c, &Interval::entire())
  }
}

#[allow(non_upper_case_globals)]
#[cfg(test)]
mod tests {
  use super::*;
  use crate::exception;
  use std::f64::consts::FRAC_PI_4;

  const inf: f64 = f64::INFINITY;

  fn i(lb: f64, ub: f64) -> Interval<f64> {
    Interval::new(lb, ub)
  }

  fn test_reverse<F>(name: &str, cases: Vec<(u32, Interval<f64>, Interval<f64>, Interval<f64>)>, f: F) where
   F: Fn(&Interval<f64>, &Interval<f64>) -> Interval<f64>
  {
    for (id, c, x, expected) in cases {
      assert_eq!(f(&c, &x), expected, "test #{} of {}: c = {}, x = {}", id, name, c, x);
    }
  }

  #[test]
  fn square_and_absolute_value() {
    let entire = Interval::entire();
    let empty = Interval::empty();
    test_reverse("sqr_rev", vec![
      (1, i(4.0, 4.0), entire, i(-2.0, 2.0)),
      (2, i(4.0, 4.0), i(0.0, inf), i(2.0, 2.0)),
      (3, i(-4.0, -1.0), entire, empty),
      (4, i(0.0, 4.0), i(1.0, 3.0), i(1.0, 2.0)),
      (5, i(1.0, 4.0), i(-5.0, -1.5), i(-2.0, -1.5)),
      (6, empty, entire, empty),
      (7, i(-1.0, 9.0), i(-5.0, 5.0), i(-3.0, 3.0)),
    ], |c, x| c.sqr_rev(x));
    test_reverse("abs_rev", vec![
      (1, i(1.0, 2.0), entire, i(-2.0, 2.0)),
      (2, i(1.0, 2.0), i(0.0, inf), i(1.0, 2.0)),
      (3, i(-3.0, -1.0), entire, empty),
      (4, i(-1.0, 1.0), i(-5.0, -0.5), i(-1.0, -0.5)),
    ], |c, x| c.abs_rev(x));
    assert_eq!(i(4.0, 9.0).sqr_rev_entire(), i(-3.0, 3.0));
    assert_eq!(i(0.0, inf).abs_rev_entire(), entire);
  }

  #[test]
  fn integer_power() {
    let entire = Interval::entire();
    let empty = Interval::empty();
    // (id, c, x, n, expected)
    let cases = vec![
      (1, i(8.0, 8.0), entire, 3, i(2.0, 2.0)),
      (2, i(4.0, 9.0), entire, 2, i(-3.0, 3.0)),
      (3, i(4.0, 9.0), i(0.0, inf), 2, i(2.0, 3.0)),
      (4, i(-8.0, -1.0), entire, 3, i(-2.0, -1.0)),
      (5, i(1.0, 1.0), i(-7.0, 3.0), 0, i(-7.0, 3.0)),
      (6, i(2.0, 3.0), entire, 0, empty),
      (7, i(0.25, 0.25), entire, -2, i(-2.0, 2.0)),
      (8, i(0.25, 0.25), i(0.0, inf), -2, i(2.0, 2.0)),
      (9, i(-1.0, -1.0), entire, -2, empty),
      (10, i(0.0, 0.0), entire, -1, empty),
      (11, i(0.0, 4.0), i(0.0, inf), -2, i(0.5, inf)),
      (12, i(-1.0, 1.0), entire, -1, entire),
    ];
    for (id, c, x, n, expected) in cases {
      assert_eq!(c.pown_rev(&x, n), expected, "test #{} of pown_rev", id);
    }
    assert_eq!(i(16.0, 16.0).pown_rev_entire(4), i(-2.0, 2.0));
  }

  #[test]
  fn hyperbolic_cosine() {
    assert_eq!(i(1.0, 1.0).cosh_rev_entire(), i(0.0, 0.0));
    assert!(i(-2.0, 0.5).cosh_rev_entire().is_empty());
    let r = i(1.0, 4.0).cosh_rev_entire();
    assert!(r.contains_value(2.0) && r.contains_value(-2.0));
    assert!(r.sup() < 2.07);
    let r = i(1.0, 4.0).cosh_rev(&i(0.5, 10.0));
    assert_eq!(r.inf(), 0.5);
  }

  #[test]
  fn multiplication() {
    let entire = Interval::entire();
    let empty = Interval::empty();
    // (id, b, c, pair)
    let cases = vec![
      (1, i(-1.0, 1.0), i(1.0, 1.0), (i(-inf, -1.0), i(1.0, inf))),
      (2, i(0.0, 0.0), i(-1.0, 1.0), (entire, empty)),
      (3, i(0.0, 0.0), i(1.0, 2.0), (empty, empty)),
      (4, i(1.0, 2.0), i(0.0, 0.0), (i(0.0, 0.0), empty)),
      (5, i(-1.0, 1.0), i(0.0, 0.0), (entire, empty)),
      (6, i(2.0, 4.0), i(4.0, 8.0), (i(1.0, 4.0), empty)),
      (7, empty, i(1.0, 2.0), (empty, empty)),
      (8, i(-2.0, 3.0), i(-1.0, 1.0), (entire, empty)),
    ];
    for (id, b, c, expected) in cases {
      assert_eq!(b.mul_rev_to_pair(&c), expected, "test #{} of mul_rev_to_pair", id);
    }
    assert_eq!(i(-1.0, 1.0).mul_rev(&i(1.0, 1.0), &i(0.0, 5.0)), i(1.0, 5.0));
    assert_eq!(i(-1.0, 1.0).mul_rev(&i(1.0, 1.0), &i(-0.5, 0.5)), empty);
    assert_eq!(i(2.0, 2.0).mul_rev_entire(&i(1.0, 1.0)), i(0.5, 0.5));
    assert_eq!(i(-1.0, 1.0).mul_rev_entire(&i(1.0, 1.0)), entire);
  }

  #[test]
  fn periodic_functions() {
    let pi = std::f64::consts::PI;
    let r = i(0.0, 0.0).sin_rev(&i(-1.0, 4.0));
    assert_eq!(r.inf(), 0.0);
    assert!(r.contains_value(pi) && r.sup() < 3.1416);
    assert_eq!(i(-1.0, 1.0).sin_rev(&i(-1.0, 4.0)), i(-1.0, 4.0));
    assert!(i(0.5, 0.5).sin_rev(&i(2.7, 2.8)).is_empty());
    assert!(i(2.0, 3.0).sin_rev_entire().is_empty());
    assert!(i(0.0, 1.0).sin_rev_entire().is_entire());
    let r = i(0.0, 0.0).sin_rev(&i(0.0, 1e15));
    assert_eq!(r, i(0.0, 1e15));
    let r = i(0.5, 0.5).sin_rev(&i(0.0, inf));
    assert!(r.contains_value(pi / 6.0) && r.inf() > 0.52);
    assert_eq!(r.sup(), inf);

    let r = i(1.0, 1.0).cos_rev(&i(-1.0, 7.0));
    assert!(r.contains_value(0.0) && r.contains_value(2.0 * pi));
    assert_eq!(r.inf(), 0.0);
    assert!(r.sup() < 6.2832);
    let r = i(-1.0, -1.0).cos_rev(&i(-4.0, 4.0));
    assert!(r.contains_value(-pi) && r.contains_value(pi) && r.wid() < 6.2832);
    assert!(i(-3.0, -2.0).cos_rev_entire().is_empty());
    let r = i(0.0, 0.0).cos_rev(&i(0.0, 3.0));
    assert!(r.contains_value(pi / 2.0) && r.inf() > 1.57 && r.sup() < 1.571);

    let r = i(0.0, 0.0).tan_rev(&i(-1.0, 4.0));
    assert_eq!(r.inf(), 0.0);
    assert!(r.contains_value(pi) && r.sup() < 3.1416);
    assert_eq!(Interval::entire().tan_rev(&i(1.0, 2.0)), i(1.0, 2.0));
    assert!(i(1.0, 2.0).tan_rev_entire().is_entire());
    let r = i(1.0, 1.0).tan_rev(&i(3.0, 4.0));
    assert!(r.inf() < 3.926990817 && r.sup() > 3.926990816 && r.wid() < 1e-12);
  }

  #[test]
  fn periodic_reverse_is_sound() {
    let xs = vec![i(-7.0, -1.0), i(0.5, 9.0), i(2.0, 2.5), i(-20.0, 20.0)];
    let cs = vec![i(-0.3, 0.2), i(0.9, 1.0), i(-1.0, -0.5)];
    for x in &xs {
      for c in &cs {
        let (s, co, t) = (c.sin_rev(x), c.cos_rev(x), c.tan_rev(x));
        for k in 0..=400 {
          let v = (x.inf() + (x.sup() - x.inf()) * (k as f64) / 400.0).min(x.sup());
          if c.contains_value(v.sin()) {
            assert!(s.contains_value(v), "sin_rev({}, {}) = {} misses {}", c, x, s, v);
          }
          if c.contains_value(v.cos()) {
            assert!(co.contains_value(v), "cos_rev({}, {}) = {} misses {}", c, x, co, v);
          }
          if c.contains_value(v.tan()) {
            assert!(t.contains_value(v), "tan_rev({}, {}) = {} misses {}", c, x, t, v);
          }
        }
      }
    }
  }

  #[test]
  fn powers() {
    let r = i(2.0, 2.0).pow_rev1_entire(&i(4.0, 4.0));
    assert!(r.contains_value(2.0) && r.wid() < 1e-14);
    assert_eq!(i(0.0, 0.0).pow_rev1(&i(1.0, 1.0), &i(-1.0, 5.0)), i(0.0, 5.0));
    assert!(i(0.0, 0.0).pow_rev1_entire(&i(2.0, 2.0)).is_empty());
    assert!(i(1.0, 2.0).pow_rev1_entire(&i(-2.0, -1.0)).is_empty());
    let r = i(-1.0, 1.0).pow_rev1_entire(&i(2.0, 4.0));
    assert!(r.contains_value(2.0) && r.contains_value(0.25));

    let r = i(2.0, 2.0).pow_rev2_entire(&i(8.0, 8.0));
    assert!(r.contains_value(3.0) && r.wid() < 1e-14);
    assert_eq!(i(1.0, 1.0).pow_rev2(&i(1.0, 1.0), &i(-1.0, 1.0)), i(-1.0, 1.0));
    assert!(i(1.0, 1.0).pow_rev2_entire(&i(2.0, 2.0)).is_empty());
    assert_eq!(i(0.0, 0.0).pow_rev2_entire(&i(0.0, 0.0)), i(0.0, inf));
    assert!(i(-2.0, -1.0).pow_rev2_entire(&i(1.0, 2.0)).is_empty());
    let r = i(2.0, 4.0).pow_rev2_entire(&i(16.0, 16.0));
    assert!(r.contains_value(2.0) && r.contains_value(4.0));
  }

  #[test]
  fn two_argument_arctangent() {
    let angle = i(FRAC_PI_4, FRAC_PI_4);
    let r = i(1.0, 1.0).atan2_rev1_entire(&angle);
    assert!(r.contains_value(FRAC_PI_4.tan()) && r.wid() < 1e-15);
    let r = i(-1.0, -1.0).atan2_rev1_entire(&i(2.0, 3.0));
    assert!(r.contains_value(-(2f64.tan())) && r.contains_value(-(3f64.tan())));
    assert!(r.inf() > 0.14 && r.sup() < 2.19);
    assert_eq!(i(0.0, 0.0).atan2_rev1_entire(&i(1.0, 2.0)), i(0.0, inf));
    assert!(i(1.0, 2.0).atan2_rev1_entire(&i(2.0, 3.0)).is_empty());
    assert!(i(1.0, 1.0).atan2_rev1(&angle, &i(2.0, 3.0)).is_empty());

    let r = i(1.0, 1.0).atan2_rev2_entire(&angle);
    assert!(r.contains_value(1.0) && r.sup() < 1.0001 && r.inf() > 0.9999);
    assert!(i(1.0, 1.0).atan2_rev2_entire(&i(-3.0, -2.0)).is_empty());
    let r = i(2.0, 2.0).atan2_rev2(&i(2.0, 3.0), &i(-10.0, 10.0));
    assert!(r.contains_value(2.0 / 2f64.tan()) && r.contains_value(2.0 / 2.5f64.tan()));
    assert_eq!(r.inf(), -10.0);
    assert!(r.sup() < 0.0);
    exception::clear();
    let _ = i(0.0, 0.0).atan2_rev2_entire(&i(-4.0, 4.0));
    assert!(!exception::undefined_operation() && !exception::possibly_undefined_operation());
  }
}
