// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Trigonometric functions and their inverses.
//!
//! The image of a periodic function is the hull of its values at the bounds, extended to `-1` or `1` when the interval may contain a minimum or a maximum. Whether it does is decided on `x / pi`, computed with the two floating-point neighbours of pi and rounded outward, so that a critical point is never missed. The `_pi` variants work directly on `x`, where the critical points are representable.
//!
//! ```rust
//! use p1788::Interval;
//!
//! let x = Interval::new(0.0, 4.0);
//! assert_eq!(x.sin().sup(), 1.0);
//! assert_eq!(Interval::new(0.5, 1.5).sin_pi(), Interval::new(-1.0, 1.0));
//! assert!(Interval::new(1.0, 2.0).tan().is_entire());
//! ```

use crate::interval::Interval;
use crate::decoration::Decoration;
use crate::ops::*;
use crate::elementary::Domain;
use crate::rounding::{self, Round, UnaryOp, BinaryOp};
use crate::rounding::{sub_down, sub_up, div_down, div_up};

/// Encloses `x / pi`, or `x` itself for the functions of `pi * x`.
fn turns(x: f64, scaled: bool) -> (f64, f64) {
  if scaled {
    let (pl, pu) = rounding::pi_f64();
    (div_down(x, pl).min(div_down(x, pu)), div_up(x, pl).max(div_up(x, pu)))
  }
  else {
    (x, x)
  }
}

/// Whether `[a..b]` may contain a point whose turn count is `offset + period * k` for some integer `k`.
fn may_hit(a: f64, b: f64, scaled: bool, offset: f64, period: f64) -> bool {
  let lo = div_down(sub_down(turns(a, scaled).0, offset), period);
  let hi = div_up(sub_up(turns(b, scaled).1, offset), period);
  hi.floor() >= lo.ceil()
}

/// Image of a function of period `2` turns with a maximum at `max_at` and a minimum at `max_at + 1`.
fn periodic<T: Bound>(x: &Interval<T>, op: UnaryOp, scaled: bool, max_at: f64) -> (Interval<T>, Decoration) {
  if x.is_empty() {
    return (Interval::empty(), Decoration::Com);
  }
  let (a, b) = (x.inf(), x.sup());
  let (wa, wb) = (a.widen(), b.widen());
  let lb =
    if may_hit(wa, wb, scaled, max_at + 1.0, 2.0) { -T::one() }
    else { rounding::round_unary(op, a, Round::Down).min(rounding::round_unary(op, b, Round::Down)) };
  let ub =
    if may_hit(wa, wb, scaled, max_at, 2.0) { T::one() }
    else { rounding::round_unary(op, a, Round::Up).max(rounding::round_unary(op, b, Round::Up)) };
  (Interval::make(lb, ub), Decoration::Com)
}

/// Image of a function increasing between poles placed every turn at `0.5 + k`.
fn tangent<T: Bound>(x: &Interval<T>, op: UnaryOp, scaled: bool) -> (Interval<T>, Decoration) {
  if x.is_empty() {
    return (Interval::empty(), Decoration::Com);
  }
  let (a, b) = (x.inf(), x.sup());
  if !x.is_bounded() || may_hit(a.widen(), b.widen(), scaled, 0.5, 1.0) {
    return (Interval::entire(), Decoration::Trv);
  }
  let res = Interval::make(
    rounding::round_unary(op, a, Round::Down),
    rounding::round_unary(op, b, Round::Up));
  (res, Decoration::Com)
}

/// Angle of the points of the box `x * y`, `y` being the ordinate, with `op` one of `atan2` or `atan2_pi` and `half_turn` the value of the angle on the negative abscissa.
fn angle<T: Bound>(y: &Interval<T>, x: &Interval<T>, op: BinaryOp, half_turn: Interval<T>) -> (Interval<T>, Decoration) {
  if y.is_empty() || x.is_empty() {
    return (Interval::empty(), Decoration::Com);
  }
  if y.is_zero() && x.is_zero() {
    return (Interval::empty(), Decoration::Trv);
  }
  let zero = T::zero();
  let at_origin = y.contains_zero() && x.contains_zero();
  let on_cut = x.inf() < zero && y.contains_zero();
  let dec =
    if at_origin { Decoration::Trv }
    else if on_cut && y.inf() == zero { Decoration::Dac }
    else if on_cut { Decoration::Def }
    else { Decoration::Com };
  if on_cut && y.inf() < zero {
    return (Interval::make(-half_turn.sup(), half_turn.sup()), dec);
  }
  // Zeros are taken positive: the box lies on the side of the abscissa where `y >= 0`.
  let positive = |v: T| if v == zero { zero } else { v };
  let mut lb = T::infinity();
  let mut ub = T::neg_infinity();
  for &v in &[y.inf(), y.sup()] {
    for &u in &[x.inf(), x.sup()] {
      if v == zero && u == zero {
        continue;
      }
      let (v, u) = (positive(v), positive(u));
      lb = lb.min(rounding::round_binary(op, v, u, Round::Down));
      ub = ub.max(rounding::round_binary(op, v, u, Round::Up));
    }
  }
  (Interval::make(lb, ub), dec)
}

monotone_functions! {
  asin, asin_eval, Asin, Domain::Closed(-1.0, 1.0), true;
  acos, acos_eval, Acos, Domain::Closed(-1.0, 1.0), false;
  atan, atan_eval, Atan, Domain::Entire, true;
  /// `asin(x) / pi`.
  asin_pi, asin_pi_eval, AsinPi, Domain::Closed(-1.0, 1.0), true;
  acos_pi, acos_pi_eval, AcosPi, Domain::Closed(-1.0, 1.0), false;
  atan_pi, atan_pi_eval, AtanPi, Domain::Entire, true;
}

reported_functions! {
  tan, tan_eval;
  /// `tan(pi * x)`, undefined at the half-integers.
  tan_pi, tan_pi_eval;
}

impl<T> Interval<T> where
 T: Bound
{
  pub fn sin(&self) -> Interval<T> {
    self.sin_eval().0
  }

  pub(crate) fn sin_eval(&self) -> (Interval<T>, Decoration) {
    periodic(self, UnaryOp::Sin, true, 0.5)
  }

  pub fn cos(&self) -> Interval<T> {
    self.cos_eval().0
  }

  pub(crate) fn cos_eval(&self) -> (Interval<T>, Decoration) {
    periodic(self, UnaryOp::Cos, true, 0.0)
  }

  pub(crate) fn tan_eval(&self) -> (Interval<T>, Decoration) {
    tangent(self, UnaryOp::Tan, true)
  }

  /// `sin(pi * x)`.
  pub fn sin_pi(&self) -> Interval<T> {
    self.sin_pi_eval().0
  }

  pub(crate) fn sin_pi_eval(&self) -> (Interval<T>, Decoration) {
    periodic(self, UnaryOp::SinPi, false, 0.5)
  }

  /// `cos(pi * x)`.
  pub fn cos_pi(&self) -> Interval<T> {
    self.cos_pi_eval().0
  }

  pub(crate) fn cos_pi_eval(&self) -> (Interval<T>, Decoration) {
    periodic(self, UnaryOp::CosPi, false, 0.0)
  }

  pub(crate) fn tan_pi_eval(&self) -> (Interval<T>, Decoration) {
    tangent(self, UnaryOp::TanPi, false)
  }

  pub(crate) fn atan2_eval(&self, x: &Interval<T>) -> (Interval<T>, Decoration) {
    angle(self, x, BinaryOp::Atan2, Interval::pi())
  }

  /// Angle of the points `(x, y)`, `self` being `y`, in `[-pi..pi]`. The origin is outside the domain.
  pub fn atan2(&self, x: &Interval<T>) -> Interval<T> {
    Interval::report(self.atan2_eval(x))
  }

  pub(crate) fn atan2_pi_eval(&self, x: &Interval<T>) -> (Interval<T>, Decoration) {
    angle(self, x, BinaryOp::Atan2Pi, Interval::make(T::one(), T::one()))
  }

  /// `atan2(y, x) / pi`, in `[-1..1]`.
  pub fn atan2_pi(&self, x: &Interval<T>) -> Interval<T> {
    Interval::report(self.atan2_pi_eval(x))
  }
}

#[allow(non_upper_case_globals)]
#[cfg(test)]
mod tests {
  use super::*;
  use crate::exception;
  use std::f64::consts::{PI, FRAC_PI_2, FRAC_PI_4};

  const inf: f64 = f64::INFINITY;

  fn i(lb: f64, ub: f64) -> Interval<f64> {
    Interval::new(lb, ub)
  }

  fn test_unary<F>(name: &str, cases: Vec<(u32, Interval<f64>, Interval<f64>)>, f: F) where
   F: Fn(&Interval<f64>) -> Interval<f64>
  {
    for (id, x, expected) in cases {
      assert_eq!(f(&x), expected, "test #{} of {}: {}", id, name, x);
    }
  }

  #[test]
  fn sine_and_cosine() {
    let full = i(-1.0, 1.0);
    test_unary("sin", vec![
      (1, i(0.0, 0.0), i(0.0, 0.0)),
      (2, Interval::entire(), full),
      (3, i(-inf, 0.0), full),
      (4, i(0.0, 7.0), full),
      (5, Interval::empty(), Interval::empty()),
    ], |x| x.sin());
    test_unary("cos", vec![
      (1, i(0.0, 0.0), i(1.0, 1.0)),
      (2, i(1.0, inf), full),
      (3, i(-1.0, 4.0), full),
    ], |x| x.cos());
    let s = i(0.0, 4.0).sin();
    assert_eq!(s.sup(), 1.0);
    assert!(s.contains_value(4f64.sin()));
    assert!(s.inf() < -0.75 && s.inf() > -0.76);
    let c = i(-0.5, 0.5).cos();
    assert_eq!(c.sup(), 1.0);
    assert!(c.contains_value(0.5f64.cos()));
    let s = i(0.5, 1.0).sin();
    assert!(s.contains_value(0.5f64.sin()) && s.contains_value(1f64.sin()));
    assert!(s.sup() < 0.85);
    let c = i(2.0, 3.0).cos();
    assert!(c.contains_value(2f64.cos()) && c.contains_value(3f64.cos()));
    assert!(c.inf() > -1.0);
  }

  #[test]
  fn critical_points_are_not_missed() {
    let below = FRAC_PI_2;
    let above = FRAC_PI_2.next_up();
    assert_eq!(i(below, above).sin().sup(), 1.0);
    assert_eq!(i(PI, PI.next_up()).cos().inf(), -1.0);
    let xs = vec![i(1.0, 2.0), i(-3.0, -1.0), i(3.0, 3.2), i(100.0, 101.0), i(-0.1, 0.1)];
    for x in xs {
      let (s, c) = (x.sin(), x.cos());
      for k in 0..=20 {
        let v = (x.inf() + (x.sup() - x.inf()) * (k as f64) / 20.0).min(x.sup());
        assert!(s.contains_value(v.sin()), "sin({}) not in {}", v, s);
        assert!(c.contains_value(v.cos()), "cos({}) not in {}", v, c);
      }
    }
  }

  #[test]
  fn tangent_poles() {
    exception::clear();
    let t = i(-1.0, 1.0).tan();
    assert!(t.contains_value(1f64.tan()) && t.contains_value(-1f64.tan()));
    assert!(!exception::possibly_undefined_operation());
    assert!(i(1.0, 2.0).tan().is_entire());
    assert!(exception::possibly_undefined_operation());
    exception::clear();
    assert!(i(0.0, inf).tan().is_entire());
    assert_eq!(i(0.0, 0.0).tan_eval(), (i(0.0, 0.0), Decoration::Com));
    assert_eq!(i(1.0, 2.0).tan_eval().1, Decoration::Trv);
    assert_eq!(Interval::<f64>::empty().tan_eval(), (Interval::empty(), Decoration::Com));
    exception::clear();
  }

  #[test]
  fn pi_scaled_functions() {
    test_unary("sin_pi", vec![
      (1, i(0.5, 1.5), i(-1.0, 1.0)),
      (2, i(0.0, 0.5), i(0.0, 1.0)),
      (3, i(1.0, 1.0), i(0.0, 0.0)),
      (4, i(-0.5, 0.0), i(-1.0, 0.0)),
      (5, i(0.0, 2.0), i(-1.0, 1.0)),
    ], |x| x.sin_pi());
    test_unary("cos_pi", vec![
      (1, i(0.0, 0.5), i(0.0, 1.0)),
      (2, i(0.5, 1.0), i(-1.0, 0.0)),
      (3, i(-1.0, 1.0), i(-1.0, 1.0)),
      (4, i(2.0, 2.0), i(1.0, 1.0)),
    ], |x| x.cos_pi());
    test_unary("tan_pi", vec![
      (1, i(0.0, 0.25), i(0.0, 1.0)),
      (2, i(-0.25, 0.25), i(-1.0, 1.0)),
      (3, i(0.0, 0.5), Interval::entire()),
      (4, i(0.75, 1.0), i(-1.0, 0.0)),
    ], |x| x.tan_pi());
    let s = i(1.0 / 6.0, 1.0 / 6.0).sin_pi();
    assert!(s.contains_value(0.5));
    exception::clear();
  }

  #[test]
  fn inverse_functions() {
    exception::clear();
    test_unary("asin", vec![
      (1, i(0.0, 0.0), i(0.0, 0.0)),
      (2, i(-2.0, -1.5), Interval::empty()),
    ], |x| x.asin());
    assert!(exception::undefined_operation());
    exception::clear();
    let a = i(-2.0, 2.0).asin();
    assert!(a.contains_value(FRAC_PI_2) && a.contains_value(-FRAC_PI_2));
    assert!(exception::possibly_undefined_operation());
    test_unary("acos", vec![
      (1, i(1.0, 1.0), i(0.0, 0.0)),
    ], |x| x.acos());
    let a = i(-1.0, 1.0).acos();
    assert_eq!(a.inf(), 0.0);
    assert!(a.contains_value(PI));
    let a = i(1.0, inf).atan();
    assert!(a.contains_value(FRAC_PI_4) && a.contains_value(FRAC_PI_2));
    test_unary("asin_pi", vec![
      (1, i(-1.0, 1.0), i(-0.5, 0.5)),
    ], |x| x.asin_pi());
    test_unary("acos_pi", vec![
      (1, i(-1.0, 1.0), i(0.0, 1.0)),
      (2, i(0.0, 1.0), i(0.0, 0.5)),
    ], |x| x.acos_pi());
    test_unary("atan_pi", vec![
      (1, Interval::entire(), i(-0.5, 0.5)),
      (2, i(-1.0, 1.0), i(-0.25, 0.25)),
    ], |x| x.atan_pi());
    exception::clear();
  }

  #[test]
  fn two_argument_arctangent() {
    use crate::decoration::Decoration::*;
    let p = Interval::<f64>::pi();
    let empty = Interval::empty();
    // (id, y, x, atan2_pi, decoration)
    let cases = vec![
      (1, i(0.0, 0.0), i(1.0, 2.0), i(0.0, 0.0), Com),
      (2, i(1.0, 1.0), i(0.0, 0.0), i(0.5, 0.5), Com),
      (3, i(0.0, 0.0), i(0.0, 0.0), empty, Trv),
      (4, i(-1.0, 1.0), i(-2.0, -1.0), i(-1.0, 1.0), Def),
      (5, i(0.0, 1.0), i(-2.0, -1.0), i(0.75, 1.0), Dac),
      (6, i(-1.0, 1.0), i(0.0, 1.0), i(-0.5, 0.5), Trv),
      (7, i(0.0, 1.0), i(-1.0, 1.0), i(0.0, 1.0), Trv),
      (8, i(1.0, 1.0), i(-1.0, 1.0), i(0.25, 0.75), Com),
      (9, i(-1.0, -1.0), i(1.0, 1.0), i(-0.25, -0.25), Com),
      (10, empty, i(1.0, 2.0), empty, Com),
      (11, i(-1.0, 0.0), i(-1.0, -1.0), i(-1.0, 1.0), Def),
    ];
    for (id, y, x, expected, dec) in cases {
      assert_eq!(y.atan2_pi_eval(&x), (expected, dec), "test #{} of atan2_pi", id);
      let (r, d) = y.atan2_eval(&x);
      assert_eq!(d, dec, "test #{} of atan2 decoration", id);
      for &(u, v) in &[(x.inf(), y.inf()), (x.sup(), y.sup())] {
        if !(u == 0.0 && v == 0.0) && !expected.is_empty() && x.contains_value(u) {
          let angle = v.atan2(if u == 0.0 { 0.0 } else { u });
          assert!(r.contains_value(angle) || (angle == -PI && r.contains_value(PI)),
            "test #{} of atan2: {} not in {}", id, angle, r);
        }
      }
    }
    assert_eq!(i(-1.0, 1.0).atan2(&i(-2.0, -1.0)), Interval::new(-p.sup(), p.sup()));
    exception::clear();
    assert!(i(0.0, 0.0).atan2(&i(0.0, 0.0)).is_empty());
    assert!(exception::undefined_operation());
    exception::clear();
    let r = i(1.0, inf).atan2(&i(1.0, inf));
    assert!(r.contains_value(0.0) && r.contains_value(FRAC_PI_2));
  }

  #[test]
  fn single_precision_sine() {
    let s = Interval::new(0.0f32, 4.0f32).sin();
    assert_eq!(s.sup(), 1.0f32);
    assert!((s.inf() as f64) <= 4f64.sin());
  }
}
