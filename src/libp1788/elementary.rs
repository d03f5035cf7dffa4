// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Powers, exponentials, logarithms, hyperbolic and integer functions.
//!
//! The interval is first restricted to the domain of the function, then the image of each monotone piece is computed from its end points. Restricting raises `possibly_undefined_operation`, or `undefined_operation` when nothing is left. Every function also exists in a form returning its local decoration, used by the decorated intervals: `com` when the function is defined and continuous on the operand, `dac` when only its restriction is continuous, `def` when defined but discontinuous and `trv` when the operand left the domain.
//!
//! ```rust
//! use p1788::Interval;
//!
//! let x = Interval::new(0.0, 1.0);
//! assert_eq!(x.exp().inf(), 1.0);
//! assert_eq!(x.log(), Interval::new(f64::NEG_INFINITY, 0.0));
//! assert_eq!(Interval::new(-2.0, 3.0).pown(2), Interval::new(0.0, 9.0));
//! ```

use crate::interval::Interval;
use crate::decoration::Decoration;
use crate::ops::*;
use crate::rounding::{self, Round, UnaryOp, BinaryOp};
use crate::arithmetic::{shape, Shape};

/// Domain of a function of one variable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Domain {
  Entire,
  Closed(f64, f64),
  /// Finite end points are excluded.
  Open(f64, f64),
}

/// Intersection of `x` with `domain`, and `trv` when `x` is not included in it.
pub(crate) fn restrict<T: Bound>(x: &Interval<T>, domain: Domain) -> (Interval<T>, Decoration) {
  let (lb, ub, open) = match domain {
    Domain::Entire => return (*x, Decoration::Com),
    Domain::Closed(lb, ub) => (lb, ub, false),
    Domain::Open(lb, ub) => (lb, ub, true)
  };
  let lb = T::narrow(lb, Round::Nearest);
  let ub = T::narrow(ub, Round::Nearest);
  let (a, b) = (x.inf(), x.sup());
  let inside =
    if open { (lb.is_infinite() || a > lb) && (ub.is_infinite() || b < ub) }
    else { a >= lb && b <= ub };
  let r = x.intersect(&Interval::make(lb, ub));
  let on_open_end = open && !r.is_empty()
    && ((lb.is_finite() && r.sup() == lb) || (ub.is_finite() && r.inf() == ub));
  let r = if on_open_end { Interval::empty() } else { r };
  (r, if inside { Decoration::Com } else { Decoration::Trv })
}

/// Image of `x` by the function `op`, monotone on `domain`.
pub(crate) fn monotone<T: Bound>(x: &Interval<T>, op: UnaryOp, domain: Domain, increasing: bool)
  -> (Interval<T>, Decoration)
{
  if x.is_empty() {
    return (Interval::empty(), Decoration::Com);
  }
  let (r, dec) = restrict(x, domain);
  if r.is_empty() {
    return (r, dec);
  }
  let (lo, hi) = if increasing { (r.inf(), r.sup()) } else { (r.sup(), r.inf()) };
  let res = Interval::make(
    rounding::round_unary(op, lo, Round::Down),
    rounding::round_unary(op, hi, Round::Up));
  (res, dec)
}

fn is_integer<T: Bound>(x: T) -> bool {
  x.is_finite() && x == x.trunc()
}

fn is_half_integer<T: Bound>(x: T) -> bool {
  let x = x.widen();
  x.is_finite() && (x - x.trunc()).abs() == 0.5
}

fn ties_to_even<T: Bound>(x: T) -> T {
  let x = x.widen();
  let r = x.round();
  let r = if (r - x).abs() == 0.5 && r % 2.0 != 0.0 { r - x.signum() } else { r };
  T::narrow(r, Round::Nearest)
}

fn sign_of<T: Bound>(x: T) -> T {
  if x == T::zero() { T::zero() } else { x.signum() }
}

const INF: f64 = std::f64::INFINITY;

monotone_functions! {
  exp, exp_eval, Exp, Domain::Entire, true;
  exp2, exp2_eval, Exp2, Domain::Entire, true;
  exp10, exp10_eval, Exp10, Domain::Entire, true;
  /// `exp(x) - 1`, accurate near zero.
  expm1, expm1_eval, ExpM1, Domain::Entire, true;
  exp2m1, exp2m1_eval, Exp2M1, Domain::Entire, true;
  exp10m1, exp10m1_eval, Exp10M1, Domain::Entire, true;
  /// Natural logarithm of the positive members.
  log, log_eval, Log, Domain::Open(0.0, INF), true;
  log2, log2_eval, Log2, Domain::Open(0.0, INF), true;
  log10, log10_eval, Log10, Domain::Open(0.0, INF), true;
  /// `log(1 + x)`, accurate near zero.
  logp1, logp1_eval, LogP1, Domain::Open(-1.0, INF), true;
  log2p1, log2p1_eval, Log2P1, Domain::Open(-1.0, INF), true;
  log10p1, log10p1_eval, Log10P1, Domain::Open(-1.0, INF), true;
  sinh, sinh_eval, Sinh, Domain::Entire, true;
  tanh, tanh_eval, Tanh, Domain::Entire, true;
  asinh, asinh_eval, Asinh, Domain::Entire, true;
  acosh, acosh_eval, Acosh, Domain::Closed(1.0, INF), true;
  atanh, atanh_eval, Atanh, Domain::Open(-1.0, 1.0), true;
  /// `1 / sqrt(x)` of the positive members.
  r_sqrt, r_sqrt_eval, RSqrt, Domain::Open(0.0, INF), false;
}

reported_functions! {
  /// `-1`, `0` or `1` according to the sign of the members.
  sign, sign_eval;
  ceil, ceil_eval;
  floor, floor_eval;
  trunc, trunc_eval;
  /// Rounds to the nearest integer, ties to the even one.
  round_ties_to_even, round_ties_to_even_eval;
  /// Rounds to the nearest integer, ties away from zero.
  round_ties_to_away, round_ties_to_away_eval;
}

impl<T> Interval<T> where
 T: Bound
{
  pub fn cosh(&self) -> Interval<T> {
    if self.is_empty() {
      return Interval::empty();
    }
    let up = |x: T| rounding::round_unary(UnaryOp::Cosh, x, Round::Up);
    let down = |x: T| rounding::round_unary(UnaryOp::Cosh, x, Round::Down);
    let (a, b) = (self.inf(), self.sup());
    match shape(self) {
      Shape::Zero | Shape::Pos => Interval::make(down(a), up(b)),
      Shape::Neg => Interval::make(down(b), up(a)),
      Shape::Mixed => Interval::make(T::one(), up((-a).max(b))),
    }
  }

  pub(crate) fn pown_eval(&self, n: i32) -> (Interval<T>, Decoration) {
    use self::Shape::*;
    if self.is_empty() {
      return (Interval::empty(), Decoration::Com);
    }
    if n == 0 {
      return (Interval::make(T::one(), T::one()), Decoration::Com);
    }
    let down = |x: T| rounding::pown(x, n, Round::Down);
    let up = |x: T| rounding::pown(x, n, Round::Up);
    let (a, b) = (self.inf(), self.sup());
    let inf = T::infinity();
    let even = n % 2 == 0;
    if n > 0 {
      let res =
        if !even { Interval::make(down(a), up(b)) }
        else {
          match shape(self) {
            Zero | Pos => Interval::make(down(a), up(b)),
            Neg => Interval::make(down(b), up(a)),
            Mixed => Interval::make(T::zero(), up(a).max(up(b))),
          }
        };
      return (res, Decoration::Com);
    }
    let dec = if self.contains_zero() { Decoration::Trv } else { Decoration::Com };
    let res = match (shape(self), even) {
      (Zero, _) => Interval::empty(),
      (Pos, true) => Interval::make(down(b), up(a)),
      (Neg, true) => Interval::make(down(a), up(b)),
      (Mixed, true) => Interval::make(down(a).min(down(b)), inf),
      (Pos, false) => Interval::make(down(b), if a == T::zero() { inf } else { up(a) }),
      (Neg, false) => Interval::make(if b == T::zero() { -inf } else { down(b) }, up(a)),
      (Mixed, false) => Interval::entire(),
    };
    (res, dec)
  }

  /// `x^n` for an integer `n`. `x^0 = 1` even at zero; negative powers are undefined at zero.
  pub fn pown(&self, n: i32) -> Interval<T> {
    Interval::report(self.pown_eval(n))
  }

  pub(crate) fn pow_eval(&self, y: &Interval<T>) -> (Interval<T>, Decoration) {
    if self.is_empty() || y.is_empty() {
      return (Interval::empty(), Decoration::Com);
    }
    let (x, mut dec) = restrict(self, Domain::Closed(0.0, INF));
    if x.is_empty() {
      return (x, dec);
    }
    let zero = T::zero();
    let (c, d) = (y.inf(), y.sup());
    if x.is_zero() {
      return
        if d <= zero { (Interval::empty(), Decoration::Trv) }
        else if c <= zero { (x, Decoration::Trv) }
        else { (x, dec) };
    }
    let (a, b) = (x.inf(), x.sup());
    if a == zero && c <= zero {
      dec = Decoration::Trv;
    }
    let down = |u: T, v: T| rounding::round_binary(BinaryOp::Pow, u, v, Round::Down);
    let up = |u: T, v: T| rounding::round_binary(BinaryOp::Pow, u, v, Round::Up);
    let lb = down(a, c).min(down(a, d)).min(down(b, c)).min(down(b, d));
    let ub = up(a, c).max(up(a, d)).max(up(b, c)).max(up(b, d));
    (Interval::make(lb, ub), dec)
  }

  /// `x^y` over `x >= 0`, where `0^y` is only defined for `y > 0`.
  pub fn pow(&self, y: &Interval<T>) -> Interval<T> {
    Interval::report(self.pow_eval(y))
  }

  pub(crate) fn rootn_eval(&self, n: i32) -> (Interval<T>, Decoration) {
    if self.is_empty() {
      return (Interval::empty(), Decoration::Com);
    }
    if n == 0 {
      return (Interval::empty(), Decoration::Trv);
    }
    let m = n.unsigned_abs();
    let (x, dec) =
      if m % 2 == 0 { restrict(self, Domain::Closed(0.0, INF)) }
      else { (*self, Decoration::Com) };
    if x.is_empty() {
      return (x, dec);
    }
    let root = Interval::make(
      rounding::rootn(x.inf(), m, Round::Down),
      rounding::rootn(x.sup(), m, Round::Up));
    if n > 0 {
      (root, dec)
    }
    else {
      let (res, recip_dec) = root.recip_eval();
      (res, dec.min(recip_dec))
    }
  }

  /// Real `n`-th root, restricted to the non-negative members when `n` is even.
  pub fn rootn(&self, n: i32) -> Interval<T> {
    Interval::report(self.rootn_eval(n))
  }

  /// `sqrt(x^2 + y^2)`.
  pub fn hypot(&self, y: &Interval<T>) -> Interval<T> {
    if self.is_empty() || y.is_empty() {
      return Interval::empty();
    }
    Interval::make(
      rounding::round_binary(BinaryOp::Hypot, self.mig(), y.mig(), Round::Down),
      rounding::round_binary(BinaryOp::Hypot, self.mag(), y.mag(), Round::Up))
  }

  pub(crate) fn sign_eval(&self) -> (Interval<T>, Decoration) {
    if self.is_empty() {
      return (Interval::empty(), Decoration::Com);
    }
    let (l, u) = (sign_of(self.inf()), sign_of(self.sup()));
    let dec =
      if l != u { Decoration::Def }
      else if self.is_zero() { Decoration::Dac }
      else { Decoration::Com };
    (Interval::make(l, u), dec)
  }

  pub(crate) fn ceil_eval(&self) -> (Interval<T>, Decoration) {
    if self.is_empty() {
      return (Interval::empty(), Decoration::Com);
    }
    let (l, u) = (self.inf().ceil(), self.sup().ceil());
    let dec =
      if l != u { Decoration::Def }
      else if is_integer(self.sup()) { Decoration::Dac }
      else { Decoration::Com };
    (Interval::make(l, u), dec)
  }

  pub(crate) fn floor_eval(&self) -> (Interval<T>, Decoration) {
    if self.is_empty() {
      return (Interval::empty(), Decoration::Com);
    }
    let (l, u) = (self.inf().floor(), self.sup().floor());
    let dec =
      if l != u { Decoration::Def }
      else if is_integer(self.inf()) { Decoration::Dac }
      else { Decoration::Com };
    (Interval::make(l, u), dec)
  }

  pub(crate) fn trunc_eval(&self) -> (Interval<T>, Decoration) {
    if self.is_empty() {
      return (Interval::empty(), Decoration::Com);
    }
    let (a, b) = (self.inf(), self.sup());
    let (l, u) = (a.trunc(), b.trunc());
    let jump = |x: T| is_integer(x) && x != T::zero();
    let dec =
      if l != u { Decoration::Def }
      else if jump(a) || jump(b) { Decoration::Dac }
      else { Decoration::Com };
    (Interval::make(l, u), dec)
  }

  fn round_eval<F>(&self, round: F) -> (Interval<T>, Decoration) where
   F: Fn(T) -> T
  {
    if self.is_empty() {
      return (Interval::empty(), Decoration::Com);
    }
    let (a, b) = (self.inf(), self.sup());
    let (l, u) = (round(a), round(b));
    let dec =
      if l != u { Decoration::Def }
      else if is_half_integer(a) || is_half_integer(b) { Decoration::Dac }
      else { Decoration::Com };
    (Interval::make(l, u), dec)
  }

  pub(crate) fn round_ties_to_even_eval(&self) -> (Interval<T>, Decoration) {
    self.round_eval(ties_to_even)
  }

  pub(crate) fn round_ties_to_away_eval(&self) -> (Interval<T>, Decoration) {
    self.round_eval(|x: T| x.round())
  }
}
