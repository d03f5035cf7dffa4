// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Operations on decorated intervals.
//!
//! The bare part of a result is the one of the bare operation. Its decoration is the minimum of the decorations of the operands and of the local decoration of the operation on the bare operands, then lowered to be consistent with the result (`trv` if it is empty, at most `dac` if it is unbounded). Any NaI operand gives NaI and raises `invalid_operand`. Reverse, cancellative and set operations are never better than `trv`.
//!
//! Domain violations are recorded in the decoration only: unlike the bare functions, decorated ones do not raise `undefined_operation` or `possibly_undefined_operation`.
//!
//! ```rust
//! use p1788::{DecoratedInterval, Decoration};
//!
//! let x = DecoratedInterval::from_bounds(1.0, 2.0);
//! let y = DecoratedInterval::from_bounds(-1.0, 1.0);
//! assert_eq!((x + y).decoration(), Decoration::Com);
//! assert_eq!((x / y).decoration(), Decoration::Trv);
//! assert!((x / y).is_entire());
//! ```

use std::ops::{Add, Sub, Mul, Div, Neg};
use crate::interval::Interval;
use crate::decorated::DecoratedInterval;
use crate::decoration::Decoration;
use crate::decoration::Decoration::*;
use crate::ops::*;

impl<T> DecoratedInterval<T> where
 T: Bound
{
  fn lift<F>(&self, f: F) -> DecoratedInterval<T> where
   F: FnOnce(&Interval<T>) -> (Interval<T>, Decoration)
  {
    if self.is_nai() {
      return DecoratedInterval::nai_operand();
    }
    let (res, local) = f(self.bare());
    DecoratedInterval::make(res, self.decoration().min(local))
  }

  fn lift2<F>(&self, y: &DecoratedInterval<T>, f: F) -> DecoratedInterval<T> where
   F: FnOnce(&Interval<T>, &Interval<T>) -> (Interval<T>, Decoration)
  {
    if self.is_nai() || y.is_nai() {
      return DecoratedInterval::nai_operand();
    }
    let (res, local) = f(self.bare(), y.bare());
    DecoratedInterval::make(res, self.decoration().min(y.decoration()).min(local))
  }

  fn lift3<F>(&self, y: &DecoratedInterval<T>, z: &DecoratedInterval<T>, f: F) -> DecoratedInterval<T> where
   F: FnOnce(&Interval<T>, &Interval<T>, &Interval<T>) -> (Interval<T>, Decoration)
  {
    if self.is_nai() || y.is_nai() || z.is_nai() {
      return DecoratedInterval::nai_operand();
    }
    let (res, local) = f(self.bare(), y.bare(), z.bare());
    let dec = self.decoration().min(y.decoration()).min(z.decoration());
    DecoratedInterval::make(res, dec.min(local))
  }

  fn pair(first: Interval<T>, second: Interval<T>, dec: Decoration)
    -> (DecoratedInterval<T>, DecoratedInterval<T>)
  {
    (DecoratedInterval::make(first, dec), DecoratedInterval::make(second, dec))
  }
}

/// Functions whose local decoration is computed by `$eval`.
macro_rules! decorated_unary {
  ( $( $(#[$doc:meta])* $name:ident, $eval:ident; )* ) => {
    impl<T> DecoratedInterval<T> where
     T: Bound
    {$(
      $(#[$doc])*
      pub fn $name(&self) -> DecoratedInterval<T> {
        self.lift(Interval::$eval)
      }
    )*}
  }
}

/// Functions defined and continuous everywhere.
macro_rules! decorated_total {
  ( $( $name:ident; )* ) => {
    impl<T> DecoratedInterval<T> where
     T: Bound
    {$(
      pub fn $name(&self) -> DecoratedInterval<T> {
        self.lift(|x| (x.$name(), Com))
      }
    )*}
  }
}

/// Reverse functions of one variable, with the 2-argument form `f_rev(c, x)` and the 1-argument form `f_rev(c)`.
macro_rules! decorated_reverse {
  ( $( $name:ident, $entire:ident; )* ) => {
    impl<T> DecoratedInterval<T> where
     T: Bound
    {$(
      pub fn $name(&self, x: &DecoratedInterval<T>) -> DecoratedInterval<T> {
        self.lift2(x, |c, x| (c.$name(x), Trv))
      }

      pub fn $entire(&self) -> DecoratedInterval<T> {
        self.lift(|c| (c.$entire(), Trv))
      }
    )*}
  }
}

/// Reverse functions of two variables: `self` is the known operand.
macro_rules! decorated_binary_reverse {
  ( $( $name:ident, $entire:ident; )* ) => {
    impl<T> DecoratedInterval<T> where
     T: Bound
    {$(
      pub fn $name(&self, c: &DecoratedInterval<T>, x: &DecoratedInterval<T>) -> DecoratedInterval<T> {
        self.lift3(c, x, |b, c, x| (b.$name(c, x), Trv))
      }

      pub fn $entire(&self, c: &DecoratedInterval<T>) -> DecoratedInterval<T> {
        self.lift2(c, |b, c| (b.$entire(c), Trv))
      }
    )*}
  }
}

/// Operations whose decoration is always `trv`.
macro_rules! decorated_trivial {
  ( $( $(#[$doc:meta])* $name:ident; )* ) => {
    impl<T> DecoratedInterval<T> where
     T: Bound
    {$(
      $(#[$doc])*
      pub fn $name(&self, other: &DecoratedInterval<T>) -> DecoratedInterval<T> {
        self.lift2(other, |x, y| (x.$name(y), Trv))
      }
    )*}
  }
}

decorated_unary! {
  recip, recip_eval;
  sqrt, sqrt_eval;
  exp, exp_eval;
  exp2, exp2_eval;
  exp10, exp10_eval;
  expm1, expm1_eval;
  exp2m1, exp2m1_eval;
  exp10m1, exp10m1_eval;
  log, log_eval;
  log2, log2_eval;
  log10, log10_eval;
  logp1, logp1_eval;
  log2p1, log2p1_eval;
  log10p1, log10p1_eval;
  sinh, sinh_eval;
  tanh, tanh_eval;
  asinh, asinh_eval;
  acosh, acosh_eval;
  atanh, atanh_eval;
  r_sqrt, r_sqrt_eval;
  sin, sin_eval;
  cos, cos_eval;
  tan, tan_eval;
  sin_pi, sin_pi_eval;
  cos_pi, cos_pi_eval;
  tan_pi, tan_pi_eval;
  asin, asin_eval;
  acos, acos_eval;
  atan, atan_eval;
  asin_pi, asin_pi_eval;
  acos_pi, acos_pi_eval;
  atan_pi, atan_pi_eval;
  /// `def` when the sign changes, `dac` on `[0..0]`.
  sign, sign_eval;
  /// `def` when the interval reaches the next integer, `dac` when its upper bound is an integer.
  ceil, ceil_eval;
  floor, floor_eval;
  trunc, trunc_eval;
  round_ties_to_even, round_ties_to_even_eval;
  round_ties_to_away, round_ties_to_away_eval;
}

decorated_total! {
  pos;
  sqr;
  abs;
  cosh;
}

decorated_reverse! {
  sqr_rev, sqr_rev_entire;
  abs_rev, abs_rev_entire;
  sin_rev, sin_rev_entire;
  cos_rev, cos_rev_entire;
  tan_rev, tan_rev_entire;
  cosh_rev, cosh_rev_entire;
}

decorated_binary_reverse! {
  mul_rev, mul_rev_entire;
  pow_rev1, pow_rev1_entire;
  pow_rev2, pow_rev2_entire;
  atan2_rev1, atan2_rev1_entire;
  atan2_rev2, atan2_rev2_entire;
}

decorated_trivial! {
  intersect;
  convex_hull;
  cancel_minus;
  /// The interval `z` such that `z - other = self`, when it exists.
  cancel_plus;
}

impl<T> DecoratedInterval<T> where
 T: Bound
{
  pub fn pown(&self, n: i32) -> DecoratedInterval<T> {
    self.lift(|x| x.pown_eval(n))
  }

  pub fn rootn(&self, n: i32) -> DecoratedInterval<T> {
    self.lift(|x| x.rootn_eval(n))
  }

  pub fn pow(&self, y: &DecoratedInterval<T>) -> DecoratedInterval<T> {
    self.lift2(y, Interval::pow_eval)
  }

  /// `self` is the ordinate.
  pub fn atan2(&self, x: &DecoratedInterval<T>) -> DecoratedInterval<T> {
    self.lift2(x, Interval::atan2_eval)
  }

  pub fn atan2_pi(&self, x: &DecoratedInterval<T>) -> DecoratedInterval<T> {
    self.lift2(x, Interval::atan2_pi_eval)
  }

  pub fn hypot(&self, y: &DecoratedInterval<T>) -> DecoratedInterval<T> {
    self.lift2(y, |x, y| (x.hypot(y), Com))
  }

  pub fn min(&self, other: &DecoratedInterval<T>) -> DecoratedInterval<T> {
    self.lift2(other, |x, y| (x.min(y), Com))
  }

  pub fn max(&self, other: &DecoratedInterval<T>) -> DecoratedInterval<T> {
    self.lift2(other, |x, y| (x.max(y), Com))
  }

  pub fn fma(&self, y: &DecoratedInterval<T>, z: &DecoratedInterval<T>) -> DecoratedInterval<T> {
    self.lift3(y, z, |x, y, z| (x.fma(y, z), Com))
  }

  pub fn pown_rev(&self, x: &DecoratedInterval<T>, n: i32) -> DecoratedInterval<T> {
    self.lift2(x, |c, x| (c.pown_rev(x, n), Trv))
  }

  pub fn pown_rev_entire(&self, n: i32) -> DecoratedInterval<T> {
    self.lift(|c| (c.pown_rev_entire(n), Trv))
  }

  /// Both components are `trv` when the denominator straddles zero.
  pub fn div_to_pair(&self, other: &DecoratedInterval<T>) -> (DecoratedInterval<T>, DecoratedInterval<T>) {
    if self.is_nai() || other.is_nai() {
      let nai = DecoratedInterval::nai_operand();
      return (nai, nai);
    }
    let ((first, second), local) = self.bare().div_to_pair_eval(other.bare());
    let dec = self.decoration().min(other.decoration()).min(local);
    DecoratedInterval::pair(first, second, dec)
  }

  pub fn mul_rev_to_pair(&self, c: &DecoratedInterval<T>) -> (DecoratedInterval<T>, DecoratedInterval<T>) {
    if self.is_nai() || c.is_nai() {
      let nai = DecoratedInterval::nai_operand();
      return (nai, nai);
    }
    let (first, second) = self.bare().mul_rev_to_pair(c.bare());
    DecoratedInterval::pair(first, second, Trv)
  }
}

impl<'a, 'b, T> Add<&'b DecoratedInterval<T>> for &'a DecoratedInterval<T> where
 T: Bound
{
  type Output = DecoratedInterval<T>;

  fn add(self, other: &DecoratedInterval<T>) -> DecoratedInterval<T> {
    self.lift2(other, |x, y| (x + y, Com))
  }
}

forward_all_binop!(impl<T: +Bound> Add for DecoratedInterval<T>, add);

impl<'a, 'b, T> Sub<&'b DecoratedInterval<T>> for &'a DecoratedInterval<T> where
 T: Bound
{
  type Output = DecoratedInterval<T>;

  fn sub(self, other: &DecoratedInterval<T>) -> DecoratedInterval<T> {
    self.lift2(other, |x, y| (x - y, Com))
  }
}

forward_all_binop!(impl<T: +Bound> Sub for DecoratedInterval<T>, sub);

impl<'a, 'b, T> Mul<&'b DecoratedInterval<T>> for &'a DecoratedInterval<T> where
 T: Bound
{
  type Output = DecoratedInterval<T>;

  fn mul(self, other: &DecoratedInterval<T>) -> DecoratedInterval<T> {
    self.lift2(other, |x, y| (x * y, Com))
  }
}

forward_all_binop!(impl<T: +Bound> Mul for DecoratedInterval<T>, mul);

impl<'a, 'b, T> Div<&'b DecoratedInterval<T>> for &'a DecoratedInterval<T> where
 T: Bound
{
  type Output = DecoratedInterval<T>;

  fn div(self, other: &DecoratedInterval<T>) -> DecoratedInterval<T> {
    self.lift2(other, Interval::div_eval)
  }
}

forward_all_binop!(impl<T: +Bound> Div for DecoratedInterval<T>, div);

impl<'a, T> Neg for &'a DecoratedInterval<T> where
 T: Bound
{
  type Output = DecoratedInterval<T>;

  fn neg(self) -> DecoratedInterval<T> {
    self.lift(|x| (-x, Com))
  }
}

forward_val_unop!(impl<T: +Bound> Neg for DecoratedInterval<T>, neg);
