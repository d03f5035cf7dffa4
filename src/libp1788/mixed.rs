// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Operations mixing bound types.
//!
//! The result type `T` is chosen by the caller independently of the types of the operands. Operands are first widened to `f64`, which is exact, the operation is evaluated with directed rounding and the result is rounded outward to `T`. Since every bound type is a subset of `f64`, the two directed roundings compose into the tightest interval of `T`.
//!
//! Predicates compare the widened operands, never a narrowed one.
//!
//! ```rust
//! use p1788::{Interval, mixed};
//!
//! let x = Interval::new(0.1f64, 0.1);
//! let y = Interval::new(0.2f32, 0.2);
//! let z: Interval<f32> = mixed::add(&x, &y);
//! assert!((z.inf() as f64) <= 0.1 + 0.2f32 as f64);
//! assert!(!mixed::subset(&x, &Interval::new(0.1f32, 1.0)));
//! ```

use crate::interval::Interval;
use crate::boolean::OverlapState;
use crate::rounding::Round;
use crate::ops::*;

fn widen<X: Bound>(x: &Interval<X>) -> Interval<f64> {
  Interval::convert(x)
}

/// A result leaving the range of `T` is an overflow of the operation, not of a conversion: no flag is raised.
fn narrow<T: Bound>(x: &Interval<f64>) -> Interval<T> {
  if x.is_empty() {
    Interval::empty()
  }
  else {
    Interval::make(T::narrow(x.inf(), Round::Down), T::narrow(x.sup(), Round::Up))
  }
}

macro_rules! mixed_unary {
  ( $( $name:ident ),* ) => {$(
    pub fn $name<T, X>(x: &Interval<X>) -> Interval<T> where
     T: Bound,
     X: Bound
    {
      narrow(&widen(x).$name())
    }
  )*}
}

macro_rules! mixed_binary {
  ( $( $name:ident ),* ) => {$(
    pub fn $name<T, X, Y>(x: &Interval<X>, y: &Interval<Y>) -> Interval<T> where
     T: Bound,
     X: Bound,
     Y: Bound
    {
      narrow(&widen(x).$name(&widen(y)))
    }
  )*}
}

macro_rules! mixed_predicate {
  ( $( $name:ident ),* ) => {$(
    pub fn $name<X, Y>(x: &Interval<X>, y: &Interval<Y>) -> bool where
     X: Bound,
     Y: Bound
    {
      widen(x).$name(&widen(y))
    }
  )*}
}

mixed_unary!(pos, recip, sqr, sqrt, abs,
  exp, exp2, exp10, expm1, exp2m1, exp10m1,
  log, log2, log10, logp1, log2p1, log10p1,
  sin, cos, tan, asin, acos, atan,
  sin_pi, cos_pi, tan_pi, asin_pi, acos_pi, atan_pi,
  sinh, cosh, tanh, asinh, acosh, atanh, r_sqrt,
  sign, ceil, floor, trunc, round_ties_to_even, round_ties_to_away);

mixed_binary!(pow, atan2, atan2_pi, hypot, min, max,
  intersect, convex_hull, cancel_minus, cancel_plus);

mixed_predicate!(is_equal, subset, less, strictly_less, precedes, strictly_precedes,
  is_interior, are_disjoint);

pub fn neg<T, X>(x: &Interval<X>) -> Interval<T> where
 T: Bound,
 X: Bound
{
  narrow(&-&widen(x))
}

pub fn add<T, X, Y>(x: &Interval<X>, y: &Interval<Y>) -> Interval<T> where
 T: Bound,
 X: Bound,
 Y: Bound
{
  narrow(&(&widen(x) + &widen(y)))
}

pub fn sub<T, X, Y>(x: &Interval<X>, y: &Interval<Y>) -> Interval<T> where
 T: Bound,
 X: Bound,
 Y: Bound
{
  narrow(&(&widen(x) - &widen(y)))
}

pub fn mul<T, X, Y>(x: &Interval<X>, y: &Interval<Y>) -> Interval<T> where
 T: Bound,
 X: Bound,
 Y: Bound
{
  narrow(&(&widen(x) * &widen(y)))
}

pub fn div<T, X, Y>(x: &Interval<X>, y: &Interval<Y>) -> Interval<T> where
 T: Bound,
 X: Bound,
 Y: Bound
{
  narrow(&(&widen(x) / &widen(y)))
}

pub fn fma<T, X, Y, Z>(x: &Interval<X>, y: &Interval<Y>, z: &Interval<Z>) -> Interval<T> where
 T: Bound,
 X: Bound,
 Y: Bound,
 Z: Bound
{
  narrow(&widen(x).fma(&widen(y), &widen(z)))
}

pub fn pown<T, X>(x: &Interval<X>, n: i32) -> Interval<T> where
 T: Bound,
 X: Bound
{
  narrow(&widen(x).pown(n))
}

pub fn rootn<T, X>(x: &Interval<X>, n: i32) -> Interval<T> where
 T: Bound,
 X: Bound
{
  narrow(&widen(x).rootn(n))
}

pub fn overlap<X, Y>(x: &Interval<X>, y: &Interval<Y>) -> OverlapState where
 X: Bound,
 Y: Bound
{
  widen(x).overlap(&widen(y))
}

/// The same operations on decorated intervals. Narrowing lowers `com` to `dac` when a bound overflows.
pub mod decorated {
  use crate::decorated::DecoratedInterval;
  use crate::ops::*;
  use super::narrow as narrow_bare;

  fn widen<X: Bound>(x: &DecoratedInterval<X>) -> DecoratedInterval<f64> {
    DecoratedInterval::convert(x)
  }

  fn narrow<T: Bound>(x: &DecoratedInterval<f64>) -> DecoratedInterval<T> {
    if x.is_nai() {
      DecoratedInterval::nai()
    }
    else {
      DecoratedInterval::make(narrow_bare(x.bare()), x.decoration())
    }
  }

  macro_rules! mixed_decorated_unary {
    ( $( $name:ident ),* ) => {$(
      pub fn $name<T, X>(x: &DecoratedInterval<X>) -> DecoratedInterval<T> where
       T: Bound,
       X: Bound
      {
        narrow(&widen(x).$name())
      }
    )*}
  }

  macro_rules! mixed_decorated_binary {
    ( $( $name:ident ),* ) => {$(
      pub fn $name<T, X, Y>(x: &DecoratedInterval<X>, y: &DecoratedInterval<Y>) -> DecoratedInterval<T> where
       T: Bound,
       X: Bound,
       Y: Bound
      {
        narrow(&widen(x).$name(&widen(y)))
      }
    )*}
  }

  mixed_decorated_unary!(pos, recip, sqr, sqrt, abs,
    exp, exp2, exp10, expm1, exp2m1, exp10m1,
    log, log2, log10, logp1, log2p1, log10p1,
    sin, cos, tan, asin, acos, atan,
    sin_pi, cos_pi, tan_pi, asin_pi, acos_pi, atan_pi,
    sinh, cosh, tanh, asinh, acosh, atanh, r_sqrt,
    sign, ceil, floor, trunc, round_ties_to_even, round_ties_to_away);

  mixed_decorated_binary!(pow, atan2, atan2_pi, hypot, min, max,
    intersect, convex_hull, cancel_minus, cancel_plus);

  pub fn neg<T, X>(x: &DecoratedInterval<X>) -> DecoratedInterval<T> where
   T: Bound,
   X: Bound
  {
    narrow(&-&widen(x))
  }

  pub fn add<T, X, Y>(x: &DecoratedInterval<X>, y: &DecoratedInterval<Y>) -> DecoratedInterval<T> where
   T: Bound,
   X: Bound,
   Y: Bound
  {
    narrow(&(&widen(x) + &widen(y)))
  }

  pub fn sub<T, X, Y>(x: &DecoratedInterval<X>, y: &DecoratedInterval<Y>) -> DecoratedInterval<T> where
   T: Bound,
   X: Bound,
   Y: Bound
  {
    narrow(&(&widen(x) - &widen(y)))
  }

  pub fn mul<T, X, Y>(x: &DecoratedInterval<X>, y: &DecoratedInterval<Y>) -> DecoratedInterval<T> where
   T: Bound,
   X: Bound,
   Y: Bound
  {
    narrow(&(&widen(x) * &widen(y)))
  }

  pub fn div<T, X, Y>(x: &DecoratedInterval<X>, y: &DecoratedInterval<Y>) -> DecoratedInterval<T> where
   T: Bound,
   X: Bound,
   Y: Bound
  {
    narrow(&(&widen(x) / &widen(y)))
  }

  pub fn fma<T, X, Y, Z>(x: &DecoratedInterval<X>, y: &DecoratedInterval<Y>, z: &DecoratedInterval<Z>)
    -> DecoratedInterval<T> where
   T: Bound,
   X: Bound,
   Y: Bound,
   Z: Bound
  {
    narrow(&widen(x).fma(&widen(y), &widen(z)))
  }

  pub fn pown<T, X>(x: &DecoratedInterval<X>, n: i32) -> DecoratedInterval<T> where
   T: Bound,
   X: Bound
  {
    narrow(&widen(x).pown(n))
  }

  pub fn rootn<T, X>(x: &DecoratedInterval<X>, n: i32) -> DecoratedInterval<T> where
   T: Bound,
   X: Bound
  {
    narrow(&widen(x).rootn(n))
  }
}
