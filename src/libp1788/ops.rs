// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Interval and bound specific operations.

use std::fmt::{Debug, Display};
use gcollections::kind::*;
use num_traits::Float;
use float_next_after::NextAfter;
use crate::rounding::Round;

pub trait Hull<RHS = Self>
{
  type Output;
  fn hull(&self, rhs: &RHS) -> Self::Output;
}

pub trait Range : Collection
{
  fn new(lb: Self::Item, ub: Self::Item) -> Self;
}

pub trait Whole
{
  fn whole() -> Self;
}

/// Floating-point type usable as the bound of an interval.
///
/// Every bound type converts exactly into `f64`, the type in which the rounding primitive works, and back with a directed rounding. This single pair of conversions is also what mixed-type operations go through.
pub trait Bound : Float + Debug + Display + Default + Send + Sync + 'static
{
  /// Short name of the type, used in diagnostics.
  const NAME: &'static str;

  /// Exact conversion into `f64`.
  fn widen(self) -> f64;
  /// Rounds `x` to the nearest value of the type in the direction `dir`. Finite values too large for the type become the largest finite value or infinity, depending on the direction.
  fn narrow(x: f64, dir: Round) -> Self;
  /// The least value strictly greater than `self`; infinity and NaN are fixed points.
  fn next_up(self) -> Self;
  /// The greatest value strictly less than `self`; minus infinity and NaN are fixed points.
  fn next_down(self) -> Self;
}

macro_rules! bound_impl
{
  ( $( $t: ident, $name: expr, $narrow: expr ),* ) =>
  {$(
    impl Bound for $t
    {
      const NAME: &'static str = $name;

      fn widen(self) -> f64 {
        self as f64
      }

      fn narrow(x: f64, dir: Round) -> $t {
        $narrow(x, dir)
      }

      fn next_up(self) -> $t {
        if self.is_nan() || self == $t::INFINITY {
          self
        }
        else if self == $t::NEG_INFINITY {
          $t::MIN
        }
        else if self == 0.0 {
          $t::from_bits(1)
        }
        else {
          self.next_after($t::INFINITY)
        }
      }

      fn next_down(self) -> $t {
        -(-self).next_up()
      }
    }
  )*}
}

fn narrow_f64(x: f64, _dir: Round) -> f64 {
  x
}

fn narrow_f32(x: f64, dir: Round) -> f32 {
  let y = x as f32;
  if x.is_nan() {
    return y;
  }
  match dir {
    Round::Down if (y as f64) > x => y.next_down(),
    Round::Up if (y as f64) < x => y.next_up(),
    _ => y
  }
}

bound_impl!(f64, "f64", narrow_f64, f32, "f32", narrow_f32);

#[cfg(test)]
mod tests {
  use super::*;
  use crate::rounding::Round::*;

  #[test]
  fn next_after_special_values() {
    let cases = vec![
      (1, 0.0, f64::from_bits(1), -f64::from_bits(1)),
      (2, -0.0, f64::from_bits(1), -f64::from_bits(1)),
      (3, f64::INFINITY, f64::INFINITY, f64::MAX),
      (4, f64::NEG_INFINITY, f64::MIN, f64::NEG_INFINITY),
      (5, f64::MAX, f64::INFINITY, f64::from_bits(f64::MAX.to_bits() - 1)),
      (6, 1.0, 1.0 + f64::EPSILON, 1.0 - f64::EPSILON / 2.0),
    ];
    for (id, x, up, down) in cases {
      assert_eq!(x.next_up(), up, "test #{} of next_up", id);
      assert_eq!(x.next_down(), down, "test #{} of next_down", id);
    }
    assert!(f64::NAN.next_up().is_nan());
    assert_eq!(1.0f32.next_up(), 1.0 + f32::EPSILON);
    assert_eq!(0.0f32.next_down(), -f32::from_bits(1));
  }

  #[test]
  fn narrowing_is_directed() {
    let tenth = 0.1f64;
    let down = f32::narrow(tenth, Down);
    let up = f32::narrow(tenth, Up);
    assert!((down as f64) < tenth);
    assert!((up as f64) > tenth);
    assert_eq!(down.next_up(), up);

    let cases = vec![
      (1, 1e300, Down, f32::MAX),
      (2, 1e300, Up, f32::INFINITY),
      (3, -1e300, Up, f32::MIN),
      (4, -1e300, Down, f32::NEG_INFINITY),
      (5, 1e-50, Down, 0.0),
      (6, 1e-50, Up, f32::from_bits(1)),
      (7, 0.5, Down, 0.5),
      (8, 0.5, Up, 0.5),
      (9, f64::INFINITY, Down, f32::INFINITY),
    ];
    for (id, x, dir, expected) in cases {
      assert_eq!(f32::narrow(x, dir), expected, "test #{} of narrow", id);
    }
    assert_eq!(f64::narrow(0.1, Down), 0.1);
    assert_eq!(0.1f32.widen(), 0.1f32 as f64);
  }
}
