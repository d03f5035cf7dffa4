// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Comparisons of the members of two intervals in the three-valued logic of Kleene.
//!
//! `x.kleene_lt(&y)` is `True` when every member of `x` is less than every member of `y` (the relation certainly holds), `False` when no member of `x` is less than a member of `y` (it certainly does not hold) and `Unknown` otherwise. A comparison with the empty interval is `Unknown`.
//!
//! ```rust
//! use p1788::Interval;
//! use trilean::SKleene;
//!
//! let x = Interval::new(1.0, 2.0);
//! assert_eq!(x.kleene_lt(&Interval::new(3.0, 4.0)), SKleene::True);
//! assert_eq!(x.kleene_lt(&Interval::new(0.0, 1.0)), SKleene::False);
//! assert_eq!(x.kleene_lt(&Interval::new(1.5, 4.0)), SKleene::Unknown);
//! ```

use trilean::SKleene;
use trilean::SKleene::*;
use crate::interval::Interval;
use crate::ops::*;

fn not(k: SKleene) -> SKleene {
  match k {
    True => False,
    False => True,
    Unknown => Unknown
  }
}

impl<T> Interval<T> where
 T: Bound
{
  fn kleene<F, G>(&self, other: &Interval<T>, certainly: F, never: G) -> SKleene where
   F: Fn(&Interval<T>, &Interval<T>) -> bool,
   G: Fn(&Interval<T>, &Interval<T>) -> bool
  {
    if self.is_empty() || other.is_empty() { Unknown }
    else if certainly(self, other) { True }
    else if never(self, other) { False }
    else { Unknown }
  }

  pub fn kleene_lt(&self, other: &Interval<T>) -> SKleene {
    self.kleene(other, |x, y| x.sup() < y.inf(), |x, y| x.inf() >= y.sup())
  }

  pub fn kleene_le(&self, other: &Interval<T>) -> SKleene {
    self.kleene(other, |x, y| x.sup() <= y.inf(), |x, y| x.inf() > y.sup())
  }

  pub fn kleene_gt(&self, other: &Interval<T>) -> SKleene {
    other.kleene_lt(self)
  }

  pub fn kleene_ge(&self, other: &Interval<T>) -> SKleene {
    other.kleene_le(self)
  }

  /// `True` only for two equal singletons.
  pub fn kleene_eq(&self, other: &Interval<T>) -> SKleene {
    self.kleene(other,
      |x, y| x.inf() == x.sup() && x.inf() == y.inf() && y.inf() == y.sup(),
      |x, y| x.sup() < y.inf() || y.sup() < x.inf())
  }

  pub fn kleene_ne(&self, other: &Interval<T>) -> SKleene {
    not(self.kleene_eq(other))
  }
}
