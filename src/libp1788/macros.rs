// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Forwarding of the operator traits. An operator is implemented once on references (`&a + &b`) and the by-value variants are derived from it.

#![macro_use]

macro_rules! forward_val_val_binop {
  (impl<$($bn:ident: $(+ $bs:ident)*),*> $imp:ident for $res:ty, $method:ident, $arg:ty) => {
    impl<$($bn: $($bs+)*),*> $imp<$arg> for $res {
      type Output = $res;

      fn $method(self, other: $arg) -> $res {
        (&self).$method(&other)
      }
    }
  }
}

macro_rules! forward_ref_val_binop {
  (impl<$($bn:ident: $(+ $bs:ident)*),*> $imp:ident for $res:ty, $method:ident, $arg:ty) => {
    impl<'a, $($bn: $($bs+)*),*> $imp<$arg> for &'a $res {
      type Output = $res;

      fn $method(self, other: $arg) -> $res {
        self.$method(&other)
      }
    }
  }
}

macro_rules! forward_val_ref_binop {
  (impl<$($bn:ident: $(+ $bs:ident)*),*> $imp:ident for $res:ty, $method:ident, $arg:ty) => {
    impl<'b, $($bn: $($bs+)*),*> $imp<&'b $arg> for $res {
      type Output = $res;

      fn $method(self, other: &$arg) -> $res {
        (&self).$method(other)
      }
    }
  }
}

macro_rules! forward_all_binop {
  (impl<$($bn:ident: $(+ $bs:ident)*),*> $imp:ident for $res:ty, $method:ident, $arg:ty) => {
    forward_val_val_binop!(impl<$($bn: $(+ $bs)*),*> $imp for $res, $method, $arg);
    forward_ref_val_binop!(impl<$($bn: $(+ $bs)*),*> $imp for $res, $method, $arg);
    forward_val_ref_binop!(impl<$($bn: $(+ $bs)*),*> $imp for $res, $method, $arg);
  };
  (impl<$($bn:ident: $(+ $bs:ident)*),*> $imp:ident for $res:ty, $method:ident) => {
    forward_all_binop!(impl<$($bn: $(+ $bs)*),*> $imp for $res, $method, $res);
  };
}

macro_rules! forward_val_unop {
  (impl<$($bn:ident: $(+ $bs:ident)*),*> $imp:ident for $res:ty, $method:ident) => {
    impl<$($bn: $($bs+)*),*> $imp for $res {
      type Output = $res;

      fn $method(self) -> $res {
        (&self).$method()
      }
    }
  }
}

/// Defines, for each monotone function, the method computing its image with the local decoration and the method raising the domain flags.
macro_rules! monotone_functions {
  ( $( $(#[$doc:meta])* $name:ident, $eval:ident, $op:ident, $domain:expr, $increasing:expr; )* ) => {
    impl<T> Interval<T> where
     T: Bound
    {$(
      pub(crate) fn $eval(&self) -> (Interval<T>, $crate::decoration::Decoration) {
        $crate::elementary::monotone(self, $crate::rounding::UnaryOp::$op, $domain, $increasing)
      }

      $(#[$doc])*
      pub fn $name(&self) -> Interval<T> {
        Interval::report(self.$eval())
      }
    )*}
  }
}

/// Bare version of functions that have an evaluation with local decoration.
macro_rules! reported_functions {
  ( $( $(#[$doc:meta])* $name:ident, $eval:ident; )* ) => {
    impl<T> Interval<T> where
     T: Bound
    {$(
      $(#[$doc])*
      pub fn $name(&self) -> Interval<T> {
        Interval::report(self.$eval())
      }
    )*}
  }
}
