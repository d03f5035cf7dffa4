// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at

//     http://www.apache.org/licenses/LICENSE-2.0

// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! This library implements the set-based flavor of the IEEE 1788 standard for interval arithmetic, with `f32` and `f64` bounds.
//!
//! An [interval](interval/index.html) is a closed connected set of reals given by two floating-point bounds. Every operation is rounded outward so the result contains the exact image of its operands. A [decorated interval](decorated/index.html) additionally carries a [decoration](decoration/index.html) recording whether the functions evaluated so far were defined and continuous on their inputs.
//!
//! Operations never panic. When an operand leaves the domain of an operation, a sound result is returned and a flag of the [exception module](exception/index.html) is raised; flags are per thread and sticky until cleared.
//!
//! # Examples
//!
//! ```rust
//! use p1788::{Interval, DecoratedInterval, Decoration, exception};
//!
//! let x = Interval::new(-1.0, 4.0);
//! assert_eq!(x * x, Interval::new(-4.0, 16.0));
//! assert_eq!(x.sqr(), Interval::new(0.0, 16.0));
//!
//! exception::clear();
//! assert_eq!(x.sqrt(), Interval::new(0.0, 2.0));
//! assert!(exception::possibly_undefined_operation());
//!
//! let y = DecoratedInterval::from_interval(x);
//! assert_eq!(y.sqrt().decoration(), Decoration::Trv);
//! ```
//!
//! Operations between intervals of different bound types are in the [mixed module](mixed/index.html).
//!
//! # References
//! * [IEEE Std 1788-2015, Standard for Interval Arithmetic](https://standards.ieee.org/ieee/1788/4431/)
//! * [IEEE Std 1788.1-2017, Standard for Interval Arithmetic (Simplified)](https://standards.ieee.org/ieee/1788.1/6074/)

#[macro_use]
mod macros;

pub mod exception;
pub mod decoration;
pub mod ops;
pub mod rounding;
pub mod interval;
pub mod boolean;
pub mod decorated;
pub mod mixed;
mod arithmetic;
mod set_operations;
mod elementary;
mod trigonometric;
mod reverse;
mod kleene;
mod decorated_functions;

pub use crate::interval::Interval;
pub use crate::decorated::DecoratedInterval;
pub use crate::decoration::Decoration;
pub use crate::boolean::OverlapState;
pub use crate::exception::{Exceptions, IntervalException};
pub use crate::rounding::Round;
