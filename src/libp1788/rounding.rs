// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Directed rounding of point operations.
//!
//! Every bound of an interval is computed by one of the functions of this module with an explicit rounding direction. Computations happen in `f64` and the result is narrowed to the bound type with the same direction, which gives the correctly rounded result in `f32` as well since the `f32` values are a subset of the `f64` values.
//!
//! The basic operations (`+`, `-`, `*`, `/`, `sqrt`) are correctly rounded: the result is computed in round-to-nearest and corrected by one ulp when the exact error term, obtained with an error-free transformation, has the wrong sign.
//!
//! `fma`, roots, powers with a real exponent and transcendental operations are evaluated with MPFR through `rug`. Functions MPFR provides are correctly rounded in the direction of the bound. Composed functions (`exp2m1`, `log2p1`, `asinpi`, `atan2pi`, ...) are evaluated at a higher working precision, every step rounded toward the side of the bound, so they are tight but not always correctly rounded. A finite result beyond the range of `f64` saturates at `MAX` when rounding toward zero.

use std::cmp::Ordering;
use std::f64::consts::{PI, FRAC_PI_2};
use float_next_after::NextAfter;
use num_integer::Integer;
use rug::Float;
use rug::float::{Constant, Round as MpRound};
use rug::ops::{AssignRound, DivAssignRound, MulAssignRound, PowAssignRound};
use crate::ops::Bound;
use self::Round::*;

/// Rounding direction of a bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Round {
  /// Toward minus infinity, used for lower bounds.
  Down,
  /// Toward plus infinity, used for upper bounds.
  Up,
  Nearest,
}

impl Round
{
  pub fn reverse(self) -> Round {
    match self {
      Down => Up,
      Up => Down,
      Nearest => Nearest
    }
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
  Sqrt, RSqrt,
  Exp, Exp2, Exp10, ExpM1, Exp2M1, Exp10M1,
  Log, Log2, Log10, LogP1, Log2P1, Log10P1,
  Sin, Cos, Tan, Asin, Acos, Atan,
  SinPi, CosPi, TanPi, AsinPi, AcosPi, AtanPi,
  Sinh, Cosh, Tanh, Asinh, Acosh, Atanh,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
  Add, Sub, Mul, Div,
  /// `x^y` for `x >= 0`, with the limit values at the boundary of the domain.
  Pow,
  /// `atan2(y, x)` with `y` the first operand.
  Atan2,
  Atan2Pi,
  Hypot,
}

/// Below this magnitude the error term of a product or quotient may not be representable.
const TINY: f64 = 1.0e-290;

/// Precision of `f64`, at which MPFR results are correctly rounded.
const PREC: u32 = 53;
/// Precision of the intermediate results of composed functions.
const WORK: u32 = 128;

pub fn round_unary<T: Bound>(op: UnaryOp, x: T, dir: Round) -> T {
  T::narrow(unary(op, x.widen(), dir), dir)
}

pub fn round_binary<T: Bound>(op: BinaryOp, x: T, y: T, dir: Round) -> T {
  T::narrow(binary(op, x.widen(), y.widen(), dir), dir)
}

/// `x * y + z` rounded once in the direction `dir`.
pub fn fma<T: Bound>(x: T, y: T, z: T, dir: Round) -> T {
  T::narrow(fma_f64(x.widen(), y.widen(), z.widen(), dir), dir)
}

/// `x^n` by repeated squaring, every step rounded in the direction that keeps the final result on the side of `dir`.
pub fn pown<T: Bound>(x: T, n: i32, dir: Round) -> T {
  T::narrow(pown_f64(x.widen(), n, dir), dir)
}

/// Real `n`-th root. Negative `x` requires an odd `n`.
pub fn rootn<T: Bound>(x: T, n: u32, dir: Round) -> T {
  T::narrow(rootn_f64(x.widen(), n, dir), dir)
}

pub(crate) fn add_down<T: Bound>(x: T, y: T) -> T { round_binary(BinaryOp::Add, x, y, Down) }
pub(crate) fn add_up<T: Bound>(x: T, y: T) -> T { round_binary(BinaryOp::Add, x, y, Up) }
pub(crate) fn sub_down<T: Bound>(x: T, y: T) -> T { round_binary(BinaryOp::Sub, x, y, Down) }
pub(crate) fn sub_up<T: Bound>(x: T, y: T) -> T { round_binary(BinaryOp::Sub, x, y, Up) }
pub(crate) fn mul_down<T: Bound>(x: T, y: T) -> T { round_binary(BinaryOp::Mul, x, y, Down) }
pub(crate) fn mul_up<T: Bound>(x: T, y: T) -> T { round_binary(BinaryOp::Mul, x, y, Up) }
pub(crate) fn div_down<T: Bound>(x: T, y: T) -> T { round_binary(BinaryOp::Div, x, y, Down) }
pub(crate) fn div_up<T: Bound>(x: T, y: T) -> T { round_binary(BinaryOp::Div, x, y, Up) }

/// Enclosure of pi as a `(lower, upper)` pair of adjacent `f64` values.
pub(crate) fn pi_f64() -> (f64, f64) {
  (PI, next_up(PI))
}

fn half_pi_up() -> f64 {
  next_up(FRAC_PI_2)
}

pub(crate) fn next_up(x: f64) -> f64 {
  if x.is_nan() || x == f64::INFINITY {
    x
  }
  else if x == f64::NEG_INFINITY {
    f64::MIN
  }
  else if x == 0.0 {
    f64::from_bits(1)
  }
  else {
    x.next_after(f64::INFINITY)
  }
}

pub(crate) fn next_down(x: f64) -> f64 {
  -next_up(-x)
}

/// Moves the nearest result `r` by one ulp when the sign of the exact error `err = exact - r` requires it.
fn adjust(r: f64, err: f64, dir: Round) -> f64 {
  match dir {
    Down if err < 0.0 => next_down(r),
    Up if err > 0.0 => next_up(r),
    _ => r
  }
}

/// Replaces an overflow to infinity by the largest finite value when rounding toward zero.
fn saturate(r: f64, dir: Round) -> f64 {
  match dir {
    Down if r == f64::INFINITY => f64::MAX,
    Up if r == f64::NEG_INFINITY => f64::MIN,
    _ => r
  }
}

/// Bound of a result whose error term underflowed: `r` is the nearest value and `positive` the sign of the exact result.
fn underflow(r: f64, positive: bool, dir: Round) -> f64 {
  match dir {
    Nearest => r,
    Down if r == 0.0 => if positive { 0.0 } else { -f64::from_bits(1) },
    Up if r == 0.0 => if positive { f64::from_bits(1) } else { -0.0 },
    Down => next_down(r),
    Up => next_up(r),
  }
}

fn mp_round(dir: Round) -> MpRound {
  match dir {
    Down => MpRound::Down,
    Up => MpRound::Up,
    Nearest => MpRound::Nearest
  }
}

fn float(prec: u32, x: f64) -> Float {
  Float::with_val(prec, x)
}

/// Rounds `v` to `f64` in the direction `dir`.
fn to_f64(v: &Float, dir: Round) -> f64 {
  let r = v.to_f64_round(mp_round(dir));
  if v.is_finite() { saturate(r, dir) } else { r }
}

/// `f(x)` correctly rounded in the direction `dir`.
fn correctly_rounded<F>(x: f64, dir: Round, f: F) -> f64 where
 F: FnOnce(&mut Float, MpRound) -> Ordering
{
  let mut v = float(PREC, x);
  f(&mut v, mp_round(dir));
  to_f64(&v, dir)
}

fn pi_mp(dir: MpRound) -> Float {
  let mut c = Float::new(WORK);
  c.assign_round(Constant::Pi, dir);
  c
}

fn ln_two(dir: MpRound) -> Float {
  let mut c = Float::new(WORK);
  c.assign_round(Constant::Log2, dir);
  c
}

fn ln_ten(dir: MpRound) -> Float {
  let mut c = float(WORK, 10.0);
  c.ln_round(dir);
  c
}

/// `x * c` rounded in the direction `dir`, `c` a positive constant given by its roundings.
fn scale(x: f64, c: fn(MpRound) -> Float, dir: Round) -> Float {
  let low = (x >= 0.0) == (dir == Down);
  let mut v = c(if low { MpRound::Down } else { MpRound::Up });
  v.mul_assign_round(&float(PREC, x), mp_round(dir));
  v
}

/// `v / c` rounded in the direction `dir`, `c` a positive constant given by its roundings.
fn divide(mut v: Float, c: fn(MpRound) -> Float, dir: Round) -> Float {
  let low = v.is_sign_negative() == (dir == Down);
  v.div_assign_round(&c(if low { MpRound::Down } else { MpRound::Up }), mp_round(dir));
  v
}

/// `f(x * c)` for an increasing `f`.
fn scaled_then(x: f64, c: fn(MpRound) -> Float, f: fn(&mut Float, MpRound) -> Ordering, dir: Round) -> f64 {
  let mut v = scale(x, c, dir);
  f(&mut v, mp_round(dir));
  to_f64(&v, dir)
}

/// `f(x) / c`.
fn then_divided(x: f64, f: fn(&mut Float, MpRound) -> Ordering, c: fn(MpRound) -> Float, dir: Round) -> f64 {
  let mut v = float(WORK, x);
  f(&mut v, mp_round(dir));
  to_f64(&divide(v, c, dir), dir)
}

fn two_sum(a: f64, b: f64) -> (f64, f64) {
  let s = a + b;
  let bb = s - a;
  let err = (a - (s - bb)) + (b - bb);
  (s, err)
}

/// Exact comparison of the widths `b - a` and `d - c` of two bounded intervals.
pub(crate) fn cmp_widths<T: Bound>(a: T, b: T, c: T, d: T) -> Ordering {
  let (a, b, c, d) = (a.widen(), b.widen(), c.widen(), d.widen());
  // Halving keeps the error terms representable when a width overflows.
  let scale = if (b - a).is_finite() && (d - c).is_finite() { 1.0 } else { 0.5 };
  let (w1, e1) = two_sum(b * scale, -a * scale);
  let (w2, e2) = two_sum(d * scale, -c * scale);
  match w1.partial_cmp(&w2) {
    Some(Ordering::Equal) | None => e1.partial_cmp(&e2).unwrap_or(Ordering::Equal),
    Some(order) => order
  }
}

fn add(a: f64, b: f64, dir: Round) -> f64 {
  let s = a + b;
  if !s.is_finite() {
    return if a.is_finite() && b.is_finite() { saturate(s, dir) } else { s };
  }
  let (s, err) = two_sum(a, b);
  adjust(s, err, dir)
}

fn mul(a: f64, b: f64, dir: Round) -> f64 {
  let p = a * b;
  if a == 0.0 || b == 0.0 || !a.is_finite() || !b.is_finite() {
    return p;
  }
  if p.is_infinite() {
    return saturate(p, dir);
  }
  if p.abs() < TINY {
    return underflow(p, (a > 0.0) == (b > 0.0), dir);
  }
  adjust(p, a.mul_add(b, -p), dir)
}

fn div(a: f64, b: f64, dir: Round) -> f64 {
  let q = a / b;
  if a == 0.0 || b == 0.0 || !a.is_finite() || !b.is_finite() {
    return q;
  }
  if q.is_infinite() {
    return saturate(q, dir);
  }
  if q.abs() < TINY || a.abs() < TINY {
    return underflow(q, (a > 0.0) == (b > 0.0), dir);
  }
  // a/b - q = (a - q*b) / b
  let rem = (-q).mul_add(b, a);
  adjust(q, if b > 0.0 { rem } else { -rem }, dir)
}

fn sqrt(a: f64, dir: Round) -> f64 {
  let s = a.sqrt();
  if !(a > 0.0) || a.is_infinite() {
    return s;
  }
  if a < TINY {
    return underflow(s, true, dir);
  }
  adjust(s, (-s).mul_add(s, a), dir)
}

fn fma_f64(a: f64, b: f64, c: f64, dir: Round) -> f64 {
  let s = a.mul_add(b, c);
  if a == 0.0 || b == 0.0 || !a.is_finite() || !b.is_finite() || !c.is_finite() {
    return s;
  }
  let mut v = float(PREC, a);
  v.mul_add_round(&float(PREC, b), &float(PREC, c), mp_round(dir));
  to_f64(&v, dir)
}

fn pow_mag(x: f64, n: u32, dir: Round) -> f64 {
  let mut acc = 1.0;
  let mut base = x;
  let mut k = n;
  while k > 0 {
    if k & 1 == 1 {
      acc = mul(acc, base, dir);
    }
    k >>= 1;
    if k > 0 {
      base = mul(base, base, dir);
    }
  }
  acc
}

fn pown_f64(x: f64, n: i32, dir: Round) -> f64 {
  if x.is_nan() {
    return x;
  }
  if n == 0 {
    return 1.0;
  }
  let negative = x < 0.0 && n.is_odd();
  let mag_dir = if negative { dir.reverse() } else { dir };
  let mag =
    if n > 0 {
      pow_mag(x.abs(), n as u32, mag_dir)
    }
    else {
      let d = pow_mag(x.abs(), n.unsigned_abs(), mag_dir.reverse());
      div(1.0, d, mag_dir)
    };
  if negative { -mag } else { mag }
}

fn rootn_f64(x: f64, n: u32, dir: Round) -> f64 {
  if n == 1 || x.is_nan() || x == 0.0 || x.is_infinite() && x > 0.0 {
    return x;
  }
  if x < 0.0 {
    return -rootn_f64(-x, n, dir.reverse());
  }
  if n == 2 {
    return sqrt(x, dir);
  }
  let mut v = float(PREC, x);
  v.root_round(n, mp_round(dir));
  to_f64(&v, dir)
}

fn is_integer(x: f64) -> bool {
  x.is_finite() && x == x.trunc()
}

fn unary(op: UnaryOp, x: f64, dir: Round) -> f64 {
  use self::UnaryOp::*;
  if x.is_nan() {
    return x;
  }
  match op {
    Sqrt => sqrt(x, dir),
    RSqrt => {
      if x == 0.0 { f64::INFINITY }
      else { div(1.0, sqrt(x, dir.reverse()), dir) }
    }
    SinPi => sin_pi(x, dir),
    CosPi => cos_pi(x, dir),
    TanPi => tan_pi(x, dir),
    _ => {
      if let Some(r) = exact_unary(op, x) {
        return r;
      }
      let r = transcendental(op, x, dir);
      if r.is_nan() {
        return r;
      }
      clamp_unary(op, x, r)
    }
  }
}

fn exact_unary(op: UnaryOp, x: f64) -> Option<f64> {
  use self::UnaryOp::*;
  let inf = f64::INFINITY;
  match op {
    Exp | Exp2 | Exp10 => {
      if x == 0.0 { Some(1.0) }
      else if x == inf { Some(inf) }
      else if x == -inf { Some(0.0) }
      else if op == Exp2 && is_integer(x) && x.abs() <= 1022.0 { Some(2f64.powi(x as i32)) }
      else if op == Exp10 && is_integer(x) && x >= 0.0 && x <= 22.0 { Some(10f64.powi(x as i32)) }
      else { None }
    }
    ExpM1 | Exp2M1 | Exp10M1 => {
      if x == 0.0 { Some(x) }
      else if x == inf { Some(inf) }
      else if x == -inf { Some(-1.0) }
      else if op == Exp2M1 && is_integer(x) && x.abs() <= 52.0 { Some(2f64.powi(x as i32) - 1.0) }
      else { None }
    }
    Log | Log2 | Log10 => {
      if x == 1.0 { Some(0.0) }
      else if x == 0.0 { Some(-inf) }
      else if x == inf { Some(inf) }
      else if op == Log2 && x > 0.0 {
        let e = x.log2();
        if is_integer(e) && e.abs() <= 1022.0 && 2f64.powi(e as i32) == x { Some(e) } else { None }
      }
      else if op == Log10 && x > 0.0 {
        let e = x.log10();
        if is_integer(e) && e >= 0.0 && e <= 22.0 && 10f64.powi(e as i32) == x { Some(e) } else { None }
      }
      else { None }
    }
    LogP1 | Log2P1 | Log10P1 => {
      if x == 0.0 { Some(x) }
      else if x == -1.0 { Some(-inf) }
      else if x == inf { Some(inf) }
      else { None }
    }
    Sin | Tan | Asin | Atan | Sinh | Asinh | Atanh | AsinPi if x == 0.0 => Some(x),
    Tanh if x.is_infinite() => Some(x.signum()),
    Tanh if x == 0.0 => Some(x),
    Sinh | Asinh if x.is_infinite() => Some(x),
    Atanh if x.abs() == 1.0 => Some(x * inf),
    Cos | Cosh if x == 0.0 => Some(1.0),
    Cosh | Acosh if x == inf => Some(inf),
    Cosh if x == -inf => Some(inf),
    Acos | Acosh if x == 1.0 => Some(0.0),
    AsinPi if x.abs() == 1.0 => Some(0.5 * x),
    AcosPi if x == 1.0 => Some(0.0),
    AcosPi if x == -1.0 => Some(1.0),
    AcosPi if x == 0.0 => Some(0.5),
    AtanPi if x == 0.0 => Some(x),
    AtanPi if x.is_infinite() => Some(0.5f64.copysign(x)),
    AtanPi if x.abs() == 1.0 => Some(0.25 * x),
    _ => None
  }
}

fn transcendental(op: UnaryOp, x: f64, dir: Round) -> f64 {
  use self::UnaryOp::*;
  match op {
    Exp => correctly_rounded(x, dir, Float::exp_round),
    Exp2 => correctly_rounded(x, dir, Float::exp2_round),
    Exp10 => correctly_rounded(x, dir, Float::exp10_round),
    ExpM1 => correctly_rounded(x, dir, Float::exp_m1_round),
    Exp2M1 => scaled_then(x, ln_two, Float::exp_m1_round, dir),
    Exp10M1 => scaled_then(x, ln_ten, Float::exp_m1_round, dir),
    Log => correctly_rounded(x, dir, Float::ln_round),
    Log2 => correctly_rounded(x, dir, Float::log2_round),
    Log10 => correctly_rounded(x, dir, Float::log10_round),
    LogP1 => correctly_rounded(x, dir, Float::ln_1p_round),
    Log2P1 => then_divided(x, Float::ln_1p_round, ln_two, dir),
    Log10P1 => then_divided(x, Float::ln_1p_round, ln_ten, dir),
    Sin => correctly_rounded(x, dir, Float::sin_round),
    Cos => correctly_rounded(x, dir, Float::cos_round),
    Tan => correctly_rounded(x, dir, Float::tan_round),
    Asin => correctly_rounded(x, dir, Float::asin_round),
    Acos => correctly_rounded(x, dir, Float::acos_round),
    Atan => correctly_rounded(x, dir, Float::atan_round),
    AsinPi => then_divided(x, Float::asin_round, pi_mp, dir),
    AcosPi => then_divided(x, Float::acos_round, pi_mp, dir),
    AtanPi => then_divided(x, Float::atan_round, pi_mp, dir),
    Sinh => correctly_rounded(x, dir, Float::sinh_round),
    Cosh => correctly_rounded(x, dir, Float::cosh_round),
    Tanh => correctly_rounded(x, dir, Float::tanh_round),
    Asinh => correctly_rounded(x, dir, Float::asinh_round),
    Acosh => correctly_rounded(x, dir, Float::acosh_round),
    Atanh => correctly_rounded(x, dir, Float::atanh_round),
    Sqrt | RSqrt | SinPi | CosPi | TanPi => f64::NAN
  }
}

/// Functions whose result has the sign of their argument.
fn keeps_sign(op: UnaryOp) -> bool {
  use self::UnaryOp::*;
  match op {
    ExpM1 | Exp2M1 | Exp10M1 | LogP1 | Log2P1 | Log10P1
  | Asin | Atan | AsinPi | AtanPi | Sinh | Tanh | Asinh | Atanh => true,
    _ => false
  }
}

fn clamp_unary(op: UnaryOp, x: f64, r: f64) -> f64 {
  use self::UnaryOp::*;
  let (_, pi_up) = pi_f64();
  let half_pi = half_pi_up();
  let r = match op {
    Exp | Exp2 | Exp10 => r.max(0.0),
    ExpM1 | Exp2M1 | Exp10M1 => r.max(-1.0),
    Cosh => r.max(1.0),
    Sin | Cos | Tanh => r.max(-1.0).min(1.0),
    Acos => r.max(0.0).min(pi_up),
    Asin | Atan => r.max(-half_pi).min(half_pi),
    AsinPi | AtanPi => r.max(-0.5).min(0.5),
    AcosPi => r.max(0.0).min(1.0),
    Acosh => r.max(0.0),
    _ => r
  };
  if keeps_sign(op) {
    if x > 0.0 { r.max(0.0) }
    else if x < 0.0 { r.min(-0.0) }
    else { r }
  }
  else { r }
}

/// Enclosure of `f(pi * r)` for `r >= 0`, `f` being monotone on the reduced range.
fn of_pi_multiple(r: f64, increasing: bool, f: fn(&mut Float, MpRound) -> Ordering) -> (f64, f64) {
  let bound = |dir: Round| {
    let mut v = scale(r, pi_mp, if increasing { dir } else { dir.reverse() });
    f(&mut v, mp_round(dir));
    to_f64(&v, dir)
  };
  (bound(Down).max(0.0), bound(Up).min(1.0))
}

fn pick(bounds: (f64, f64), negate: bool, dir: Round) -> f64 {
  let (lo, hi) = if negate { (-bounds.1, -bounds.0) } else { bounds };
  match dir {
    Down => lo,
    Up => hi,
    Nearest => 0.5 * (lo + hi)
  }
}

/// `sin(pi * r)` for `r` in `[0, 0.5]`.
fn sin_pi_reduced(r: f64) -> (f64, f64) {
  if r == 0.0 { (0.0, 0.0) }
  else if r == 0.5 { (1.0, 1.0) }
  else { of_pi_multiple(r, true, Float::sin_round) }
}

/// `cos(pi * r)` for `r` in `[0, 0.5]`.
fn cos_pi_reduced(r: f64) -> (f64, f64) {
  if r == 0.0 { (1.0, 1.0) }
  else if r == 0.5 { (0.0, 0.0) }
  else if r >= 0.25 { sin_pi_reduced(0.5 - r) }
  else { of_pi_multiple(r, false, Float::cos_round) }
}

fn sin_pi(x: f64, dir: Round) -> f64 {
  if !x.is_finite() {
    return f64::NAN;
  }
  // sin(pi x) has period 2 and every reduction below is exact.
  let mut r = x % 2.0;
  let mut negate = false;
  if r < 0.0 {
    r = -r;
    negate = true;
  }
  if r >= 1.0 {
    r = r - 1.0;
    negate = !negate;
  }
  if r > 0.5 {
    r = 1.0 - r;
  }
  pick(sin_pi_reduced(r), negate, dir)
}

fn cos_pi(x: f64, dir: Round) -> f64 {
  if !x.is_finite() {
    return f64::NAN;
  }
  let mut r = x.abs() % 2.0;
  let mut negate = false;
  if r >= 1.0 {
    r = r - 1.0;
    negate = true;
  }
  if r > 0.5 {
    r = 1.0 - r;
    negate = !negate;
  }
  pick(cos_pi_reduced(r), negate, dir)
}

fn tan_pi(x: f64, dir: Round) -> f64 {
  if !x.is_finite() {
    return f64::NAN;
  }
  let mut r = x % 1.0;
  if r > 0.5 {
    r = r - 1.0;
  }
  else if r < -0.5 {
    r = r + 1.0;
  }
  let negate = r < 0.0;
  let r = r.abs();
  let bounds =
    if r == 0.0 { (0.0, 0.0) }
    else if r == 0.25 { (1.0, 1.0) }
    else if r == 0.5 { return f64::NAN; }
    else if r < 0.25 { of_pi_multiple(r, true, Float::tan_round) }
    else {
      let (lo, hi) = of_pi_multiple(0.5 - r, true, Float::tan_round);
      (div(1.0, hi, Down).max(1.0), div(1.0, lo, Up))
    };
  pick(bounds, negate, dir)
}

fn binary(op: BinaryOp, x: f64, y: f64, dir: Round) -> f64 {
  use self::BinaryOp::*;
  if x.is_nan() || y.is_nan() {
    return f64::NAN;
  }
  match op {
    Add => add(x, y, dir),
    Sub => add(x, -y, dir),
    Mul => mul(x, y, dir),
    Div => div(x, y, dir),
    Pow => pow(x, y, dir),
    Atan2 => atan2(x, y, dir),
    Atan2Pi => atan2_pi(x, y, dir),
    Hypot => hypot(x, y, dir),
  }
}

fn pow(x: f64, y: f64, dir: Round) -> f64 {
  let inf = f64::INFINITY;
  if x == 0.0 {
    return if y > 0.0 { 0.0 } else if y < 0.0 { inf } else { 1.0 };
  }
  if x == 1.0 || y == 0.0 {
    return 1.0;
  }
  if x == inf {
    return if y > 0.0 { inf } else { 0.0 };
  }
  if y.is_infinite() {
    return if (x > 1.0) == (y > 0.0) { inf } else { 0.0 };
  }
  if y == 1.0 {
    return x;
  }
  let mut v = float(PREC, x);
  v.pow_assign_round(&float(PREC, y), mp_round(dir));
  to_f64(&v, dir)
}

/// Angle of the point `(x, y)`; the origin is not a valid argument.
fn atan2(y: f64, x: f64, dir: Round) -> f64 {
  if y == 0.0 && x > 0.0 {
    return 0.0;
  }
  let mut v = float(PREC, y);
  v.atan2_round(&float(PREC, x), mp_round(dir));
  to_f64(&v, dir)
}

fn atan2_pi(y: f64, x: f64, dir: Round) -> f64 {
  if y == 0.0 && x > 0.0 {
    return 0.0;
  }
  if y == 0.0 && x < 0.0 {
    return 1.0;
  }
  if x == 0.0 && y != 0.0 {
    return 0.5f64.copysign(y);
  }
  if x.abs() == y.abs() && x.is_finite() {
    return if x > 0.0 { 0.25f64.copysign(y) } else { 0.75f64.copysign(y) };
  }
  let mut v = float(WORK, y);
  v.atan2_round(&float(WORK, x), mp_round(dir));
  to_f64(&divide(v, pi_mp, dir), dir).max(-1.0).min(1.0)
}

fn hypot(x: f64, y: f64, dir: Round) -> f64 {
  let (x, y) = (x.abs(), y.abs());
  if x == 0.0 || y.is_infinite() {
    return y;
  }
  if y == 0.0 || x.is_infinite() {
    return x;
  }
  let mut v = float(PREC, x);
  v.hypot_round(&float(PREC, y), mp_round(dir));
  to_f64(&v, dir)
}
