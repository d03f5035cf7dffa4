// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Decorations: the quality tag carried by a decorated interval.
//!
//! The five decorations are totally ordered from the worst to the best: `ill < trv < def < dac < com`. A decorated operation returns the minimum of the decorations of its operands and of the local decoration of the operation.
//!
//! | Decoration | Meaning                                                      | Code |
//! |------------|--------------------------------------------------------------|------|
//! | `ill`      | not an interval (NaI)                                        | 0    |
//! | `trv`      | nothing is known                                             | 4    |
//! | `def`      | the function is defined on the input                         | 8    |
//! | `dac`      | defined and continuous on the input                          | 12   |
//! | `com`      | defined, continuous, and the interval is bounded and nonempty | 16   |

use std::convert::TryFrom;
use std::fmt::{Display, Formatter, Error};
use std::str::FromStr;
use serde::{Serialize, Serializer, Deserialize, Deserializer};
use serde::de;
use thiserror::Error;
use crate::exception::{self, IntervalException};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Decoration {
  Ill = 0,
  Trv = 4,
  Def = 8,
  Dac = 12,
  Com = 16,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("`{0}` is not a decoration, expected one of `ill`, `trv`, `def`, `dac` or `com`")]
pub struct ParseDecorationError(pub String);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("{0} is not a decoration code, expected one of 0, 4, 8, 12 or 16")]
pub struct DecorationCodeError(pub u8);

impl Decoration
{
  /// Checks that `code` is the integer code of a decoration. Raises `invalid_operand` otherwise.
  pub fn is_valid(code: u8) -> bool {
    let valid = Decoration::from_code(code).is_some();
    if !valid {
      exception::signal(IntervalException::InvalidOperand);
    }
    valid
  }

  fn from_code(code: u8) -> Option<Decoration> {
    use self::Decoration::*;
    match code {
      0 => Some(Ill),
      4 => Some(Trv),
      8 => Some(Def),
      12 => Some(Dac),
      16 => Some(Com),
      _ => None
    }
  }

  pub fn code(self) -> u8 {
    self as u8
  }

  pub fn as_str(self) -> &'static str {
    use self::Decoration::*;
    match self {
      Ill => "ill",
      Trv => "trv",
      Def => "def",
      Dac => "dac",
      Com => "com",
    }
  }
}

impl TryFrom<u8> for Decoration
{
  type Error = DecorationCodeError;

  fn try_from(code: u8) -> Result<Decoration, DecorationCodeError> {
    if Decoration::is_valid(code) {
      Decoration::from_code(code).ok_or(DecorationCodeError(code))
    }
    else {
      Err(DecorationCodeError(code))
    }
  }
}

impl From<Decoration> for u8
{
  fn from(dec: Decoration) -> u8 {
    dec.code()
  }
}

impl FromStr for Decoration
{
  type Err = ParseDecorationError;

  fn from_str(s: &str) -> Result<Decoration, ParseDecorationError> {
    use self::Decoration::*;
    match s.trim().to_ascii_lowercase().as_str() {
      "ill" => Ok(Ill),
      "trv" => Ok(Trv),
      "def" => Ok(Def),
      "dac" => Ok(Dac),
      "com" => Ok(Com),
      _ => {
        exception::signal(IntervalException::IllFormedString);
        Err(ParseDecorationError(s.to_string()))
      }
    }
  }
}

impl Display for Decoration
{
  fn fmt(&self, formatter: &mut Formatter) -> Result<(), Error> {
    formatter.write_str(self.as_str())
  }
}

impl Serialize for Decoration
{
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where
   S: Serializer
  {
    serializer.serialize_str(self.as_str())
  }
}

impl<'de> Deserialize<'de> for Decoration
{
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where
   D: Deserializer<'de>
  {
    let tag = String::deserialize(deserializer)?;
    tag.parse().map_err(de::Error::custom)
  }
}
