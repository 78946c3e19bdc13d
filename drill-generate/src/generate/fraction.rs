use ::std::fmt;
use ::std::ops::{Add, Mul, Neg, Sub};
use ::std::str;
use num_rational::Ratio;
use num_traits::{Signed, Zero};
use serde::{Deserialize, Serialize};

use super::{
    checker,
    engine::{GenerateFailure, GenerateResult},
    formatter,
    question::Operator,
};

/// Exact rational kept in lowest terms with a positive denominator.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct Fraction(Ratio<i128>);

impl Fraction {
    pub fn new(numerator: i128, denominator: i128) -> GenerateResult<Self> {
        if !checker::is_valid_frac_i128(numerator, denominator) {
            return Err(GenerateFailure::DivisionByZero);
        }
        Ok(Self(Ratio::new(numerator, denominator)))
    }
    pub fn from_integer(value: i128) -> Self {
        Self(Ratio::from_integer(value))
    }
    /// `units / 10^places`, the value of a decimal drawn on a fixed grid.
    pub fn from_scaled(units: i128, places: u32) -> Self {
        Self(Ratio::new(units, 10_i128.pow(places)))
    }
    pub fn numerator(&self) -> i128 {
        *self.0.numer()
    }
    pub fn denominator(&self) -> i128 {
        *self.0.denom()
    }
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
    pub fn is_integer(&self) -> bool {
        self.0.is_integer()
    }
    pub fn recip(&self) -> GenerateResult<Self> {
        Self::new(self.denominator(), self.numerator())
    }
    pub fn checked_div(self, rhs: Self) -> GenerateResult<Self> {
        if rhs.is_zero() {
            return Err(GenerateFailure::DivisionByZero);
        }
        Ok(Self(self.0 / rhs.0))
    }
    pub fn apply(self, op: Operator, rhs: Self) -> GenerateResult<Self> {
        match op {
            Operator::Add => Ok(self + rhs),
            Operator::Subtract => Ok(self - rhs),
            Operator::Multiply => Ok(self * rhs),
            Operator::Divide => self.checked_div(rhs),
        }
    }
    /// Rounds half away from zero to `places` decimal digits.
    pub fn round_to_places(&self, places: u32) -> Self {
        let scale = Ratio::from_integer(10_i128.pow(places));
        let scaled = self.0 * scale;
        let rounded = if scaled.fract().abs() >= Ratio::new(1, 2) {
            scaled.trunc() + scaled.signum()
        } else {
            scaled.trunc()
        };
        Self(rounded / scale)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", formatter::format_fraction_raw(self.numerator(), self.denominator()))
    }
}

impl str::FromStr for Fraction {
    type Err = String;

    /// Accepts `n`, `n/d` and plain decimals such as `-12.05`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || format!("'{}' is not a valid number", s);
        if let Some((numerator, denominator)) = s.split_once('/') {
            let numerator = numerator.trim().parse::<i128>().map_err(|_| invalid())?;
            let denominator = denominator.trim().parse::<i128>().map_err(|_| invalid())?;
            return Fraction::new(numerator, denominator).map_err(|_| invalid());
        }
        if let Some((whole, fractional)) = s.split_once('.') {
            if fractional.is_empty() || !fractional.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            let negative = whole.starts_with('-');
            let whole = whole.trim_start_matches('-');
            let whole = if whole.is_empty() { 0 } else { whole.parse::<i128>().map_err(|_| invalid())? };
            let places = fractional.len() as u32;
            let fractional = fractional.parse::<i128>().map_err(|_| invalid())?;
            let units = whole * 10_i128.pow(places) + fractional;
            return Ok(Fraction::from_scaled(if negative { -units } else { units }, places));
        }
        s.parse::<i128>().map(Fraction::from_integer).map_err(|_| invalid())
    }
}

impl Add for Fraction {
    type Output = Fraction;
    fn add(self, rhs: Self) -> Self::Output {
        Fraction(self.0 + rhs.0)
    }
}

impl Sub for Fraction {
    type Output = Fraction;
    fn sub(self, rhs: Self) -> Self::Output {
        Fraction(self.0 - rhs.0)
    }
}

impl Mul for Fraction {
    type Output = Fraction;
    fn mul(self, rhs: Self) -> Self::Output {
        Fraction(self.0 * rhs.0)
    }
}

impl Neg for Fraction {
    type Output = Fraction;
    fn neg(self) -> Self::Output {
        Fraction(-self.0)
    }
}
