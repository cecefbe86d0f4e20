use crate::error::{Error, Result};
use num_traits::{One, Zero};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};

use itertools::{EitherOrBoth, Itertools};

/// Tolerance used for every zero test and coefficient comparison.
pub const EPSILON: f64 = 1e-9;

#[inline]
fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Single-variable polynomial with `f64` coefficients.
///
/// Coefficients are stored highest degree first: `[1.5, 2., 2.]` is
/// `1.5x^2 + 2x + 2`. The representation is always normalized: there are no
/// leading zeros, and the zero polynomial is exactly `[0]`. A value is never
/// mutated after construction; every operator returns a new polynomial.
#[derive(Debug, Clone)]
pub struct Polynomial {
    // Invariant: non-empty, coefficients[0] is non-zero unless len == 1, and
    // every coefficient within EPSILON of zero is stored as 0.0.
    coefficients: Vec<f64>,
}

impl Polynomial {
    /// Constructs a polynomial from coefficients ordered from the highest
    /// degree down to the constant term.
    ///
    /// Leading zeros are stripped; an all-zero input yields the zero
    /// polynomial. Fails with `Error::InvalidArgument` if `coefficients` is
    /// empty.
    pub fn new(coefficients: &[f64]) -> Result<Polynomial> {
        if coefficients.is_empty() {
            return Err(Error::InvalidArgument(
                "coefficients must have at least one element".to_owned(),
            ));
        }
        Ok(Polynomial::normalize(coefficients.to_vec()))
    }

    /// Constructs the constant polynomial `c`.
    pub fn constant(c: f64) -> Polynomial {
        Polynomial::normalize(vec![c])
    }

    /// Strips leading zeros and flushes near-zero coefficients to 0.
    /// `coefficients` must be non-empty.
    fn normalize(mut coefficients: Vec<f64>) -> Polynomial {
        debug_assert!(!coefficients.is_empty());

        let lead = coefficients
            .iter()
            .take(coefficients.len() - 1)
            .take_while(|c| approx_eq(**c, 0.))
            .count();
        if lead > 0 {
            trace!("stripping {} leading zero coefficient(s)", lead);
            coefficients.drain(..lead);
        }

        for c in &mut coefficients {
            if approx_eq(*c, 0.) {
                *c = 0.;
            }
        }

        Polynomial { coefficients }
    }

    /// Returns a copy of the coefficients, highest degree first.
    pub fn coefficients(&self) -> Vec<f64> {
        self.coefficients.clone()
    }

    /// Returns the number of stored coefficients.
    #[inline]
    pub fn ncoeffs(&self) -> usize {
        self.coefficients.len()
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Returns a printer that renders this polynomial with the given decimal
    /// separator, e.g. `','` for `1,5x^2 + 2x + 2`.
    pub fn printer(&self, decimal_separator: char) -> PolyPrinter {
        PolyPrinter {
            poly: self,
            decimal_separator,
        }
    }

    fn fmt_output(&self, f: &mut fmt::Formatter, decimal_separator: char) -> fmt::Result {
        let n = self.coefficients.len();
        if n == 1 {
            return fmt_number(f, self.coefficients[0], decimal_separator);
        }

        // the leading coefficient is non-zero after normalization
        let first = self.coefficients[0];
        fmt_term(f, first, first, n - 1, decimal_separator)?;

        for (i, &c) in self.coefficients[1..n - 1].iter().enumerate() {
            if c.is_zero() {
                continue;
            }
            write!(f, "{}", if c < 0. { " - " } else { " + " })?;
            fmt_term(f, c, c.abs(), n - 2 - i, decimal_separator)?;
        }

        let constant = self.coefficients[n - 1];
        if !constant.is_zero() {
            write!(f, "{}", if constant < 0. { " - " } else { " + " })?;
            fmt_number(f, constant.abs(), decimal_separator)?;
        }
        Ok(())
    }
}

/// Writes `value` in shortest round-trip form with a custom decimal separator.
fn fmt_number(f: &mut fmt::Formatter, value: f64, decimal_separator: char) -> fmt::Result {
    if decimal_separator == '.' {
        write!(f, "{}", value)
    } else {
        let text = value.to_string();
        write!(
            f,
            "{}",
            text.replace('.', decimal_separator.encode_utf8(&mut [0; 4]))
        )
    }
}

/// Writes `shown` followed by `x` or `x^degree`. The number is left out when
/// the signed `coefficient` is 1, so `-1` still prints as `1x` after a sign.
fn fmt_term(
    f: &mut fmt::Formatter,
    coefficient: f64,
    shown: f64,
    degree: usize,
    decimal_separator: char,
) -> fmt::Result {
    if !approx_eq(coefficient, 1.) {
        fmt_number(f, shown, decimal_separator)?;
    }
    if degree > 1 {
        write!(f, "x^{}", degree)
    } else {
        write!(f, "x")
    }
}

pub struct PolyPrinter<'a> {
    pub poly: &'a Polynomial,
    pub decimal_separator: char,
}

impl<'a> fmt::Display for PolyPrinter<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.poly.fmt_output(f, self.decimal_separator)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.fmt_output(f, '.')
    }
}

impl PartialEq for Polynomial {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.coefficients.len() == other.coefficients.len()
            && self
                .coefficients
                .iter()
                .zip(&other.coefficients)
                .all(|(a, b)| approx_eq(*a, *b))
    }
}

// Equality is within EPSILON, so it is not transitive across long chains of
// near-equal values. Hashing rounds to the same grid.
impl Eq for Polynomial {}

impl Hash for Polynomial {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coefficients.len().hash(state);
        for c in &self.coefficients {
            ((c / EPSILON).round() as i64).hash(state);
        }
    }
}

impl<'a, 'b> Add<&'b Polynomial> for &'a Polynomial {
    type Output = Polynomial;

    fn add(self, other: &'b Polynomial) -> Polynomial {
        // align on the constant term
        let mut sum: Vec<f64> = self
            .coefficients
            .iter()
            .rev()
            .zip_longest(other.coefficients.iter().rev())
            .map(|pair| match pair {
                EitherOrBoth::Both(a, b) => a + b,
                EitherOrBoth::Left(c) | EitherOrBoth::Right(c) => *c,
            })
            .collect();
        sum.reverse();
        Polynomial::normalize(sum)
    }
}

impl<'a, 'b> Sub<&'b Polynomial> for &'a Polynomial {
    type Output = Polynomial;

    fn sub(self, other: &'b Polynomial) -> Polynomial {
        self + &(-other)
    }
}

impl<'a, 'b> Mul<&'b Polynomial> for &'a Polynomial {
    type Output = Polynomial;

    fn mul(self, other: &'b Polynomial) -> Polynomial {
        let left_len = self.coefficients.len();
        let len = left_len + other.coefficients.len() - 1;
        let mut product = vec![0.; len];

        // walk the right operand from the constant term up, shifting the
        // left operand one degree further each step
        for (shift, r) in other.coefficients.iter().rev().enumerate() {
            let last = len - shift;
            let first = last - left_len;
            for (p, l) in product[first..last].iter_mut().zip(&self.coefficients) {
                *p += l * r;
            }
        }

        Polynomial::normalize(product)
    }
}

impl<'a> Neg for &'a Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        Polynomial::normalize(self.coefficients.iter().map(|c| -c).collect())
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        -&self
    }
}

impl<'a> Mul<f64> for &'a Polynomial {
    type Output = Polynomial;

    fn mul(self, other: f64) -> Polynomial {
        Polynomial::normalize(self.coefficients.iter().map(|c| c * other).collect())
    }
}

impl Mul<f64> for Polynomial {
    type Output = Polynomial;

    fn mul(self, other: f64) -> Polynomial {
        &self * other
    }
}

impl<'a> Mul<&'a Polynomial> for f64 {
    type Output = Polynomial;

    fn mul(self, other: &'a Polynomial) -> Polynomial {
        other * self
    }
}

impl Mul<Polynomial> for f64 {
    type Output = Polynomial;

    fn mul(self, other: Polynomial) -> Polynomial {
        &other * self
    }
}

/// Derives the owned-operand variants of a binary operator from the
/// borrowed one.
macro_rules! forward_binop_impl {
    ($($imp:ident $method:ident),*) => {$(
        impl $imp<Polynomial> for Polynomial {
            type Output = Polynomial;

            #[inline]
            fn $method(self, other: Polynomial) -> Polynomial {
                (&self).$method(&other)
            }
        }

        impl<'a> $imp<&'a Polynomial> for Polynomial {
            type Output = Polynomial;

            #[inline]
            fn $method(self, other: &'a Polynomial) -> Polynomial {
                (&self).$method(other)
            }
        }

        impl<'a> $imp<Polynomial> for &'a Polynomial {
            type Output = Polynomial;

            #[inline]
            fn $method(self, other: Polynomial) -> Polynomial {
                self.$method(&other)
            }
        }
    )*}
}

forward_binop_impl!(Add add, Sub sub, Mul mul);

impl Zero for Polynomial {
    #[inline]
    fn zero() -> Self {
        Polynomial {
            coefficients: vec![0.],
        }
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.coefficients.len() == 1 && self.coefficients[0].is_zero()
    }
}

impl One for Polynomial {
    #[inline]
    fn one() -> Self {
        Polynomial {
            coefficients: vec![1.],
        }
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.coefficients.len() == 1 && approx_eq(self.coefficients[0], 1.)
    }
}
