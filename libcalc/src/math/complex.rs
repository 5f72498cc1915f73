//! Complex arithmetic over double-precision floats.

use crate::CalcError;

use num_traits::{One, Zero};
use std::ops;

/// Integer exponents with a magnitude below this bound are computed by repeated multiplication.
/// The polar formula is measurably less precise for small integer powers.
const REPEATED_MUL_BOUND: f64 = 100.0;

/// An immutable complex number `re + im·i`.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    /// The imaginary unit, `0 + 1i`.
    pub const I: Complex = Complex { re: 0.0, im: 1.0 };

    pub const fn new(re: f64, im: f64) -> Complex {
        Complex { re, im }
    }

    /// A complex number with no imaginary part.
    pub const fn real(re: f64) -> Complex {
        Complex { re, im: 0.0 }
    }

    /// Builds a complex number from its modulus and argument.
    pub fn from_polar(r: f64, theta: f64) -> Complex {
        Complex {
            re: r * theta.cos(),
            im: r * theta.sin(),
        }
    }

    pub fn conj(self) -> Complex {
        Complex {
            re: self.re,
            im: -self.im,
        }
    }

    /// Squared modulus, `re² + im²`.
    pub fn norm_sqr(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Modulus, `√(re² + im²)`.
    pub fn abs(self) -> f64 {
        self.norm_sqr().sqrt()
    }

    /// Argument, `atan2(im, re)`.
    pub fn arg(self) -> f64 {
        self.im.atan2(self.re)
    }

    /// Principal square root, taken in polar form.
    pub fn sqrt(self) -> Complex {
        Complex::from_polar(self.abs().sqrt(), self.arg() / 2.0)
    }

    /// Divides `self` by `rhs`, multiplying through by the conjugate of `rhs`. Returns `None`
    /// when `rhs` has a squared modulus of exactly zero.
    pub fn checked_div(self, rhs: Complex) -> Option<Complex> {
        let denominator = rhs.norm_sqr();
        if denominator == 0.0 {
            return None;
        }
        let numerator = self * rhs.conj();
        Some(Complex {
            re: numerator.re / denominator,
            im: numerator.im / denominator,
        })
    }

    /// Like [`checked_div`](Complex::checked_div), failing with [`CalcError::DivisionByZero`].
    pub fn try_div(self, rhs: Complex) -> Result<Complex, CalcError> {
        self.checked_div(rhs).ok_or(CalcError::DivisionByZero)
    }

    /// Raises `self` to `exponent`. Only the real part of `exponent` is used.
    ///
    /// - `x^0` is `1` for every `x`, including zero.
    /// - `0^n` is `0` for every nonzero `n`.
    /// - Integer `n` with `|n| < 100` is computed by repeated multiplication (inverting the result
    ///   for negative `n`); anything else goes through [`polar_pow`](Complex::polar_pow).
    pub fn pow(self, exponent: Complex) -> Result<Complex, CalcError> {
        let n = exponent.re;
        if n == 0.0 {
            return Ok(Complex::one());
        }
        if self.is_zero() {
            return Ok(Complex::zero());
        }
        if n.fract() == 0.0 && n.abs() < REPEATED_MUL_BOUND {
            let times = n.abs() as u32;
            let mut result = Complex::one();
            for _ in 0..times {
                result = result * self;
            }
            return if n < 0.0 {
                Complex::one().try_div(result)
            } else {
                Ok(result)
            };
        }
        Ok(self.polar_pow(n))
    }

    /// Raises `self` to the real power `n` with De Moivre's formula: `r^n ∠ θ·n`.
    pub fn polar_pow(self, n: f64) -> Complex {
        Complex::from_polar(self.abs().powf(n), self.arg() * n)
    }

    /// Is this number purely real (no imaginary part)?
    pub fn is_real(&self) -> bool {
        self.im == 0.0
    }
}

impl Zero for Complex {
    fn zero() -> Self {
        Complex::new(0.0, 0.0)
    }

    fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }
}

impl One for Complex {
    fn one() -> Self {
        Complex::new(1.0, 0.0)
    }
}

impl ops::Add for Complex {
    type Output = Complex;
    fn add(self, rhs: Complex) -> Complex {
        Complex {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

impl ops::Sub for Complex {
    type Output = Complex;
    fn sub(self, rhs: Complex) -> Complex {
        Complex {
            re: self.re - rhs.re,
            im: self.im - rhs.im,
        }
    }
}

impl ops::Mul for Complex {
    type Output = Complex;
    fn mul(self, rhs: Complex) -> Complex {
        Complex {
            re: self.re * rhs.re - self.im * rhs.im,
            im: self.re * rhs.im + self.im * rhs.re,
        }
    }
}
