//! Monetary amount type for the wallet
//!
//! `Bitcoin` wraps a `rust_decimal::Decimal` so that repeated fractional
//! deposits and withdrawals do not accumulate binary floating-point error.
//! Comparison and arithmetic keep the plain `<`, `<=`, `+` and `-` semantics.

use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Number of fractional digits used when rendering a balance for output
pub const BITCOIN_SCALE: usize = 8;

/// A monetary quantity held in or moved through a wallet
///
/// The type places no sign constraint on its value: a wallet may be created
/// with a negative starting amount, and rejected transaction requests carry
/// whatever amount the caller supplied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bitcoin(Decimal);

impl Bitcoin {
    /// The zero amount
    pub const ZERO: Bitcoin = Bitcoin(Decimal::ZERO);

    /// Wrap a decimal value
    pub const fn new(value: Decimal) -> Self {
        Bitcoin(value)
    }

    /// The underlying decimal value
    pub const fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Whether the amount is strictly greater than zero
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Whether the amount carries at most [`BITCOIN_SCALE`] fractional digits
    ///
    /// Parsing keeps the scale as written, so `"1.5"` fits and
    /// `"0.000000001"` does not. Input too fine for `Decimal` is rounded by
    /// the parser to 28 digits and never fits either.
    pub fn fits_scale(&self) -> bool {
        self.0.scale() as usize <= BITCOIN_SCALE
    }

    /// Add two amounts, returning `None` if the result would overflow
    pub fn checked_add(self, other: Bitcoin) -> Option<Bitcoin> {
        self.0.checked_add(other.0).map(Bitcoin)
    }
}

impl From<Decimal> for Bitcoin {
    fn from(value: Decimal) -> Self {
        Bitcoin(value)
    }
}

impl From<i64> for Bitcoin {
    fn from(value: i64) -> Self {
        Bitcoin(Decimal::from(value))
    }
}

impl From<Bitcoin> for Decimal {
    fn from(value: Bitcoin) -> Self {
        value.0
    }
}

impl FromStr for Bitcoin {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Scientific notation ("1e10") is accepted alongside plain decimals
        Decimal::from_str(s)
            .or_else(|_| Decimal::from_scientific(s))
            .map(Bitcoin)
    }
}

// Forwards the formatter so `{:.8}` style precision applies to the decimal
impl fmt::Display for Bitcoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
