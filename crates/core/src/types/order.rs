//! Order numbers issued at checkout.

use core::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Order numbers are drawn from uppercase base 36 (`0-9A-Z`).
const RADIX: u32 = 36;

/// Errors that can occur when parsing an [`OrderNumber`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderNumberError {
    /// Missing the leading `#`.
    #[error("order number must start with '#'")]
    MissingPrefix,
    /// Wrong number of characters after the prefix.
    #[error("order number must have {expected} characters after '#'")]
    BadLength {
        /// Required length after the prefix.
        expected: usize,
    },
    /// A character outside `0-9A-Z`.
    #[error("order number contains invalid character {0:?}")]
    InvalidChar(char),
}

/// A human-facing order reference such as `#K3J9Q2ZXA`.
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use shopfront_core::OrderNumber;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let number = OrderNumber::generate(&mut rng);
/// assert!(number.as_str().starts_with('#'));
/// assert_eq!(number.as_str().len(), 1 + OrderNumber::LENGTH);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrderNumber(String);

impl OrderNumber {
    /// Number of random characters after the `#` prefix.
    pub const LENGTH: usize = 9;

    /// Generate a fresh order number from `rng`.
    #[must_use]
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let mut number = String::with_capacity(Self::LENGTH + 1);
        number.push('#');
        while number.len() <= Self::LENGTH {
            if let Some(c) = char::from_digit(rng.random_range(0..RADIX), RADIX) {
                number.push(c.to_ascii_uppercase());
            }
        }
        Self(number)
    }

    /// Parse a previously issued order number.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not `#` followed by exactly
    /// [`Self::LENGTH`] characters from `0-9A-Z`.
    pub fn parse(s: &str) -> Result<Self, OrderNumberError> {
        let body = s.strip_prefix('#').ok_or(OrderNumberError::MissingPrefix)?;
        if body.chars().count() != Self::LENGTH {
            return Err(OrderNumberError::BadLength {
                expected: Self::LENGTH,
            });
        }
        if let Some(bad) = body
            .chars()
            .find(|c| !(c.is_ascii_digit() || c.is_ascii_uppercase()))
        {
            return Err(OrderNumberError::InvalidChar(bad));
        }
        Ok(Self(s.to_string()))
    }

    /// Returns the order number, including the `#` prefix.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for OrderNumber {
    type Error = OrderNumberError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<OrderNumber> for String {
    fn from(number: OrderNumber) -> Self {
        number.0
    }
}
