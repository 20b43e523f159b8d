//! Invoice number sequencing
//!
//! Invoice numbers have the shape `INV-<year>-<seq>`, where `<seq>` restarts at
//! `001` every calendar year. The next number is derived client-side from the
//! most recently created invoice, so the result is a suggestion only: two
//! clients reading the same latest invoice will both propose the same number,
//! and the record store decides which one is accepted.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Prefix of every generated invoice number
pub const INVOICE_PREFIX: &str = "INV";

/// Minimum width of the sequence component
const SEQUENCE_WIDTH: usize = 3;

/// A typed invoice number (`INV-2025-007`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InvoiceNumber {
    year: i32,
    sequence: u128,
}

impl InvoiceNumber {
    /// Build an invoice number from its parts
    pub fn new(year: i32, sequence: u128) -> Self {
        Self { year, sequence }
    }

    /// The first invoice number of a year
    pub fn first_of(year: i32) -> Self {
        Self::new(year, 1)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn sequence(&self) -> u128 {
        self.sequence
    }

    /// Parse `<prefix>-<year>-<seq>`.
    ///
    /// The prefix is not checked and the year must be a plain decimal number.
    /// The sequence is read from its leading digits (`7x` reads as 7, `+7` as
    /// 7) and saturates at `u128::MAX`. Returns `None` when either segment
    /// has no digits to read.
    pub fn parse(token: &str) -> Option<Self> {
        let parts: Vec<&str> = token.split('-').collect();
        let [_, year, sequence] = parts.as_slice() else {
            return None;
        };

        Some(Self {
            year: parse_decimal(year)?,
            sequence: parse_sequence(sequence)?,
        })
    }

    /// The number that follows this one within the same year.
    ///
    /// Saturates at `u128::MAX`.
    pub fn successor(&self) -> Self {
        Self::new(self.year, self.sequence.saturating_add(1))
    }
}

fn parse_decimal<N: FromStr>(segment: &str) -> Option<N> {
    let segment = segment.trim();
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

fn parse_sequence(segment: &str) -> Option<u128> {
    let segment = segment.trim_start();
    let segment = segment.strip_prefix('+').unwrap_or(segment);
    let end = segment
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(segment.len());

    let digits = &segment[..end];
    if digits.is_empty() {
        return None;
    }
    // Only overflow can fail on a non-empty digit run
    Some(digits.parse().unwrap_or(u128::MAX))
}

impl fmt::Display for InvoiceNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{:0width$}",
            INVOICE_PREFIX,
            self.year,
            self.sequence,
            width = SEQUENCE_WIDTH
        )
    }
}

impl Serialize for InvoiceNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for InvoiceNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        Self::parse(&token)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid invoice number: {token}")))
    }
}

/// Compute the invoice number that should follow `latest` in `current_year`.
///
/// Anything that is not a number of the current year (absent, malformed,
/// previous year, sequence without leading digits) restarts the sequence at
/// `001`. Trailing text after the sequence digits is ignored. This function
/// never fails.
///
/// ```
/// use erp_admin::core::numbering::next_invoice_number;
///
/// assert_eq!(next_invoice_number(None, 2025).to_string(), "INV-2025-001");
/// assert_eq!(next_invoice_number(Some("INV-2025-007"), 2025).to_string(), "INV-2025-008");
/// assert_eq!(next_invoice_number(Some("INV-2024-999"), 2025).to_string(), "INV-2025-001");
/// ```
pub fn next_invoice_number(latest: Option<&str>, current_year: i32) -> InvoiceNumber {
    latest
        .and_then(InvoiceNumber::parse)
        .filter(|number| number.year() == current_year)
        .map(|number| number.successor())
        .unwrap_or_else(|| InvoiceNumber::first_of(current_year))
}
