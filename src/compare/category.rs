//! Category ordering: pure numbers first, then `letters + digits` codes.
//!
//! Each token is classified into a [`CategoryKey`] and the keys are compared
//! with their derived ordering. The declaration order of the key variants is
//! what puts every pure-numeric token ahead of every other token.

use std::cmp::Ordering;

use nom::{
    character::complete::{alpha0, digit0},
    combinator::all_consuming,
    sequence::pair,
    IResult,
};

use super::TokenOrder;

/// Integer value of a run of ASCII digits, compared without parsing.
///
/// Leading zeros are stripped, so `"000"`, `"0"` and `""` all denote zero.
/// A longer significant run is the larger number; runs of equal length
/// compare digit by digit. Arbitrarily long runs never overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Magnitude<'a>(&'a str);

impl<'a> Magnitude<'a> {
    pub fn new(digits: &'a str) -> Self {
        Self(digits.trim_start_matches('0'))
    }
}

impl Ord for Magnitude<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(other.0))
    }
}

impl PartialOrd for Magnitude<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CategoryKey<'a> {
    /// Non-empty, digits only.
    Numeric(Magnitude<'a>),
    /// Everything else. Tokens that are not `letters* digits*` carry the
    /// whole token as prefix and a zero suffix.
    Alphanumeric {
        prefix: &'a str,
        suffix: Magnitude<'a>,
    },
}

impl<'a> CategoryKey<'a> {
    pub fn classify(token: &'a str) -> Self {
        if is_pure_numeric(token) {
            return CategoryKey::Numeric(Magnitude::new(token));
        }
        match split_prefixed(token) {
            Some((prefix, digits)) => CategoryKey::Alphanumeric {
                prefix,
                suffix: Magnitude::new(digits),
            },
            None => CategoryKey::Alphanumeric {
                prefix: token,
                suffix: Magnitude::new(""),
            },
        }
    }
}

fn is_pure_numeric(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// Splits `token` into a leading ASCII letter run and a trailing ASCII digit
/// run, failing when anything is left over.
fn split_prefixed(token: &str) -> Option<(&str, &str)> {
    let parsed: IResult<&str, (&str, &str)> = all_consuming(pair(alpha0, digit0))(token);
    parsed.ok().map(|(_, parts)| parts)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryOrder;

impl TokenOrder for CategoryOrder {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        CategoryKey::classify(a).cmp(&CategoryKey::classify(b))
    }

    fn name(&self) -> &'static str {
        "category"
    }
}
