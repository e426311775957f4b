//! Token comparators.
//!
//! Two orderings coexist and disagree on mixed tokens:
//!
//! - [`Variant::Category`] puts every pure number first, compares numbers by
//!   value and `letters + digits` codes by prefix then numeric suffix
//!   (`a2 < a10`).
//! - [`Variant::CharRun`] walks both tokens position by position, comparing
//!   single digits by value and letters case-insensitively (`a10 < a2`).
//!
//! [`Variant::Lexical`] is plain code-point ordering, kept as a baseline.
//!
//! [`Comparator`] selects one of them by tag and applies a [`Direction`].
//! Every comparison is a pure function of its two inputs.

mod category;
mod char_run;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

pub use category::{CategoryKey, CategoryOrder, Magnitude};
pub use char_run::{CaseRule, CharRunOrder};

/// A total preorder over tokens.
pub trait TokenOrder {
    fn compare(&self, a: &str, b: &str) -> Ordering;

    fn name(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LexicalOrder;

impl TokenOrder for LexicalOrder {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        a.cmp(b)
    }

    fn name(&self) -> &'static str {
        "lexical"
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Variant {
    #[default]
    Category,
    CharRun,
    Lexical,
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Direction {
    #[default]
    #[serde(rename = "asc", alias = "ascending")]
    #[strum(to_string = "asc", serialize = "ascending")]
    Ascending,
    #[serde(rename = "desc", alias = "descending")]
    #[strum(to_string = "desc", serialize = "descending")]
    Descending,
}

impl Direction {
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }
}

/// Variant, direction and case rule bundled into one stateless value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparator {
    #[serde(default)]
    pub variant: Variant,
    #[serde(default)]
    pub direction: Direction,
    /// Only consulted by [`Variant::CharRun`].
    #[serde(default)]
    pub case_rule: CaseRule,
}

impl Comparator {
    pub fn new(variant: Variant, direction: Direction) -> Self {
        Self {
            variant,
            direction,
            case_rule: CaseRule::default(),
        }
    }

    pub fn with_case_rule(mut self, case_rule: CaseRule) -> Self {
        self.case_rule = case_rule;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.direction.apply(self.base_order(a, b))
    }

    /// `-1`, `0` or `1`.
    pub fn compare_sign(&self, a: &str, b: &str) -> i32 {
        sign(self.compare(a, b))
    }

    pub fn name(&self) -> &'static str {
        match self.variant {
            Variant::Category => CategoryOrder.name(),
            Variant::CharRun => CharRunOrder::new(self.case_rule).name(),
            Variant::Lexical => LexicalOrder.name(),
        }
    }

    fn base_order(&self, a: &str, b: &str) -> Ordering {
        match self.variant {
            Variant::Category => CategoryOrder.compare(a, b),
            Variant::CharRun => CharRunOrder::new(self.case_rule).compare(a, b),
            Variant::Lexical => LexicalOrder.compare(a, b),
        }
    }
}

impl TokenOrder for Comparator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        Comparator::compare(self, a, b)
    }

    fn name(&self) -> &'static str {
        Comparator::name(self)
    }
}

pub fn compare(a: &str, b: &str, variant: Variant, direction: Direction) -> Ordering {
    Comparator::new(variant, direction).compare(a, b)
}

pub fn sign(ordering: Ordering) -> i32 {
    match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}
