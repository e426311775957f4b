use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::TokenOrder;

/// What to do with two letters that only differ in case.
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
pub enum CaseRule {
    /// `A` sorts before `a`.
    #[default]
    UppercaseFirst,
    /// `A` and `a` are equal at that position and the scan continues.
    Ignore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Digit(u32),
    Letter,
    Other,
}

impl CharClass {
    fn of(c: char) -> Self {
        if c.is_ascii_digit() {
            CharClass::Digit(c as u32 - '0' as u32)
        } else if c.is_alphabetic() {
            CharClass::Letter
        } else {
            CharClass::Other
        }
    }
}

/// Position-by-position ordering.
///
/// Digits compare one at a time by value, so `"9"` sorts after `"10"` and
/// `"a10"` before `"a2"`. A digit always precedes a letter, letters compare
/// case-insensitively, and anything else compares by lowercase code point. When one
/// token is a prefix of the other the shorter one comes first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharRunOrder {
    pub case_rule: CaseRule,
}

impl CharRunOrder {
    pub fn new(case_rule: CaseRule) -> Self {
        Self { case_rule }
    }

    fn compare_chars(&self, x: char, y: char) -> Ordering {
        if x == y {
            return Ordering::Equal;
        }
        match (CharClass::of(x), CharClass::of(y)) {
            (CharClass::Digit(dx), CharClass::Digit(dy)) => dx.cmp(&dy),
            (CharClass::Digit(_), CharClass::Letter) => Ordering::Less,
            (CharClass::Letter, CharClass::Digit(_)) => Ordering::Greater,
            // Punctuation is ranked against the lowercase form of a letter,
            // not the letter itself, or `a > [ > B > a` would form a cycle.
            _ => x
                .to_lowercase()
                .cmp(y.to_lowercase())
                .then_with(|| self.case_tie_break(x, y)),
        }
    }

    fn case_tie_break(&self, x: char, y: char) -> Ordering {
        match self.case_rule {
            CaseRule::Ignore => Ordering::Equal,
            CaseRule::UppercaseFirst => match (x.is_uppercase(), y.is_uppercase()) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => x.cmp(&y),
            },
        }
    }
}

impl TokenOrder for CharRunOrder {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        let mut left = a.chars();
        let mut right = b.chars();
        loop {
            match (left.next(), right.next()) {
                (Some(x), Some(y)) => match self.compare_chars(x, y) {
                    Ordering::Equal => continue,
                    decided => return decided,
                },
                (None, None) => return Ordering::Equal,
                (None, Some(_)) => return Ordering::Less,
                (Some(_), None) => return Ordering::Greater,
            }
        }
    }

    fn name(&self) -> &'static str {
        match self.case_rule {
            CaseRule::UppercaseFirst => "char-run",
            CaseRule::Ignore => "char-run (case ignored)",
        }
    }
}
