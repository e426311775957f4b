//! # alnumsort: natural ordering for item and purchase-order codes
//!
//! Identifiers such as `a00`, `1002` or `b001` read naturally in an order
//! that plain byte comparison gets wrong. This crate provides the comparators
//! that define that order and stable sorts built on top of them.
//!
//! ## Comparators
//!
//! Two orderings are in use and they disagree on mixed tokens, so both are
//! kept as named [`Variant`]s behind one [`Comparator`] ([`compare`]):
//!
//! - `category`: pure numbers first by value, then `letters + digits` codes
//!   by prefix and numeric suffix.
//! - `char-run`: position by position, single digits by value, letters
//!   case-insensitively, digits before letters, shorter prefix first.
//!
//! ```
//! use alnumsort::{sort_tokens, Direction, Variant};
//!
//! let codes = ["a10", "a2"];
//! assert_eq!(sort_tokens(&codes, Variant::Category, Direction::Ascending), ["a2", "a10"]);
//! assert_eq!(sort_tokens(&codes, Variant::CharRun, Direction::Ascending), ["a10", "a2"]);
//! ```
//!
//! ## Boundaries
//!
//! - [`input`]: comma-separated token lines with a default fallback.
//! - [`table`]: one column of a header-first delimited file.
//! - [`config`]: JSON settings for the `alnumsort` binary.
//! - [`fixtures`]: deterministic demo inputs.

pub mod compare;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod input;
pub mod sort;
pub mod table;
pub mod token;

// Re-exports
pub use compare::{compare, CaseRule, Comparator, Direction, TokenOrder, Variant};
pub use error::*;
pub use sort::{sort_both, sort_tokens, BothDirections};
pub use token::Token;

#[cfg(test)]
mod tests {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    #[ctor::ctor]
    fn init_tests() {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
    }
}
