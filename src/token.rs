//! Tokens: the short identifiers being ordered.
//!
//! A [`Token`] is an immutable string with no identity beyond its content.
//! Values that arrive as numbers or other JSON scalars are normalized to
//! their canonical string form when they cross into the crate, so every
//! comparator only ever sees `&str`.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::InternalResult;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Token {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Token {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.0
    }
}

macro_rules! token_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Token {
                fn from(value: $t) -> Self {
                    Self(value.to_string())
                }
            }
        )*
    };
}

token_from_number!(i32, i64, u32, u64, usize, f64);

/// Strings pass through untouched, numbers use their JSON text, `null`
/// becomes the empty token and containers keep their compact JSON form.
impl From<&Value> for Token {
    fn from(value: &Value) -> Self {
        match value {
            Value::String(s) => Self(s.clone()),
            Value::Number(n) => Self(n.to_string()),
            Value::Bool(b) => Self(b.to_string()),
            Value::Null => Self::default(),
            other => Self(other.to_string()),
        }
    }
}

impl From<Value> for Token {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => Self(s),
            other => Self::from(&other),
        }
    }
}

/// Parses a JSON array of mixed scalars (`["a10", 2, "b1"]`) into tokens.
pub fn tokens_from_json(input: &str) -> InternalResult<Vec<Token>> {
    let values: Vec<Value> = serde_json::from_str(input)?;
    Ok(values.into_iter().map(Token::from).collect())
}
