//! Mutation token grammar.
//!
//! ```text
//! token    = key ( "++" | "--" )
//!          | key ( "+=" | "-=" | "~=" | "=" ) value
//! key      = 1*( any char except "=" "+" "-" "~" )
//! value    = quoted | integer | "None" | "null"
//! quoted   = '"' *( escape | any char except '"' ) '"'
//!          | "'" *( escape | any char except "'" ) "'"
//! escape   = "\\" ( '"' | "'" | "\\" )
//! integer  = [ "-" | "+" ] 1*DIGIT
//! ```
//!
//! A backslash before anything else is kept as written.

use core::fmt::Write as _;
use core::str::FromStr;

use crate::compat::{String, ToString};
use crate::error::GrammarError;
use crate::operator::{Operator, Value};

/// Spellings of the null sentinel
pub const NULL_LITERALS: [&str; 2] = ["None", "null"];

/// One parsed `key<operator>value` unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub key: String,
    pub operator: Operator,
    /// Always `None` for unary operators, always `Some` for binary ones
    pub value: Option<Value>,
}

impl Token {
    pub fn new(key: impl Into<String>, operator: Operator, value: Option<Value>) -> Self {
        Self {
            key: key.into(),
            operator,
            value,
        }
    }
}

impl core::fmt::Display for Token {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}{}", self.key, self.operator)?;
        match &self.value {
            Some(Value::Str(s)) => {
                f.write_char('"')?;
                for c in s.chars() {
                    if matches!(c, '"' | '\\') {
                        f.write_char('\\')?;
                    }
                    f.write_char(c)?;
                }
                f.write_char('"')
            }
            Some(Value::Int(n)) => write!(f, "{n}"),
            Some(Value::Null) => f.write_str(NULL_LITERALS[0]),
            None => Ok(()),
        }
    }
}

impl FromStr for Token {
    type Err = GrammarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_token(s)
    }
}

fn is_operator_char(c: char) -> bool {
    matches!(c, '=' | '+' | '-' | '~')
}

/// Parse a single mutation token such as `page++`, `a+="2"` or `a=None`.
///
/// # Errors
///
/// Returns a [`GrammarError`] when the key is empty, no known operator
/// follows it, a unary operator carries a value, a binary operator lacks
/// one, or the value is not a valid literal.
pub fn parse_token(token: &str) -> Result<Token, GrammarError> {
    let result = parse_token_inner(token);
    if let Err(err) = &result {
        tracing::debug!(token, error = %err, "rejected mutation token");
    }
    result
}

fn parse_token_inner(token: &str) -> Result<Token, GrammarError> {
    let Some(key_end) = token.find(is_operator_char) else {
        return Err(GrammarError::UnknownOperator(token.to_string()));
    };
    if key_end == 0 {
        return Err(GrammarError::EmptyKey);
    }
    let (key, rest) = token.split_at(key_end);

    // Longest symbols first so "++" never reads as "+" and "+=" never as "="
    let (operator, literal) = Operator::ALL
        .into_iter()
        .find_map(|op| rest.strip_prefix(op.symbol()).map(|literal| (op, literal)))
        .ok_or_else(|| GrammarError::UnknownOperator(rest.to_string()))?;

    let value = if operator.is_unary() {
        if !literal.is_empty() {
            return Err(GrammarError::UnexpectedValue(operator));
        }
        None
    } else {
        if literal.is_empty() {
            return Err(GrammarError::MissingValue(operator));
        }
        let value = parse_value(literal)?;
        if value.is_null() && operator != Operator::Set {
            return Err(GrammarError::NullNotAllowed(operator));
        }
        Some(value)
    };

    Ok(Token::new(key, operator, value))
}

/// Parse a value literal: quoted string, base-10 integer or null.
///
/// # Errors
///
/// Returns [`GrammarError::InvalidValue`] for anything else, including
/// integers outside the `i64` range and unterminated quotes.
pub fn parse_value(literal: &str) -> Result<Value, GrammarError> {
    if NULL_LITERALS.contains(&literal) {
        return Ok(Value::Null);
    }

    for quote in ['"', '\''] {
        if let Some(body) = literal.strip_prefix(quote) {
            return unquote(body, quote)
                .map(Value::Str)
                .ok_or_else(|| GrammarError::InvalidValue(literal.to_string()));
        }
    }

    let digits = literal
        .strip_prefix(['-', '+'])
        .unwrap_or(literal);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(n) = literal.parse::<i64>() {
            return Ok(Value::Int(n));
        }
    }

    Err(GrammarError::InvalidValue(literal.to_string()))
}

/// Unescape the body of a quoted literal, which must end at its first
/// unescaped closing quote.
fn unquote(body: &str, quote: char) -> Option<String> {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.clone().next() {
                Some(next @ ('"' | '\'' | '\\')) => {
                    out.push(next);
                    chars.next();
                }
                _ => out.push(c),
            },
            c if c == quote => return chars.as_str().is_empty().then_some(out),
            c => out.push(c),
        }
    }
    None
}
