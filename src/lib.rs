#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod character_sets;
mod checkers;
mod error;
mod grammar;
mod helpers;
mod operator;
mod parser;
mod percent_encode;
mod qurl;
mod query_params;
mod scheme;
mod types;
mod url_components;

// Public API
pub use error::{Error, GrammarError, Result, UrlParseError};
pub use grammar::{NULL_LITERALS, Token, parse_token, parse_value};
pub use operator::{Operator, Value};
pub use qurl::Qurl;
pub use query_params::QueryParams;

use compat::String;

/// Parse a base URL for editing.
///
/// # Errors
///
/// Returns a [`UrlParseError`] if the scheme, host or port is malformed.
pub fn parse(url: &str) -> core::result::Result<Qurl, UrlParseError> {
    Qurl::parse(url)
}

/// Apply one operator to a parsed URL. See [`Qurl::apply`].
///
/// # Errors
///
/// Returns a [`GrammarError`] if `value` does not fit the operator's arity.
pub fn apply(
    url: Qurl,
    key: &str,
    operator: Operator,
    value: Option<Value>,
) -> core::result::Result<Qurl, GrammarError> {
    url.apply(key, operator, value)
}

/// Edit `url` with a sequence of mutation tokens, applied in order.
///
/// All tokens are parsed before the URL is touched, so one malformed token
/// rejects the whole call.
///
/// # Examples
///
/// ```
/// let url = qurl::qurl("http://sophilabs.com/?a=1", ["a+=\"2\"", "a-=\"1\"", "p++"])?;
/// assert_eq!(url, "http://sophilabs.com/?a=2&p=1");
///
/// assert!(qurl::qurl("http://sophilabs.com/?a=1", ["a**2"]).is_err());
/// # Ok::<(), qurl::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`Error::Grammar`] for the first malformed token and
/// [`Error::Url`] if the base URL cannot be parsed.
pub fn qurl<I>(url: &str, tokens: I) -> Result<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let tokens = tokens
        .into_iter()
        .map(|token| parse_token(token.as_ref()))
        .collect::<core::result::Result<compat::Vec<_>, _>>()?;

    let mut url = Qurl::parse(url)?;
    for token in &tokens {
        url = url.apply_token(token)?;
    }
    Ok(url.serialize())
}
