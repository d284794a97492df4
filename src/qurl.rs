use core::fmt::Display;
use core::str::FromStr;

use crate::compat::{String, ToString, Vec};
use crate::error::{GrammarError, UrlParseError};
use crate::grammar::Token;
use crate::operator::{Operator, Value};
use crate::parser::parse_url;
use crate::query_params::QueryParams;
use crate::url_components::UrlComponents;

/// A URL whose query string is edited through chained mutations.
///
/// Every mutation consumes the value and hands back the edited one, so calls
/// chain in order and each intermediate result can be kept or serialized.
///
/// # Examples
///
/// ```
/// use qurl::Qurl;
///
/// let url = Qurl::parse("http://sophilabs.com/?a=1")?
///     .add("a", 2)
///     .remove("a", 1)
///     .inc("page", 1);
/// assert_eq!(url.to_string(), "http://sophilabs.com/?a=2&page=1");
/// # Ok::<(), qurl::UrlParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Qurl {
    components: UrlComponents,
    query: QueryParams,
}

impl Qurl {
    /// Parse a base URL.
    ///
    /// # Errors
    ///
    /// Returns a [`UrlParseError`] if the scheme, host or port is malformed.
    pub fn parse(input: &str) -> Result<Self, UrlParseError> {
        let (components, query) = parse_url(input)?;
        Ok(Self { components, query })
    }

    /// Replace every pair for `key` with one `(key, value)` at the end of the
    /// query. [`Value::Null`] removes the key instead.
    #[must_use]
    pub fn set(mut self, key: &str, value: impl Into<Value>) -> Self {
        let value = value.into();
        tracing::trace!(key, operator = %Operator::Set, %value, "applying query mutation");
        match value.to_query_value() {
            Some(value) => self.query.set(key, &value),
            None => {
                self.query.delete(key);
            }
        }
        self
    }

    /// Append `(key, value)`, keeping existing pairs for `key`.
    #[must_use]
    pub fn add(mut self, key: &str, value: impl Display) -> Self {
        tracing::trace!(key, operator = %Operator::Append, %value, "applying query mutation");
        self.query.append(key, &value.to_string());
        self
    }

    /// Remove the first pair equal to `(key, value)`; no-op if there is none.
    #[must_use]
    pub fn remove(mut self, key: &str, value: impl Display) -> Self {
        tracing::trace!(key, operator = %Operator::Remove, %value, "applying query mutation");
        self.query.remove_pair(key, &value.to_string());
        self
    }

    /// Cut the first occurrence of `pattern` out of each value for `key`.
    /// Edited values are trimmed of surrounding whitespace.
    #[must_use]
    pub fn replace(mut self, key: &str, pattern: &str) -> Self {
        tracing::trace!(key, operator = %Operator::Replace, value = pattern, "applying query mutation");
        self.query.remove_substring(key, pattern);
        self
    }

    /// Add `amount` to the integer value of `key`.
    ///
    /// The most recent pair for `key` is the base; a missing key or a value
    /// that is not a base-10 integer counts as 0. All pairs for `key`
    /// collapse into the result.
    #[must_use]
    pub fn inc(mut self, key: &str, amount: i64) -> Self {
        tracing::trace!(key, operator = %Operator::Increment, amount, "applying query mutation");
        let next = self.int_value(key).saturating_add(amount);
        self.query.set(key, &next.to_string());
        self
    }

    /// Subtract `amount` from the integer value of `key`. See [`Qurl::inc`].
    #[must_use]
    pub fn dec(mut self, key: &str, amount: i64) -> Self {
        tracing::trace!(key, operator = %Operator::Decrement, amount, "applying query mutation");
        let next = self.int_value(key).saturating_sub(amount);
        self.query.set(key, &next.to_string());
        self
    }

    fn int_value(&self, key: &str) -> i64 {
        self.query
            .last(key)
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Apply one operator by its runtime tag.
    ///
    /// # Errors
    ///
    /// Returns a [`GrammarError`] if the key is empty or `value` does not fit
    /// the operator: unary operators take no value, binary operators need
    /// one, and only `=` accepts [`Value::Null`].
    pub fn apply(
        self,
        key: &str,
        operator: Operator,
        value: Option<Value>,
    ) -> Result<Self, GrammarError> {
        if key.is_empty() {
            return Err(GrammarError::EmptyKey);
        }

        let value = match (operator.is_unary(), value) {
            (true, None) => None,
            (true, Some(_)) => return Err(GrammarError::UnexpectedValue(operator)),
            (false, None) => return Err(GrammarError::MissingValue(operator)),
            (false, Some(Value::Null)) if operator != Operator::Set => {
                return Err(GrammarError::NullNotAllowed(operator));
            }
            (false, Some(value)) => Some(value),
        };

        Ok(match (operator, value) {
            (Operator::Set, Some(value)) => self.set(key, value),
            (Operator::Append, Some(value)) => self.add(key, value),
            (Operator::Remove, Some(value)) => self.remove(key, value),
            (Operator::Replace, Some(value)) => self.replace(key, &value.to_string()),
            (Operator::Increment, _) => self.inc(key, 1),
            (Operator::Decrement, _) => self.dec(key, 1),
            // Binary operators always carry a value past the arity check
            (_, None) => self,
        })
    }

    /// Apply a parsed token.
    ///
    /// # Errors
    ///
    /// See [`Qurl::apply`].
    pub fn apply_token(self, token: &Token) -> Result<Self, GrammarError> {
        self.apply(&token.key, token.operator, token.value.clone())
    }

    /// Get the first value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.query.get(key)
    }

    /// Get all values for a key, in query order.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.query.get_all(key)
    }

    pub fn query(&self) -> &QueryParams {
        &self.query
    }

    pub fn scheme(&self) -> Option<&str> {
        self.components.scheme.as_deref()
    }

    /// Host without port; `None` when the URL has no authority.
    pub fn host(&self) -> Option<&str> {
        self.components.host.as_deref()
    }

    pub fn port(&self) -> Option<&str> {
        self.components.port.as_deref()
    }

    pub fn path(&self) -> &str {
        &self.components.path
    }

    /// Fragment without the leading '#'.
    pub fn fragment(&self) -> Option<&str> {
        self.components.fragment.as_deref()
    }

    /// Serialize to a URL string. An empty query is written without '?'.
    pub fn serialize(&self) -> String {
        let mut buffer = String::new();
        self.components.write_prefix(&mut buffer);
        if !self.query.is_empty() {
            buffer.push('?');
            self.query.serialize_into(&mut buffer);
        }
        self.components.write_suffix(&mut buffer);
        buffer
    }
}

impl Display for Qurl {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.serialize())
    }
}

impl FromStr for Qurl {
    type Err = UrlParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Qurl> for String {
    fn from(url: Qurl) -> Self {
        url.serialize()
    }
}
