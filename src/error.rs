use crate::compat::String;
use crate::operator::Operator;

/// Errors that can occur while parsing the base URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlParseError {
    /// Invalid scheme format
    InvalidScheme,
    /// Invalid host format
    InvalidHost,
    /// Invalid port number
    InvalidPort,
}

impl core::fmt::Display for UrlParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::InvalidScheme => "Invalid scheme",
            Self::InvalidHost => "Invalid host",
            Self::InvalidPort => "Invalid port",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UrlParseError {}

/// Errors produced by a malformed mutation token or an operator/value
/// combination that does not fit the operator's arity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    /// Token has nothing before the operator symbol
    EmptyKey,
    /// No recognized operator follows the key
    UnknownOperator(String),
    /// Binary operator without a value
    MissingValue(Operator),
    /// Unary operator followed by a value
    UnexpectedValue(Operator),
    /// Value is not a quoted string, an integer or the null literal
    InvalidValue(String),
    /// Null sentinel given to an operator other than `=`
    NullNotAllowed(Operator),
}

impl core::fmt::Display for GrammarError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::EmptyKey => f.write_str("Missing key before operator"),
            Self::UnknownOperator(rest) => write!(f, "Unknown operator in `{rest}`"),
            Self::MissingValue(op) => write!(f, "Operator `{op}` requires a value"),
            Self::UnexpectedValue(op) => write!(f, "Operator `{op}` does not take a value"),
            Self::InvalidValue(value) => write!(f, "Invalid value literal `{value}`"),
            Self::NullNotAllowed(op) => write!(f, "Operator `{op}` does not accept null"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GrammarError {}

/// Any failure of a full `url + tokens` evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Url(UrlParseError),
    Grammar(GrammarError),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Url(err) => write!(f, "URL parse error: {err}"),
            Self::Grammar(err) => write!(f, "Syntax error: {err}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Url(err) => Some(err),
            Self::Grammar(err) => Some(err),
        }
    }
}

impl From<UrlParseError> for Error {
    fn from(err: UrlParseError) -> Self {
        Self::Url(err)
    }
}

impl From<GrammarError> for Error {
    fn from(err: GrammarError) -> Self {
        Self::Grammar(err)
    }
}

/// Result type for query editing operations
pub type Result<T> = core::result::Result<T, Error>;
