use crate::compat::{String, ToString};

/// Query mutation operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `=`: replace every pair for the key, or drop the key on null
    Set,
    /// `+=`: add a pair, keeping existing ones
    Append,
    /// `-=`: remove one exact key/value pair
    Remove,
    /// `~=`: cut a substring out of every value of the key
    Replace,
    /// `++`
    Increment,
    /// `--`
    Decrement,
}

impl Operator {
    /// Matching order for the grammar: unary forms first, then the two-byte
    /// binary symbols, then `=`.
    pub const ALL: [Self; 6] = [
        Self::Increment,
        Self::Decrement,
        Self::Append,
        Self::Remove,
        Self::Replace,
        Self::Set,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Set => "=",
            Self::Append => "+=",
            Self::Remove => "-=",
            Self::Replace => "~=",
            Self::Increment => "++",
            Self::Decrement => "--",
        }
    }

    /// Unary operators take no value.
    pub fn is_unary(self) -> bool {
        matches!(self, Self::Increment | Self::Decrement)
    }

    /// Look up an operator by its exact symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }
}

impl core::fmt::Display for Operator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Operand of a mutation.
///
/// `Null` is the "no value" marker: given to [`Operator::Set`] it deletes the
/// key instead of writing a pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Str(String),
    Int(i64),
    Null,
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Text written into the query string, or `None` for the null sentinel.
    pub fn to_query_value(&self) -> Option<String> {
        match self {
            Self::Str(s) => Some(s.clone()),
            Self::Int(n) => Some(n.to_string()),
            Self::Null => None,
        }
    }
}

impl core::fmt::Display for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
            Self::Null => f.write_str("null"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
