//! Logic values.

use std::fmt;

use itertools::Itertools;

use crate::utils::bits_of;
use crate::word::Word;

/// Logic value of a single bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicValue {
    /// Logic '0' or false condition
    False,

    /// Logic '1' or true condition
    True,

    /// Don't care or unknown value
    X,
}

impl fmt::Display for LogicValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicValue::False => write!(f, "0"),
            LogicValue::True => write!(f, "1"),
            LogicValue::X => write!(f, "x"),
        }
    }
}

/// Logic values, rendered most significant bit first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicValues(Vec<LogicValue>);

impl LogicValues {
    /// Creates new logic values.
    pub fn new(inner: Vec<LogicValue>) -> Self { Self(inner) }

    /// All-unknown values of the given width, the rendering of an
    /// unspecified bus (e.g. a read port nothing has been committed behind).
    pub fn unknown(width: usize) -> Self { Self(vec![LogicValue::X; width]) }

    /// Inner logic values.
    pub fn into_inner(self) -> Vec<LogicValue> { self.0 }
}

impl From<Word> for LogicValues {
    fn from(word: Word) -> Self {
        Self(
            bits_of(word.value(), word.width())
                .into_iter()
                .rev()
                .map(|b| if b { LogicValue::True } else { LogicValue::False })
                .collect(),
        )
    }
}

impl fmt::Display for LogicValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().map(LogicValue::to_string).join(""))
    }
}
