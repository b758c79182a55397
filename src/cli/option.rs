use std::{cell::Cell, fmt::Display, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Integer,
    Float,
    String,
    Bool,
}

impl ValueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Integer => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::Bool => "bool",
        }
    }

    /// check a raw argument string against this type. integers are plain
    /// digit runs with no sign, floats allow at most one decimal point and
    /// bools are exactly "0" or "1"
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Self::Integer => value.chars().all(|ch| ch.is_ascii_digit()),
            Self::Float => {
                value.chars().all(|ch| ch.is_ascii_digit() || ch == '.')
                    && value.matches('.').count() <= 1
            }
            Self::String => true,
            Self::Bool => value == "0" || value == "1",
        }
    }
}

impl Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueCount {
    Exactly(usize),
    Unbounded,
}

impl ValueCount {
    pub fn accepts(&self, given: usize) -> bool {
        match self {
            Self::Exactly(expected) => *expected == given,
            Self::Unbounded => true,
        }
    }
}

/// describes an option accepted by the parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDescription {
    name: String,
    help: String,
    short_hand: Option<char>,
    value_type: ValueType,
    value_count: ValueCount,
}

impl OptionDescription {
    /// a string option taking any number of values
    pub fn new(name: &str, help: &str) -> Self {
        Self {
            name: name.to_owned(),
            help: help.to_owned(),
            short_hand: None,
            value_type: ValueType::String,
            value_count: ValueCount::Unbounded,
        }
    }

    pub fn typed(name: &str, help: &str, value_type: ValueType, value_count: ValueCount) -> Self {
        Self {
            value_type,
            value_count,
            ..Self::new(name, help)
        }
    }

    /// override the shorthand, which is otherwise the first char of the name
    pub fn with_short_hand(mut self, short_hand: char) -> Self {
        self.short_hand = Some(short_hand);
        self
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn help(&self) -> &str {
        self.help.as_str()
    }

    pub fn short_hand(&self) -> Option<char> {
        self.short_hand.or_else(|| self.name.chars().next())
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    pub fn value_count(&self) -> ValueCount {
        self.value_count
    }
}

/// an option found on the command line together with the values following it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedOption<'a> {
    /// the flag as written, e.g. `--source` or `-s`
    flag: Option<&'a str>,
    name: Option<&'a str>,
    values: Vec<&'a str>,
    next_idx: Cell<usize>,
}

impl<'a> ParsedOption<'a> {
    pub(super) fn empty() -> Self {
        Self {
            flag: None,
            name: None,
            values: Vec::new(),
            next_idx: Cell::new(0),
        }
    }

    pub(super) fn start(flag: &'a str, name: Option<&'a str>) -> Self {
        Self {
            flag: Some(flag),
            name,
            ..Self::empty()
        }
    }

    pub(super) fn push(&mut self, value: &'a str) {
        self.values.push(value);
    }

    pub(super) fn is_empty(&self) -> bool {
        self.flag.is_none() && self.values.is_empty()
    }

    pub(super) fn flag(&self) -> Option<&'a str> {
        self.flag
    }

    /// resolved option name; `None` for an unknown shorthand or values
    /// given before any option
    pub fn name(&self) -> Option<&'a str> {
        self.name
    }

    pub fn values(&self) -> &[&'a str] {
        self.values.as_slice()
    }

    pub fn value(&self, idx: usize) -> Option<&'a str> {
        self.values.get(idx).copied()
    }

    /// advances this option's cursor, returning `None` once every value was read
    pub fn next_value(&self) -> Option<&'a str> {
        let idx = self.next_idx.get();
        let value = self.value(idx)?;
        self.next_idx.set(idx + 1);
        Some(value)
    }

    pub fn next_as<T: FromStr>(&self) -> Option<Result<T, T::Err>> {
        self.next_value().map(|value| value.parse())
    }

    /// "0" reads as false, any other value as true
    pub fn next_bool(&self) -> Option<bool> {
        self.next_value().map(|value| value != "0")
    }
}
