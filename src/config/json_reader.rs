//! Read-only navigation over a parsed JSON document.
//!
//! `JsonReader` owns the parsed tree; `NestedValue` is a borrowed view into
//! it that remembers how it was reached, so it can report its path in errors
//! and walk back up with `parent`. Views cannot outlive their reader.

use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use serde_json::Value;

use crate::config::config_errors::ConfigErrors;

/// Kind of a JSON value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum JsonKind {
    Null,
    Boolean,
    Integer,
    Float,
    String,
    Array,
    Object,
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JsonKind::Null => "null",
            JsonKind::Boolean => "boolean",
            JsonKind::Integer => "integer",
            JsonKind::Float => "floating-point",
            JsonKind::String => "string",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        };
        f.write_str(name)
    }
}

fn kind_of(value: &Value) -> JsonKind {
    match value {
        Value::Null => JsonKind::Null,
        Value::Bool(_) => JsonKind::Boolean,
        Value::Number(n) if n.is_f64() => JsonKind::Float,
        Value::Number(_) => JsonKind::Integer,
        Value::String(_) => JsonKind::String,
        Value::Array(_) => JsonKind::Array,
        Value::Object(_) => JsonKind::Object,
    }
}

/// One step of a navigation path.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PathStep<'p> {
    Key(&'p str),
    Index(usize),
}

impl<'p> From<&'p str> for PathStep<'p> {
    fn from(key: &'p str) -> Self {
        PathStep::Key(key)
    }
}

impl From<usize> for PathStep<'_> {
    fn from(index: usize) -> Self {
        PathStep::Index(index)
    }
}

/// An immutable JSON document held in memory.
#[derive(Clone, Debug)]
pub struct JsonReader {
    root: Value,
}

impl JsonReader {
    /// Reads the stream to EOF and parses it.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigErrors> {
        let root = serde_json::from_reader(reader)?;
        Ok(JsonReader { root })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigErrors> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ConfigErrors::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// View of the document root.
    pub fn access(&self) -> NestedValue<'_> {
        NestedValue {
            value: &self.root,
            ancestors: Vec::new(),
            path: String::from("$"),
        }
    }

    /// Follows `path` (keys and indices) from the root.
    ///
    /// ```
    /// use chesspp::config::json_reader::{JsonReader, PathStep};
    ///
    /// let reader: JsonReader = r#"{"a": [{"b": 3}]}"#.parse().unwrap();
    /// let b = reader
    ///     .navigate([PathStep::Key("a"), PathStep::Index(0), PathStep::Key("b")])
    ///     .unwrap();
    /// assert_eq!(b.as_i64().unwrap(), 3);
    /// ```
    pub fn navigate<'p, I>(&self, path: I) -> Result<NestedValue<'_>, ConfigErrors>
    where
        I: IntoIterator,
        I::Item: Into<PathStep<'p>>,
    {
        self.access().navigate(path)
    }
}

impl FromStr for JsonReader {
    type Err = ConfigErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(JsonReader {
            root: serde_json::from_str(s)?,
        })
    }
}

/// A value within a `JsonReader`.
#[derive(Clone, Debug)]
pub struct NestedValue<'a> {
    value: &'a Value,
    // Each ancestor with the length of its path prefix in `path`.
    ancestors: Vec<(&'a Value, usize)>,
    path: String,
}

impl<'a> NestedValue<'a> {
    pub fn kind(&self) -> JsonKind {
        kind_of(self.value)
    }

    /// Location of this value, e.g. `$.chesspp.board.pieces[3]`.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_null(&self) -> bool {
        self.value.is_null()
    }

    pub(crate) fn wrong_kind(&self, expected: JsonKind) -> ConfigErrors {
        ConfigErrors::WrongKind {
            path: self.path.clone(),
            expected,
            found: self.kind(),
        }
    }

    /// Fails with `WrongKind` unless this value is of kind `expected`.
    pub fn expect_kind(&self, expected: JsonKind) -> Result<(), ConfigErrors> {
        if self.kind() == expected {
            Ok(())
        } else {
            Err(self.wrong_kind(expected))
        }
    }

    fn child(&self, value: &'a Value, step: String) -> NestedValue<'a> {
        let mut ancestors = self.ancestors.clone();
        ancestors.push((self.value, self.path.len()));
        NestedValue {
            value,
            ancestors,
            path: format!("{}{}", self.path, step),
        }
    }

    pub fn parent(&self) -> Result<NestedValue<'a>, ConfigErrors> {
        let mut ancestors = self.ancestors.clone();
        let (value, path_len) = ancestors
            .pop()
            .ok_or_else(|| ConfigErrors::NoParent(self.path.clone()))?;
        Ok(NestedValue {
            value,
            ancestors,
            path: self.path[..path_len].to_owned(),
        })
    }

    /// Child of an object value by name.
    pub fn get(&self, key: &str) -> Result<NestedValue<'a>, ConfigErrors> {
        let map = self
            .value
            .as_object()
            .ok_or_else(|| self.wrong_kind(JsonKind::Object))?;
        let value = map.get(key).ok_or_else(|| ConfigErrors::MissingKey {
            path: self.path.clone(),
            key: key.to_owned(),
        })?;
        Ok(self.child(value, format!(".{key}")))
    }

    /// Like `get`, but `None` when the key is absent or this is not an object.
    pub fn try_get(&self, key: &str) -> Option<NestedValue<'a>> {
        let value = self.value.as_object()?.get(key)?;
        Some(self.child(value, format!(".{key}")))
    }

    /// Element of an array value.
    pub fn at(&self, index: usize) -> Result<NestedValue<'a>, ConfigErrors> {
        let items = self
            .value
            .as_array()
            .ok_or_else(|| self.wrong_kind(JsonKind::Array))?;
        let value = items.get(index).ok_or(ConfigErrors::IndexOutOfRange {
            path: self.path.clone(),
            index,
            length: items.len(),
        })?;
        Ok(self.child(value, format!("[{index}]")))
    }

    pub fn navigate<'p, I>(&self, path: I) -> Result<NestedValue<'a>, ConfigErrors>
    where
        I: IntoIterator,
        I::Item: Into<PathStep<'p>>,
    {
        let mut current = self.clone();
        for step in path {
            current = match step.into() {
                PathStep::Key(key) => current.get(key)?,
                PathStep::Index(index) => current.at(index)?,
            };
        }
        Ok(current)
    }

    /// Length of an array value, 0 for anything else.
    pub fn length(&self) -> usize {
        self.value.as_array().map_or(0, Vec::len)
    }

    /// Elements of an array value; empty for anything else.
    pub fn elements(&self) -> Vec<NestedValue<'a>> {
        match self.value.as_array() {
            Some(items) => items
                .iter()
                .enumerate()
                .map(|(i, v)| self.child(v, format!("[{i}]")))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Object entries keyed by name; empty for anything that is not an object.
    pub fn object(&self) -> BTreeMap<String, NestedValue<'a>> {
        match self.value.as_object() {
            Some(map) => map
                .iter()
                .map(|(k, v)| (k.clone(), self.child(v, format!(".{k}"))))
                .collect(),
            None => BTreeMap::new(),
        }
    }

    pub fn as_str(&self) -> Result<&'a str, ConfigErrors> {
        self.value
            .as_str()
            .ok_or_else(|| self.wrong_kind(JsonKind::String))
    }

    pub fn as_bool(&self) -> Result<bool, ConfigErrors> {
        self.value
            .as_bool()
            .ok_or_else(|| self.wrong_kind(JsonKind::Boolean))
    }

    /// Integer value; floating-point values are rejected.
    pub fn as_i64(&self) -> Result<i64, ConfigErrors> {
        if let Some(v) = self.value.as_i64() {
            return Ok(v);
        }
        if self.value.is_u64() {
            return Err(ConfigErrors::NumberOutOfRange {
                path: self.path.clone(),
                value: self.value.to_string(),
            });
        }
        Err(self.wrong_kind(JsonKind::Integer))
    }

    /// Integer value narrowed to `T`, failing instead of truncating.
    pub fn as_integer<T: TryFrom<i64>>(&self) -> Result<T, ConfigErrors> {
        let wide = self.as_i64()?;
        T::try_from(wide).map_err(|_| ConfigErrors::NumberOutOfRange {
            path: self.path.clone(),
            value: wide.to_string(),
        })
    }

    /// Floating-point value; integers are widened.
    pub fn as_f64(&self) -> Result<f64, ConfigErrors> {
        self.value
            .as_f64()
            .ok_or_else(|| self.wrong_kind(JsonKind::Float))
    }
}
