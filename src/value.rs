// Copyright (C) 2024 Ethan Uppal. All rights reserved.

use std::{
    fmt::{self, Display},
    path::PathBuf
};

use linked_hash_map::LinkedHashMap;
use thiserror::Error;

/// One member of an enumeration, as produced by parsing its value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnumMember {
    pub type_name: String,
    pub name: String,
    pub value: String
}

impl EnumMember {
    pub fn new(
        type_name: impl Into<String>, name: impl Into<String>,
        value: impl Into<String>
    ) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.into(),
            value: value.into()
        }
    }
}

impl Display for EnumMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.type_name, self.name)
    }
}

/// A typed command-line value, or a parameter default.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// The empty sentinel: "no value".
    #[default]
    None,
    Str(String),
    Bytes(Vec<u8>),
    Int(i64),
    Float(f64),
    Bool(bool),
    Path(PathBuf),
    Enum(EnumMember),
    List(Vec<Value>)
}

impl Value {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Str(_) => "str",
            Self::Bytes(_) => "bytes",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
            Self::Path(_) => "Path",
            Self::Enum(_) => "enum",
            Self::List(_) => "list"
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Str(value) => write!(f, "{}", value),
            Self::Bytes(value) => write!(f, "{}", String::from_utf8_lossy(value)),
            Self::Int(value) => write!(f, "{}", value),
            Self::Float(value) => write!(f, "{}", value),
            Self::Bool(value) => write!(f, "{}", value),
            Self::Path(value) => write!(f, "{}", value.display()),
            Self::Enum(member) => write!(f, "{}", member),
            Self::List(values) => {
                write!(f, "[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", value)?;
                }
                write!(f, "]")
            }
        }
    }
}

macro_rules! value_from {
    ($($ty:ty => |$v:ident| $body:expr;)*) => {
        $(
            impl From<$ty> for Value {
                fn from($v: $ty) -> Self {
                    $body
                }
            }
        )*
    };
}

value_from! {
    &str => |v| Value::Str(v.to_string());
    String => |v| Value::Str(v);
    i64 => |v| Value::Int(v);
    i32 => |v| Value::Int(v.into());
    u32 => |v| Value::Int(v.into());
    f64 => |v| Value::Float(v);
    bool => |v| Value::Bool(v);
    PathBuf => |v| Value::Path(v);
    EnumMember => |v| Value::Enum(v);
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::None, Into::into)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ArgumentError {
    #[error("missing argument '{0}'")]
    Missing(String),
    #[error("argument '{name}' expected {expected}, found {found}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
        found: &'static str
    }
}

impl ArgumentError {
    fn mismatch(name: &str, expected: &'static str, found: &Value) -> Self {
        Self::TypeMismatch {
            name: name.to_string(),
            expected,
            found: found.kind()
        }
    }
}

/// Values handed to a constructor: positional-only values in declaration
/// order, then everything else by name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Arguments {
    positional: Vec<(String, Value)>,
    keyword: LinkedHashMap<String, Value>
}

macro_rules! accessors {
    ($($name:ident: $variant:ident => $ty:ty;)*) => {
        $(
            paste::paste! {
                pub fn $name(&self, name: &str) -> Result<$ty, ArgumentError> {
                    match self.lookup(name)? {
                        Value::$variant(value) => Ok(value.clone()),
                        other => Err(ArgumentError::mismatch(
                            name, stringify!($name), other
                        ))
                    }
                }

                /// Like the plain accessor, but maps the empty sentinel to
                /// `None`.
                pub fn [<optional_ $name>](
                    &self, name: &str
                ) -> Result<Option<$ty>, ArgumentError> {
                    match self.lookup(name)? {
                        Value::None => Ok(None),
                        Value::$variant(value) => Ok(Some(value.clone())),
                        other => Err(ArgumentError::mismatch(
                            name, stringify!($name), other
                        ))
                    }
                }

                /// Elements of a collection parameter, or `None` when it was
                /// left at the empty sentinel.
                pub fn [<$name _list>](
                    &self, name: &str
                ) -> Result<Option<Vec<$ty>>, ArgumentError> {
                    match self.lookup(name)? {
                        Value::None => Ok(None),
                        Value::List(values) => values
                            .iter()
                            .map(|value| match value {
                                Value::$variant(value) => Ok(value.clone()),
                                other => Err(ArgumentError::mismatch(
                                    name, stringify!($name), other
                                ))
                            })
                            .collect::<Result<Vec<_>, _>>()
                            .map(Some),
                        other => Err(ArgumentError::mismatch(
                            name, "list", other
                        ))
                    }
                }
            }
        )*
    };
}

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_positional(&mut self, name: impl Into<String>, value: Value) {
        self.positional.push((name.into(), value));
    }

    pub fn insert_keyword(&mut self, name: impl Into<String>, value: Value) {
        self.keyword.insert(name.into(), value);
    }

    pub fn positional(&self) -> impl Iterator<Item = &Value> {
        self.positional.iter().map(|(_, value)| value)
    }

    pub fn keywords(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.keyword.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn positional_len(&self) -> usize {
        self.positional.len()
    }

    pub fn len(&self) -> usize {
        self.positional.len() + self.keyword.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Raw value for `name`, searching keywords before positional values.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.keyword.get(name).or_else(|| {
            self.positional
                .iter()
                .find(|(candidate, _)| candidate == name)
                .map(|(_, value)| value)
        })
    }

    fn lookup(&self, name: &str) -> Result<&Value, ArgumentError> {
        self.get(name)
            .ok_or_else(|| ArgumentError::Missing(name.to_string()))
    }

    accessors! {
        str: Str => String;
        bytes: Bytes => Vec<u8>;
        int: Int => i64;
        float: Float => f64;
        bool: Bool => bool;
        path: Path => PathBuf;
        enum_member: Enum => EnumMember;
    }
}
