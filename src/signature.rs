// Copyright (C) 2024 Ethan Uppal. All rights reserved.

//! Explicit description of a bindable type: its name, its constructors, and
//! for each constructor the ordered parameter list with kinds, annotations
//! and defaults.

use std::fmt::{self, Display};

use crate::value::{Arguments, EnumMember, Value};

/// Name of the constructor used when none is requested explicitly.
pub const DEFAULT_CONSTRUCTOR: &str = "new";

/// Builds an instance from reassembled command-line values.
pub type ConstructorFn<T> = fn(Arguments) -> anyhow::Result<T>;

/// A closed set of named constants. Members are matched on the command line
/// by their value, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumType {
    pub name: String,
    pub members: Vec<(String, String)>
}

impl EnumType {
    pub fn new<N, V>(
        name: impl Into<String>, members: impl IntoIterator<Item = (N, V)>
    ) -> Self
    where
        N: Into<String>,
        V: Into<String> {
        Self {
            name: name.into(),
            members: members
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect()
        }
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|(_, value)| value.as_str())
    }

    /// Looks up a member by its name, e.g. `A` in `FooEnum.A`.
    pub fn member(&self, name: &str) -> Option<EnumMember> {
        self.members
            .iter()
            .find(|(member, _)| member == name)
            .map(|(member, value)| EnumMember::new(&self.name, member, value))
    }

    /// Looks up a member by the value a user would type.
    pub fn member_by_value(&self, value: &str) -> Option<EnumMember> {
        self.members
            .iter()
            .find(|(_, candidate)| candidate == value)
            .map(|(member, value)| EnumMember::new(&self.name, member, value))
    }
}

/// A type annotation as written on a parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    Str,
    Bytes,
    Int,
    Float,
    Bool,
    Path,
    Enum(EnumType),
    /// A homogeneous sequence, optionally with its element type.
    List(Option<Box<TypeExpr>>),
    Tuple(Vec<TypeExpr>)
}

impl TypeExpr {
    pub fn list_of(element: TypeExpr) -> Self {
        Self::List(Some(Box::new(element)))
    }

    /// Whether the type is a sequence container whose elements should be
    /// collected from several tokens. Text and byte strings are sequences
    /// too, but are always read from a single token.
    pub fn is_container(&self) -> bool {
        matches!(self, Self::List(_) | Self::Tuple(_))
    }

    /// First declared element type of a container.
    pub fn first_element(&self) -> Option<&TypeExpr> {
        match self {
            Self::List(element) => element.as_deref(),
            Self::Tuple(elements) => elements.first(),
            _ => None
        }
    }

    pub fn as_enum(&self) -> Option<&EnumType> {
        match self {
            Self::Enum(enum_type) => Some(enum_type),
            _ => None
        }
    }
}

impl Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str => write!(f, "str"),
            Self::Bytes => write!(f, "bytes"),
            Self::Int => write!(f, "int"),
            Self::Float => write!(f, "float"),
            Self::Bool => write!(f, "bool"),
            Self::Path => write!(f, "Path"),
            Self::Enum(enum_type) => write!(f, "{}", enum_type.name),
            Self::List(None) => write!(f, "List"),
            Self::List(Some(element)) => write!(f, "List[{}]", element),
            Self::Tuple(elements) => {
                write!(f, "Tuple[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", element)?;
                }
                write!(f, "]")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Annotation {
    #[default]
    Missing,
    /// A deferred annotation naming a type that is not resolved.
    Forward(String),
    Type(TypeExpr)
}

/// How a parameter may be passed to its constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParameterKind {
    PositionalOnly,
    #[default]
    PositionalOrKeyword,
    KeywordOnly
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub kind: ParameterKind,
    pub annotation: Annotation,
    /// `Some(Value::None)` is a parameter defaulting to the empty sentinel,
    /// which is still optional.
    pub default: Option<Value>
}

impl Parameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ParameterKind::default(),
            annotation: Annotation::default(),
            default: None
        }
    }

    pub fn positional_only(mut self) -> Self {
        self.kind = ParameterKind::PositionalOnly;
        self
    }

    pub fn keyword_only(mut self) -> Self {
        self.kind = ParameterKind::KeywordOnly;
        self
    }

    pub fn typed(mut self, ty: TypeExpr) -> Self {
        self.annotation = Annotation::Type(ty);
        self
    }

    pub fn forward(mut self, name: impl Into<String>) -> Self {
        self.annotation = Annotation::Forward(name.into());
        self
    }

    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Signature {
    pub params: Vec<Parameter>,
    pub doc: Option<String>
}

impl Signature {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param(mut self, param: Parameter) -> Self {
        self.params.push(param);
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

pub struct Constructor<T> {
    pub name: String,
    pub signature: Signature,
    pub func: ConstructorFn<T>
}

impl<T> Clone for Constructor<T> {
    fn clone(&self) -> Self {
        Constructor {
            name: self.name.clone(),
            signature: self.signature.clone(),
            func: self.func
        }
    }
}

impl<T> fmt::Debug for Constructor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constructor")
            .field("name", &self.name)
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

/// A type together with every constructor it exposes to the command line.
pub struct Class<T> {
    pub name: String,
    pub constructors: Vec<Constructor<T>>
}

impl<T> Class<T> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constructors: Vec::new()
        }
    }

    pub fn constructor(
        mut self, name: impl Into<String>, signature: Signature,
        func: ConstructorFn<T>
    ) -> Self {
        self.constructors.push(Constructor {
            name: name.into(),
            signature,
            func
        });
        self
    }

    pub fn find_constructor(&self, name: &str) -> Option<&Constructor<T>> {
        self.constructors.iter().find(|ctor| ctor.name == name)
    }
}

impl<T> fmt::Debug for Class<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Class")
            .field("name", &self.name)
            .field("constructors", &self.constructors)
            .finish()
    }
}

/// Types that describe their own constructors and can therefore be parsed
/// from the command line.
pub trait Bindable
where
    Self: Sized {
    fn class() -> Class<Self>;
}
