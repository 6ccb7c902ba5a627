// Copyright (C) 2024 Ethan Uppal. All rights reserved.

#![allow(dead_code)]

use anyhow::{bail, ensure};
use argbind::{
    signature::{
        Bindable, Class, EnumType, Parameter, Signature, TypeExpr,
        DEFAULT_CONSTRUCTOR
    },
    value::{Arguments, EnumMember, Value}
};
use indoc::indoc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooEnum {
    A,
    B
}

impl FooEnum {
    pub fn enum_type() -> EnumType {
        EnumType::new("FooEnum", [("A", "choice1"), ("B", "choice2")])
    }

    fn from_member(member: &EnumMember) -> anyhow::Result<Self> {
        match member.name.as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            other => bail!("FooEnum has no member {}", other)
        }
    }

    fn value(self) -> Value {
        let name = match self {
            Self::A => "A",
            Self::B => "B"
        };
        Self::enum_type().member(name).into()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Foo {
    pub var1: String,
    pub var2: i64,
    pub enum1: FooEnum,
    pub list1: Option<Vec<i64>>
}

const FOO_PARAMS: &str = indoc! {"
    Parameters
    ----------
    var1
        var1 description.
    var2
        var2 description.
    enum1
        enum1 description.
    list1
        list1 description.
"};

fn foo_signature(doc: &str, enum1: FooEnum) -> Signature {
    Signature::new()
        .doc(format!("{}\n\n{}", doc, FOO_PARAMS))
        .param(Parameter::new("self"))
        .param(Parameter::new("var1").typed(TypeExpr::Str))
        .param(Parameter::new("var2").typed(TypeExpr::Int))
        .param(
            Parameter::new("enum1")
                .typed(TypeExpr::Enum(FooEnum::enum_type()))
                .default(enum1.value())
        )
        .param(
            Parameter::new("list1")
                .typed(TypeExpr::list_of(TypeExpr::Int))
                .default(Value::None)
        )
}

impl Foo {
    fn new(args: Arguments) -> anyhow::Result<Self> {
        Ok(Self {
            var1: args.str("var1")?,
            var2: args.int("var2")?,
            enum1: FooEnum::from_member(&args.enum_member("enum1")?)?,
            list1: args.int_list("list1")?
        })
    }

    fn from_cli(args: Arguments) -> anyhow::Result<Self> {
        Self::new(args)
    }
}

impl Bindable for Foo {
    fn class() -> Class<Self> {
        Class::new("Foo")
            .constructor(
                DEFAULT_CONSTRUCTOR,
                foo_signature(
                    "The Foo class does many very useful things.",
                    FooEnum::A
                ),
                Foo::new
            )
            .constructor(
                "from_cli",
                foo_signature(
                    "Obtain a Foo instance by passing arguments from the CLI.\n\
                     Different default values apply.",
                    FooEnum::B
                ),
                Foo::from_cli
            )
    }
}

/// A type whose constructors take their first argument by position only.
#[derive(Debug, Clone, PartialEq)]
pub struct Foo2 {
    pub a: i64
}

impl Foo2 {
    fn new(args: Arguments) -> anyhow::Result<Self> {
        ensure!(args.positional_len() == 1, "a must be passed by position");
        Ok(Self { a: args.int("a")? })
    }

    fn from_cli(args: Arguments) -> anyhow::Result<Self> {
        ensure!(args.positional_len() == 1, "a must be passed by position");
        Ok(Self {
            a: args.int("a")? * args.int("b")?
        })
    }
}

impl Bindable for Foo2 {
    fn class() -> Class<Self> {
        let a = Parameter::new("a").positional_only().typed(TypeExpr::Int);
        Class::new("Foo2")
            .constructor(
                DEFAULT_CONSTRUCTOR,
                Signature::new().param(a.clone()),
                Foo2::new
            )
            .constructor(
                "from_cli",
                Signature::new()
                    .param(Parameter::new("cls"))
                    .param(a)
                    .param(Parameter::new("b").typed(TypeExpr::Int).default(20)),
                Foo2::from_cli
            )
    }
}

/// No annotations and no docstring.
#[derive(Debug, Clone, PartialEq)]
pub struct Untyped {
    pub a: Value,
    pub b: Value,
    pub c: Value
}

impl Untyped {
    fn new(args: Arguments) -> anyhow::Result<Self> {
        let get = |name: &str| args.get(name).cloned().unwrap_or_default();
        Ok(Self {
            a: get("a"),
            b: get("b"),
            c: get("c")
        })
    }
}

impl Bindable for Untyped {
    fn class() -> Class<Self> {
        Class::new("Untyped").constructor(
            DEFAULT_CONSTRUCTOR,
            Signature::new()
                .param(Parameter::new("a"))
                .param(Parameter::new("b"))
                .param(Parameter::new("c").default(Value::None)),
            Untyped::new
        )
    }
}

/// Rejects negative sizes in its constructor.
#[derive(Debug)]
pub struct Widget {
    pub size: i64
}

impl Widget {
    fn new(args: Arguments) -> anyhow::Result<Self> {
        let size = args.int("size")?;
        ensure!(size >= 0, "size must not be negative");
        Ok(Self { size })
    }
}

impl Bindable for Widget {
    fn class() -> Class<Self> {
        Class::new("Widget").constructor(
            DEFAULT_CONSTRUCTOR,
            Signature::new()
                .doc(indoc! {"
                    Something with a size.

                    Args:
                        size (int): How big it is.
                "})
                .param(
                    Parameter::new("size").keyword_only().typed(TypeExpr::Int)
                ),
            Widget::new
        )
    }
}

/// Collections in every position: mandatory, optional with elements, and
/// untyped.
#[derive(Debug, Clone, PartialEq)]
pub struct Bag {
    pub xs: Value,
    pub ys: Value,
    pub raw: Value
}

impl Bag {
    fn new(args: Arguments) -> anyhow::Result<Self> {
        let get = |name: &str| args.get(name).cloned().unwrap_or_default();
        Ok(Self {
            xs: get("xs"),
            ys: get("ys"),
            raw: get("raw")
        })
    }
}

impl Bindable for Bag {
    fn class() -> Class<Self> {
        Class::new("Bag").constructor(
            DEFAULT_CONSTRUCTOR,
            Signature::new()
                .param(Parameter::new("xs").typed(TypeExpr::list_of(TypeExpr::Int)))
                .param(
                    Parameter::new("ys")
                        .typed(TypeExpr::list_of(TypeExpr::Int))
                        .default(vec![1i64, 2])
                )
                .param(
                    Parameter::new("raw")
                        .typed(TypeExpr::List(None))
                        .default(Value::None)
                ),
            Bag::new
        )
    }
}

/// Parameters named after the generated `--help` and `--version` flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Flags {
    pub help: String,
    pub version: String
}

impl Flags {
    fn new(args: Arguments) -> anyhow::Result<Self> {
        Ok(Self {
            help: args.str("help")?,
            version: args.str("version")?
        })
    }
}

impl Bindable for Flags {
    fn class() -> Class<Self> {
        Class::new("Flags").constructor(
            DEFAULT_CONSTRUCTOR,
            Signature::new()
                .param(Parameter::new("help").typed(TypeExpr::Str).default("x"))
                .param(
                    Parameter::new("version").typed(TypeExpr::Str).default("0")
                ),
            Flags::new
        )
    }
}
