// Copyright (C) 2024 Ethan Uppal. All rights reserved.

use argbind::{
    signature::{
        Bindable, Class, EnumType, Parameter, Signature, TypeExpr,
        DEFAULT_CONSTRUCTOR
    },
    value::{Arguments, EnumMember},
    CliParser, ParserOptions
};

fn foo_enum() -> EnumType {
    EnumType::new("FooEnum", [("A", "choice1"), ("B", "choice2")])
}

#[derive(Debug)]
#[allow(dead_code)]
struct Foo {
    var1: String,
    var2: i64,
    enum1: EnumMember,
    list1: Option<Vec<i64>>
}

impl Foo {
    fn new(args: Arguments) -> anyhow::Result<Self> {
        Ok(Self {
            var1: args.str("var1")?,
            var2: args.int("var2")?,
            enum1: args.enum_member("enum1")?,
            list1: args.int_list("list1")?
        })
    }
}

impl Bindable for Foo {
    fn class() -> Class<Self> {
        let signature = Signature::new()
            .doc(
                "The Foo class does many very useful things.

                Parameters
                ----------
                var1
                    var1 description.
                var2
                    var2 description.
                enum1
                    enum1 description.
                list1
                    list1 description."
            )
            .param(Parameter::new("var1").typed(TypeExpr::Str))
            .param(Parameter::new("var2").typed(TypeExpr::Int))
            .param(
                Parameter::new("enum1")
                    .typed(TypeExpr::Enum(foo_enum()))
                    .default(foo_enum().member("A"))
            )
            .param(
                Parameter::new("list1")
                    .typed(TypeExpr::list_of(TypeExpr::Int))
                    .default(None::<i64>)
            );
        Class::new("Foo").constructor(DEFAULT_CONSTRUCTOR, signature, Foo::new)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let parser = CliParser::<Foo>::new(
        ParserOptions::new().version(env!("CARGO_PKG_VERSION"))
    )?;
    log::debug!("parsing with {}", parser);
    let foo = parser.parse()?;
    println!("{:?}", foo);
    Ok(())
}
