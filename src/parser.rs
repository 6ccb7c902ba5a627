// Copyright (C) 2024 Ethan Uppal. All rights reserved.

//! The command-line parser generated from a [`Binding`], and the way parsed
//! values are turned back into an instance.

use std::{
    ffi::OsString,
    fmt::{self, Display},
    iter
};

use clap::{parser::ValueSource, Arg, ArgAction, ArgMatches, Command};
use linked_hash_map::LinkedHashMap;

use crate::{
    analyzer::{analyze, Binding, ParameterSpec},
    coerce::Coercion,
    docstring::Docstring,
    error::{Error, Result},
    options::ParserOptions,
    signature::{Bindable, Class, TypeExpr, DEFAULT_CONSTRUCTOR},
    value::{Arguments, Value}
};

/// One argument registered on the generated command.
#[derive(Debug, Clone, PartialEq)]
pub struct ArgumentSpec {
    pub name: String,
    /// `--name` for options, the bare name for positionals.
    pub flag: String,
    pub positional: bool,
    pub required: bool,
    pub coercion: Option<TypeExpr>,
    pub help: String,
    /// Never the empty sentinel.
    pub default: Option<Value>,
    /// Accepts zero or more values; a repeated flag replaces earlier ones.
    pub multiple: bool
}

/// Help text for one parameter: type and choices, documentation, default.
pub fn generate_help(
    spec: &ParameterSpec, default: Option<&Value>, docs: &Docstring
) -> String {
    let mut help = String::new();
    if let Some(ty) = &spec.declared_type {
        match ty.as_enum() {
            Some(enum_type) => {
                let choices = enum_type.values().collect::<Vec<_>>();
                help.push_str(&format!(
                    "[type: {} | choices: {}] ",
                    ty,
                    choices.join(", ")
                ));
            }
            None => help.push_str(&format!("[type: {}] ", ty))
        }
    }
    help.push_str(docs.param(&spec.name).unwrap_or(""));
    if let Some(default) = default {
        help.push_str(&format!(" (default: {})", default));
    }
    help.trim().to_string()
}

fn argument_spec(spec: &ParameterSpec, docs: &Docstring) -> ArgumentSpec {
    let positional = spec.is_required();
    let default = if positional {
        None
    } else {
        spec.default.clone().filter(|value| !value.is_none())
    };
    ArgumentSpec {
        name: spec.name.clone(),
        flag: if positional {
            spec.name.clone()
        } else {
            format!("--{}", spec.name)
        },
        positional,
        required: positional,
        coercion: spec.declared_type.clone(),
        help: generate_help(spec, default.as_ref(), docs),
        default,
        multiple: !positional
            && spec.is_collection
            && spec.declared_type.is_some()
    }
}

fn to_arg(spec: &ArgumentSpec) -> Arg {
    let mut arg = Arg::new(spec.name.clone())
        .help(spec.help.clone())
        .required(spec.required)
        .value_parser(Coercion::new(spec.coercion.clone()));
    if !spec.positional {
        arg = arg.long(spec.name.clone());
    }
    if matches!(spec.coercion, Some(TypeExpr::Int | TypeExpr::Float)) {
        arg = arg.allow_negative_numbers(true);
    }
    if spec.multiple {
        arg = arg.num_args(0..);
    }
    arg.action(ArgAction::Set)
}

fn exit_on_validation(err: Error) -> Error {
    match err {
        Error::Validation(err) => err.exit(),
        other => other
    }
}

/// A command-line parser bound to one constructor of `T`.
pub struct CliParser<T> {
    binding: Binding<T>,
    schema: Vec<ArgumentSpec>,
    command: Command
}

impl<T: Bindable> CliParser<T> {
    /// Binds the default constructor of `T`.
    pub fn new(options: ParserOptions) -> Result<Self> {
        Self::with_constructor(DEFAULT_CONSTRUCTOR, options)
    }

    pub fn with_constructor(
        constructor: &str, options: ParserOptions
    ) -> Result<Self> {
        Self::bind(&T::class(), constructor, options)
    }
}

impl<T> CliParser<T> {
    pub fn bind(
        class: &Class<T>, constructor: &str, options: ParserOptions
    ) -> Result<Self> {
        let binding = analyze(class, constructor)?;
        if let Some(spec) =
            binding.params.iter().find(|spec| options.reserves(&spec.name))
        {
            return Err(Error::ReservedParameter {
                constructor: binding.constructor_name.clone(),
                name: spec.name.clone()
            });
        }
        let schema = binding
            .params
            .iter()
            .map(|spec| argument_spec(spec, &binding.docs))
            .collect::<Vec<_>>();

        let name = options
            .program_name
            .clone()
            .unwrap_or_else(|| binding.class_name.clone());
        let mut command = Command::new(name).args_override_self(true);
        let description = binding.docs.description();
        if !description.is_empty() {
            command = command.about(description);
        }
        command = options.apply(command);
        for spec in &schema {
            log::debug!("registering {} for {}", spec.flag, binding.class_name);
            command = command.arg(to_arg(spec));
        }

        Ok(Self {
            binding,
            schema,
            command
        })
    }

    pub fn binding(&self) -> &Binding<T> {
        &self.binding
    }

    pub fn schema(&self) -> &[ArgumentSpec] {
        &self.schema
    }

    pub fn command(&self) -> &Command {
        &self.command
    }

    pub fn render_help(&self) -> String {
        self.command.clone().render_help().to_string()
    }

    /// Parses the process arguments. Rejected tokens print an error and
    /// exit; `--help` prints help and exits successfully.
    pub fn parse(&self) -> Result<T> {
        self.try_parse().map_err(exit_on_validation)
    }

    /// Like [`CliParser::parse`], reading `tokens` instead of the process
    /// arguments. The program name must not be included.
    pub fn parse_from<I, S>(&self, tokens: I) -> Result<T>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString> + Clone {
        self.try_parse_from(tokens).map_err(exit_on_validation)
    }

    pub fn try_parse(&self) -> Result<T> {
        let matches = self.command.clone().try_get_matches()?;
        self.instantiate(&matches)
    }

    pub fn try_parse_from<I, S>(&self, tokens: I) -> Result<T>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString> + Clone {
        let argv = iter::once(OsString::from(self.command.get_name()))
            .chain(tokens.into_iter().map(Into::into));
        let matches = self.command.clone().try_get_matches_from(argv)?;
        self.instantiate(&matches)
    }

    /// Values by parameter name in declaration order, with defaults filled
    /// in for options that were not given.
    fn parsed_values(&self, matches: &ArgMatches) -> LinkedHashMap<String, Value> {
        let mut values = LinkedHashMap::new();
        for (spec, arg) in self.binding.params.iter().zip(&self.schema) {
            let value = if matches.value_source(&arg.name)
                == Some(ValueSource::CommandLine)
            {
                let mut tokens = matches
                    .get_many::<Value>(&arg.name)
                    .map(|tokens| tokens.cloned().collect::<Vec<_>>())
                    .unwrap_or_default();
                if spec.is_collection {
                    Value::List(tokens)
                } else {
                    tokens.pop().unwrap_or_default()
                }
            } else {
                arg.default.clone().unwrap_or_default()
            };
            values.insert(spec.name.clone(), value);
        }
        values
    }

    fn instantiate(&self, matches: &ArgMatches) -> Result<T> {
        let mut values = self.parsed_values(matches);
        let mut arguments = Arguments::new();
        for spec in self.binding.positional_only() {
            if let Some(value) = values.remove(&spec.name) {
                arguments.push_positional(spec.name.clone(), value);
            }
        }
        for (name, value) in values {
            arguments.insert_keyword(name, value);
        }
        (self.binding.constructor)(arguments).map_err(Error::Construction)
    }
}

impl<T> Clone for CliParser<T> {
    fn clone(&self) -> Self {
        CliParser {
            binding: self.binding.clone(),
            schema: self.schema.clone(),
            command: self.command.clone()
        }
    }
}

impl<T> fmt::Debug for CliParser<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CliParser")
            .field("binding", &self.binding)
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}

impl<T> Display for CliParser<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<CliParser<->{}>", self.binding.class_name)
    }
}
