// Copyright (C) 2024 Ethan Uppal. All rights reserved.

use std::{ffi::OsStr, path::PathBuf};

use clap::{
    builder::{PossibleValue, TypedValueParser},
    error::ErrorKind,
    Arg, Command
};

use crate::{signature::TypeExpr, value::Value};

/// Innermost scalar of a (possibly nested) container type.
fn scalar(ty: Option<&TypeExpr>) -> Option<&TypeExpr> {
    match ty {
        Some(ty) if ty.is_container() => scalar(ty.first_element()),
        other => other
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "yes" | "y" | "on" | "1" => Some(true),
        "false" | "f" | "no" | "n" | "off" | "0" => Some(false),
        _ => None
    }
}

/// Converts one token to a value of `ty`. Untyped tokens stay text.
pub fn coerce(ty: Option<&TypeExpr>, raw: &str) -> Result<Value, String> {
    match scalar(ty) {
        Some(TypeExpr::Bytes) => Ok(Value::Bytes(raw.as_bytes().to_vec())),
        Some(TypeExpr::Int) => raw
            .trim()
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|err| format!("invalid int value ({})", err)),
        Some(TypeExpr::Float) => raw
            .trim()
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|err| format!("invalid float value ({})", err)),
        Some(TypeExpr::Bool) => parse_bool(raw)
            .map(Value::Bool)
            .ok_or_else(|| "invalid bool value".to_string()),
        Some(TypeExpr::Path) => Ok(Value::Path(PathBuf::from(raw))),
        Some(TypeExpr::Enum(enum_type)) => enum_type
            .member_by_value(raw)
            .map(Value::Enum)
            .ok_or_else(|| {
                format!(
                    "invalid choice (choose from {})",
                    enum_type.values().collect::<Vec<_>>().join(", ")
                )
            }),
        _ => Ok(Value::Str(raw.to_string()))
    }
}

/// The value parser registered on every generated argument.
#[derive(Debug, Clone)]
pub struct Coercion {
    ty: Option<TypeExpr>
}

impl Coercion {
    pub fn new(ty: Option<TypeExpr>) -> Self {
        Self { ty }
    }
}

impl TypedValueParser for Coercion {
    type Value = Value;

    fn parse_ref(
        &self, cmd: &Command, arg: Option<&Arg>, value: &OsStr
    ) -> Result<Self::Value, clap::Error> {
        let raw = value
            .to_str()
            .ok_or_else(|| clap::Error::new(ErrorKind::InvalidUtf8).with_cmd(cmd))?;
        coerce(self.ty.as_ref(), raw).map_err(|reason| {
            let kind = match scalar(self.ty.as_ref()) {
                Some(TypeExpr::Enum(_)) => ErrorKind::InvalidValue,
                _ => ErrorKind::ValueValidation
            };
            let arg = arg.map_or_else(|| "...".to_string(), ToString::to_string);
            clap::Error::raw(
                kind,
                format!("invalid value '{}' for '{}': {}\n", raw, arg, reason)
            )
            .with_cmd(cmd)
        })
    }

    fn possible_values(
        &self
    ) -> Option<Box<dyn Iterator<Item = PossibleValue> + '_>> {
        let enum_type = scalar(self.ty.as_ref())?.as_enum()?;
        Some(Box::new(
            enum_type
                .values()
                .map(|value| PossibleValue::new(value.to_string()))
        ))
    }
}
