// Copyright (C) 2024 Ethan Uppal. All rights reserved.

//! Classifies a constructor's parameters and resolves the type each command
//! line value is coerced to.

use std::{collections::HashSet, fmt};

use crate::{
    docstring::{self, Docstring},
    error::{Error, Result},
    signature::{
        Annotation, Class, ConstructorFn, Parameter, ParameterKind, TypeExpr
    },
    value::Value
};

/// Receiver parameters never surface on the command line.
const RECEIVERS: [&str; 2] = ["self", "cls"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentKind {
    PositionalOnly,
    Mandatory,
    Optional
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSpec {
    pub name: String,
    pub kind: ArgumentKind,
    /// Type each token is coerced to; for collections, the element type.
    pub declared_type: Option<TypeExpr>,
    pub is_collection: bool,
    pub default: Option<Value>
}

impl ParameterSpec {
    pub fn is_required(&self) -> bool {
        self.kind != ArgumentKind::Optional
    }
}

/// Emitted instead of failing when a parameter's type cannot be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationWarning {
    pub parameter: String
}

impl fmt::Display for AnnotationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ForwardRefs unsupported for parameter {}; provide a direct type",
            self.parameter
        )
    }
}

/// A constructor resolved against its class, with every parameter
/// classified.
pub struct Binding<T> {
    pub class_name: String,
    pub constructor_name: String,
    pub constructor: ConstructorFn<T>,
    pub params: Vec<ParameterSpec>,
    pub docs: Docstring,
    pub warnings: Vec<AnnotationWarning>
}

impl<T> Binding<T> {
    pub fn positional_only(&self) -> impl Iterator<Item = &ParameterSpec> {
        self.params
            .iter()
            .filter(|spec| spec.kind == ArgumentKind::PositionalOnly)
    }

    pub fn param(&self, name: &str) -> Option<&ParameterSpec> {
        self.params.iter().find(|spec| spec.name == name)
    }
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Binding {
            class_name: self.class_name.clone(),
            constructor_name: self.constructor_name.clone(),
            constructor: self.constructor,
            params: self.params.clone(),
            docs: self.docs.clone(),
            warnings: self.warnings.clone()
        }
    }
}

impl<T> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("class_name", &self.class_name)
            .field("constructor_name", &self.constructor_name)
            .field("params", &self.params)
            .field("docs", &self.docs)
            .field("warnings", &self.warnings)
            .finish_non_exhaustive()
    }
}

pub fn classify(param: &Parameter) -> ArgumentKind {
    match (param.kind, &param.default) {
        (ParameterKind::PositionalOnly, _) => ArgumentKind::PositionalOnly,
        (_, Some(_)) => ArgumentKind::Optional,
        (_, None) => ArgumentKind::Mandatory
    }
}

/// Returns the coercion type and whether the parameter collects several
/// values.
pub fn resolve_type(
    param: &Parameter
) -> std::result::Result<(Option<TypeExpr>, bool), AnnotationWarning> {
    match &param.annotation {
        Annotation::Missing => Ok((None, false)),
        Annotation::Forward(_) => Err(AnnotationWarning {
            parameter: param.name.clone()
        }),
        // only the first element type of a container is kept
        Annotation::Type(ty) if ty.is_container() => {
            Ok((ty.first_element().cloned(), true))
        }
        Annotation::Type(ty) => Ok((Some(ty.clone()), false))
    }
}

pub fn analyze<T>(class: &Class<T>, constructor: &str) -> Result<Binding<T>> {
    let ctor = class.find_constructor(constructor).ok_or_else(|| {
        Error::Binding {
            class: class.name.clone(),
            constructor: constructor.to_string()
        }
    })?;

    let mut seen = HashSet::new();
    let mut params = Vec::new();
    let mut warnings = Vec::new();
    for param in &ctor.signature.params {
        if RECEIVERS.contains(&param.name.as_str()) {
            continue;
        }
        if !seen.insert(param.name.as_str()) {
            return Err(Error::DuplicateParameter {
                constructor: format!("{}.{}", class.name, ctor.name),
                name: param.name.clone()
            });
        }

        let (declared_type, is_collection) =
            resolve_type(param).unwrap_or_else(|warning| {
                log::warn!("{}.{}: {}", class.name, ctor.name, warning);
                warnings.push(warning);
                (None, false)
            });
        params.push(ParameterSpec {
            name: param.name.clone(),
            kind: classify(param),
            declared_type,
            is_collection,
            default: param.default.clone()
        });
    }

    let docs = ctor
        .signature
        .doc
        .as_deref()
        .map(docstring::parse)
        .unwrap_or_default();

    log::debug!(
        "bound {}.{} with {} parameter(s)",
        class.name,
        ctor.name,
        params.len()
    );
    Ok(Binding {
        class_name: class.name.clone(),
        constructor_name: ctor.name.clone(),
        constructor: ctor.func,
        params,
        docs,
        warnings
    })
}
