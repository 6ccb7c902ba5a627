// Copyright (C) 2024 Ethan Uppal. All rights reserved.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The requested constructor is not declared on the class.
    #[error("type object '{class}' has no constructor '{constructor}'")]
    Binding { class: String, constructor: String },

    #[error("constructor '{constructor}' declares parameter '{name}' twice")]
    DuplicateParameter { constructor: String, name: String },

    /// A parameter would shadow the generated `--help` or `--version` flag.
    #[error(
        "parameter '{name}' of constructor '{constructor}' conflicts with the \
         built-in --{name} flag"
    )]
    ReservedParameter { constructor: String, name: String },

    /// Rejected tokens, or a request for help or version output.
    #[error(transparent)]
    Validation(#[from] clap::Error),

    /// Whatever the bound constructor itself returned.
    #[error(transparent)]
    Construction(anyhow::Error),

    #[error("invalid parser options: {0}")]
    Options(#[from] toml::de::Error)
}

impl Error {
    /// Whether clap rejected the tokens, as opposed to being asked for help
    /// or version output.
    pub fn is_validation_failure(&self) -> bool {
        match self {
            Self::Validation(err) => err.use_stderr(),
            _ => false
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
