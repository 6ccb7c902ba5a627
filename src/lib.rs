// Copyright (C) 2024 Ethan Uppal. All rights reserved.

//! Generates a command-line parser from a type's constructor signature and
//! docstring, and builds instances of the type from parsed arguments.

pub mod analyzer;
pub mod coerce;
pub mod docstring;
pub mod entry;
pub mod error;
pub mod options;
pub mod parser;
pub mod signature;
pub mod value;

pub use entry::{cli, with_parsed_instance};
pub use error::{Error, Result};
pub use options::ParserOptions;
pub use parser::CliParser;
pub use signature::{Bindable, Class};
