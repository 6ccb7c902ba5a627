// Copyright (C) 2024 Ethan Uppal. All rights reserved.

//! Entry points that receive an instance parsed from the command line.
//!
//! ```no_run
//! # use argbind::{entry, signature::*, ParserOptions};
//! # struct Config;
//! # impl Bindable for Config {
//! #     fn class() -> Class<Self> {
//! #         Class::new("Config")
//! #             .constructor(DEFAULT_CONSTRUCTOR, Signature::new(), |_| Ok(Config))
//! #     }
//! # }
//! let run = entry::cli(DEFAULT_CONSTRUCTOR, ParserOptions::new(), |_: Config| 0);
//! let status = run(None).unwrap();
//! ```

use std::ffi::OsString;

use crate::{
    error::Result, options::ParserOptions, parser::CliParser,
    signature::Bindable
};

/// Wraps `f` so that calling it parses `tokens` (or the process arguments
/// when `None`) and passes the resulting instance along.
pub fn with_parsed_instance<T, R, F>(
    handle: CliParser<T>, f: F
) -> impl Fn(Option<Vec<OsString>>) -> Result<R>
where
    F: Fn(T) -> R {
    move |tokens| {
        let instance = match tokens {
            Some(tokens) => handle.parse_from(tokens)?,
            None => handle.parse()?
        };
        Ok(f(instance))
    }
}

/// Like [`with_parsed_instance`], but binds `constructor` of `T` anew on
/// every call.
pub fn cli<T, R, F>(
    constructor: &str, options: ParserOptions, f: F
) -> impl Fn(Option<Vec<OsString>>) -> Result<R>
where
    T: Bindable,
    F: Fn(T) -> R {
    let constructor = constructor.to_string();
    move |tokens| {
        let handle =
            CliParser::<T>::with_constructor(&constructor, options.clone())?;
        with_parsed_instance(handle, &f)(tokens)
    }
}
