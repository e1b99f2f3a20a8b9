// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Primitive token converters
//!
//! One token in, one typed value out. Both positional args and flags go
//! through these, so a kind behaves the same wherever it is declared.

use std::fmt;
use std::time::Duration;

use crate::error::ConvertError;

/// The primitive kinds a slot can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Bool,
    Duration,
    Float,
    Int,
    Int64,
    String,
    Uint,
    Uint64,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Bool => "bool",
            Kind::Duration => "duration",
            Kind::Float => "float",
            Kind::Int => "int",
            Kind::Int64 => "int64",
            Kind::String => "string",
            Kind::Uint => "uint",
            Kind::Uint64 => "uint64",
        };
        f.write_str(name)
    }
}

/// A value that can be parsed from a single command-line token.
pub trait Convert: Sized + 'static {
    /// Kind reported in specs and usage text.
    const KIND: Kind;

    /// Convert one token. Must not panic.
    fn convert(token: &str) -> Result<Self, ConvertError>;

    /// Render a value back into token form (used for flag defaults).
    fn render(&self) -> String;
}

/// Parse the boolean literals a classic flag parser accepts.
pub fn parse_bool(token: &str) -> Result<bool, ConvertError> {
    match token {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(ConvertError::Bool(token.to_string())),
    }
}

impl Convert for bool {
    const KIND: Kind = Kind::Bool;

    fn convert(token: &str) -> Result<Self, ConvertError> {
        parse_bool(token)
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl Convert for Duration {
    const KIND: Kind = Kind::Duration;

    fn convert(token: &str) -> Result<Self, ConvertError> {
        humantime::parse_duration(token).map_err(|source| ConvertError::Duration {
            token: token.to_string(),
            source,
        })
    }

    fn render(&self) -> String {
        humantime::format_duration(*self).to_string()
    }
}

impl Convert for f64 {
    const KIND: Kind = Kind::Float;

    fn convert(token: &str) -> Result<Self, ConvertError> {
        token.parse().map_err(|source| ConvertError::Float {
            token: token.to_string(),
            source,
        })
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

fn parse_int<T>(token: &str) -> Result<T, ConvertError>
where
    T: std::str::FromStr<Err = std::num::ParseIntError>,
{
    token.parse().map_err(|source| ConvertError::Int {
        token: token.to_string(),
        source,
    })
}

impl Convert for isize {
    const KIND: Kind = Kind::Int;

    fn convert(token: &str) -> Result<Self, ConvertError> {
        parse_int(token)
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl Convert for i64 {
    const KIND: Kind = Kind::Int64;

    fn convert(token: &str) -> Result<Self, ConvertError> {
        parse_int(token)
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl Convert for usize {
    const KIND: Kind = Kind::Uint;

    fn convert(token: &str) -> Result<Self, ConvertError> {
        parse_int(token)
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl Convert for u64 {
    const KIND: Kind = Kind::Uint64;

    fn convert(token: &str) -> Result<Self, ConvertError> {
        parse_int(token)
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl Convert for String {
    const KIND: Kind = Kind::String;

    fn convert(token: &str) -> Result<Self, ConvertError> {
        Ok(token.to_string())
    }

    fn render(&self) -> String {
        self.clone()
    }
}
