// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Flag parsing
//!
//! The engine only talks to flags through [`FlagParser`]. [`FlagSet`] is the
//! bundled implementation: typed flags with defaults, single or double dash,
//! `-name value` or `-name=value`, and parsing that stops at the first
//! non-flag token. Everything from that token on is the residual handed to
//! positional parsing.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use crate::args::slot::SlotWriter;
use crate::args::{Convert, Kind, Slot};
use crate::error::FlagError;

/// Description of one registered flag, as shown in usage text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagInfo {
    pub name: String,
    pub description: String,
    pub kind: Kind,
    /// Default value in token form, `None` when it is the kind's zero value
    pub default: Option<String>,
}

/// Capability the engine needs from a flag parser.
pub trait FlagParser {
    /// Consume the leading flags of `tokens`.
    fn parse(&mut self, tokens: &[String]) -> Result<(), FlagError>;

    /// Tokens left over after the last successful [`FlagParser::parse`].
    fn residual(&self) -> &[String];

    /// Registered flags, for usage text.
    fn flags(&self) -> Vec<FlagInfo>;

    fn is_parsed(&self) -> bool;
}

struct Flag {
    info: FlagInfo,
    writer: Box<dyn SlotWriter>,
}

/// Named set of typed flags
pub struct FlagSet {
    name: String,
    flags: BTreeMap<String, Flag>,
    residual: Vec<String>,
    parsed: bool,
}

impl FlagSet {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            flags: BTreeMap::new(),
            residual: Vec::new(),
            parsed: false,
        }
    }

    /// Register a flag and get the slot holding its value.
    ///
    /// The slot starts out holding `default`.
    ///
    /// # Panics
    ///
    /// Panics if a flag with the same name is already registered.
    pub fn register<T>(&mut self, name: &str, default: T, description: &str) -> Slot<T>
    where
        T: Convert + Default + PartialEq,
    {
        assert!(
            !self.flags.contains_key(name),
            "{} flag redefined: {}",
            self.name,
            name
        );

        let info = FlagInfo {
            name: name.to_string(),
            description: description.to_string(),
            kind: T::KIND,
            default: (default != T::default()).then(|| default.render()),
        };
        let slot = Slot::with_value(default);
        self.flags.insert(
            name.to_string(),
            Flag {
                info,
                writer: Box::new(slot.clone()),
            },
        );
        slot
    }

    pub fn bool(&mut self, name: &str, default: bool, description: &str) -> Slot<bool> {
        self.register(name, default, description)
    }

    pub fn duration(&mut self, name: &str, default: Duration, description: &str) -> Slot<Duration> {
        self.register(name, default, description)
    }

    pub fn float64(&mut self, name: &str, default: f64, description: &str) -> Slot<f64> {
        self.register(name, default, description)
    }

    pub fn int(&mut self, name: &str, default: isize, description: &str) -> Slot<isize> {
        self.register(name, default, description)
    }

    pub fn int64(&mut self, name: &str, default: i64, description: &str) -> Slot<i64> {
        self.register(name, default, description)
    }

    pub fn string(&mut self, name: &str, default: &str, description: &str) -> Slot<String> {
        self.register(name, default.to_string(), description)
    }

    pub fn uint(&mut self, name: &str, default: usize, description: &str) -> Slot<usize> {
        self.register(name, default, description)
    }

    pub fn uint64(&mut self, name: &str, default: u64, description: &str) -> Slot<u64> {
        self.register(name, default, description)
    }

    fn lookup(&self, name: &str) -> Result<&Flag, FlagError> {
        match self.flags.get(name) {
            Some(flag) => Ok(flag),
            None if name == "h" || name == "help" => Err(FlagError::HelpRequested),
            None => Err(FlagError::Unknown(name.to_string())),
        }
    }
}

impl FlagParser for FlagSet {
    fn parse(&mut self, tokens: &[String]) -> Result<(), FlagError> {
        let mut i = 0;

        while i < tokens.len() {
            let token = tokens[i].as_str();
            if token.len() < 2 || !token.starts_with('-') {
                break;
            }

            let mut body = &token[1..];
            if let Some(rest) = body.strip_prefix('-') {
                if rest.is_empty() {
                    // "--" ends flag parsing and is not part of the residual
                    i += 1;
                    break;
                }
                body = rest;
            }
            if body.starts_with('-') || body.starts_with('=') {
                return Err(FlagError::BadSyntax(token.to_string()));
            }

            let (name, inline) = match body.split_once('=') {
                Some((name, value)) => (name, Some(value)),
                None => (body, None),
            };
            let flag = self.lookup(name)?;
            i += 1;

            let value = match (inline, flag.info.kind) {
                (Some(value), _) => value,
                (None, Kind::Bool) => "true",
                (None, _) => {
                    let value = tokens
                        .get(i)
                        .ok_or_else(|| FlagError::MissingValue(name.to_string()))?;
                    i += 1;
                    value.as_str()
                }
            };

            tracing::trace!(flag = name, value, "setting flag");
            flag.writer
                .write(value)
                .map_err(|source| FlagError::InvalidValue {
                    name: name.to_string(),
                    source,
                })?;
        }

        self.residual = tokens[i..].to_vec();
        self.parsed = true;
        Ok(())
    }

    fn residual(&self) -> &[String] {
        &self.residual
    }

    fn flags(&self) -> Vec<FlagInfo> {
        self.flags.values().map(|f| f.info.clone()).collect()
    }

    fn is_parsed(&self) -> bool {
        self.parsed
    }
}

impl fmt::Debug for FlagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlagSet")
            .field("name", &self.name)
            .field("flags", &self.flags.keys().collect::<Vec<_>>())
            .field("residual", &self.residual)
            .field("parsed", &self.parsed)
            .finish()
    }
}
