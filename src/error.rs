// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for cmdtree
//!
//! Every failure the engine can report is a variant of [`CmdError`]. Token
//! conversion and flag parsing have their own enums so the failing token is
//! never lost on the way up.

use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

/// Main error type returned by resolution and execution
#[derive(Error, Debug)]
pub enum CmdError {
    /// A node declares both subcommands and positional args
    #[error("Cannot define command with both args and subcommands")]
    Definition,

    /// The invocation does not match the declared command structure
    #[error("Incorrect usage")]
    Usage,

    /// The resolved node has nothing to run
    #[error("Cannot run command without a runner")]
    RunnerMissing,

    /// A positional token failed kind-specific conversion
    #[error("Invalid value for arg {index} ({name}): {source}")]
    ArgConversion {
        index: usize,
        name: String,
        #[source]
        source: ConvertError,
    },

    /// Token count does not equal the number of registered args
    #[error("Len of args to parse ({actual}) does not match len of registered args ({expected})")]
    ArgLengthMismatch { expected: usize, actual: usize },

    /// The flag parser rejected a token
    #[error(transparent)]
    FlagParse(#[from] FlagError),

    /// The runner itself failed
    #[error(transparent)]
    Runner(anyhow::Error),
}

impl CmdError {
    /// True for the generic shape-mismatch error.
    pub fn is_usage(&self) -> bool {
        matches!(self, CmdError::Usage)
    }

    /// True for the static misconfiguration error.
    pub fn is_definition(&self) -> bool {
        matches!(self, CmdError::Definition)
    }

    /// Conventional process exit code for this error.
    ///
    /// Runner failures map to 1; everything the engine rejects before the
    /// runner starts maps to 2.
    pub fn exit_code(&self) -> i32 {
        match self {
            CmdError::Runner(_) => 1,
            _ => 2,
        }
    }

    /// Whether usage text should be printed without an `Error:` line.
    pub(crate) fn is_bare_usage(&self) -> bool {
        matches!(
            self,
            CmdError::Usage | CmdError::FlagParse(FlagError::HelpRequested)
        )
    }
}

/// Failure converting a single token into a typed value
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvertError {
    #[error("invalid boolean '{0}'")]
    Bool(String),

    #[error("invalid duration '{token}': {source}")]
    Duration {
        token: String,
        #[source]
        source: humantime::DurationError,
    },

    #[error("invalid float '{token}': {source}")]
    Float {
        token: String,
        #[source]
        source: ParseFloatError,
    },

    /// Covers malformed digits as well as overflow of the target width
    #[error("invalid integer '{token}': {source}")]
    Int {
        token: String,
        #[source]
        source: ParseIntError,
    },
}

/// Failure reported by a flag parser
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlagError {
    #[error("flag provided but not defined: -{0}")]
    Unknown(String),

    #[error("bad flag syntax: {0}")]
    BadSyntax(String),

    #[error("flag needs an argument: -{0}")]
    MissingValue(String),

    #[error("invalid value for flag -{name}: {source}")]
    InvalidValue {
        name: String,
        #[source]
        source: ConvertError,
    },

    /// `-h`, `-help` or `--help` with no flag of that name registered
    #[error("help requested")]
    HelpRequested,
}

/// Result type alias for cmdtree operations
pub type Result<T> = std::result::Result<T, CmdError>;
