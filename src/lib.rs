// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! cmdtree - a small command-tree dispatcher for command-line programs.
//!
//! Build a tree of [`Command`] nodes at startup, hand it the process
//! arguments, and the engine picks the deepest matching node, parses its flags
//! and positional args into typed [`Slot`]s, and calls its [`Runner`].
//!
//! Architecture highlights:
//! - `args`: positional [`ArgSet`], typed slots and the primitive converters
//! - `flags`: the [`FlagParser`] seam and the bundled [`FlagSet`]
//! - `command`: tree nodes, runners and usage text
//! - `execute`: greedy resolution plus shape/arity validation and dispatch
//! - `config`: how failures are reported at the top level
//!
//! ```no_run
//! use cmdtree::{execute, ArgSet, Command};
//!
//! let mut args = ArgSet::new();
//! let number = args.string("number", "the phone number to call");
//!
//! let call = Command::new("call").args(args).runner_fn(move || {
//!     println!("Dialing {}...", number.get_or_default());
//!     Ok(())
//! });
//! let mut phone = Command::new("phone").subcommand(call);
//!
//! if let Err(err) = execute(&mut phone) {
//!     std::process::exit(err.exit_code());
//! }
//! ```

pub mod args;
pub mod command;
pub mod config;
pub mod error;
pub mod execute;
pub mod flags;

pub use args::{ArgSet, ArgSpec, Convert, Kind, Slot};
pub use command::{Command, Runner};
pub use config::{Config, UsageOutput};
pub use error::{CmdError, ConvertError, FlagError, Result};
pub use execute::{execute, execute_quiet, execute_to, execute_with, resolve};
pub use flags::{FlagInfo, FlagParser, FlagSet};
