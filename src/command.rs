// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Command tree nodes
//!
//! A [`Command`] has a name, and optionally a runner, a flag parser, positional
//! args and subcommands. Children are owned by their parent, so the whole tree
//! is owned by whoever holds the root.
//!
//! Shape rules (subcommands and positional args are mutually exclusive) are not
//! checked here; the engine checks them when resolution reaches a node.

use std::fmt;

use crate::args::ArgSet;
use crate::error::CmdError;
use crate::flags::FlagParser;

/// Behavior attached to a leaf command.
///
/// Runners take no arguments: they read parsed values through the slots
/// captured when the args and flags were registered.
pub trait Runner {
    fn run(&mut self) -> anyhow::Result<()>;
}

impl<F> Runner for F
where
    F: FnMut() -> anyhow::Result<()>,
{
    fn run(&mut self) -> anyhow::Result<()> {
        self()
    }
}

/// A node in the command tree
pub struct Command {
    name: String,
    runner: Option<Box<dyn Runner>>,
    flags: Option<Box<dyn FlagParser>>,
    args: Option<ArgSet>,
    subcommands: Vec<Command>,
}

impl Command {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            runner: None,
            flags: None,
            args: None,
            subcommands: Vec::new(),
        }
    }

    /// Attach the behavior to invoke when this node is resolved.
    pub fn runner<R: Runner + 'static>(mut self, runner: R) -> Self {
        self.runner = Some(Box::new(runner));
        self
    }

    /// Attach a closure as the runner.
    pub fn runner_fn<F>(self, f: F) -> Self
    where
        F: FnMut() -> anyhow::Result<()> + 'static,
    {
        self.runner(f)
    }

    /// Attach positional args.
    pub fn args(mut self, args: ArgSet) -> Self {
        self.args = Some(args);
        self
    }

    /// Attach a flag parser, usually a [`crate::flags::FlagSet`].
    pub fn flags<P: FlagParser + 'static>(mut self, flags: P) -> Self {
        self.flags = Some(Box::new(flags));
        self
    }

    pub fn register_subcommand(&mut self, command: Command) {
        self.subcommands.push(command);
    }

    pub fn register_subcommands(&mut self, commands: impl IntoIterator<Item = Command>) {
        self.subcommands.extend(commands);
    }

    /// Builder form of [`Command::register_subcommand`].
    pub fn subcommand(mut self, command: Command) -> Self {
        self.register_subcommand(command);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn subcommands(&self) -> &[Command] {
        &self.subcommands
    }

    pub fn find_subcommand(&self, name: &str) -> Option<&Command> {
        self.subcommands.iter().find(|c| c.name == name)
    }

    pub fn arg_set(&self) -> Option<&ArgSet> {
        self.args.as_ref()
    }

    pub fn flag_parser(&self) -> Option<&dyn FlagParser> {
        self.flags.as_deref()
    }

    pub fn has_runner(&self) -> bool {
        self.runner.is_some()
    }

    /// Number of declared positional args (0 without an arg set).
    pub fn arg_count(&self) -> usize {
        self.args.as_ref().map_or(0, ArgSet::len)
    }

    pub(crate) fn subcommand_index(&self, name: &str) -> Option<usize> {
        self.subcommands.iter().position(|c| c.name == name)
    }

    pub(crate) fn subcommand_mut(&mut self, index: usize) -> &mut Command {
        &mut self.subcommands[index]
    }

    pub(crate) fn runner_mut(&mut self) -> Option<&mut (dyn Runner + 'static)> {
        self.runner.as_deref_mut()
    }

    pub(crate) fn flags_mut(&mut self) -> Option<&mut (dyn FlagParser + 'static)> {
        self.flags.as_deref_mut()
    }

    pub(crate) fn args_mut(&mut self) -> Option<&mut ArgSet> {
        self.args.as_mut()
    }

    /// Usage text for this node, optionally headed by an error line.
    ///
    /// The error line is left out for plain usage errors and help requests,
    /// since the usage text already is the answer.
    pub fn usage(&self, err: Option<&CmdError>) -> String {
        let mut header = format!("Usage: {}", self.name);
        let mut sections = Vec::new();

        if let Some(args) = self.args.as_ref().filter(|a| !a.is_empty()) {
            let mut lines = vec!["Args:".to_string()];
            for spec in args.specs() {
                header.push_str(&format!(" [{}]", spec.name));
                lines.push(format!("{}: {}", spec.name, spec.description));
            }
            sections.push(lines.join("\n"));
        }

        if !self.subcommands.is_empty() {
            header.push_str(" [subcommand]");
            let mut lines = vec!["Subcommands:".to_string()];
            lines.extend(self.subcommands.iter().map(|c| c.name.clone()));
            sections.push(lines.join("\n"));
        }

        let flags = self.flags.as_ref().map(|f| f.flags()).unwrap_or_default();
        if !flags.is_empty() {
            header.push_str(" [flags]");
            let mut lines = vec!["Flags:".to_string()];
            lines.extend(flags.iter().map(|f| match &f.default {
                Some(default) => {
                    format!("{}: {} (default {})", f.name, f.description, default)
                }
                None => format!("{}: {}", f.name, f.description),
            }));
            sections.push(lines.join("\n"));
        }

        let mut out = String::new();
        if let Some(err) = err.filter(|e| !e.is_bare_usage()) {
            out.push_str(&format!("Error: {}\n\n", err));
        }
        out.push_str(&header);
        for section in sections {
            out.push_str("\n\n");
            out.push_str(&section);
        }
        out
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("runner", &self.runner.is_some())
            .field("flags", &self.flags.is_some())
            .field("args", &self.args)
            .field("subcommands", &self.subcommands)
            .finish()
    }
}
