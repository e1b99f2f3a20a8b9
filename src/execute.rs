// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Resolution and execution
//!
//! Execution happens in two phases:
//!
//! 1. **Resolution** walks down from the root, consuming one token per level
//!    while the next token names a subcommand of the current node. The walk is
//!    greedy and never backtracks: once a child matched, its siblings are not
//!    reconsidered even if the child later rejects the remaining tokens.
//! 2. **Execution** validates the shape of the resolved node, strips its flag
//!    prefix, parses the residual tokens as positional args and invokes the
//!    runner.
//!
//! The entry points that print usage always print it for the deepest node
//! resolution reached, not the root.

use std::io::{self, Write};

use crate::command::Command;
use crate::config::{Config, UsageOutput};
use crate::error::{CmdError, Result};

/// Run the resolution phase only.
///
/// Returns the deepest node whose path matches a prefix of `tokens`, together
/// with the tokens that were not consumed.
pub fn resolve<'a, S: AsRef<str>>(root: &'a Command, tokens: &'a [S]) -> (&'a Command, &'a [S]) {
    let path = resolve_path(root, tokens);
    let node = path
        .iter()
        .fold(root, |node, &index| &node.subcommands()[index]);
    (node, &tokens[path.len()..])
}

/// Child indices from the root to the resolved node; its length is the number
/// of tokens consumed.
fn resolve_path<S: AsRef<str>>(root: &Command, tokens: &[S]) -> Vec<usize> {
    let mut path = Vec::new();
    let mut node = root;
    for token in tokens {
        match node.subcommand_index(token.as_ref()) {
            Some(index) => {
                tracing::trace!(token = token.as_ref(), "matched subcommand");
                path.push(index);
                node = &node.subcommands()[index];
            }
            None => break,
        }
    }
    path
}

fn descend<'a>(root: &'a mut Command, path: &[usize]) -> &'a mut Command {
    let mut node = root;
    for &index in path {
        node = node.subcommand_mut(index);
    }
    node
}

fn trail(root: &Command, path: &[usize]) -> String {
    let mut names = vec![root.name()];
    let mut node = root;
    for &index in path {
        node = &node.subcommands()[index];
        names.push(node.name());
    }
    names.join(" ")
}

/// Validate, parse and run a resolved node against its residual tokens.
fn run_node(node: &mut Command, tokens: &[String]) -> Result<()> {
    let has_subcommands = !node.subcommands().is_empty();
    let arg_count = node.arg_count();

    if has_subcommands && arg_count > 0 {
        tracing::warn!(
            command = node.name(),
            "command declares both positional args and subcommands"
        );
        return Err(CmdError::Definition);
    }
    if has_subcommands {
        return Err(CmdError::Usage);
    }
    if !node.has_runner() {
        return Err(CmdError::RunnerMissing);
    }
    if tokens.len() < arg_count {
        tracing::debug!(
            command = node.name(),
            given = tokens.len(),
            declared = arg_count,
            "too few tokens for declared args"
        );
        return Err(CmdError::Usage);
    }

    let residual = match node.flags_mut() {
        Some(flags) => {
            flags.parse(tokens)?;
            flags.residual().to_vec()
        }
        None => tokens.to_vec(),
    };

    // Only an attached arg set is exact-count; without one, leftovers are ignored.
    if let Some(args) = node.args_mut() {
        args.parse(&residual)?;
    } else if !residual.is_empty() {
        tracing::debug!(
            command = node.name(),
            ignored = residual.len(),
            "no arg set, ignoring residual tokens"
        );
    }

    tracing::debug!(command = node.name(), "invoking runner");
    let runner = node.runner_mut().ok_or(CmdError::RunnerMissing)?;
    runner.run().map_err(CmdError::Runner)
}

fn execute_reporting<I, W>(
    root: &mut Command,
    tokens: I,
    show_error: bool,
    out: Option<&mut W>,
) -> Result<()>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
    W: Write + ?Sized,
{
    let tokens: Vec<String> = tokens.into_iter().map(|t| t.as_ref().to_string()).collect();
    let path = resolve_path(root, &tokens);
    tracing::debug!(
        command = %trail(root, &path),
        residual = tokens.len() - path.len(),
        "resolved command"
    );

    let node = descend(root, &path);
    let result = run_node(node, &tokens[path.len()..]);

    if let (Err(err), Some(out)) = (&result, out) {
        let usage = node.usage(show_error.then_some(err));
        if let Err(io_err) = writeln!(out, "{}", usage) {
            tracing::warn!(error = %io_err, "failed to write usage text");
        }
    }
    result
}

/// Execute `root` against the process arguments (program name skipped).
///
/// On failure the usage text of the resolved node is printed to stdout and
/// the error is returned. Mapping it to an exit code is up to the caller; see
/// [`CmdError::exit_code`].
pub fn execute(root: &mut Command) -> Result<()> {
    execute_with(root, std::env::args().skip(1), &Config::default())
}

/// Execute `root` against explicit tokens, reporting failures per `config`.
pub fn execute_with<I>(root: &mut Command, tokens: I, config: &Config) -> Result<()>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    match config.usage_output {
        UsageOutput::Stdout => {
            execute_reporting(root, tokens, config.show_error, Some(&mut io::stdout().lock()))
        }
        UsageOutput::Stderr => {
            execute_reporting(root, tokens, config.show_error, Some(&mut io::stderr().lock()))
        }
        UsageOutput::None => execute_quiet(root, tokens),
    }
}

/// Execute `root`, writing usage text to `out` on failure.
pub fn execute_to<I, W>(root: &mut Command, tokens: I, out: &mut W) -> Result<()>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
    W: Write + ?Sized,
{
    execute_reporting(root, tokens, true, Some(out))
}

/// Execute `root` without printing anything.
pub fn execute_quiet<I>(root: &mut Command, tokens: I) -> Result<()>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    execute_reporting::<_, io::Sink>(root, tokens, true, None)
}
