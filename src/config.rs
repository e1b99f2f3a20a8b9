// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Execution settings
//!
//! Controls what the top-level entry point does with usage text when a
//! command fails. The struct is serde-friendly so host programs can embed it
//! in their own settings; cmdtree itself never reads files or the environment.

use serde::{Deserialize, Serialize};

/// Where usage text goes when execution fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UsageOutput {
    #[default]
    Stdout,
    Stderr,
    /// Do not print; the caller handles the returned error
    None,
}

/// Settings for [`crate::execute::execute_with`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Destination for usage text on failure
    #[serde(default)]
    pub usage_output: UsageOutput,

    /// Prefix the usage text with the `Error: ...` line
    #[serde(default = "default_show_error")]
    pub show_error: bool,
}

fn default_show_error() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            usage_output: UsageOutput::default(),
            show_error: default_show_error(),
        }
    }
}

impl Config {
    /// Settings that never print anything.
    pub fn quiet() -> Self {
        Self {
            usage_output: UsageOutput::None,
            ..Self::default()
        }
    }
}
