// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Phone dialer demo
//!
//! ```text
//! cargo run --example phone -- call -speaker 555-1234
//! cargo run --example phone -- text -signature=" -- me" 555 "running late"
//! ```

use cmdtree::{execute, ArgSet, Command, FlagSet, Runner, Slot};

/// Dials a number and remembers what it dialed
struct CallRunner {
    number: Slot<String>,
    speaker: Slot<bool>,
    history: Vec<String>,
}

impl Runner for CallRunner {
    fn run(&mut self) -> anyhow::Result<()> {
        let number = self.number.get_or_default();
        let speaker = if self.speaker.get_or_default() {
            " with speaker phone"
        } else {
            ""
        };
        println!("Dialing {}{}...", number, speaker);
        self.history.push(number);
        tracing::debug!(calls = self.history.len(), "call placed");
        Ok(())
    }
}

fn call_command() -> Command {
    let mut flags = FlagSet::new("call");
    let speaker = flags.bool(
        "speaker",
        false,
        "(bool) whether the speaker phone should be used",
    );

    let mut args = ArgSet::new();
    let number = args.string("number", "(123-456-7890) the phone number to call");

    Command::new("call").args(args).flags(flags).runner(CallRunner {
        number,
        speaker,
        history: Vec::new(),
    })
}

fn text_command() -> Command {
    let mut flags = FlagSet::new("text");
    let signature = flags.string(
        "signature",
        "",
        "(string) signature to use at the end of the message",
    );

    let mut args = ArgSet::new();
    let number = args.string("number", "(123-456-7890) the phone number to text");
    let message = args.string("message", "(string) the message to send");

    Command::new("text")
        .args(args)
        .flags(flags)
        .runner_fn(move || {
            println!(
                "Texted {} this message: {}{}",
                number.get_or_default(),
                message.get_or_default(),
                signature.get_or_default()
            );
            Ok(())
        })
}

fn main() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut phone = Command::new("phone");
    phone.register_subcommands([call_command(), text_command()]);

    if let Err(err) = execute(&mut phone) {
        std::process::exit(err.exit_code());
    }
}
