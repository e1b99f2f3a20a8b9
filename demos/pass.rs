// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Toy password store demo with a nested `list` command
//!
//! ```text
//! cargo run --example pass -- cp gmail.com
//! cargo run --example pass -- list verbose all
//! cargo run --example pass -- create -encrypt example.com hunter2
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use cmdtree::{execute_with, ArgSet, Command, Config, FlagSet, UsageOutput};

#[derive(Debug, Clone)]
struct Entry {
    site: String,
    password: String,
}

type Store = Rc<RefCell<Vec<Entry>>>;

fn cp_command(store: Store) -> Command {
    let mut args = ArgSet::new();
    let site = args.string("sitename", "(string) the site you wish to copy the pw for");

    Command::new("cp").args(args).runner_fn(move || {
        let site = site.get_or_default();
        match store.borrow().iter().find(|e| e.site == site) {
            Some(entry) => println!("{}", entry.password),
            None => println!("No entry found for {}", site),
        }
        Ok(())
    })
}

fn create_command(store: Store) -> Command {
    let mut flags = FlagSet::new("create");
    let encrypt = flags.bool("encrypt", false, "whether to encrypt at rest");

    let mut args = ArgSet::new();
    let site = args.string("sitename", "(string) the name of the site");
    let password = args.string("password", "(string) the password for the site");

    Command::new("create")
        .args(args)
        .flags(flags)
        .runner_fn(move || {
            if encrypt.get_or_default() {
                println!("encrypt not supported, but thanks for requesting it");
            }
            store.borrow_mut().push(Entry {
                site: site.get_or_default(),
                password: password.get_or_default(),
            });
            Ok(())
        })
}

fn delete_command(store: Store) -> Command {
    let mut flags = FlagSet::new("delete");
    let force = flags.bool("force", false, "whether to force delete");

    let mut args = ArgSet::new();
    let site = args.string("sitename", "(string) the name of the site to delete");

    Command::new("delete")
        .args(args)
        .flags(flags)
        .runner_fn(move || {
            if force.get_or_default() {
                println!("force not supported, but thanks for requesting it");
            }
            let site = site.get_or_default();
            store.borrow_mut().retain(|e| e.site != site);
            Ok(())
        })
}

fn list_command(store: Store) -> Command {
    let mut simple_args = ArgSet::new();
    let simple_site = simple_args.string("sitename", "(string) \"all\" or site name");
    let simple_store = Rc::clone(&store);
    let simple = Command::new("simple")
        .args(simple_args)
        .runner_fn(move || {
            let site = simple_site.get_or_default();
            for entry in simple_store.borrow().iter() {
                if site == "all" || entry.site == site {
                    println!("Site {}", entry.site);
                }
            }
            Ok(())
        });

    let mut verbose_args = ArgSet::new();
    let verbose_site = verbose_args.string("sitename", "(string) \"all\" or site name");
    let verbose = Command::new("verbose")
        .args(verbose_args)
        .runner_fn(move || {
            let site = verbose_site.get_or_default();
            for entry in store.borrow().iter() {
                if site == "all" || entry.site == site {
                    println!("Site {}", entry.site);
                    println!("Pass {}", entry.password);
                }
            }
            Ok(())
        });

    Command::new("list").subcommand(verbose).subcommand(simple)
}

fn main() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let store: Store = Rc::new(RefCell::new(vec![
        Entry {
            site: "gmail.com".to_string(),
            password: "passwordgmail".to_string(),
        },
        Entry {
            site: "apple.com".to_string(),
            password: "passwordapple".to_string(),
        },
        Entry {
            site: "amazon.com".to_string(),
            password: "passwordamazon".to_string(),
        },
    ]));

    let mut pass = Command::new("pass");
    pass.register_subcommands([
        cp_command(Rc::clone(&store)),
        create_command(Rc::clone(&store)),
        list_command(Rc::clone(&store)),
        delete_command(store),
    ]);

    let config = Config {
        usage_output: UsageOutput::Stderr,
        ..Config::default()
    };
    if let Err(err) = execute_with(&mut pass, std::env::args().skip(1), &config) {
        std::process::exit(err.exit_code());
    }
}
